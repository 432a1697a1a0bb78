use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::{json::Json, Serialize};
use rocket::{Build, Rocket, State};

use shkia_clock::config::ShkiaConfig;
use shkia_clock::countdown::CountdownState;
use shkia_clock::location::parse_time_zone;
use shkia_clock::messages::message_at;
use shkia_clock::time::parse_instant;
use shkia_clock::{GeoCoordinate, ResolutionError, SunsetResolution, SunsetResolver};

use crate::fairing::RequestLogger;

pub struct AppState {
    resolver: SunsetResolver,
    config: ShkiaConfig,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ShkiaResponse {
    location: Option<String>,
    time_zone: String,
    local_date: String,
    now: String,
    next_sunset: String,
    today_sunrise: String,
    today_sunset: String,
    is_night: bool,
    countdown: CountdownState,
    message: &'static str,
}

impl ShkiaResponse {
    fn new(location: Option<String>, tz: Tz, now: DateTime<Utc>, resolution: &SunsetResolution, countdown: CountdownState) -> Self {
        let local = |instant: DateTime<Utc>| instant.with_timezone(&tz).to_rfc3339();
        ShkiaResponse {
            location,
            time_zone: tz.name().to_string(),
            local_date: resolution.local_date.to_string(),
            now: local(now),
            next_sunset: local(resolution.next_sunset),
            today_sunrise: local(resolution.today_sunrise),
            today_sunset: local(resolution.today_sunset),
            is_night: resolution.is_night(now),
            countdown,
            message: message_at(now, &tz),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorBody {
    error: String,
}

type ApiError = Custom<Json<ErrorBody>>;

fn fail(status: Status, error: String) -> ApiError {
    Custom(status, Json(ErrorBody { error }))
}

fn resolution_failure(e: ResolutionError) -> ApiError {
    let status = match e {
        ResolutionError::InvalidCoordinate { .. } | ResolutionError::InvalidTimeZone(_) => Status::BadRequest,
        ResolutionError::ProviderUnavailable { .. } => Status::UnprocessableEntity,
    };
    fail(status, e.to_string())
}

/// The injected `now`, or the clock sampled once for this request.
fn request_now(now: Option<&str>) -> Result<DateTime<Utc>, ApiError> {
    match now {
        Some(text) => parse_instant(text).map_err(|e| fail(Status::BadRequest, format!("{e:#}"))),
        None => Ok(Utc::now()),
    }
}

fn respond(state: &AppState, name: Option<String>, coordinate: GeoCoordinate, tz: Tz, now: DateTime<Utc>) -> Result<Json<ShkiaResponse>, ApiError> {
    let resolution = state.resolver
        .resolve_in(now, coordinate, tz)
        .map_err(resolution_failure)?;
    let countdown = CountdownState::at(&resolution, now, &state.config.countdown);
    Ok(Json(ShkiaResponse::new(name, tz, now, &resolution, countdown)))
}

#[get("/")]
fn index() -> &'static str {
    "Shkia Clock. Don't miss the zman."
}

#[get("/shkia?<lat>&<lng>&<tz>&<now>")]
fn shkia(lat: f64, lng: f64, tz: String, now: Option<String>, state: &State<AppState>) -> Result<Json<ShkiaResponse>, ApiError> {
    let now = request_now(now.as_deref())?;
    let coordinate = GeoCoordinate::new(lat, lng).map_err(resolution_failure)?;
    let tz = parse_time_zone(&tz).map_err(resolution_failure)?;
    respond(state, None, coordinate, tz, now)
}

#[get("/shkia/default?<now>")]
fn shkia_default(now: Option<String>, state: &State<AppState>) -> Result<Json<ShkiaResponse>, ApiError> {
    let now = request_now(now.as_deref())?;
    let Some(location) = state.config.location.clone() else {
        return Err(fail(Status::NotFound, "No default location configured".to_string()));
    };
    respond(state, Some(location.name), location.coordinate, location.time_zone, now)
}

pub fn build(config: ShkiaConfig) -> Rocket<Build> {
    rocket::build()
        .manage(AppState {
            resolver: SunsetResolver::default(),
            config,
        })
        .attach(RequestLogger)
        .mount("/", routes![index, shkia, shkia_default])
}
