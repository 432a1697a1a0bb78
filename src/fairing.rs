use rocket::{Request, Response};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Status;

pub struct RequestLogger;

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Shkia request logger",
            kind: Kind::Response
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        info!(
            "Response for {} {}: {}",
            request.method(),
            request.uri(),
            response.status(),
        );

        if response.status() != Status::Ok {
            warn!(
                "Non-OK status: {} for {} {}",
                response.status(),
                request.method(),
                request.uri(),
            );
        }
    }
}
