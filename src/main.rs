mod fairing;
mod routes;

#[macro_use] extern crate rocket;

use shkia_clock::config::{ShkiaConfig, CONFIG_PATH_VAR};

#[launch]
fn rocket() -> _ {
    match dotenvy::dotenv() {
        Err(e) => println!("WARNING! .env NOT LOADED: {}", e),
        Ok(_) => println!("Successfully loaded .env"),
    };
    let config = match ShkiaConfig::new() {
        Ok(config) => config,
        Err(e) => {
            println!("WARNING! {CONFIG_PATH_VAR} config NOT LOADED, using defaults: {e:#}");
            ShkiaConfig::default()
        },
    };
    println!("config: {config:#?}");

    routes::build(config)
}
