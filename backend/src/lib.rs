pub mod assets;
pub mod catchers;
pub mod error;
pub mod headers;
pub mod routes;

use std::path::PathBuf;
use rocket::{Build, Rocket, catchers, routes};
use crate::{
    catchers::{internal_error, not_found},
    headers::CacheControl,
    routes::{spa_handler, StaticRoot},
};

/// Static host for the compiled site, serving files from `static_root`.
pub fn build_rocket(static_root: PathBuf) -> Rocket<Build> {
    rocket::build()
        .attach(CacheControl)
        .manage(StaticRoot(static_root))
        .mount("/", routes![spa_handler])
        .register("/", catchers![internal_error, not_found])
}

#[cfg(test)]
mod tests;
