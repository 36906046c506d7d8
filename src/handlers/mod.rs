pub mod health_handler;
pub mod redirect_handler;

use actix_web::web;

pub use health_handler::health_check;
pub use redirect_handler::redirect_to_session;

/// Registers every route the redirect server exposes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(redirect_to_session).service(health_check);
}
