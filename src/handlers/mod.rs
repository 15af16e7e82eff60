pub mod mcq_handler;
pub mod ui_handler;

use actix_web::{error::QueryPayloadError, web, HttpRequest};

use crate::errors::AppError;

pub use mcq_handler::{generate_mcqs, get_settings};
pub use ui_handler::{health_check, index};

/// Malformed query strings get the same JSON error body as every other failure.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        AppError::ValidationError(err.to_string()).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .service(index)
        .service(health_check)
        .service(get_settings)
        .service(generate_mcqs);
}
