use actix_web::{get, post, web, HttpRequest, HttpResponse};
use secrecy::SecretString;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::GenerateMcqQuery,
        response::{GenerateMcqResponse, SettingsResponse},
    },
    services::mcq_service::GenerateMcqCommand,
};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Generates questions from the PDF sent as the raw request body.
#[post("/api/mcqs")]
async fn generate_mcqs(
    state: web::Data<AppState>,
    query: web::Query<GenerateMcqQuery>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query.validate()?;

    let api_key = req
        .headers()
        .get(API_KEY_HEADER)
        .map(|value| {
            value.to_str().map_err(|_| {
                AppError::ValidationError(format!(
                    "{} header must contain only visible ASCII characters",
                    API_KEY_HEADER
                ))
            })
        })
        .transpose()?
        .map(|value| SecretString::from(value.to_string()));

    let command = GenerateMcqCommand {
        document: body.to_vec(),
        question_count: query.count,
        api_key,
    };

    let batch = state.mcq_service.generate(command).await.map_err(|err| {
        log::error!(
            "MCQ generation failed [{}]: {}",
            get_request_id(&req).unwrap_or_default(),
            err
        );
        err
    })?;

    let response = GenerateMcqResponse::from_batch(&batch)?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/settings")]
async fn get_settings(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(SettingsResponse {
        server_key_configured: state.mcq_service.server_key_configured(),
        default_question_count: state.config.default_question_count,
    })
}
