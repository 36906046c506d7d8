use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::RedirectParams,
    services::http_helpers::found,
};

/// Entry point of the survey platform's study link. Sends the participant on
/// to their annotation session.
#[get("/")]
pub async fn redirect_to_session(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let params = RedirectParams::from_query(req.query_string());
    let request_id = get_request_id(&req).unwrap_or_default();

    let target = state.redirect_service.resolve(&params).map_err(|e| {
        log::warn!("[{}] Rejected survey callback: {}", request_id, e);
        e
    })?;

    log::info!("[{}] Redirecting participant to {}", request_id, target);
    Ok(found(target.as_str()))
}
