// src/api/handlers/execute.rs
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse, Result};
use uuid::Uuid;
use crate::api::AppState;
use crate::errors::ExecError;
use crate::models::{ErrorDetail, Submission};
use crate::runner;

pub async fn execute_submission(
    state: web::Data<AppState>,
    req: web::Json<Submission>,
) -> Result<HttpResponse> {
    let execution_id = Uuid::new_v4();
    let submission = req.into_inner();

    log::info!("execution {} received ({} bytes of code)", execution_id, submission.code.len());

    match runner::execute(&state.config.interpreter, &submission).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => {
            match &e {
                ExecError::Timeout => log::warn!("execution {} timed out", execution_id),
                _ => log::error!("execution {} failed: {}", execution_id, e),
            }
            Err(e.into())
        }
    }
}

/// Malformed or incomplete bodies get a 422 with a `detail` message.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    log::debug!("rejected submission body: {}", detail);
    let response = HttpResponse::UnprocessableEntity().json(ErrorDetail { detail });
    InternalError::from_response(err, response).into()
}
