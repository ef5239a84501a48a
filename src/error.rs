use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use derive_more::Display;

/// Errors a handler can return. The message is what the client sees, so it
/// never carries driver or template engine details; those are logged instead.
#[derive(Debug, Display)]
pub enum AppError {
    #[display(fmt = "{}", _0)]
    BadRequest(&'static str),

    #[display(fmt = "{}", _0)]
    Storage(&'static str),

    #[display(fmt = "Unable to render template")]
    Render,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) | AppError::Render => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}
