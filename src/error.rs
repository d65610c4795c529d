use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DirectoryError {
    /// No current user has the requested id. Holds the id as it was requested.
    #[error("User not found: {0}")]
    NotFound(String),
}

impl ResponseError for DirectoryError {
    fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body("User not found")
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::header;

    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = DirectoryError::NotFound("999".to_owned());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "User not found: 999");
    }

    #[test]
    fn not_found_body_is_plain_text() {
        let resp = DirectoryError::NotFound("abc".to_owned()).error_response();
        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
        assert_eq!(content_type, "text/plain; charset=utf-8");
    }
}
