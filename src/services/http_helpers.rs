use actix_web::{http::header, HttpResponse};

/// Creates a `302 Found` response pointing at `location`
pub fn found(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Creates a plaintext bad request response
pub fn bad_request(message: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type("text/plain; charset=utf-8")
        .body(message.to_string())
}
