pub mod editor_web;
pub mod export_web;
pub mod pages;

use actix_web::HttpRequest;
use uuid::Uuid;

use super::errors::ApiError;

/// Cookie carrying the editor session id.
pub const SESSION_COOKIE: &str = "sid";

pub fn session_id_from(req: &HttpRequest) -> Option<Uuid> {
  req
    .cookie(SESSION_COOKIE)
    .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

fn require_session(req: &HttpRequest) -> Result<Uuid, ApiError> {
  session_id_from(req).ok_or_else(|| ApiError::NotFound("No active editor session".to_string()))
}
