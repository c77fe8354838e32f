use rocket::http::Header;
use rocket::serde::json::Json;

/// JSON body built from session state, so it must not be cached.
#[derive(Responder)]
#[response(content_type = "json")]
pub struct APIResponse<T> {
    inner: Json<T>,
    cache_control: Header<'static>,
}

impl<T> APIResponse<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner: Json(inner),
            cache_control: Header::new("Cache-Control", "no-store"),
        }
    }
}
