use rocket::http::Header;

pub const STYLESHEET_CACHE_SECONDS: i32 = 3600;

const STYLESHEET: &str = include_str!("../static/style.css");

#[derive(Responder)]
#[response(content_type = "css")]
pub struct Stylesheet {
    inner: &'static str,
    cache_control: Header<'static>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self {
            inner: STYLESHEET,
            cache_control: Header::new(
                "Cache-Control",
                format!("public, max-age={}", STYLESHEET_CACHE_SECONDS),
            ),
        }
    }
}
