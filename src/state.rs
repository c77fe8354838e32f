use crate::content::{ContentClient, Endpoints};
use crate::page::ContentPage;
use crate::DubsiteArgs;
use rocket::http::{Cookie, SameSite, Status};
use rocket::request::{FromRequest, Outcome, Request};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "dubsite_session";

/// Sessions untouched for this long are dropped when a new one starts.
const SESSION_IDLE_LIMIT: Duration = Duration::from_secs(12 * 60 * 60);

/// Live sessions kept at most. The least recently seen one makes room.
const MAX_SESSIONS: usize = 1024;

pub type SharedPage = Arc<Mutex<ContentPage>>;

#[derive(Debug)]
struct SessionEntry {
    page: SharedPage,
    last_seen: Instant,
}

#[derive(Debug)]
/// Global application state.
pub struct Global {
    pub site_name: String,
    pub client: ContentClient,
    sessions: RwLock<HashMap<String, SessionEntry>>,
}

impl Global {
    pub fn new(site_name: String, endpoints: Endpoints) -> Self {
        Self {
            site_name,
            client: ContentClient::new(endpoints),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_args(args: DubsiteArgs) -> Self {
        Self::new(
            args.site_name,
            Endpoints {
                videos: args.video_api_url,
                news: args.news_api_url,
                upload: args.upload_api_url,
            },
        )
    }

    pub async fn session(&self, id: &str) -> Option<SharedPage> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(id)?;
        entry.last_seen = Instant::now();
        Some(entry.page.clone())
    }

    /// Start an empty session, dropping idle ones.
    pub async fn create_session(&self) -> (String, SharedPage) {
        let id = Uuid::new_v4().to_string();
        let page = Arc::new(Mutex::new(ContentPage::new()));
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_seen.elapsed() < SESSION_IDLE_LIMIT);
        if sessions.len() < before {
            log::info!("Dropped {} idle sessions", before - sessions.len());
        }
        while sessions.len() >= MAX_SESSIONS {
            let Some(oldest) = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| id.clone())
            else {
                break;
            };
            sessions.remove(&oldest);
            log::warn!("Session limit of {} reached, evicted the oldest", MAX_SESSIONS);
        }
        sessions.insert(
            id.clone(),
            SessionEntry {
                page: page.clone(),
                last_seen: Instant::now(),
            },
        );
        (id, page)
    }

    #[cfg(test)]
    pub fn blocking_session(&self, id: &str) -> Option<SharedPage> {
        self.sessions
            .blocking_read()
            .get(id)
            .map(|entry| entry.page.clone())
    }

    #[cfg(test)]
    pub fn blocking_session_count(&self) -> usize {
        self.sessions.blocking_read().len()
    }
}

fn session_id(request: &Request<'_>) -> Option<String> {
    request
        .cookies()
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

fn managed_state<'r>(request: &'r Request<'_>) -> Option<&'r Global> {
    let state = request.rocket().state::<Global>();
    if state.is_none() {
        log::error!("Application state is not managed");
    }
    state
}

/// Page state of the requesting browser, stored under its session cookie.
/// A browser without a live session gets a new, empty one.
pub struct Session {
    pub page: SharedPage,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(state) = managed_state(request) else {
            return Outcome::Error((Status::InternalServerError, ()));
        };

        if let Some(id) = session_id(request) {
            if let Some(page) = state.session(&id).await {
                return Outcome::Success(Session { page });
            }
            log::debug!("Session {} has expired", id);
        }

        let (id, page) = state.create_session().await;
        log::debug!("Started session {}", id);
        request.cookies().add(
            Cookie::build((SESSION_COOKIE, id))
                .http_only(true)
                .same_site(SameSite::Lax),
        );
        Outcome::Success(Session { page })
    }
}

/// Page state for read-only routes. Without a live session the page is
/// a throwaway one that is never stored and sets no cookie.
pub struct Visitor {
    pub page: SharedPage,
    pub stored: bool,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Visitor {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(state) = managed_state(request) else {
            return Outcome::Error((Status::InternalServerError, ()));
        };

        if let Some(id) = session_id(request) {
            if let Some(page) = state.session(&id).await {
                return Outcome::Success(Visitor { page, stored: true });
            }
        }
        Outcome::Success(Visitor {
            page: Arc::new(Mutex::new(ContentPage::new())),
            stored: false,
        })
    }
}
