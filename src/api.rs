mod responders;

use crate::content::data::{NewsEntry, SeriesFilter, VideoEntry};
use crate::page::actions;
use crate::state::{Global, Visitor};
use rocket::State;

#[get("/api/videos?<series>")]
/// Videos held by the session, filtered by series or by the page filter.
/// Browsers without a session get a fresh fetch.
pub async fn videos_get(
    visitor: Visitor,
    series: Option<SeriesFilter>,
    state: &State<Global>,
) -> responders::APIResponse<Vec<VideoEntry>> {
    if !visitor.stored {
        actions::refresh_videos(&state.client, &visitor.page).await;
    }
    let page = visitor.page.lock().await;
    let filter = series.unwrap_or(page.filter());
    let videos = page
        .videos()
        .iter()
        .filter(|video| filter.matches(video))
        .cloned()
        .collect();
    responders::APIResponse::new(videos)
}

#[get("/api/news")]
pub async fn news_get(
    visitor: Visitor,
    state: &State<Global>,
) -> responders::APIResponse<Vec<NewsEntry>> {
    if !visitor.stored {
        actions::refresh_news(&state.client, &visitor.page).await;
    }
    let page = visitor.page.lock().await;
    responders::APIResponse::new(page.news().to_vec())
}
