pub mod actions;
pub mod view;

use crate::content::data::{
    EntryId, NewNews, NewVideo, NewsEntry, Series, SeriesFilter, VideoEntry,
};
use crate::content::ContentError;
use rocket::request::FromParam;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialog {
    CreateVideo,
    CreateNews,
    Password,
    Player,
}

impl Dialog {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateVideo => "create-video",
            Self::CreateNews => "create-news",
            Self::Password => "password",
            Self::Player => "player",
        }
    }
}

impl<'a> FromParam<'a> for Dialog {
    type Error = &'a str;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        [
            Self::CreateVideo,
            Self::CreateNews,
            Self::Password,
            Self::Player,
        ]
        .into_iter()
        .find(|dialog| dialog.as_str() == param)
        .ok_or(param)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Destructive,
}

/// Transient message shown once on the next render.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            kind: NoticeKind::Info,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            kind: NoticeKind::Destructive,
        }
    }
}

/// Buffer behind the create video dialog.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct VideoForm {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub episode_number: String,
    pub anime_series: Series,
}

impl VideoForm {
    pub fn episode_number(&self) -> Option<i32> {
        self.episode_number
            .trim()
            .parse()
            .ok()
            .filter(|number| *number > 0)
    }

    pub fn to_fields(&self) -> NewVideo {
        NewVideo {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            video_url: self.video_url.trim().to_string(),
            thumbnail_url: self.thumbnail_url.trim().to_string(),
            episode_number: self.episode_number(),
            anime_series: self.anime_series,
        }
    }
}

/// Buffer behind the create news dialog.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewsForm {
    pub title: String,
    pub content: String,
    pub image_url: String,
}

impl NewsForm {
    pub fn to_fields(&self) -> NewNews {
        NewNews {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
            image_url: self.image_url.trim().to_string(),
        }
    }
}

/// Reasons a submit never reaches the content service.
#[derive(Debug, PartialEq)]
pub enum Rejection {
    Pending,
    MissingPassword,
    MissingTitle,
    MissingVideo,
    MissingContent,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "A request is already in flight"),
            Self::MissingPassword => write!(f, "No admin password set"),
            Self::MissingTitle => write!(f, "Title is required"),
            Self::MissingVideo => write!(f, "A video file or link is required"),
            Self::MissingContent => write!(f, "News text is required"),
        }
    }
}

/// Form and password captured when a submit starts.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission<T> {
    pub form: T,
    pub password: String,
}

#[derive(Debug, Default)]
struct Dialogs {
    create_video: bool,
    create_news: bool,
    password: bool,
    player: Option<EntryId>,
}

/// Numbers list fetches so a response that arrives late cannot replace a
/// newer one.
#[derive(Debug, Default)]
struct FetchCounter {
    issued: u64,
    applied: u64,
}

impl FetchCounter {
    fn next(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    fn accept(&mut self, fetch: u64) -> bool {
        if fetch <= self.applied {
            return false;
        }
        self.applied = fetch;
        true
    }
}

/// State of one visitor's content page.
#[derive(Debug, Default)]
pub struct ContentPage {
    videos: Vec<VideoEntry>,
    news: Vec<NewsEntry>,
    video_fetches: FetchCounter,
    news_fetches: FetchCounter,
    filter: SeriesFilter,
    dialogs: Dialogs,
    video_pending: bool,
    news_pending: bool,
    password: String,
    authenticated: bool,
    video_form: VideoForm,
    news_form: NewsForm,
    notices: Vec<Notice>,
}

impl ContentPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn videos(&self) -> &[VideoEntry] {
        &self.videos
    }

    pub fn news(&self) -> &[NewsEntry] {
        &self.news
    }

    pub fn filter(&self) -> SeriesFilter {
        self.filter
    }

    /// Change the series filter. Works on the fetched list only.
    pub fn set_filter(&mut self, filter: SeriesFilter) {
        log::debug!("Filtering videos by {}", filter.as_str());
        self.filter = filter;
    }

    pub fn filtered_videos(&self) -> impl Iterator<Item = &VideoEntry> + '_ {
        self.videos
            .iter()
            .filter(move |video| self.filter.matches(video))
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn video_form(&self) -> &VideoForm {
        &self.video_form
    }

    pub fn news_form(&self) -> &NewsForm {
        &self.news_form
    }

    pub fn is_open(&self, dialog: Dialog) -> bool {
        match dialog {
            Dialog::CreateVideo => self.dialogs.create_video,
            Dialog::CreateNews => self.dialogs.create_news,
            Dialog::Password => self.dialogs.password,
            Dialog::Player => self.dialogs.player.is_some(),
        }
    }

    pub fn is_pending(&self, dialog: Dialog) -> bool {
        match dialog {
            Dialog::CreateVideo => self.video_pending,
            Dialog::CreateNews => self.news_pending,
            Dialog::Password | Dialog::Player => false,
        }
    }

    /// Open a dialog and return the one actually shown. Create dialogs fall
    /// back to the password prompt while no password is set.
    pub fn open_dialog(&mut self, dialog: Dialog) -> Dialog {
        match dialog {
            Dialog::CreateVideo | Dialog::CreateNews if self.password.is_empty() => {
                log::debug!("No password set, prompting before {}", dialog.as_str());
                self.dialogs.password = true;
                return Dialog::Password;
            }
            Dialog::CreateVideo => self.dialogs.create_video = true,
            Dialog::CreateNews => self.dialogs.create_news = true,
            Dialog::Password => self.dialogs.password = true,
            Dialog::Player => log::debug!("The player opens through a video"),
        }
        dialog
    }

    pub fn close_dialog(&mut self, dialog: Dialog) {
        match dialog {
            Dialog::CreateVideo => self.dialogs.create_video = false,
            Dialog::CreateNews => self.dialogs.create_news = false,
            Dialog::Password => self.dialogs.password = false,
            Dialog::Player => self.dialogs.player = None,
        }
    }

    /// Open the player for a fetched video.
    pub fn play(&mut self, id: EntryId) -> bool {
        if self.videos.iter().any(|video| video.id == id) {
            self.dialogs.player = Some(id);
            true
        } else {
            log::debug!("Video {} is not in the fetched list", id);
            false
        }
    }

    pub fn playing(&self) -> Option<&VideoEntry> {
        let id = self.dialogs.player?;
        self.videos.iter().find(|video| video.id == id)
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
        self.authenticated = true;
        self.dialogs.password = false;
    }

    pub fn begin_videos_fetch(&mut self) -> u64 {
        self.video_fetches.next()
    }

    pub fn begin_news_fetch(&mut self) -> u64 {
        self.news_fetches.next()
    }

    /// Apply the outcome of the video fetch numbered `fetch`. A list older
    /// than the one shown is dropped.
    pub fn apply_videos(&mut self, fetch: u64, result: Result<Vec<VideoEntry>, ContentError>) {
        match result {
            Ok(videos) if self.video_fetches.accept(fetch) => self.videos = videos,
            Ok(_) => log::debug!("Dropped stale video list from fetch {}", fetch),
            Err(error) => {
                log::warn!("Failed to fetch videos: {}", error);
                self.report(&error, "Could not load videos");
            }
        }
    }

    pub fn apply_news(&mut self, fetch: u64, result: Result<Vec<NewsEntry>, ContentError>) {
        match result {
            Ok(news) if self.news_fetches.accept(fetch) => self.news = news,
            Ok(_) => log::debug!("Dropped stale news list from fetch {}", fetch),
            Err(error) => {
                log::warn!("Failed to fetch news: {}", error);
                self.report(&error, "Could not load news");
            }
        }
    }

    /// Store the submitted form and mark the video dialog as in flight.
    pub fn begin_video_submit(
        &mut self,
        form: VideoForm,
        has_video_file: bool,
    ) -> Result<Submission<VideoForm>, Rejection> {
        if self.video_pending {
            return Err(Rejection::Pending);
        }
        self.video_form = form;
        if self.password.is_empty() {
            self.dialogs.password = true;
            return Err(Rejection::MissingPassword);
        }
        if self.video_form.title.trim().is_empty() {
            self.notices
                .push(Notice::destructive("Error", &Rejection::MissingTitle.to_string()));
            return Err(Rejection::MissingTitle);
        }
        if self.video_form.video_url.trim().is_empty() && !has_video_file {
            self.notices
                .push(Notice::destructive("Error", &Rejection::MissingVideo.to_string()));
            return Err(Rejection::MissingVideo);
        }
        self.video_pending = true;
        Ok(Submission {
            form: self.video_form.clone(),
            password: self.password.clone(),
        })
    }

    /// Apply a create video outcome. Returns whether the list needs a re-fetch.
    pub fn finish_video_submit(
        &mut self,
        form: VideoForm,
        outcome: Result<(), ContentError>,
    ) -> bool {
        self.video_pending = false;
        match outcome {
            Ok(()) => {
                self.notices.push(Notice::info(
                    "Video added!",
                    "Your dub has been uploaded successfully",
                ));
                self.dialogs.create_video = false;
                self.authenticated = true;
                self.video_form = VideoForm::default();
                true
            }
            Err(error) => {
                self.video_form = form;
                self.report(&error, "Could not upload the video");
                false
            }
        }
    }

    pub fn begin_news_submit(
        &mut self,
        form: NewsForm,
    ) -> Result<Submission<NewsForm>, Rejection> {
        if self.news_pending {
            return Err(Rejection::Pending);
        }
        self.news_form = form;
        if self.password.is_empty() {
            self.dialogs.password = true;
            return Err(Rejection::MissingPassword);
        }
        if self.news_form.title.trim().is_empty() {
            self.notices
                .push(Notice::destructive("Error", &Rejection::MissingTitle.to_string()));
            return Err(Rejection::MissingTitle);
        }
        if self.news_form.content.trim().is_empty() {
            self.notices
                .push(Notice::destructive("Error", &Rejection::MissingContent.to_string()));
            return Err(Rejection::MissingContent);
        }
        self.news_pending = true;
        Ok(Submission {
            form: self.news_form.clone(),
            password: self.password.clone(),
        })
    }

    pub fn finish_news_submit(&mut self, form: NewsForm, outcome: Result<(), ContentError>) -> bool {
        self.news_pending = false;
        match outcome {
            Ok(()) => {
                self.notices.push(Notice::info(
                    "News published!",
                    "Your news post has been added",
                ));
                self.dialogs.create_news = false;
                self.authenticated = true;
                self.news_form = NewsForm::default();
                true
            }
            Err(error) => {
                self.news_form = form;
                self.report(&error, "Could not publish the news post");
                false
            }
        }
    }

    pub fn finish_video_delete(&mut self, id: EntryId, outcome: Result<(), ContentError>) -> bool {
        match outcome {
            Ok(()) => {
                self.notices.push(Notice::info(
                    "Video deleted",
                    "The dub has been removed",
                ));
                if self.dialogs.player == Some(id) {
                    self.dialogs.player = None;
                }
                true
            }
            Err(error) => {
                self.report(&error, "Could not delete the video");
                false
            }
        }
    }

    pub fn finish_news_delete(&mut self, outcome: Result<(), ContentError>) -> bool {
        match outcome {
            Ok(()) => {
                self.notices.push(Notice::info(
                    "News deleted",
                    "The news post has been removed",
                ));
                true
            }
            Err(error) => {
                self.report(&error, "Could not delete the news post");
                false
            }
        }
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Drain the notices for display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn report(&mut self, error: &ContentError, failure: &str) {
        let notice = match error {
            ContentError::Forbidden => {
                self.dialogs.password = true;
                Notice::destructive("Wrong password", "Enter the correct admin password")
            }
            ContentError::Status(status) => {
                Notice::destructive("Error", &format!("{} (status {})", failure, status))
            }
            _ => Notice::destructive("Error", failure),
        };
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    fn video(id: EntryId, series: &str) -> VideoEntry {
        VideoEntry {
            id,
            title: format!("Episode {}", id),
            description: String::new(),
            video_url: format!("https://cdn.example.com/{}.mp4", id),
            thumbnail_url: None,
            episode_number: Some(id as i32),
            anime_series: Some(String::from(series)),
            created_at: String::from("2025-03-01 18:30:00"),
        }
    }

    fn video_form(title: &str, video_url: &str) -> VideoForm {
        VideoForm {
            title: String::from(title),
            video_url: String::from(video_url),
            ..VideoForm::default()
        }
    }

    fn authenticated_page() -> ContentPage {
        let mut page = ContentPage::new();
        page.set_password(String::from("hunter2"));
        page
    }

    #[test_case("create-video", Some(Dialog::CreateVideo) ; "create video")]
    #[test_case("create-news", Some(Dialog::CreateNews) ; "create news")]
    #[test_case("password", Some(Dialog::Password) ; "password")]
    #[test_case("player", Some(Dialog::Player) ; "player")]
    #[test_case("settings", None ; "unknown")]
    fn dialog_from_param(param: &str, expected: Option<Dialog>) {
        assert_eq!(Dialog::from_param(param).ok(), expected);
    }

    #[test_case("3", Some(3) ; "number")]
    #[test_case(" 12 ", Some(12) ; "padded")]
    #[test_case("0", None ; "zero")]
    #[test_case("-1", None ; "negative")]
    #[test_case("", None ; "empty")]
    #[test_case("first", None ; "text")]
    fn video_form_episode_number(input: &str, expected: Option<i32>) {
        let form = VideoForm {
            episode_number: String::from(input),
            ..VideoForm::default()
        };
        assert_eq!(form.episode_number(), expected);
    }

    #[test]
    fn video_form_defaults_to_first_series() {
        assert_eq!(VideoForm::default().anime_series, Series::Gachiakuta);
    }

    #[test_case(Dialog::CreateVideo ; "create video")]
    #[test_case(Dialog::CreateNews ; "create news")]
    fn open_create_dialog_without_password(dialog: Dialog) {
        let mut page = ContentPage::new();
        assert_eq!(page.open_dialog(dialog), Dialog::Password);
        assert!(page.is_open(Dialog::Password));
        assert!(!page.is_open(dialog));
    }

    #[test_case(Dialog::CreateVideo ; "create video")]
    #[test_case(Dialog::CreateNews ; "create news")]
    fn open_create_dialog_with_password(dialog: Dialog) {
        let mut page = authenticated_page();
        assert_eq!(page.open_dialog(dialog), dialog);
        assert!(page.is_open(dialog));
        assert!(!page.is_open(Dialog::Password));
    }

    #[test]
    fn dialogs_are_independent() {
        let mut page = authenticated_page();
        page.open_dialog(Dialog::CreateVideo);
        page.open_dialog(Dialog::CreateNews);
        page.close_dialog(Dialog::CreateVideo);
        assert!(!page.is_open(Dialog::CreateVideo));
        assert!(page.is_open(Dialog::CreateNews));
    }

    #[test]
    fn set_password_closes_prompt() {
        let mut page = ContentPage::new();
        page.open_dialog(Dialog::Password);
        page.set_password(String::from("hunter2"));
        assert!(!page.is_open(Dialog::Password));
        assert!(page.is_authenticated());
        assert_eq!(page.password(), "hunter2");
    }

    #[test]
    fn filter_keeps_server_order() {
        let mut page = ContentPage::new();
        let fetch = page.begin_videos_fetch();
        page.apply_videos(fetch, Ok(vec![
            video(3, "Berserk"),
            video(2, "Gachiakuta"),
            video(1, "Berserk"),
        ]));

        page.set_filter(SeriesFilter::Only(Series::Berserk));
        let ids: Vec<EntryId> = page.filtered_videos().map(|video| video.id).collect();
        assert_eq!(ids, [3, 1]);

        page.set_filter(SeriesFilter::All);
        let ids: Vec<EntryId> = page.filtered_videos().map(|video| video.id).collect();
        assert_eq!(ids, [3, 2, 1]);
    }

    #[test]
    fn failed_fetch_keeps_previous_list() {
        let mut page = ContentPage::new();
        let fetch = page.begin_videos_fetch();
        page.apply_videos(fetch, Ok(vec![video(1, "Berserk")]));
        let fetch = page.begin_videos_fetch();
        page.apply_videos(fetch, Err(ContentError::Connection));
        assert_eq!(page.videos().len(), 1);
        assert_eq!(
            page.take_notices(),
            [Notice::destructive("Error", "Could not load videos")]
        );
    }

    #[test]
    fn play_known_video() {
        let mut page = ContentPage::new();
        let fetch = page.begin_videos_fetch();
        page.apply_videos(fetch, Ok(vec![video(1, "Berserk")]));
        assert!(page.play(1));
        assert!(page.is_open(Dialog::Player));
        assert_eq!(page.playing().map(|video| video.id), Some(1));
        page.close_dialog(Dialog::Player);
        assert!(page.playing().is_none());
    }

    #[test]
    fn play_unknown_video() {
        let mut page = ContentPage::new();
        assert!(!page.play(42));
        assert!(!page.is_open(Dialog::Player));
    }

    #[test]
    fn begin_video_submit_marks_pending() {
        let mut page = authenticated_page();
        let submission = page
            .begin_video_submit(video_form("Pilot", "https://cdn.example.com/1.mp4"), false)
            .unwrap();
        assert_eq!(submission.password, "hunter2");
        assert!(page.is_pending(Dialog::CreateVideo));
        assert!(!page.is_pending(Dialog::CreateNews));
    }

    #[test]
    fn begin_video_submit_while_pending() {
        let mut page = authenticated_page();
        page.begin_video_submit(video_form("Pilot", "https://cdn.example.com/1.mp4"), false)
            .unwrap();
        let second = page.begin_video_submit(video_form("Other", "https://cdn.example.com/2.mp4"), false);
        assert_eq!(second, Err(Rejection::Pending));
        assert_eq!(page.video_form().title, "Pilot");
    }

    #[test]
    fn begin_video_submit_without_password() {
        let mut page = ContentPage::new();
        let result =
            page.begin_video_submit(video_form("Pilot", "https://cdn.example.com/1.mp4"), false);
        assert_eq!(result, Err(Rejection::MissingPassword));
        assert!(page.is_open(Dialog::Password));
        assert!(!page.is_pending(Dialog::CreateVideo));
        assert_eq!(page.video_form().title, "Pilot");
    }

    #[test_case("", "https://cdn.example.com/1.mp4", false, Rejection::MissingTitle ; "missing title")]
    #[test_case("Pilot", "", false, Rejection::MissingVideo ; "missing video")]
    #[test_case("Pilot", "  ", false, Rejection::MissingVideo ; "blank video")]
    fn begin_video_submit_invalid(title: &str, url: &str, has_file: bool, expected: Rejection) {
        let mut page = authenticated_page();
        let result = page.begin_video_submit(video_form(title, url), has_file);
        assert_eq!(result, Err(expected));
        assert!(!page.is_pending(Dialog::CreateVideo));
        assert_eq!(page.take_notices().len(), 1);
    }

    #[test]
    fn begin_video_submit_with_file_only() {
        let mut page = authenticated_page();
        assert!(page.begin_video_submit(video_form("Pilot", ""), true).is_ok());
    }

    #[test]
    fn finish_video_submit_success() {
        let mut page = authenticated_page();
        page.open_dialog(Dialog::CreateVideo);
        let form = video_form("Pilot", "https://cdn.example.com/1.mp4");
        let submission = page.begin_video_submit(form, false).unwrap();

        assert!(page.finish_video_submit(submission.form, Ok(())));
        assert!(!page.is_open(Dialog::CreateVideo));
        assert!(!page.is_pending(Dialog::CreateVideo));
        assert_eq!(page.video_form(), &VideoForm::default());
        assert_eq!(page.take_notices()[0].kind, NoticeKind::Info);
    }

    #[test]
    fn finish_video_submit_forbidden() {
        let mut page = authenticated_page();
        page.open_dialog(Dialog::CreateVideo);
        let form = video_form("Pilot", "https://cdn.example.com/1.mp4");
        let submission = page.begin_video_submit(form.clone(), false).unwrap();

        assert!(!page.finish_video_submit(submission.form, Err(ContentError::Forbidden)));
        assert!(page.is_open(Dialog::Password));
        assert!(page.is_open(Dialog::CreateVideo));
        assert_eq!(page.video_form(), &form);
        assert_eq!(page.password(), "hunter2");
        assert_eq!(
            page.take_notices(),
            [Notice::destructive("Wrong password", "Enter the correct admin password")]
        );
    }

    #[test]
    fn finish_news_submit_other_status() {
        let mut page = authenticated_page();
        let form = NewsForm {
            title: String::from("New season"),
            content: String::from("Soon."),
            image_url: String::new(),
        };
        let submission = page.begin_news_submit(form).unwrap();
        assert!(!page.finish_news_submit(submission.form, Err(ContentError::Status(500))));
        assert!(!page.is_open(Dialog::Password));
        assert!(!page.is_pending(Dialog::CreateNews));
        assert_eq!(
            page.take_notices(),
            [Notice::destructive(
                "Error",
                "Could not publish the news post (status 500)"
            )]
        );
    }

    #[test_case("", "Soon.", Rejection::MissingTitle ; "missing title")]
    #[test_case("New season", "", Rejection::MissingContent ; "missing content")]
    fn begin_news_submit_invalid(title: &str, content: &str, expected: Rejection) {
        let mut page = authenticated_page();
        let form = NewsForm {
            title: String::from(title),
            content: String::from(content),
            image_url: String::new(),
        };
        assert_eq!(page.begin_news_submit(form), Err(expected));
        assert!(!page.is_pending(Dialog::CreateNews));
    }

    #[test]
    fn finish_video_delete_closes_player() {
        let mut page = authenticated_page();
        let fetch = page.begin_videos_fetch();
        page.apply_videos(fetch, Ok(vec![video(1, "Berserk")]));
        page.play(1);
        assert!(page.finish_video_delete(1, Ok(())));
        assert!(!page.is_open(Dialog::Player));
    }

    #[test]
    fn late_fetch_does_not_replace_newer_list() {
        let mut page = ContentPage::new();
        let first = page.begin_videos_fetch();
        let second = page.begin_videos_fetch();
        page.apply_videos(second, Ok(vec![video(2, "Berserk"), video(1, "Berserk")]));
        page.apply_videos(first, Ok(vec![video(1, "Berserk")]));
        let ids: Vec<EntryId> = page.videos().iter().map(|video| video.id).collect();
        assert_eq!(ids, [2, 1]);

        let first = page.begin_news_fetch();
        let second = page.begin_news_fetch();
        page.apply_news(first, Ok(vec![]));
        page.apply_news(second, Err(ContentError::Connection));
        assert_eq!(page.take_notices().len(), 1);
    }

    #[test]
    fn take_notices_drains() {
        let mut page = ContentPage::new();
        let fetch = page.begin_news_fetch();
        page.apply_news(fetch, Err(ContentError::Parsing));
        assert_eq!(page.take_notices().len(), 1);
        assert!(page.take_notices().is_empty());
    }
}
