use crate::content::data::{EntryId, NewsEntry, Series, SeriesFilter, VideoEntry};
use crate::page::{ContentPage, Dialog, NewsForm, Notice, VideoForm};
use crate::utils;
use serde::Serialize;

const DEFAULT_DESCRIPTION: &str = "Watch with our dub";

#[derive(Debug, PartialEq, Serialize)]
pub struct SeriesOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct VideoCard<'a> {
    pub id: EntryId,
    pub title: &'a str,
    pub description: &'a str,
    pub video_url: Option<&'a str>,
    pub thumbnail: Option<&'a str>,
    pub series: Option<&'static str>,
    pub episode: Option<i32>,
}

impl<'a> From<&'a VideoEntry> for VideoCard<'a> {
    fn from(video: &'a VideoEntry) -> Self {
        let description = match video.description.trim() {
            "" => DEFAULT_DESCRIPTION,
            _ => video.description.as_str(),
        };
        Self {
            id: video.id,
            title: &video.title,
            description,
            video_url: utils::renderable_locator(&video.video_url),
            thumbnail: video.thumbnail().and_then(utils::renderable_locator),
            series: video.series().map(|series| series.label()),
            episode: video.episode(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct NewsCard<'a> {
    pub id: EntryId,
    pub title: &'a str,
    pub content: &'a str,
    pub image: Option<&'a str>,
    pub date: Option<String>,
}

impl<'a> From<&'a NewsEntry> for NewsCard<'a> {
    fn from(news: &'a NewsEntry) -> Self {
        Self {
            id: news.id,
            title: &news.title,
            content: &news.content,
            image: news.image().and_then(utils::renderable_locator),
            date: utils::format_date(&news.created_at),
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DialogState {
    pub create_video: bool,
    pub create_news: bool,
    pub password: bool,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct PendingState {
    pub video: bool,
    pub news: bool,
}

/// Template context for the content page.
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub site_name: &'a str,
    pub authenticated: bool,
    pub has_password: bool,
    pub filter: &'static str,
    pub filters: Vec<SeriesOption>,
    pub series: Vec<SeriesOption>,
    pub videos: Vec<VideoCard<'a>>,
    pub news: Vec<NewsCard<'a>>,
    pub dialogs: DialogState,
    pub pending: PendingState,
    pub player: Option<VideoCard<'a>>,
    pub video_form: &'a VideoForm,
    pub news_form: &'a NewsForm,
    pub notices: Vec<Notice>,
}

impl ContentPage {
    /// Build the render context. Pending notices are consumed.
    pub fn view<'a>(&'a mut self, site_name: &'a str) -> PageView<'a> {
        let notices = self.take_notices();
        let filter = self.filter();
        let mut filters = vec![SeriesOption {
            value: SeriesFilter::All.as_str(),
            label: "All",
            selected: filter == SeriesFilter::All,
        }];
        filters.extend(Series::ALL.into_iter().map(|series| SeriesOption {
            value: series.as_str(),
            label: series.label(),
            selected: filter == SeriesFilter::Only(series),
        }));
        let series = Series::ALL
            .into_iter()
            .map(|series| SeriesOption {
                value: series.as_str(),
                label: series.label(),
                selected: self.video_form.anime_series == series,
            })
            .collect();

        PageView {
            site_name,
            authenticated: self.is_authenticated(),
            has_password: !self.password().is_empty(),
            filter: filter.as_str(),
            filters,
            series,
            videos: self.filtered_videos().map(VideoCard::from).collect(),
            news: self.news().iter().map(NewsCard::from).collect(),
            dialogs: DialogState {
                create_video: self.is_open(Dialog::CreateVideo),
                create_news: self.is_open(Dialog::CreateNews),
                password: self.is_open(Dialog::Password),
            },
            pending: PendingState {
                video: self.is_pending(Dialog::CreateVideo),
                news: self.is_pending(Dialog::CreateNews),
            },
            player: self.playing().map(VideoCard::from),
            video_form: self.video_form(),
            news_form: self.news_form(),
            notices,
        }
    }
}
