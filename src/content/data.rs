use rocket::form::{self, FromFormField, ValueField};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

pub type EntryId = i64;

/// Treat a JSON `null` the same as a missing string.
fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Series {
    #[default]
    Gachiakuta,
    Windbreaker,
    Berserk,
}

impl Series {
    pub const ALL: [Series; 3] = [Series::Gachiakuta, Series::Windbreaker, Series::Berserk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gachiakuta => "Gachiakuta",
            Self::Windbreaker => "Windbreaker",
            Self::Berserk => "Berserk",
        }
    }

    /// Badge shown on video cards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gachiakuta => "🔥 Gachiakuta",
            Self::Windbreaker => "💨 Windbreaker",
            Self::Berserk => "⚔️ Berserk",
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq)]
pub struct UnknownSeries(pub String);

impl fmt::Display for UnknownSeries {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown series \"{}\"", self.0)
    }
}

impl FromStr for Series {
    type Err = UnknownSeries;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Series::ALL
            .into_iter()
            .find(|series| series.as_str() == value)
            .ok_or_else(|| UnknownSeries(value.to_string()))
    }
}

#[rocket::async_trait]
impl<'v> FromFormField<'v> for Series {
    fn from_value(field: ValueField<'v>) -> form::Result<'v, Self> {
        field
            .value
            .parse()
            .map_err(|e: UnknownSeries| form::Error::validation(e.to_string()).into())
    }
}

/// Series selection for the video grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeriesFilter {
    #[default]
    All,
    Only(Series),
}

impl SeriesFilter {
    pub fn matches(&self, video: &VideoEntry) -> bool {
        match self {
            Self::All => true,
            Self::Only(series) => video.series() == Some(*series),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(series) => series.as_str(),
        }
    }
}

impl FromStr for SeriesFilter {
    type Err = UnknownSeries;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

#[rocket::async_trait]
impl<'v> FromFormField<'v> for SeriesFilter {
    fn from_value(field: ValueField<'v>) -> form::Result<'v, Self> {
        field
            .value
            .parse()
            .map_err(|e: UnknownSeries| form::Error::validation(e.to_string()).into())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub id: EntryId,
    pub title: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub description: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub video_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub episode_number: Option<i32>,
    #[serde(default)]
    pub anime_series: Option<String>,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub created_at: String,
}

impl VideoEntry {
    /// Series tag, if the stored tag is one of the known series.
    pub fn series(&self) -> Option<Series> {
        self.anime_series.as_deref()?.parse().ok()
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn episode(&self) -> Option<i32> {
        self.episode_number.filter(|number| *number > 0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsEntry {
    pub id: EntryId,
    pub title: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub created_at: String,
}

impl NewsEntry {
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub videos: Option<Vec<VideoEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct NewsList {
    #[serde(default)]
    pub news: Option<Vec<NewsEntry>>,
}

/// Fields sent when creating a video.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewVideo {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub episode_number: Option<i32>,
    pub anime_series: Series,
}

/// Fields sent when publishing a news post.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewNews {
    pub title: String,
    pub content: String,
    pub image_url: String,
}

/// Mutation body: the entry fields plus the admin password.
#[derive(Debug, Serialize)]
pub struct Authorized<'a, T> {
    #[serde(flatten)]
    pub fields: &'a T,
    pub admin_password: &'a str,
}

/// A local file waiting to be turned into a locator.
#[derive(Clone, Debug, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[allow(non_snake_case)]
#[derive(Debug, Serialize)]
pub struct UploadRequest<'a> {
    pub file: String,
    pub fileName: &'a str,
    pub fileType: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}
