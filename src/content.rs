pub mod data;
#[cfg(test)]
pub mod stub;

use crate::utils;
use data::{
    Authorized, EntryId, NewNews, NewVideo, NewsEntry, NewsList, Upload, UploadRequest,
    UploadResponse, VideoEntry, VideoList,
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ContentError {
    RequestData,
    Connection,
    Parsing,
    Forbidden,
    Status(u16),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestData => write!(f, "Could not build or read request data"),
            Self::Connection => write!(f, "Could not reach the content service"),
            Self::Parsing => write!(f, "Could not parse the content service response"),
            Self::Forbidden => write!(f, "Wrong admin password"),
            Self::Status(status) => write!(f, "Content service responded with status {}", status),
        }
    }
}

/// Remote operations backing the content page.
#[allow(async_fn_in_trait)]
pub trait ContentApi {
    async fn list_videos(&self) -> Result<Vec<VideoEntry>, ContentError>;
    async fn list_news(&self) -> Result<Vec<NewsEntry>, ContentError>;
    async fn create_video(&self, fields: &NewVideo, password: &str) -> Result<(), ContentError>;
    async fn delete_video(&self, id: EntryId, password: &str) -> Result<(), ContentError>;
    async fn create_news(&self, fields: &NewNews, password: &str) -> Result<(), ContentError>;
    async fn delete_news(&self, id: EntryId, password: &str) -> Result<(), ContentError>;
    async fn upload_file(&self, upload: &Upload) -> Result<String, ContentError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Endpoints {
    pub videos: String,
    pub news: String,
    pub upload: Option<String>,
}

/// HTTP client for the video, news and upload functions.
#[derive(Clone, Debug)]
pub struct ContentClient {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl ContentClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints,
        }
    }

    async fn get<T>(&self, url: &str) -> Result<T, ContentError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                log::debug!("GET {} failed: {}", url, e);
                ContentError::Connection
            })?;
        parse_response(response).await
    }

    async fn post<B>(&self, url: &str, body: &B) -> Result<reqwest::Response, ContentError>
    where
        B: Serialize,
    {
        let body = serde_json::to_string(body).map_err(|_| ContentError::RequestData)?;
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                log::debug!("POST {} failed: {}", url, e);
                ContentError::Connection
            })?;
        check_status(response)
    }

    async fn delete(&self, url: &str, id: EntryId, password: &str) -> Result<(), ContentError> {
        let id = id.to_string();
        let response = self
            .client
            .delete(url)
            .query(&[("id", id.as_str()), ("password", password)])
            .send()
            .await
            .map_err(|e| {
                log::debug!("DELETE {} {} failed: {}", url, id, e.without_url());
                ContentError::Connection
            })?;
        check_status(response).map(|_| ())
    }
}

impl ContentApi for ContentClient {
    async fn list_videos(&self) -> Result<Vec<VideoEntry>, ContentError> {
        let list: VideoList = self.get(&self.endpoints.videos).await?;
        let videos = list.videos.unwrap_or_default();
        log::debug!("Fetched {} videos", videos.len());
        Ok(videos)
    }

    async fn list_news(&self) -> Result<Vec<NewsEntry>, ContentError> {
        let list: NewsList = self.get(&self.endpoints.news).await?;
        let news = list.news.unwrap_or_default();
        log::debug!("Fetched {} news posts", news.len());
        Ok(news)
    }

    async fn create_video(&self, fields: &NewVideo, password: &str) -> Result<(), ContentError> {
        let body = Authorized {
            fields,
            admin_password: password,
        };
        self.post(&self.endpoints.videos, &body).await?;
        log::info!("Created video \"{}\"", fields.title);
        Ok(())
    }

    async fn delete_video(&self, id: EntryId, password: &str) -> Result<(), ContentError> {
        self.delete(&self.endpoints.videos, id, password).await?;
        log::info!("Deleted video {}", id);
        Ok(())
    }

    async fn create_news(&self, fields: &NewNews, password: &str) -> Result<(), ContentError> {
        let body = Authorized {
            fields,
            admin_password: password,
        };
        self.post(&self.endpoints.news, &body).await?;
        log::info!("Published news \"{}\"", fields.title);
        Ok(())
    }

    async fn delete_news(&self, id: EntryId, password: &str) -> Result<(), ContentError> {
        self.delete(&self.endpoints.news, id, password).await?;
        log::info!("Deleted news post {}", id);
        Ok(())
    }

    async fn upload_file(&self, upload: &Upload) -> Result<String, ContentError> {
        let locator = utils::data_locator(&upload.content_type, &upload.bytes);
        let Some(upload_url) = &self.endpoints.upload else {
            log::debug!("No upload endpoint, embedding {}", upload.file_name);
            return Ok(locator);
        };
        let body = UploadRequest {
            file: locator,
            fileName: &upload.file_name,
            fileType: &upload.content_type,
        };
        let response = self.post(upload_url, &body).await?;
        let uploaded: UploadResponse = parse_body(response).await?;
        log::info!("Uploaded {} to {}", upload.file_name, uploaded.url);
        Ok(uploaded.url)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ContentError> {
    match response.status() {
        StatusCode::FORBIDDEN => Err(ContentError::Forbidden),
        status if status.is_success() => Ok(response),
        status => {
            // The query string may carry the admin password.
            let url = response.url();
            log::warn!(
                "{}{} responded with {}",
                url.host_str().unwrap_or_default(),
                url.path(),
                status
            );
            Err(ContentError::Status(status.as_u16()))
        }
    }
}

async fn parse_response<T>(response: reqwest::Response) -> Result<T, ContentError>
where
    T: DeserializeOwned,
{
    let response = check_status(response)?;
    parse_body(response).await
}

async fn parse_body<T>(response: reqwest::Response) -> Result<T, ContentError>
where
    T: DeserializeOwned,
{
    let body = response
        .text()
        .await
        .map_err(|_| ContentError::RequestData)?;
    serde_json::from_str(&body).map_err(|error| {
        log::debug!("{}", &body);
        log::debug!("{}", error);
        ContentError::Parsing
    })
}
