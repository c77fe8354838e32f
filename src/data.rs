pub mod forms {
    use crate::content::data::{Series, Upload};
    use crate::page::actions::VideoUploads;
    use crate::page::{NewsForm, VideoForm};
    use rocket::fs::TempFile;
    use rocket::tokio::io::AsyncReadExt;
    use std::io;

    const FALLBACK_FILE_NAME: &str = "upload";

    #[derive(Debug, FromForm)]
    pub struct Password {
        #[field(default = String::new())]
        pub password: String,
    }

    #[derive(Debug, FromForm)]
    pub struct VideoSubmit<'r> {
        pub title: String,
        #[field(default = String::new())]
        pub description: String,
        #[field(default = String::new())]
        pub video_url: String,
        #[field(default = String::new())]
        pub thumbnail_url: String,
        #[field(default = String::new())]
        pub episode_number: String,
        #[field(default = <Series as Default>::default())]
        pub anime_series: Series,
        pub video_file: Option<TempFile<'r>>,
        pub thumbnail_file: Option<TempFile<'r>>,
    }

    impl VideoSubmit<'_> {
        pub fn to_video_form(&self) -> VideoForm {
            VideoForm {
                title: self.title.clone(),
                description: self.description.clone(),
                video_url: self.video_url.clone(),
                thumbnail_url: self.thumbnail_url.clone(),
                episode_number: self.episode_number.clone(),
                anime_series: self.anime_series,
            }
        }

        pub async fn uploads(&self) -> io::Result<VideoUploads> {
            Ok(VideoUploads {
                video: read_upload(self.video_file.as_ref()).await?,
                thumbnail: read_upload(self.thumbnail_file.as_ref()).await?,
            })
        }
    }

    #[derive(Debug, FromForm)]
    pub struct NewsSubmit<'r> {
        pub title: String,
        #[field(default = String::new())]
        pub content: String,
        #[field(default = String::new())]
        pub image_url: String,
        pub image_file: Option<TempFile<'r>>,
    }

    impl NewsSubmit<'_> {
        pub fn to_news_form(&self) -> NewsForm {
            NewsForm {
                title: self.title.clone(),
                content: self.content.clone(),
                image_url: self.image_url.clone(),
            }
        }

        pub async fn image(&self) -> io::Result<Option<Upload>> {
            read_upload(self.image_file.as_ref()).await
        }
    }

    /// Read a picked file into memory. Browsers send an empty part when no
    /// file was picked, which counts as no file.
    async fn read_upload(file: Option<&TempFile<'_>>) -> io::Result<Option<Upload>> {
        let Some(file) = file.filter(|file| file.len() > 0) else {
            return Ok(None);
        };
        let mut bytes = Vec::new();
        let mut reader = Box::pin(file.open().await?);
        reader.read_to_end(&mut bytes).await?;

        let content_type = file.content_type();
        let name = file.name().unwrap_or(FALLBACK_FILE_NAME);
        let file_name = match content_type.and_then(|content_type| content_type.extension()) {
            Some(extension) => format!("{}.{}", name, extension),
            None => name.to_string(),
        };
        log::debug!("Read {} bytes from {}", bytes.len(), file_name);
        Ok(Some(Upload {
            file_name,
            content_type: content_type
                .map(|content_type| content_type.to_string())
                .unwrap_or_default(),
            bytes,
        }))
    }
}
