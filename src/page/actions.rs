use crate::content::data::{EntryId, Upload};
use crate::content::{ContentApi, ContentError};
use crate::page::{ContentPage, NewsForm, Submission, VideoForm};
use tokio::sync::Mutex;

/// Files picked in the create video dialog.
#[derive(Debug, Default)]
pub struct VideoUploads {
    pub video: Option<Upload>,
    pub thumbnail: Option<Upload>,
}

// The page lock is only held between remote calls, never across one.

pub async fn refresh_videos<A: ContentApi>(api: &A, page: &Mutex<ContentPage>) {
    let fetch = page.lock().await.begin_videos_fetch();
    let result = api.list_videos().await;
    page.lock().await.apply_videos(fetch, result);
}

pub async fn refresh_news<A: ContentApi>(api: &A, page: &Mutex<ContentPage>) {
    let fetch = page.lock().await.begin_news_fetch();
    let result = api.list_news().await;
    page.lock().await.apply_news(fetch, result);
}

/// Initial load of both lists.
pub async fn mount<A: ContentApi>(api: &A, page: &Mutex<ContentPage>) {
    tokio::join!(refresh_videos(api, page), refresh_news(api, page));
}

async fn upload_video_files<A: ContentApi>(
    api: &A,
    form: &mut VideoForm,
    uploads: &VideoUploads,
) -> Result<(), ContentError> {
    if let Some(video) = &uploads.video {
        form.video_url = api.upload_file(video).await?;
    }
    if let Some(thumbnail) = &uploads.thumbnail {
        form.thumbnail_url = api.upload_file(thumbnail).await?;
    }
    Ok(())
}

/// Create a video and re-fetch the list on success. Returns whether the
/// video was created.
pub async fn submit_video<A: ContentApi>(
    api: &A,
    page: &Mutex<ContentPage>,
    form: VideoForm,
    uploads: VideoUploads,
) -> bool {
    let submission = page
        .lock()
        .await
        .begin_video_submit(form, uploads.video.is_some());
    let Submission { mut form, password } = match submission {
        Ok(submission) => submission,
        Err(rejection) => {
            log::info!("Video submit rejected: {}", rejection);
            return false;
        }
    };

    let outcome = match upload_video_files(api, &mut form, &uploads).await {
        Ok(()) => api.create_video(&form.to_fields(), &password).await,
        Err(error) => Err(error),
    };
    if let Err(error) = &outcome {
        log::warn!("Failed to create video \"{}\": {}", form.title, error);
    }

    let created = page.lock().await.finish_video_submit(form, outcome);
    if created {
        refresh_videos(api, page).await;
    }
    created
}

/// Publish a news post, uploading its image first when one was picked.
pub async fn submit_news<A: ContentApi>(
    api: &A,
    page: &Mutex<ContentPage>,
    form: NewsForm,
    image: Option<Upload>,
) -> bool {
    let submission = page.lock().await.begin_news_submit(form);
    let Submission { mut form, password } = match submission {
        Ok(submission) => submission,
        Err(rejection) => {
            log::info!("News submit rejected: {}", rejection);
            return false;
        }
    };

    let uploaded = match &image {
        Some(image) => api.upload_file(image).await.map(|url| form.image_url = url),
        None => Ok(()),
    };
    let outcome = match uploaded {
        Ok(()) => api.create_news(&form.to_fields(), &password).await,
        Err(error) => Err(error),
    };
    if let Err(error) = &outcome {
        log::warn!("Failed to publish news \"{}\": {}", form.title, error);
    }

    let created = page.lock().await.finish_news_submit(form, outcome);
    if created {
        refresh_news(api, page).await;
    }
    created
}

pub async fn delete_video<A: ContentApi>(
    api: &A,
    page: &Mutex<ContentPage>,
    id: EntryId,
) -> bool {
    let password = page.lock().await.password().to_string();
    let outcome = api.delete_video(id, &password).await;
    if let Err(error) = &outcome {
        log::warn!("Failed to delete video {}: {}", id, error);
    }
    let deleted = page.lock().await.finish_video_delete(id, outcome);
    if deleted {
        refresh_videos(api, page).await;
    }
    deleted
}

pub async fn delete_news<A: ContentApi>(
    api: &A,
    page: &Mutex<ContentPage>,
    id: EntryId,
) -> bool {
    let password = page.lock().await.password().to_string();
    let outcome = api.delete_news(id, &password).await;
    if let Err(error) = &outcome {
        log::warn!("Failed to delete news post {}: {}", id, error);
    }
    let deleted = page.lock().await.finish_news_delete(outcome);
    if deleted {
        refresh_news(api, page).await;
    }
    deleted
}
