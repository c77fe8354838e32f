#[macro_use]
extern crate rocket;

mod api;
mod content;
mod data;
mod page;
mod responders;
mod state;
mod utils;

use clap::Parser;
use content::data::{EntryId, SeriesFilter};
use log::{debug, error, info, warn, LevelFilter};
use page::{actions, Dialog, Notice};
use rocket::data::{Limits, ToByteUnit};
use rocket::form::Form;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;
use simple_logger::SimpleLogger;
use state::{Session, Visitor};
use std::net::Ipv4Addr;

#[derive(Parser, Debug)]
pub struct DubsiteArgs {
    /// URL of the video list/create/delete function.
    #[clap(long, env = "DUBSITE_VIDEO_API_URL")]
    video_api_url: String,

    /// URL of the news list/create/delete function.
    #[clap(long, env = "DUBSITE_NEWS_API_URL")]
    news_api_url: String,

    /// URL of the file upload function. Files are embedded as data URLs when unset.
    #[clap(long, env = "DUBSITE_UPLOAD_API_URL")]
    upload_api_url: Option<String>,

    /// IP address to bind the server to.
    #[clap(long, default_value_t = Ipv4Addr::new(0, 0, 0, 0), env = "DUBSITE_ADDRESS")]
    bind_address: Ipv4Addr,

    /// Port to bind the server to.
    #[clap(long, default_value_t = 8000, env = "DUBSITE_PORT")]
    port: u16,

    /// Name shown in the page header.
    #[clap(long, default_value = "BebraDub", env = "DUBSITE_NAME")]
    site_name: String,

    /// Largest accepted upload in MiB.
    #[clap(long, default_value_t = 64, env = "DUBSITE_UPLOAD_LIMIT")]
    upload_limit: u64,
}

/// Render the page. Every load fetches both lists, except a filter change
/// on a stored session, which renders the lists it already holds.
#[get("/?<series>")]
async fn index(
    series: Option<&str>,
    visitor: Visitor,
    state: &rocket::State<state::Global>,
) -> Result<Template, Status> {
    let filter = match series.map(str::parse::<SeriesFilter>).transpose() {
        Ok(filter) => filter,
        Err(error) => {
            debug!("{}", error);
            return Err(Status::NotFound);
        }
    };
    if let Some(filter) = filter {
        visitor.page.lock().await.set_filter(filter);
    }
    if filter.is_none() || !visitor.stored {
        actions::mount(&state.client, &visitor.page).await;
    }

    let mut page = visitor.page.lock().await;
    Ok(Template::render("index", page.view(&state.site_name)))
}

fn home() -> Redirect {
    Redirect::to(uri!(index(series = _)))
}

#[post("/dialogs/<dialog>/open")]
async fn dialog_open(dialog: Dialog, session: Session) -> Redirect {
    let opened = session.page.lock().await.open_dialog(dialog);
    debug!("Requested {} dialog, showing {}", dialog.as_str(), opened.as_str());
    home()
}

#[post("/dialogs/<dialog>/close")]
async fn dialog_close(dialog: Dialog, session: Session) -> Redirect {
    session.page.lock().await.close_dialog(dialog);
    home()
}

#[post("/password", data = "<form>")]
async fn password(form: Form<data::forms::Password>, session: Session) -> Redirect {
    session
        .page
        .lock()
        .await
        .set_password(form.into_inner().password);
    info!("Admin password set for session");
    home()
}

#[get("/play/<id>")]
async fn play(id: EntryId, session: Session) -> Redirect {
    session.page.lock().await.play(id);
    home()
}

#[post("/videos", data = "<form>")]
async fn video_create(
    form: Form<data::forms::VideoSubmit<'_>>,
    session: Session,
    state: &rocket::State<state::Global>,
) -> Redirect {
    let uploads = match form.uploads().await {
        Ok(uploads) => uploads,
        Err(error) => {
            error!("Failed to read uploaded file: {}", error);
            session
                .page
                .lock()
                .await
                .notify(Notice::destructive("Error", "Could not read the selected file"));
            return home();
        }
    };
    actions::submit_video(&state.client, &session.page, form.to_video_form(), uploads).await;
    home()
}

#[post("/videos/<id>/delete")]
async fn video_delete(
    id: EntryId,
    session: Session,
    state: &rocket::State<state::Global>,
) -> Redirect {
    actions::delete_video(&state.client, &session.page, id).await;
    home()
}

#[post("/news", data = "<form>")]
async fn news_create(
    form: Form<data::forms::NewsSubmit<'_>>,
    session: Session,
    state: &rocket::State<state::Global>,
) -> Redirect {
    let image = match form.image().await {
        Ok(image) => image,
        Err(error) => {
            error!("Failed to read uploaded image: {}", error);
            session
                .page
                .lock()
                .await
                .notify(Notice::destructive("Error", "Could not read the selected file"));
            return home();
        }
    };
    actions::submit_news(&state.client, &session.page, form.to_news_form(), image).await;
    home()
}

#[post("/news/<id>/delete")]
async fn news_delete(
    id: EntryId,
    session: Session,
    state: &rocket::State<state::Global>,
) -> Redirect {
    actions::delete_news(&state.client, &session.page, id).await;
    home()
}

#[get("/static/style.css")]
fn stylesheet() -> responders::Stylesheet {
    responders::Stylesheet::new()
}

fn build(rocket: Rocket<Build>, state: state::Global) -> Rocket<Build> {
    rocket
        .manage(state)
        .mount(
            "/",
            routes![
                index,
                dialog_open,
                dialog_close,
                password,
                play,
                video_create,
                video_delete,
                news_create,
                news_delete,
                stylesheet,
                api::videos_get,
                api::news_get,
            ],
        )
        .attach(Template::fairing())
}

#[rocket::main]
async fn main() {
    let args = DubsiteArgs::parse();

    if let Err(error) = SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
    {
        eprintln!("Could not initialise logging: {}", error);
    }

    if args.upload_api_url.is_none() {
        warn!("No upload function configured, uploaded files are embedded as data URLs");
    }
    warn!("The admin password is forwarded in plain text to the content functions");

    // Launch the web server.
    let upload_limit = args.upload_limit.mebibytes();
    let rocket_config = rocket::Config {
        port: args.port,
        address: args.bind_address.into(),
        limits: Limits::default()
            .limit("file", upload_limit)
            .limit("data-form", upload_limit),
        ..rocket::Config::release_default()
    };
    let state = state::Global::from_args(args);
    let rocket = build(rocket::custom(&rocket_config), state);
    if let Err(error) = rocket.launch().await {
        error!("Server stopped: {}", error);
    }
}
