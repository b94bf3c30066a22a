use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{DefaultBodyLimit, Multipart, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Datelike;
use client_core::{
    Carousel, EffectQueue, FaqAccordion, FormController, Navigator, RecruitmentState, SubmitError,
};
use serde::Deserialize;
use server_api::{submit_application, submit_contact};
use shared::{
    domain::PageId,
    error::{ApiError, ErrorCode},
    forms::MAX_RESUME_BYTES,
    protocol::{application_api_route, contact_api_route, SubmitResponse},
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;

mod app_state;
mod config;
mod content;
mod form_parts;
mod page_store;
mod submitter;
mod views;

use app_state::AppState;
use config::load_settings;
use form_parts::{
    read_application, read_application_into, read_contact, read_contact_into, FormPartsError,
};
use page_store::CookiePageStore;
use submitter::DirectSubmitter;
use views::{render_page, PageModel, PageView};

/// Room for the text fields and multipart framing around a full-size resume.
const MAX_REQUEST_BYTES: usize = MAX_RESUME_BYTES + 64 * 1024;
const SITE_CSS: &str = include_str!("assets/site.css");

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    slide: Option<String>,
    faq: Option<String>,
}

impl PageQuery {
    fn index(raw: &Option<String>) -> Option<usize> {
        raw.as_deref().and_then(|v| v.trim().parse().ok())
    }
}

#[derive(Debug, Deserialize)]
struct NavigateQuery {
    page: Option<String>,
}

type ApiReply = (StatusCode, Json<SubmitResponse>);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let api = settings.api_context()?;
    let app = build_router(Arc::new(AppState { api }));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "site listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    // HTML posts read the overflow as a multipart error and re-render the form.
    let form_posts = Router::new()
        .route("/contact", post(contact_form))
        .route("/recruitment/apply", post(application_form))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES));
    let api = Router::new()
        .route(contact_api_route(), post(api_contact))
        .route(application_api_route(), post(api_apply))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BYTES));

    Router::new()
        .route("/healthz", get(healthz))
        .route("/static/site.css", get(stylesheet))
        .route("/", get(index))
        .route("/navigate", get(navigate))
        .merge(form_posts)
        .merge(api)
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn html(view: PageView) -> Html<String> {
    Html(render_page(PageModel {
        view,
        year: current_year(),
    }))
}

async fn index(headers: HeaderMap, Query(q): Query<PageQuery>) -> Html<String> {
    let nav = Navigator::restore(CookiePageStore::from_headers(&headers));
    let view = match nav.current() {
        PageId::Home => PageView::Home(Carousel::starting_at(
            content::SLIDES.len(),
            PageQuery::index(&q.slide).unwrap_or(0),
        )),
        PageId::Services => PageView::Services,
        PageId::Recruitment => PageView::Recruitment(RecruitmentState::new(
            FormController::new(),
            FaqAccordion::with_expanded(
                PageQuery::index(&q.faq).filter(|i| *i < content::FAQS.len()),
            ),
        )),
        PageId::OurStory => PageView::OurStory,
        PageId::Contact => PageView::Contact(FormController::new()),
    };
    html(view)
}

async fn navigate(headers: HeaderMap, Query(q): Query<NavigateQuery>) -> Response {
    let mut nav = Navigator::restore(CookiePageStore::from_headers(&headers));
    let mut effects = EffectQueue::default();
    nav.request_raw(q.page.as_deref().unwrap_or_default(), &mut effects);

    let location = match effects.last_anchor() {
        Some(anchor) => format!("/#{anchor}"),
        None => "/".to_string(),
    };
    let mut response = Redirect::to(&location).into_response();
    if let Some(cookie) = nav.store().set_cookie() {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}

async fn contact_form(State(state): State<Arc<AppState>>, multipart: Multipart) -> Html<String> {
    let mut controller = FormController::new();
    match read_contact_into(multipart, controller.fields_mut()).await {
        Ok(()) => {
            controller.submit(&DirectSubmitter::new(&state.api)).await;
        }
        Err(err) => controller.complete(Err(SubmitError::Rejected(err.message))),
    }
    html(PageView::Contact(controller))
}

async fn application_form(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Html<String> {
    let mut recruitment = RecruitmentState::default();
    match read_application_into(multipart, recruitment.form.fields_mut()).await {
        Ok(()) => {
            recruitment.submit(&DirectSubmitter::new(&state.api)).await;
        }
        Err(err) => recruitment
            .form
            .complete(Err(SubmitError::Rejected(err.message))),
    }
    // The file input cannot be re-populated, so a retained resume is dropped.
    recruitment.form.fields_mut().resume = None;
    html(PageView::Recruitment(recruitment))
}

async fn api_contact(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<ApiReply, ApiReply> {
    let form = read_contact(multipart).await.map_err(parts_failure)?;
    let ack = submit_contact(&state.api, &form)
        .await
        .map_err(api_failure)?;
    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse::accepted(ack.reference, ack.message)),
    ))
}

async fn api_apply(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<ApiReply, ApiReply> {
    let form = read_application(multipart).await.map_err(parts_failure)?;
    let ack = submit_application(&state.api, &form)
        .await
        .map_err(api_failure)?;
    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse::accepted(ack.reference, ack.message)),
    ))
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorCode::RelayFailed => StatusCode::BAD_GATEWAY,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn api_failure(err: ApiError) -> ApiReply {
    (status_for(err.code), Json(SubmitResponse::from(err)))
}

fn parts_failure(err: FormPartsError) -> ApiReply {
    (err.status, Json(SubmitResponse::rejected(err.message)))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
