//! Server-rendered page views. Rendering is a pure function of [`PageModel`].

mod contact;
mod home;
mod our_story;
mod recruitment;
mod services;

use client_core::{Carousel, FormController, RecruitmentState, StatusMessage, StatusTone};
use leptos::prelude::*;
use shared::{domain::PageId, forms::ContactForm};

use crate::content::COMPANY;

pub(crate) use contact::ContactPage;
pub(crate) use home::HomePage;
pub(crate) use our_story::OurStoryPage;
pub(crate) use recruitment::RecruitmentPage;
pub(crate) use services::ServicesPage;

/// Per-page state the selected view renders from.
pub(crate) enum PageView {
    Home(Carousel),
    Services,
    Recruitment(RecruitmentState),
    OurStory,
    Contact(FormController<ContactForm>),
}

impl PageView {
    pub(crate) fn page(&self) -> PageId {
        match self {
            PageView::Home(_) => PageId::Home,
            PageView::Services => PageId::Services,
            PageView::Recruitment(_) => PageId::Recruitment,
            PageView::OurStory => PageId::OurStory,
            PageView::Contact(_) => PageId::Contact,
        }
    }
}

pub(crate) struct PageModel {
    pub(crate) view: PageView,
    pub(crate) year: i32,
}

pub(crate) fn nav_href(page: PageId) -> String {
    format!("/navigate?page={page}")
}

pub(crate) fn render_page(model: PageModel) -> String {
    let PageModel { view: page_view, year } = model;
    let current = page_view.page();
    let title = match current {
        PageId::Home => format!("{COMPANY} | IT Staffing & SAP Talent"),
        other => format!("{} | {COMPANY}", other.label()),
    };
    let owner = Owner::new_root(None);
    owner.with(move || {
        let body = match page_view {
            PageView::Home(carousel) => view! { <HomePage carousel=carousel/> }.into_any(),
            PageView::Services => view! { <ServicesPage/> }.into_any(),
            PageView::Recruitment(state) => view! { <RecruitmentPage state=state/> }.into_any(),
            PageView::OurStory => view! { <OurStoryPage/> }.into_any(),
            PageView::Contact(form) => view! { <ContactPage form=form/> }.into_any(),
        };
        view! {
            <Document title=title>
                <Navigation current=current/>
                <main class="page" data-page=current.as_str()>{body}</main>
                <Footer year=year/>
            </Document>
        }
        .to_html()
    })
}

#[component]
fn Document(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href="/static/site.css"/>
                <title>{title}</title>
            </head>
            <body>{children()}</body>
        </html>
    }
}

#[component]
fn Navigation(current: PageId) -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="nav">
                <a class="brand" href=nav_href(PageId::Home)>{COMPANY}</a>
                <ul class="nav-links">
                    {PageId::ALL
                        .into_iter()
                        .map(|page| {
                            let class = if page == current { "nav-link active" } else { "nav-link" };
                            view! {
                                <li>
                                    <a
                                        class=class
                                        href=nav_href(page)
                                        aria-current=(page == current).then_some("page")
                                    >
                                        {page.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}

#[component]
fn Footer(year: i32) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-links">
                {PageId::ALL
                    .into_iter()
                    .map(|page| view! { <a href=nav_href(page)>{page.label()}</a> })
                    .collect_view()}
            </div>
            <p class="copyright">{format!("© {year} {COMPANY}. All rights reserved.")}</p>
        </footer>
    }
}

#[component]
fn StatusBanner(message: Option<StatusMessage>) -> impl IntoView {
    message.map(|message| {
        let class = match message.tone {
            StatusTone::Success => "status-banner success",
            StatusTone::Failure => "status-banner failure",
        };
        view! { <p class=class role="status">{message.text}</p> }
    })
}
