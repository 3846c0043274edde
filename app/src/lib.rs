// Core application modules and components
use crate::catalog::PERSONAL_INFO;
use crate::components::{error_template, footer, header};
use crate::sections::{about, blog, contact, education, hero, projects, skills, testimonials};
use leptos::{
    html::{body, head, html, main, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod api;
pub mod catalog;
pub mod components;
pub mod display;
pub mod fallback;
pub mod scroll;
pub mod sections;
pub mod types;

pub const META_DESCRIPTION: &str = "Portfolio of Avery Quinn, software engineer and business \
                                    analyst: projects, writing and ways to get in touch.";

#[must_use]
pub fn page_title() -> String {
    format!("{} | {}", PERSONAL_INFO.name, PERSONAL_INFO.title)
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").class("scroll-smooth").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/portfolio.css")
                    .build(),
            ),
        )),
        body().class("bg-black").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

fn home() -> impl IntoView {
    main().child((
        hero::component(),
        about::component(),
        skills::component(),
        projects::component(),
        education::component(),
        blog::component(),
        testimonials::component(),
        contact::component(),
    ))
}

#[must_use]
pub fn component() -> impl IntoView {
    use leptos_meta::{Meta, Title};

    view! {
        <Title text=page_title()/>
        <Meta name="description" content=META_DESCRIPTION/>
        <Meta property="og:title" content=page_title()/>
        <Meta property="og:description" content=META_DESCRIPTION/>
        <Router>
            <div class="relative min-h-screen text-white bg-black font-sans">
                {header::component}
                <FlatRoutes fallback=|| {
                    let mut outside_errors = Errors::default();
                    outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                    error_template::component(outside_errors)
                }>
                    <Route path=StaticSegment("") view=home/>
                </FlatRoutes>
                {footer::component}
            </div>
        </Router>
    }
}
