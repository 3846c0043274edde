use chrono::{Datelike as _, Utc};
use leptos::{
    html::{a, div, footer, p, span},
    prelude::*,
    task::spawn_local,
};

use crate::api::{backend_health, messages, user_message};
use crate::catalog::{NAV_LINKS, PERSONAL_INFO};
use crate::components::icons;
use crate::scroll::scroll_to_anchor;

/// What the footer knows about the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Checking,
    Online,
    Offline,
}

impl BackendStatus {
    /// Online only when the health check succeeded and reported itself active.
    #[must_use]
    pub fn from_check(active: Result<bool, String>) -> Self {
        match active {
            Ok(true) => Self::Online,
            Ok(false) | Err(_) => Self::Offline,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Checking => "Checking backend...",
            Self::Online => "Backend online",
            Self::Offline => "Backend offline, showing saved content",
        }
    }

    const fn dot_class(self) -> &'static str {
        match self {
            Self::Checking => "bg-gray-500 animate-pulse",
            Self::Online => "bg-green-500",
            Self::Offline => "bg-red-500",
        }
    }
}

pub fn component() -> impl IntoView {
    let status = RwSignal::new(BackendStatus::default());

    Effect::new(move |_| {
        spawn_local(async move {
            let check = backend_health()
                .await
                .map(|health| health.is_active())
                .map_err(|e| user_message(&e, messages::HEALTH));
            if let Err(message) = &check {
                leptos::logging::warn!("{message}");
            }
            status.set(BackendStatus::from_check(check));
        });
    });

    footer().class("py-12 bg-black border-t border-gray-800").child(
        div().class("px-4 mx-auto max-w-7xl sm:px-6 lg:px-8").child((
            div().class("grid gap-8 mb-8 md:grid-cols-3").child((
                div().child((
                    p().class("mb-2 text-xl font-bold text-white").child(PERSONAL_INFO.name),
                    p().class("text-gray-400").child(PERSONAL_INFO.title),
                )),
                div().class("flex flex-wrap gap-x-6 gap-y-2").child(
                    NAV_LINKS
                        .iter()
                        .map(|&(anchor, label)| {
                            a().href(format!("#{anchor}"))
                                .class("text-gray-400 transition-colors hover:text-blue-400")
                                .on(leptos::ev::click, move |ev| {
                                    ev.prevent_default();
                                    scroll_to_anchor(anchor);
                                })
                                .child(label)
                        })
                        .collect_view(),
                ),
                div().class("md:justify-self-end").child(icons::component()),
            )),
            div().class("flex flex-col gap-2 justify-between items-center pt-8 border-t border-gray-800 md:flex-row").child((
                p().class("text-sm text-gray-500").child(format!(
                    "\u{a9} {} {}. All rights reserved.",
                    Utc::now().year(),
                    PERSONAL_INFO.name
                )),
                p().class("flex gap-2 items-center text-xs text-gray-500").child((
                    span().class(move || format!("inline-block rounded-full size-2 {}", status.get().dot_class())),
                    move || status.get().label(),
                )),
            )),
        )),
    )
}
