//! One-line, non-blocking messages shown above a section's content.

use icondata::FiX;
use leptos::{
    ev,
    html::{button, div, p},
    prelude::*,
};

use super::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
}

impl Tone {
    const fn class(self) -> &'static str {
        match self {
            Self::Success => "border-green-500/30 bg-green-600/10 text-green-400",
            Self::Warning => "border-yellow-500/30 bg-yellow-600/10 text-yellow-300",
            Self::Error => "border-red-500/30 bg-red-600/10 text-red-400",
        }
    }

    const fn role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            Self::Success | Self::Warning => "status",
        }
    }
}

pub fn component(message: String, tone: Tone) -> impl IntoView {
    p().class(format!("py-2 px-4 mb-6 text-sm text-center rounded-lg border {}", tone.class()))
        .attr("role", tone.role())
        .child(message)
}

/// A notice with a close button; `on_dismiss` runs when the visitor clicks it.
pub fn dismissible(message: String, tone: Tone, on_dismiss: impl Fn() + Send + Sync + 'static) -> impl IntoView {
    div()
        .class(format!(
            "flex gap-3 justify-center items-center py-2 px-4 mb-6 text-sm rounded-lg border {}",
            tone.class()
        ))
        .attr("role", tone.role())
        .child((
            p().child(message),
            button()
                .attr("type", "button")
                .attr("aria-label", "Dismiss")
                .class("opacity-70 transition-opacity hover:opacity-100")
                .on(ev::click, move |_| on_dismiss())
                .child(icon(FiX, "size-4")),
        ))
}
