//! A small spinner shown while a section waits on the backend.
//!
//! Sections keep rendering their current items underneath, so this is an overlay hint
//! rather than a placeholder.

use leptos::{
    html::{div, p},
    prelude::*,
};

/// Renders a spinner with `label` beside it.
pub fn component(label: &'static str) -> impl IntoView {
    div()
        .class("flex flex-row gap-2 justify-center items-center py-4")
        .attr("role", "status")
        .child((
            div().class("rounded-full border-2 border-blue-500 animate-spin size-5 border-t-transparent"),
            p().class("text-sm italic text-gray-400").child(label),
        ))
}
