//! Inline SVG icons and the social link row.

use icondata::{FiGithub, FiLinkedin, FiMail, Icon};
use leptos::{
    html::{a, div},
    prelude::*,
    svg::svg,
};

use crate::catalog::PERSONAL_INFO;

/// Renders an `icondata` icon inline, inheriting the current text colour.
pub fn icon(icon: Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .attr("fill", icon.fill.unwrap_or("currentColor"))
        .attr("stroke", icon.stroke)
        .attr("stroke-width", icon.stroke_width)
        .attr("stroke-linecap", icon.stroke_linecap)
        .attr("stroke-linejoin", icon.stroke_linejoin)
        .attr("aria-hidden", "true")
        .attr("innerHTML", icon.data)
        .class(class)
}

/// GitHub, LinkedIn and email links for the personal record.
pub fn component() -> impl IntoView {
    let links = [
        (PERSONAL_INFO.github.to_owned(), "GitHub", FiGithub),
        (PERSONAL_INFO.linkedin.to_owned(), "LinkedIn", FiLinkedin),
        (format!("mailto:{}", PERSONAL_INFO.email), "Email", FiMail),
    ];

    div().class("flex flex-row gap-4 items-center h-10").child(
        links
            .into_iter()
            .map(|(href, label, glyph)| {
                a().href(href)
                    .rel("noopener noreferrer")
                    .target("_blank")
                    .aria_label(label)
                    .class("text-gray-400 transition-colors duration-300 hover:text-blue-400")
                    .child(icon(glyph, "size-5"))
            })
            .collect_view(),
    )
}
