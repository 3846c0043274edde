use icondata::{FiAward, FiCode, FiTrendingUp, FiUsers, Icon};
use leptos::{
    html::{div, h2, h3, p, section, span},
    prelude::*,
};

use crate::catalog::{HIGHLIGHTS, PERSONAL_INFO};
use crate::components::icons::icon;

const HIGHLIGHT_ICONS: [(Icon, &str); 4] = [
    (FiCode, "text-blue-500"),
    (FiTrendingUp, "text-green-500"),
    (FiUsers, "text-purple-500"),
    (FiAward, "text-yellow-500"),
];

pub fn component() -> impl IntoView {
    section().id("about").class("py-20 bg-gray-900").child(
        div().class("px-4 mx-auto max-w-7xl sm:px-6 lg:px-8").child((
            div().class("mb-16 text-center").child((
                h2().class("mb-6 text-4xl font-bold text-white md:text-5xl").child("About Me"),
                p().class("mx-auto max-w-3xl text-xl text-gray-300")
                    .child("Building useful software where business and technology meet"),
            )),
            div().class("grid gap-16 items-center lg:grid-cols-2").child((
                div().class("space-y-6 text-lg leading-relaxed text-gray-300").child((
                    p().child((
                        "I'm ",
                        span().class("font-semibold text-blue-400").child(PERSONAL_INFO.name),
                        ", based in ",
                        PERSONAL_INFO.location,
                        ".",
                    )),
                    p().child(PERSONAL_INFO.bio),
                )),
                div().class("grid gap-6 sm:grid-cols-2").child(
                    HIGHLIGHTS
                        .iter()
                        .zip(HIGHLIGHT_ICONS)
                        .map(|(highlight, (glyph, tint))| {
                            div().class("p-6 bg-gray-800 rounded-xl border border-gray-700 transition-colors hover:border-blue-500/50").child((
                                div().class(tint).child(icon(glyph, "mb-4 size-8")),
                                h3().class("mb-2 text-lg font-semibold text-white").child(highlight.title),
                                p().class("text-sm text-gray-400").child(highlight.description),
                            ))
                        })
                        .collect_view(),
                ),
            )),
        )),
    )
}
