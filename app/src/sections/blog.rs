//! Blog list and reader.
//!
//! The list follows the usual fail-open loading. Opening a post switches to the reader
//! in place (no URL change); when the list came from the backend the post is refetched
//! so the reader shows the full body, and a failed refetch leaves the list copy up.

use icondata::{BsCalendar, BsClock, FiArrowLeft};
use leptos::{
    ev,
    html::{article, button, div, h3, img, p, span},
    prelude::*,
    task::spawn_local,
};
use portfolio_api::types::{BlogCategory, BlogPost};

use crate::api::{get_blog_post, list_blog_posts, messages, user_message};
use crate::catalog;
use crate::components::icons::icon;
use crate::components::{loader, notice};
use crate::display::{blog_category_badge, format_date};
use crate::fallback::{SectionState, Source};
use crate::scroll::scroll_to_anchor;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BlogView {
    #[default]
    List,
    Detail(BlogPost),
}

/// List/detail toggle with its own generation counter for detail refreshes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlogReader {
    view: BlogView,
    generation: u64,
}

impl BlogReader {
    /// Shows `post` and returns the generation a refresh for it must present.
    pub fn open(&mut self, post: BlogPost) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.view = BlogView::Detail(post);
        self.generation
    }

    /// Back to the list. Any refresh still in flight is ignored when it lands.
    pub fn close(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.view = BlogView::List;
    }

    /// Applies a refreshed copy of the open post. Failures keep the copy on screen.
    pub fn refresh(&mut self, generation: u64, outcome: Result<BlogPost, String>) -> bool {
        if generation != self.generation {
            return false;
        }
        match (&mut self.view, outcome) {
            (BlogView::Detail(current), Ok(fresh)) if current.id == fresh.id => {
                *current = fresh;
                true
            }
            (_, Err(message)) => {
                leptos::logging::warn!("Keeping list copy of post: {message}");
                false
            }
            _ => false,
        }
    }

    #[must_use]
    pub const fn view(&self) -> &BlogView {
        &self.view
    }
}

fn meta_line(post: &BlogPost) -> impl IntoView + use<> {
    div().class("flex flex-wrap gap-4 items-center text-sm text-gray-400").child((
        span()
            .class(format!("py-1 px-3 text-xs rounded-full border {}", blog_category_badge(&post.category)))
            .child(post.category.clone()),
        span().class("flex gap-1 items-center").child((
            icon(BsCalendar, "size-4"),
            format_date(&post.date),
        )),
        span().class("flex gap-1 items-center").child((
            icon(BsClock, "size-4"),
            post.read_time.clone(),
        )),
    ))
}

fn cover(post: &BlogPost, class: &'static str) -> Option<impl IntoView + use<>> {
    post.image
        .clone()
        .map(|src| img().src(src).alt(post.title.clone()).attr("loading", "lazy").class(class))
}

pub fn component() -> impl IntoView {
    let category = RwSignal::new(BlogCategory::All);
    let state = RwSignal::new(SectionState::with_catalog(catalog::blog_posts()));
    let reader = RwSignal::new(BlogReader::default());

    Effect::new(move |_| {
        let category = category.get();
        let Some(ticket) = state.try_update(SectionState::begin) else {
            return;
        };
        spawn_local(async move {
            let outcome = list_blog_posts(category)
                .await
                .map_err(|e| user_message(&e, messages::BLOG_LIST));
            state.update(|state| {
                if !state.settle(ticket, outcome, || catalog::blog_posts_for(category)) {
                    leptos::logging::log!("Discarded superseded blog response for {category}");
                }
            });
        });
    });

    let open_post = move |post: BlogPost| {
        let id = post.id.clone();
        let generation = reader.try_update(|reader| reader.open(post));
        scroll_to_anchor("blog");

        let live = state.with_untracked(|s| s.source() == Source::Live);
        if let (true, Some(generation)) = (live, generation) {
            spawn_local(async move {
                let outcome = get_blog_post(id)
                    .await
                    .map_err(|e| user_message(&e, messages::BLOG_POST));
                reader.update(|reader| {
                    reader.refresh(generation, outcome);
                });
            });
        }
    };

    let filters = move || {
        BlogCategory::ALL
            .iter()
            .map(|&option| {
                button()
                    .r#type("button")
                    .class("py-2 px-4 text-sm rounded-full border transition-colors")
                    .class(("bg-blue-600", move || category.get() == option))
                    .class(("text-white", move || category.get() == option))
                    .class(("border-blue-600", move || category.get() == option))
                    .class(("text-gray-300", move || category.get() != option))
                    .class(("border-gray-700", move || category.get() != option))
                    .on(ev::click, move |_| category.set(option))
                    .child(option.as_str())
            })
            .collect_view()
    };

    let list = move || {
        let posts = state.with(|s| s.items().to_vec());
        let Some((featured, recent)) = posts.split_first() else {
            return p().class("text-center text-gray-400").child("No posts yet.").into_any();
        };

        let featured_post = featured.clone();
        let featured_view = article()
            .class("overflow-hidden mb-12 bg-gray-800 rounded-xl border border-gray-700 cursor-pointer md:flex hover:border-blue-500/50")
            .on(ev::click, move |_| open_post(featured_post.clone()))
            .child((
                cover(featured, "object-cover w-full h-64 md:w-1/2 md:h-auto"),
                div().class("flex flex-col gap-4 p-8").child((
                    span().class("text-xs font-semibold tracking-wider text-blue-400 uppercase").child("Featured Article"),
                    h3().class("text-2xl font-bold text-white").child(featured.title.clone()),
                    p().class("text-gray-300").child(featured.excerpt.clone()),
                    meta_line(featured),
                )),
            ));

        let recent_views = recent
            .iter()
            .map(|post| {
                let selected = post.clone();
                article()
                    .class("overflow-hidden bg-gray-900 rounded-xl border border-gray-800 cursor-pointer hover:border-blue-500/50")
                    .on(ev::click, move |_| open_post(selected.clone()))
                    .child((
                        cover(post, "object-cover w-full h-44"),
                        div().class("flex flex-col gap-3 p-6").child((
                            h3().class("text-lg font-semibold text-white").child(post.title.clone()),
                            p().class("text-sm text-gray-400 line-clamp-3").child(post.excerpt.clone()),
                            meta_line(post),
                        )),
                    ))
            })
            .collect_view();

        (
            featured_view,
            (!recent.is_empty()).then(|| {
                (
                    h3().class("mb-6 text-2xl font-bold text-white").child("Recent Posts"),
                    div().class("grid gap-8 md:grid-cols-2").child(recent_views),
                )
            }),
        )
            .into_any()
    };

    let detail = move |post: BlogPost| {
        article().class("mx-auto max-w-3xl").child((
            button()
                .r#type("button")
                .class("flex gap-2 items-center mb-8 text-blue-400 hover:underline")
                .on(ev::click, move |_| reader.update(BlogReader::close))
                .child((icon(FiArrowLeft, "size-4"), "Back to all posts")),
            cover(&post, "object-cover mb-8 w-full h-72 rounded-xl"),
            h3().class("mb-4 text-3xl font-bold text-white md:text-4xl").child(post.title.clone()),
            meta_line(&post),
            div()
                .class("mt-8 space-y-4 leading-relaxed text-gray-300 whitespace-pre-line")
                .child(post.content),
        ))
    };

    view! {
        <section id="blog" class="py-20 bg-gray-900">
            <div class="px-4 mx-auto max-w-7xl sm:px-6 lg:px-8">
                <div class="mb-12 text-center">
                    <h2 class="mb-6 text-4xl font-bold text-white md:text-5xl">"Latest Insights"</h2>
                    <p class="mx-auto max-w-3xl text-xl text-gray-300">
                        "Notes on development, analysis and design"
                    </p>
                </div>
                {move || {
                    state.with(|s| {
                        s.notice().map(|message| {
                            notice::dismissible(message.to_owned(), notice::Tone::Warning, move || {
                                state.update(SectionState::dismiss_notice);
                            })
                        })
                    })
                }}
                {move || match reader.with(|r| r.view().clone()) {
                    BlogView::Detail(post) => detail(post).into_any(),
                    BlogView::List => {
                        view! {
                            <div class="flex flex-wrap gap-3 justify-center mb-12">{filters}</div>
                            <Show when=move || state.with(SectionState::is_loading)>
                                {loader::component("Loading posts...")}
                            </Show>
                            {list}
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
