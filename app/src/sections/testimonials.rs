use icondata::{FiChevronLeft, FiChevronRight, FiStar};
use leptos::{prelude::*, task::spawn_local};
use portfolio_api::types::Testimonial;

use crate::api::{list_testimonials, messages, user_message};
use crate::catalog;
use crate::components::icons::icon;
use crate::components::{loader, notice};
use crate::fallback::SectionState;

/// Carousel position. The slide count is passed in on every move since the dataset
/// can be swapped underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
}

impl Carousel {
    /// The slide to show for `len` slides; always 0 when there are none.
    #[must_use]
    pub fn current(self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }

    pub fn next(&mut self, len: usize) {
        self.index = if len == 0 {
            0
        } else {
            (self.current(len) + 1) % len
        };
    }

    pub fn previous(&mut self, len: usize) {
        self.index = match (len, self.current(len)) {
            (0, _) => 0,
            (len, 0) => len - 1,
            (_, index) => index - 1,
        };
    }

    /// Jumps to `index`; out of range selections are ignored.
    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.index = index;
        }
    }
}

fn slide(testimonial: Testimonial) -> impl IntoView {
    let stars = usize::from(testimonial.stars());
    view! {
        <figure class="p-8 text-center bg-gray-800 rounded-2xl border border-gray-700 md:p-12">
            <div class="flex gap-1 justify-center mb-6 text-yellow-400" aria-label=format!("{stars} out of 5 stars")>
                {(0..stars).map(|_| icon(FiStar, "size-5 fill-current")).collect_view()}
            </div>
            <blockquote class="mb-8 text-lg italic leading-relaxed text-gray-200 md:text-xl">
                {format!("\u{201c}{}\u{201d}", testimonial.content)}
            </blockquote>
            <figcaption class="flex gap-4 justify-center items-center">
                {testimonial
                    .avatar
                    .map(|src| view! { <img src=src alt="" class="object-cover rounded-full size-14"/> })}
                <div class="text-left">
                    <p class="font-semibold text-white">{testimonial.name}</p>
                    <p class="text-sm text-gray-400">
                        {testimonial.role}
                        {(!testimonial.company.is_empty()).then(|| format!(", {}", testimonial.company))}
                    </p>
                </div>
            </figcaption>
        </figure>
    }
}

pub fn component() -> impl IntoView {
    let state = RwSignal::new(SectionState::with_catalog(catalog::testimonials()));
    let carousel = RwSignal::new(Carousel::default());

    Effect::new(move |_| {
        let Some(ticket) = state.try_update(SectionState::begin) else {
            return;
        };
        spawn_local(async move {
            let outcome = list_testimonials()
                .await
                .map_err(|e| user_message(&e, messages::TESTIMONIALS));
            state.update(|state| {
                if state.settle(ticket, outcome, catalog::testimonials) {
                    carousel.set(Carousel::default());
                }
            });
        });
    });

    let len = move || state.with(|s| s.items().len());
    let current = move || state.with(|s| s.items().get(carousel.get().current(s.items().len())).cloned());

    view! {
        <section id="testimonials" class="py-20 bg-black">
            <div class="px-4 mx-auto max-w-4xl sm:px-6 lg:px-8">
                <div class="mb-12 text-center">
                    <h2 class="mb-6 text-4xl font-bold text-white md:text-5xl">"What People Say"</h2>
                    <p class="text-xl text-gray-300">"Feedback from colleagues and clients"</p>
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
                <Show when=move || state.with(SectionState::is_loading)>
                    {loader::component("Loading testimonials...")}
                </Show>
                <div class="relative">
                    {move || current().map(slide)}
                    <Show when=move || { len() > 1 }>
                        <button
                            type="button"
                            aria-label="Previous testimonial"
                            class="absolute top-1/2 -left-4 p-2 text-white bg-gray-700 rounded-full -translate-y-1/2 md:-left-12 hover:bg-blue-600"
                            on:click=move |_| carousel.update(|c| c.previous(len()))
                        >
                            {icon(FiChevronLeft, "size-5")}
                        </button>
                        <button
                            type="button"
                            aria-label="Next testimonial"
                            class="absolute top-1/2 -right-4 p-2 text-white bg-gray-700 rounded-full -translate-y-1/2 md:-right-12 hover:bg-blue-600"
                            on:click=move |_| carousel.update(|c| c.next(len()))
                        >
                            {icon(FiChevronRight, "size-5")}
                        </button>
                    </Show>
                </div>
                <div class="flex gap-2 justify-center mt-8">
                    {move || {
                        let len = len();
                        (0..len)
                            .map(|index| {
                                view! {
                                    <button
                                        type="button"
                                        aria-label=format!("Show testimonial {}", index + 1)
                                        class="rounded-full transition-all duration-300 size-3"
                                        class=("bg-blue-500", move || carousel.get().current(len) == index)
                                        class=("bg-gray-600", move || carousel.get().current(len) != index)
                                        on:click=move |_| carousel.update(|c| c.select(index, len))
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_first() {
        let mut carousel = Carousel::default();
        carousel.next(3);
        carousel.next(3);
        assert_eq!(carousel.current(3), 2);
        carousel.next(3);
        assert_eq!(carousel.current(3), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut carousel = Carousel::default();
        carousel.previous(3);
        assert_eq!(carousel.current(3), 2);
        carousel.previous(3);
        assert_eq!(carousel.current(3), 1);
    }

    #[test]
    fn test_select_jumps_and_ignores_out_of_range() {
        let mut carousel = Carousel::default();
        carousel.select(2, 3);
        assert_eq!(carousel.current(3), 2);
        carousel.select(7, 3);
        assert_eq!(carousel.current(3), 2);
    }

    #[test]
    fn test_empty_carousel_stays_at_zero() {
        let mut carousel = Carousel::default();
        carousel.next(0);
        assert_eq!(carousel.current(0), 0);
        carousel.previous(0);
        assert_eq!(carousel.current(0), 0);
        carousel.select(0, 0);
        assert_eq!(carousel.current(0), 0);
    }

    #[test]
    fn test_shrinking_dataset_clamps_index() {
        let mut carousel = Carousel::default();
        carousel.select(4, 5);
        assert_eq!(carousel.current(2), 1);
        carousel.next(2);
        assert_eq!(carousel.current(2), 0);
    }

    #[test]
    fn test_single_slide_wraps_onto_itself() {
        let mut carousel = Carousel::default();
        carousel.next(1);
        assert_eq!(carousel.current(1), 0);
        carousel.previous(1);
        assert_eq!(carousel.current(1), 0);
    }
}
