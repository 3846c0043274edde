use icondata::{FiMenu, FiX};
use leptos::{ev, prelude::*};

use crate::catalog::{NAV_LINKS, PERSONAL_INFO};
use crate::components::icons::icon;
use crate::scroll::{is_scrolled, scroll_offset, scroll_to_anchor};

/// Fixed navigation bar. Turns solid once the page has scrolled and collapses into a
/// toggle menu on small screens; the menu closes after every navigation.
pub fn component() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    Effect::new(move |_| {
        scrolled.set(is_scrolled(scroll_offset()));
        let handle = window_event_listener(ev::scroll, move |_| {
            scrolled.set(is_scrolled(scroll_offset()));
        });
        on_cleanup(move || handle.remove());
    });

    let navigate = move |anchor: &'static str| {
        move |ev: ev::MouseEvent| {
            ev.prevent_default();
            menu_open.set(false);
            scroll_to_anchor(anchor);
        }
    };

    let links = move |class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|&(anchor, label)| {
                view! {
                    <a href=format!("#{anchor}") class=class on:click=navigate(anchor)>
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header
            class="fixed top-0 right-0 left-0 z-50 transition-all duration-300"
            class=("bg-gray-900/95", move || scrolled.get() || menu_open.get())
            class=("backdrop-blur-md", move || scrolled.get() || menu_open.get())
            class=("shadow-lg", move || scrolled.get())
            class=("bg-transparent", move || !scrolled.get() && !menu_open.get())
        >
            <nav class="px-4 mx-auto max-w-7xl sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a
                        href="#"
                        class="text-xl font-bold text-white transition-colors hover:text-blue-400"
                        on:click=navigate("")
                    >
                        {PERSONAL_INFO.name}
                    </a>
                    <div class="hidden gap-8 items-center md:flex">
                        {links("text-gray-300 transition-colors duration-300 hover:text-blue-400")}
                    </div>
                    <button
                        type="button"
                        class="text-gray-300 md:hidden hover:text-white"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        <Show when=move || menu_open.get() fallback=|| icon(FiMenu, "size-6")>
                            {icon(FiX, "size-6")}
                        </Show>
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="flex flex-col gap-4 pt-2 pb-6 md:hidden">
                        {links("block py-1 text-gray-300 transition-colors hover:text-blue-400")}
                    </div>
                </Show>
            </nav>
        </header>
    }
}
