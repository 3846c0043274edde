use icondata::FiMapPin;
use leptos::prelude::*;

use crate::catalog::PERSONAL_INFO;
use crate::components::{background, icons};
use crate::scroll::scroll_to_anchor;

pub fn component() -> impl IntoView {
    view! {
        <section id="home" class="flex overflow-hidden relative justify-center items-center min-h-screen bg-black">
            {background::component()}
            <div class="relative z-10 px-4 mx-auto max-w-4xl text-center sm:px-6 lg:px-8">
                <p class="mb-4 text-lg text-blue-400">"Hello, I'm"</p>
                <h1 class="mb-6 text-5xl font-bold text-white md:text-7xl">{PERSONAL_INFO.name}</h1>
                <p class="mb-6 text-2xl text-gray-300 md:text-3xl">{PERSONAL_INFO.title}</p>
                <p class="flex gap-2 justify-center items-center mb-10 text-gray-400">
                    {icons::icon(FiMapPin, "size-4")}
                    {PERSONAL_INFO.location}
                </p>
                <div class="flex flex-col gap-4 justify-center mb-10 sm:flex-row">
                    <button
                        type="button"
                        class="py-3 px-8 font-semibold text-white bg-blue-600 rounded-lg transition-colors hover:bg-blue-700"
                        on:click=move |_| scroll_to_anchor("projects")
                    >
                        "View My Work"
                    </button>
                    <button
                        type="button"
                        class="py-3 px-8 font-semibold text-white rounded-lg border border-gray-600 transition-colors hover:border-blue-400"
                        on:click=move |_| scroll_to_anchor("contact")
                    >
                        "Get In Touch"
                    </button>
                </div>
                <div class="flex justify-center">{icons::component()}</div>
            </div>
        </section>
    }
}
