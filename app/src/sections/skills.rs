use leptos::prelude::*;

use crate::catalog::SKILLS;

pub fn component() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 bg-black">
            <div class="px-4 mx-auto max-w-7xl sm:px-6 lg:px-8">
                <div class="mb-16 text-center">
                    <h2 class="mb-6 text-4xl font-bold text-white md:text-5xl">"Skills & Expertise"</h2>
                    <p class="mx-auto max-w-3xl text-xl text-gray-300">
                        "Tools I reach for across development, design and analysis"
                    </p>
                </div>
                <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                    {SKILLS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="p-6 bg-gray-900 rounded-xl border border-gray-800">
                                    <h3 class="mb-4 text-xl font-semibold text-white">{group.category}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {group
                                            .technologies
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class="py-1 px-3 text-sm text-blue-300 rounded-full border bg-blue-600/20 border-blue-500/30">
                                                        {*tech}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
