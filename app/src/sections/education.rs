use icondata::{FiAward, FiBookOpen, FiCalendar};
use leptos::prelude::*;

use crate::catalog::{ACHIEVEMENTS, EDUCATION};
use crate::components::icons::icon;

pub fn component() -> impl IntoView {
    view! {
        <section id="education" class="py-20 bg-gray-900">
            <div class="px-4 mx-auto max-w-7xl sm:px-6 lg:px-8">
                <div class="mb-16 text-center">
                    <h2 class="mb-6 text-4xl font-bold text-white md:text-5xl">"Education & Qualifications"</h2>
                    <p class="mx-auto max-w-3xl text-xl text-gray-300">
                        "Continuous learning in technology and business"
                    </p>
                </div>
                <ol class="relative mb-20 space-y-8 border-l-2 border-blue-500/40">
                    {EDUCATION
                        .iter()
                        .map(|entry| {
                            view! {
                                <li class="pl-8">
                                    <div class="flex flex-col gap-2 p-6 bg-gray-800 rounded-xl border border-gray-700">
                                        <div class="flex flex-wrap gap-3 justify-between items-start">
                                            <h3 class="flex gap-2 items-center text-xl font-semibold text-white">
                                                <span class="text-blue-400">{icon(FiBookOpen, "size-5")}</span>
                                                {entry.degree}
                                            </h3>
                                            <span class=format!(
                                                "py-1 px-3 text-xs font-medium rounded-full border {}",
                                                entry.status.badge_class(),
                                            )>{entry.status.label()}</span>
                                        </div>
                                        <p class="text-gray-300">{entry.institution}</p>
                                        <p class="flex gap-2 items-center text-sm text-gray-400">
                                            {icon(FiCalendar, "size-4")}
                                            {entry.period}
                                        </p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
                <h3 class="mb-12 text-2xl font-bold text-center text-white">"Achievements"</h3>
                <div class="grid gap-6 md:grid-cols-3">
                    {ACHIEVEMENTS
                        .iter()
                        .map(|achievement| {
                            view! {
                                <div class="p-6 bg-gray-800 rounded-xl border border-gray-700">
                                    <div class="flex gap-3 items-center mb-3 text-yellow-500">
                                        {icon(FiAward, "size-5")}
                                        <h4 class="font-semibold text-white">{achievement.title}</h4>
                                    </div>
                                    <p class="text-sm text-gray-400">{achievement.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
