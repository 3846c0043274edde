//! Project showcase with category filters.
//!
//! Projects are fetched on mount and again on every filter change. The featured strip
//! only appears under `All`; the grid always shows the active dataset narrowed to the
//! selected category.

use icondata::{FiExternalLink, FiGithub};
use leptos::{prelude::*, task::spawn_local};
use portfolio_api::types::{Project, ProjectCategory};

use crate::api::{list_projects, messages, user_message};
use crate::catalog;
use crate::components::icons::icon;
use crate::components::{loader, notice};
use crate::display::tech_chips;
use crate::fallback::SectionState;

const GRID_CHIPS: usize = 3;

/// Projects from `items` that pass `category`.
#[must_use]
pub fn visible_projects(items: &[Project], category: ProjectCategory) -> Vec<Project> {
    items
        .iter()
        .filter(|project| category.matches(&project.category))
        .cloned()
        .collect()
}

/// The featured strip: featured projects of the active dataset, shown only under `All`.
#[must_use]
pub fn featured_projects(items: &[Project], category: ProjectCategory) -> Vec<Project> {
    if category != ProjectCategory::All {
        return Vec::new();
    }
    items.iter().filter(|project| project.featured).cloned().collect()
}

fn project_links(github: Option<String>, live: Option<String>) -> impl IntoView {
    view! {
        <div class="flex gap-4 items-center">
            {github
                .map(|href| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer" aria-label="Source code"
                            class="flex gap-1 items-center text-sm text-gray-400 transition-colors hover:text-white">
                            {icon(FiGithub, "size-4")}
                            "Code"
                        </a>
                    }
                })}
            {live
                .map(|href| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer" aria-label="Live demo"
                            class="flex gap-1 items-center text-sm text-gray-400 transition-colors hover:text-white">
                            {icon(FiExternalLink, "size-4")}
                            "Live"
                        </a>
                    }
                })}
        </div>
    }
}

fn featured_card(project: Project) -> impl IntoView {
    let links = project_links(project.github_url.clone(), project.live_url.clone());
    view! {
        <article class="overflow-hidden bg-gray-800 rounded-xl border border-gray-700 lg:flex">
            {project
                .image
                .map(|src| {
                    view! { <img src=src alt="" loading="lazy" class="object-cover w-full h-56 lg:w-1/2 lg:h-auto"/> }
                })}
            <div class="flex flex-col gap-4 p-8">
                <span class="text-xs font-semibold tracking-wider text-blue-400 uppercase">"Featured"</span>
                <h3 class="text-2xl font-bold text-white">{project.title}</h3>
                <p class="text-gray-300">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .into_iter()
                        .map(|tech| {
                            view! { <span class="py-1 px-3 text-xs text-blue-300 rounded-full bg-blue-600/20">{tech}</span> }
                        })
                        .collect_view()}
                </div>
                {links}
            </div>
        </article>
    }
}

fn grid_card(project: Project) -> impl IntoView {
    let links = project_links(project.github_url.clone(), project.live_url.clone());
    let (shown, hidden) = tech_chips(&project.technologies, GRID_CHIPS);
    let chips = shown
        .iter()
        .map(|tech| {
            view! { <span class="py-1 px-2 text-xs text-gray-300 bg-gray-700 rounded">{tech.clone()}</span> }
        })
        .collect_view();

    view! {
        <article class="flex overflow-hidden flex-col bg-gray-900 rounded-xl border border-gray-800 transition-colors hover:border-blue-500/50">
            {project
                .image
                .map(|src| view! { <img src=src alt="" loading="lazy" class="object-cover w-full h-44"/> })}
            <div class="flex flex-col flex-1 gap-3 p-6">
                <span class="text-xs text-blue-400">{project.category}</span>
                <h3 class="text-lg font-semibold text-white">{project.title}</h3>
                <p class="flex-1 text-sm text-gray-400 line-clamp-3">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {chips}
                    {(hidden > 0)
                        .then(|| {
                            view! { <span class="py-1 px-2 text-xs text-gray-400 bg-gray-800 rounded">{format!("+{hidden}")}</span> }
                        })}
                </div>
                {links}
            </div>
        </article>
    }
}

pub fn component() -> impl IntoView {
    let category = RwSignal::new(ProjectCategory::All);
    let state = RwSignal::new(SectionState::with_catalog(catalog::projects()));

    Effect::new(move |_| {
        let category = category.get();
        let Some(ticket) = state.try_update(SectionState::begin) else {
            return;
        };
        spawn_local(async move {
            let outcome = list_projects(category)
                .await
                .map_err(|e| user_message(&e, messages::PROJECTS));
            state.update(|state| {
                if !state.settle(ticket, outcome, || catalog::projects_for(category)) {
                    leptos::logging::log!("Discarded superseded project response for {category}");
                }
            });
        });
    });

    let featured = move || state.with(|s| featured_projects(s.items(), category.get()));
    let visible = move || state.with(|s| visible_projects(s.items(), category.get()));

    view! {
        <section id="projects" class="py-20 bg-black">
            <div class="px-4 mx-auto max-w-7xl sm:px-6 lg:px-8">
                <div class="mb-12 text-center">
                    <h2 class="mb-6 text-4xl font-bold text-white md:text-5xl">"Featured Projects"</h2>
                    <p class="mx-auto max-w-3xl text-xl text-gray-300">
                        "A selection of work across the stack"
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
                <div class="flex flex-wrap gap-3 justify-center mb-12">
                    {ProjectCategory::ALL
                        .iter()
                        .map(|&option| {
                            view! {
                                <button
                                    type="button"
                                    class="py-2 px-4 text-sm rounded-full border transition-colors"
                                    class=("bg-blue-600", move || category.get() == option)
                                    class=("border-blue-600", move || category.get() == option)
                                    class=("text-white", move || category.get() == option)
                                    class=("text-gray-300", move || category.get() != option)
                                    class=("border-gray-700", move || category.get() != option)
                                    on:click=move |_| category.set(option)
                                >
                                    {option.as_str()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <Show when=move || state.with(SectionState::is_loading)>
                    {loader::component("Loading projects...")}
                </Show>
                <div class="grid gap-8 mb-16">
                    {move || featured().into_iter().map(featured_card).collect_view()}
                </div>
                <Show
                    when=move || !visible().is_empty()
                    fallback=|| view! { <p class="text-center text-gray-400">"No projects in this category yet."</p> }
                >
                    <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                        {move || visible().into_iter().map(grid_card).collect_view()}
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: ProjectCategory, featured: bool) -> Project {
        Project {
            id: id.to_owned(),
            title: format!("Project {id}"),
            category: category.as_str().to_owned(),
            featured,
            ..Project::default()
        }
    }

    fn dataset() -> Vec<Project> {
        vec![
            project("1", ProjectCategory::FullStack, true),
            project("2", ProjectCategory::Frontend, false),
            project("3", ProjectCategory::Frontend, true),
            project("4", ProjectCategory::DataAnalysis, false),
        ]
    }

    #[test]
    fn test_every_filter_shows_exact_subset() {
        let items = dataset();
        for &category in ProjectCategory::ALL {
            let visible = visible_projects(&items, category);
            let expected: Vec<_> = items
                .iter()
                .filter(|p| category == ProjectCategory::All || p.category == category.as_str())
                .cloned()
                .collect();
            assert_eq!(visible, expected, "filter {category}");
        }
    }

    #[test]
    fn test_empty_category_shows_nothing() {
        assert!(visible_projects(&dataset(), ProjectCategory::WebApplication).is_empty());
    }

    #[test]
    fn test_featured_only_under_all() {
        let items = dataset();
        let featured = featured_projects(&items, ProjectCategory::All);
        assert_eq!(
            featured.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            ["1", "3"]
        );
        assert!(featured_projects(&items, ProjectCategory::Frontend).is_empty());
    }

    #[test]
    fn test_unknown_backend_category_only_under_all() {
        let items = vec![Project {
            category: "Embedded".to_owned(),
            ..Project::default()
        }];
        assert_eq!(visible_projects(&items, ProjectCategory::All).len(), 1);
        assert!(visible_projects(&items, ProjectCategory::FullStack).is_empty());
    }
}
