use leptos::prelude::*;

use crate::portfolio::Projects as ProjectsContent;

// Neither block has an id, so neither is tracked by the navigation bar.

#[component]
pub fn Achievements(achievements: &'static [String]) -> impl IntoView {
    view! {
        <section>
            <div class="px-5 pb-12">
                <div class="text-2xl font-bold mb-5">"Key Achievements"</div>
                <ul class="list-disc">
                    {achievements.iter().map(|a| view! { <li>{a.clone()}</li> }).collect_view()}
                </ul>
            </div>
        </section>
    }
}

#[component]
pub fn Projects(projects: &'static ProjectsContent) -> impl IntoView {
    view! {
        <section>
            <div class="px-5">
                <div class="text-2xl font-bold mb-5">"Projects"</div>
                <ul class="list-decimal">
                    {projects
                        .items
                        .iter()
                        .map(|p| {
                            view! {
                                <li>
                                    <div class="text-xl font-bold">{p.name.clone()}</div>
                                    {format!("Role: {}", p.role)}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="flex gap-3 mt-4">
                    {projects
                        .images
                        .iter()
                        .map(|img| view! { <img src=img.src.clone() alt=img.alt.clone() /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
