use leptos::prelude::*;

use super::icons::{Icon, ICON_BRIEFCASE};
use super::scroll_spy::TrackedSection;
use crate::portfolio::{Experience as ExperienceContent, Role};

#[component]
pub fn Experience(
    section: TrackedSection,
    experience: &'static ExperienceContent,
) -> impl IntoView {
    view! {
        <section id=section.id.to_string() node_ref=section.node_ref class="py-12 md:py-20">
            <h2 class="text-2xl md:text-3xl font-bold text-center p-6">{experience.title.clone()}</h2>
            <div class="px-6">
                <div class="md:flex justify-center gap-10 mb-8">
                    {experience
                        .images
                        .iter()
                        .map(|img| {
                            view! { <img src=img.src.clone() alt=img.alt.clone() class="md:mb-0 mb-5" /> }
                        })
                        .collect_view()}
                </div>
                <div class="relative border-l border-gray-200 ml-3">
                    {experience.roles.iter().map(|role| view! { <TimelineItem role /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(role: &'static Role) -> impl IntoView {
    view! {
        <div class="mb-10 ml-6">
            <span class="absolute flex items-center justify-center w-6 h-6 bg-blue-100 rounded-full -left-3 ring-8 ring-white">
                <Icon path=ICON_BRIEFCASE size="16" />
            </span>
            <div class="p-4 bg-white rounded-lg border border-gray-200 shadow-sm">
                <h3 class="text-lg md:text-xl font-bold">{role.title.clone()}</h3>
                <p class="text-sm md:text-base text-gray-500">{role.company.clone()}</p>
                <p class="text-xs md:text-sm text-gray-500">
                    {format!("{} | {}", role.period, role.location)}
                </p>
                <ul class="mt-4 list-disc list-inside space-y-2 text-sm md:text-base">
                    {role.highlights.iter().map(|h| view! { <li>{h.clone()}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
