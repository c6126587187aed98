use leptos::prelude::*;

use super::icons::{Icon, ICON_CIRCLE};
use super::scroll_spy::TrackedSection;
use crate::portfolio::{About as AboutContent, Fact, Skill};

#[component]
pub fn About(section: TrackedSection, about: &'static AboutContent) -> impl IntoView {
    view! {
        <section id=section.id.to_string() node_ref=section.node_ref class="py-12 md:py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12 md:mb-16">
                    <h2 class="text-2xl md:text-3xl font-bold text-gray-900 mb-4">
                        {about.title.clone()}
                    </h2>
                    <p class="text-base md:text-xl text-gray-600">{about.subtitle.clone()}</p>
                </div>
                <div class="flex flex-col md:flex-row flex-wrap">
                    <div class="w-full md:w-1/2 mb-10 md:mb-0">
                        <h3 class="text-xl md:text-2xl font-bold text-gray-900 mb-6">"Biography"</h3>
                        <Biography facts=&about.biography />
                    </div>
                    <div class="w-full md:w-1/2 md:pl-10">
                        <h3 class="text-xl md:text-2xl font-bold text-gray-900 mb-6">"Skills"</h3>
                        <div class="space-y-4">
                            {about.skills.iter().map(|skill| view! { <SkillBar skill /> }).collect_view()}
                        </div>
                    </div>
                </div>
                <div class="flex flex-wrap mt-10">
                    <div class="w-full md:w-1/3 mb-6 md:mb-0">
                        <h3 class="text-xl md:text-2xl font-bold flex items-center gap-1 text-gray-900 mb-6">
                            "Education"
                        </h3>
                        <div class="space-y-4">
                            {about
                                .education
                                .iter()
                                .map(|e| {
                                    view! {
                                        <div>
                                            <span class="font-bold">{e.degree.clone()}</span>
                                            " "
                                            {format!("{} - {}", e.institution, e.year)}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="w-full md:w-1/3 mb-6 md:mb-0">
                        <h3 class="text-xl md:text-2xl font-bold flex items-center gap-1 text-gray-900 mb-6">
                            "Languages"
                        </h3>
                        <BulletList items=&about.languages />
                    </div>
                    <div class="w-full md:w-1/3">
                        <h3 class="text-xl md:text-2xl font-bold items-center flex gap-1 text-gray-900 mb-6">
                            "Qualifications"
                        </h3>
                        <BulletList items=&about.qualifications />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Biography(facts: &'static [Fact]) -> impl IntoView {
    view! {
        <table class="w-full text-sm md:text-lg">
            <tbody>
                {facts
                    .iter()
                    .map(|fact| {
                        view! {
                            <tr class="border-b border-gray-200">
                                <td class="py-3 font-semibold text-gray-700">{fact.label.clone()}</td>
                                <td class="py-3 text-gray-600">{fact.value.clone()}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between mb-1">
                <span class="text-sm md:text-base font-medium text-gray-700">{skill.name.clone()}</span>
                <span class="text-xs md:text-sm font-medium text-gray-600">
                    {format!("{}%", skill.level)}
                </span>
            </div>
            <div class="w-full bg-gray-200 rounded-full h-2.5">
                <div
                    class="bg-gray-600 h-2.5 rounded-full"
                    style=format!("width: {}%", skill.level)
                ></div>
            </div>
        </div>
    }
}

#[component]
fn BulletList(items: &'static [String]) -> impl IntoView {
    view! {
        <div class="space-y-4">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <div class="flex gap-1 items-center">
                            <Icon path=ICON_CIRCLE size="10" />
                            {item.clone()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
