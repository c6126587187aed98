use leptos::prelude::*;

use crate::sections::{SectionId, SectionSet};

#[component]
pub fn NavBar(name: String, sections: SectionSet, active: ReadSignal<SectionId>) -> impl IntoView {
    let links = sections
        .iter()
        .cloned()
        .map(|id| {
            let href = id.anchor();
            let label = id.to_string();
            let class = move || {
                if active.with(|a| *a == id) {
                    "cursor-pointer capitalize font-bold"
                } else {
                    "cursor-pointer capitalize text-gray-600"
                }
            };
            view! {
                <a href=href class=class>
                    {label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="mx-auto bg-slate-50 shadow-md border py-4 fixed w-full top-0 z-10">
            <div class="w-11/12 md:w-10/12 lg:w-8/12 mx-auto flex flex-col md:flex-row justify-between items-center">
                <div class="text-xl font-bold mb-4 md:mb-0">{name}</div>
                <div class="flex gap-4 items-center">{links}</div>
            </div>
        </nav>
    }
}
