use leptos::prelude::*;

use super::icons::{Icon, ICON_MAIL, ICON_MAP_PIN, ICON_PHONE};
use super::scroll_spy::TrackedSection;
use crate::portfolio::Contact as ContactContent;

#[component]
pub fn Contact(section: TrackedSection, contact: &'static ContactContent) -> impl IntoView {
    view! {
        <section id=section.id.to_string() node_ref=section.node_ref class="py-12 md:py-20">
            <h2 class="text-2xl md:text-3xl font-bold text-center p-6">{contact.title.clone()}</h2>
            <div class="flex flex-col items-center space-y-6 px-6">
                <div class="flex items-center space-x-4">
                    <Icon path=ICON_PHONE size="22" />
                    <p class="text-sm md:text-lg">{contact.phone.clone()}</p>
                </div>
                <div class="flex items-center space-x-4">
                    <Icon path=ICON_MAIL size="22" />
                    <a href=contact.mailto() class="text-sm md:text-lg hover:underline">
                        {contact.email.clone()}
                    </a>
                </div>
                <div class="flex items-center space-x-4">
                    <Icon path=ICON_MAP_PIN size="22" />
                    <p class="text-sm md:text-lg">{contact.location.clone()}</p>
                </div>
            </div>
        </section>
    }
}
