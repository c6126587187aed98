use leptos::prelude::*;

use super::scroll_spy::TrackedSection;
use crate::portfolio::Hero as HeroContent;

#[component]
pub fn Hero(
    section: TrackedSection,
    name: String,
    hero: &'static HeroContent,
) -> impl IntoView {
    view! {
        <section
            id=section.id.to_string()
            node_ref=section.node_ref
            class="min-h-screen flex flex-col md:flex-row items-center relative py-8 md:py-0"
        >
            <div class="w-full md:w-1/2 flex flex-col gap-3 mb-8 md:mb-0">
                <div class="text-xl md:text-2xl">{hero.greeting.clone()}</div>
                <div class="text-3xl md:text-5xl font-mono font-bold">{name}</div>
                <div class="text-base md:text-xl">{hero.summary.clone()}</div>
                <div class="absolute top-[200px] start-[400px] bg-slate-500 w-[50px] h-[50px] rounded-full opacity-30 hidden md:block"></div>
                <div class="absolute bottom-[100px] bg-slate-500 w-[100px] h-[100px] rounded-full opacity-30 hidden md:block"></div>
            </div>
            <div class="w-full md:w-1/2">
                <div class="flex items-center w-full relative">
                    <img
                        src=hero.portrait.src.clone()
                        alt=hero.portrait.alt.clone()
                        class="w-[250px] h-[350px] md:w-[350px] md:h-[500px] mx-auto grayscale object-cover"
                    />
                    <div class="absolute bottom-[-20px] end-[40px] bg-slate-500 w-[80px] h-[80px] md:w-[120px] md:h-[120px] rounded-full opacity-30"></div>
                    <div class="absolute bottom-[-40px] end-[100px] bg-slate-700 w-[60px] h-[60px] md:w-[80px] md:h-[80px] rounded-full opacity-30"></div>
                </div>
            </div>
        </section>
    }
}
