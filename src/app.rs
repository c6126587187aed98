mod about;
mod contact;
mod experience;
mod hero;
mod highlights;
mod icons;
mod nav;
pub mod scroll_spy;

use leptos::{either::*, prelude::*};
use leptos_meta::*;

use crate::portfolio::{portfolio, ContentError, Portfolio};
use crate::sections::SectionSet;

use about::About;
use contact::Contact;
use experience::Experience;
use hero::Hero;
use highlights::{Achievements, Projects};
use nav::NavBar;
use scroll_spy::{use_active_section, SectionRefs};

pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const EXPERIENCE: &str = "experience";
pub const CONTACT: &str = "contact";

/// Sections linked from the navigation bar, in page order.
pub const NAV_SECTIONS: [&str; 4] = [HOME, ABOUT, EXPERIENCE, CONTACT];

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    match portfolio() {
        Ok(portfolio) => Either::Left(view! { <PortfolioPage portfolio /> }),
        Err(err) => {
            log::error!("{err}");
            Either::Right(view! { <ContentErrorPanel err /> })
        }
    }
}

#[component]
fn PortfolioPage(portfolio: &'static Portfolio) -> impl IntoView {
    let sections = SectionSet::new(NAV_SECTIONS).expect("navigation section ids should be valid");
    let refs = SectionRefs::new(&sections);
    let tracked = |id: &str| refs.section(id).expect("every navigation section has a ref");
    let (home, about, experience, contact) = (
        tracked(HOME),
        tracked(ABOUT),
        tracked(EXPERIENCE),
        tracked(CONTACT),
    );
    let active = use_active_section(sections.clone(), refs.clone());

    view! {
        <Title text=portfolio.name.clone() />
        <div>
            <NavBar name=portfolio.name.clone() sections active />
            <div class="w-11/12 md:w-10/12 lg:w-8/12 mx-auto pt-24 md:pt-16">
                <Hero section=home name=portfolio.name.clone() hero=&portfolio.hero />
                <About section=about about=&portfolio.about />
                <Experience section=experience experience=&portfolio.experience />
                <Achievements achievements=&portfolio.achievements />
                <Projects projects=&portfolio.projects />
                <Contact section=contact contact=&portfolio.contact />
            </div>
        </div>
    }
}

#[component]
fn ContentErrorPanel(err: ContentError) -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <div class="w-11/12 md:w-8/12 mx-auto mt-24 p-4 rounded-md border border-red-300 bg-red-50">
            <h1 class="font-bold text-xl mb-2">"This page couldn't be loaded"</h1>
            <pre class="whitespace-pre-wrap text-sm text-red-700">{err.to_string()}</pre>
        </div>
    }
}
