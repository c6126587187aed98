use std::sync::Arc;

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::observer::{EntrySink, ScrollSpy, VisibilityHost};
use crate::sections::{ActiveSectionTracker, SectionId, SectionSet, Threshold, VisibilityEntry};

/// A section the navigation bar links to: its id and the element rendering it.
#[derive(Clone)]
pub struct TrackedSection {
    pub id: SectionId,
    pub node_ref: NodeRef<html::Section>,
}

/// One node ref per tracked section, handed to the section components.
#[derive(Clone)]
pub struct SectionRefs {
    sections: Vec<TrackedSection>,
}

impl SectionRefs {
    pub fn new(sections: &SectionSet) -> Self {
        Self {
            sections: sections
                .iter()
                .map(|id| TrackedSection {
                    id: id.clone(),
                    node_ref: NodeRef::new(),
                })
                .collect(),
        }
    }

    pub fn section(&self, id: &str) -> Option<TrackedSection> {
        self.sections.iter().find(|s| s.id == id).cloned()
    }

    /// Ids of the tracked sections whose elements are rendered, read back from
    /// the elements themselves.
    pub fn present(&self) -> Vec<String> {
        self.sections
            .iter()
            .filter_map(|s| s.node_ref.get_untracked())
            .map(|el| el.id())
            .filter(|id| !id.is_empty())
            .collect()
    }
}

pub struct BrowserHost {
    refs: SectionRefs,
}

impl BrowserHost {
    pub fn new(refs: SectionRefs) -> Self {
        Self { refs }
    }
}

impl VisibilityHost for BrowserHost {
    type Handle = Arc<dyn Fn() + Send + Sync>;

    fn section_ids(&self) -> Vec<String> {
        self.refs.present()
    }

    fn observe(
        &mut self,
        section: &SectionId,
        threshold: Threshold,
        sink: EntrySink,
    ) -> Option<Self::Handle> {
        let target = self.refs.section(section.as_str())?.node_ref;
        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            target,
            move |entries, _| {
                sink(
                    entries
                        .into_iter()
                        .map(|entry| {
                            VisibilityEntry::new(
                                entry.target().id(),
                                entry.is_intersecting(),
                                entry.intersection_ratio(),
                            )
                        })
                        .collect(),
                )
            },
            UseIntersectionObserverOptions::default().thresholds(vec![threshold.ratio()]),
        );
        Some(Arc::new(stop))
    }

    fn unobserve(&mut self, handle: Self::Handle) {
        handle();
    }
}

/// Tracks the section in view for as long as the calling component is mounted.
///
/// Observation starts once the sections are in the document; until then, and
/// in browsers without IntersectionObserver, the first section stays active.
pub fn use_active_section(sections: SectionSet, refs: SectionRefs) -> ReadSignal<SectionId> {
    let tracker = ActiveSectionTracker::new(sections);
    let (active, set_active) = signal(tracker.active().clone());

    let mut pending = Some((tracker, refs));
    Effect::new(move |_| {
        let Some((tracker, refs)) = pending.take() else {
            return;
        };
        let spy = ScrollSpy::mount(BrowserHost::new(refs), tracker);
        spy.subscribe(move |id| set_active.set(id.clone()));
        on_cleanup(move || spy.unmount());
    });

    active
}
