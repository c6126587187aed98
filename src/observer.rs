use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::sections::{ActiveSectionTracker, ListenerId, SectionId, Threshold, VisibilityEntry};

/// Callback a host invokes with each batch of visibility changes.
pub type EntrySink = Arc<dyn Fn(Vec<VisibilityEntry>) + Send + Sync>;

pub type SharedTracker = Arc<Mutex<ActiveSectionTracker>>;

/// What the rendering environment has to provide for section tracking.
pub trait VisibilityHost {
    type Handle;

    /// Ids of the section elements currently in the document, in document order.
    fn section_ids(&self) -> Vec<String>;

    /// Starts observing one section. `None` means the host cannot observe
    /// visibility at all.
    fn observe(
        &mut self,
        section: &SectionId,
        threshold: Threshold,
        sink: EntrySink,
    ) -> Option<Self::Handle>;

    fn unobserve(&mut self, handle: Self::Handle);
}

fn lock(tracker: &Mutex<ActiveSectionTracker>) -> MutexGuard<'_, ActiveSectionTracker> {
    tracker.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mounted section tracker together with the host observations feeding it.
///
/// Dropping the spy releases every observation and unmounts the tracker, so a
/// batch delivered afterwards changes nothing.
pub struct ScrollSpy<H: VisibilityHost> {
    host: H,
    tracker: SharedTracker,
    handles: Vec<H::Handle>,
}

impl<H: VisibilityHost> ScrollSpy<H> {
    /// Mounts `tracker` and observes every tracked section present in the
    /// document. A tracker that is already mounted or unmounted gets no
    /// observations, since it would ignore every batch.
    pub fn mount(mut host: H, mut tracker: ActiveSectionTracker) -> Self {
        if !tracker.mount() {
            log::warn!("section tracker is {:?}, not observing any section", tracker.phase());
            return Self {
                host,
                tracker: Arc::new(Mutex::new(tracker)),
                handles: Vec::new(),
            };
        }
        let threshold = tracker.threshold();
        let sections: Vec<SectionId> = tracker.sections().iter().cloned().collect();
        let tracker = Arc::new(Mutex::new(tracker));

        let weak: Weak<Mutex<ActiveSectionTracker>> = Arc::downgrade(&tracker);
        let sink: EntrySink = Arc::new(move |entries| {
            let Some(tracker) = weak.upgrade() else {
                return;
            };
            // the guard is dropped here, listeners may use the tracker again
            let activation = lock(&tracker).record(&entries);
            if let Some(activation) = activation {
                activation.notify();
            }
        });

        let present = host.section_ids();
        let mut handles = Vec::with_capacity(sections.len());
        for section in &sections {
            if !present.iter().any(|id| section == id.as_str()) {
                log::warn!("section {section} is not in the document, not observing it");
                continue;
            }
            match host.observe(section, threshold, Arc::clone(&sink)) {
                Some(handle) => handles.push(handle),
                None => {
                    log::debug!("visibility observation unsupported, active section stays fixed");
                    break;
                }
            }
        }
        log::debug!("observing {} of {} sections", handles.len(), sections.len());

        Self {
            host,
            tracker,
            handles,
        }
    }

    pub fn tracker(&self) -> SharedTracker {
        Arc::clone(&self.tracker)
    }

    pub fn active(&self) -> SectionId {
        lock(&self.tracker).active().clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&SectionId) + Send + Sync + 'static) -> ListenerId {
        lock(&self.tracker).subscribe(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        lock(&self.tracker).unsubscribe(id)
    }

    pub fn observed(&self) -> usize {
        self.handles.len()
    }

    pub fn unmount(self) {
        drop(self)
    }

    fn release(&mut self) {
        for handle in self.handles.drain(..) {
            self.host.unobserve(handle);
        }
        lock(&self.tracker).unmount();
    }
}

impl<H: VisibilityHost> Drop for ScrollSpy<H> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{SectionSet, TrackerPhase};

    #[derive(Default)]
    struct Recorded {
        observed: Vec<(String, usize)>,
        released: Vec<usize>,
        // every sink ever handed out, kept past unobserve to force late events
        sinks: Vec<(String, EntrySink)>,
    }

    #[derive(Clone)]
    struct MockHost {
        present: Vec<String>,
        supported: bool,
        log: Arc<Mutex<Recorded>>,
    }

    impl MockHost {
        fn new(present: &[&str]) -> Self {
            Self {
                present: present.iter().map(|s| s.to_string()).collect(),
                supported: true,
                log: Arc::new(Mutex::new(Recorded::default())),
            }
        }

        fn unsupported(present: &[&str]) -> Self {
            Self {
                supported: false,
                ..Self::new(present)
            }
        }

        fn live(&self) -> Vec<String> {
            let log = self.log.lock().unwrap();
            log.observed
                .iter()
                .filter(|(_, h)| !log.released.contains(h))
                .map(|(id, _)| id.clone())
                .collect()
        }

        // delivers to the sink registered for `section`, whether or not it was released
        fn fire(&self, section: &str, entries: Vec<VisibilityEntry>) {
            let sink = {
                let log = self.log.lock().unwrap();
                log.sinks
                    .iter()
                    .find(|(id, _)| id == section)
                    .map(|(_, s)| Arc::clone(s))
            };
            if let Some(sink) = sink {
                sink(entries);
            }
        }

        fn cross(&self, section: &str) {
            self.fire(section, vec![VisibilityEntry::visible(section, 0.5)]);
        }
    }

    impl VisibilityHost for MockHost {
        type Handle = usize;

        fn section_ids(&self) -> Vec<String> {
            self.present.clone()
        }

        fn observe(
            &mut self,
            section: &SectionId,
            threshold: Threshold,
            sink: EntrySink,
        ) -> Option<usize> {
            assert_eq!(threshold.ratio(), 0.5);
            if !self.supported {
                return None;
            }
            let mut log = self.log.lock().unwrap();
            let handle = log.observed.len();
            log.observed.push((section.to_string(), handle));
            log.sinks.push((section.to_string(), sink));
            Some(handle)
        }

        fn unobserve(&mut self, handle: usize) {
            self.log.lock().unwrap().released.push(handle);
        }
    }

    const PAGE: [&str; 4] = ["home", "about", "experience", "contact"];

    fn tracker() -> ActiveSectionTracker {
        ActiveSectionTracker::new(SectionSet::new(PAGE).unwrap())
    }

    #[test]
    fn test_mount_observes_every_present_section() {
        let host = MockHost::new(&["home", "about", "", "experience", "", "contact"]);
        let spy = ScrollSpy::mount(host.clone(), tracker());
        assert_eq!(spy.observed(), 4);
        assert_eq!(host.live(), PAGE.to_vec());
        assert_eq!(spy.active(), "home");
        assert_eq!(spy.tracker().lock().unwrap().phase(), TrackerPhase::Mounted);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let host = MockHost::new(&["home", "contact"]);
        let spy = ScrollSpy::mount(host.clone(), tracker());
        assert_eq!(spy.observed(), 2);
        assert_eq!(host.live(), vec!["home", "contact"]);
    }

    #[test]
    fn test_page_scenario() {
        let host = MockHost::new(&PAGE);
        let spy = ScrollSpy::mount(host.clone(), tracker());
        let tracker = spy.tracker();

        host.cross("about");
        assert_eq!(spy.active(), "about");
        host.cross("contact");
        assert_eq!(spy.active(), "contact");

        spy.unmount();
        assert!(host.live().is_empty());

        host.cross("home");
        let tracker = tracker.lock().unwrap();
        assert_eq!(tracker.active(), &"contact");
        assert_eq!(tracker.phase(), TrackerPhase::Unmounted);
    }

    #[test]
    fn test_drop_releases_all_observations() {
        let host = MockHost::new(&PAGE);
        {
            let _spy = ScrollSpy::mount(host.clone(), tracker());
            assert_eq!(host.live().len(), 4);
        }
        assert!(host.live().is_empty());
        assert_eq!(host.log.lock().unwrap().released.len(), 4);
        // the tracker is gone, so a late event has nothing to update
        host.cross("about");
    }

    #[test]
    fn test_release_on_panic_path() {
        let host = MockHost::new(&PAGE);
        let inner = host.clone();
        let result = std::panic::catch_unwind(move || {
            let _spy = ScrollSpy::mount(inner, tracker());
            panic!("render failed");
        });
        assert!(result.is_err());
        assert!(host.live().is_empty());
    }

    #[test]
    fn test_unsupported_host_stays_on_default() {
        let host = MockHost::unsupported(&PAGE);
        let spy = ScrollSpy::mount(host.clone(), tracker());
        assert_eq!(spy.observed(), 0);
        host.cross("about");
        assert_eq!(spy.active(), "home");
    }

    #[test]
    fn test_listeners_see_changes_until_unmount() {
        let host = MockHost::new(&PAGE);
        let spy = ScrollSpy::mount(host.clone(), tracker());
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = Arc::clone(&seen);
        spy.subscribe(move |id| sink.lock().unwrap().push(id.to_string()));

        host.cross("experience");
        host.fire(
            "home",
            vec![
                VisibilityEntry::visible("contact", 0.8),
                VisibilityEntry::visible("home", 0.6),
            ],
        );
        spy.unmount();
        host.cross("about");

        assert_eq!(*seen.lock().unwrap(), vec!["experience", "home"]);
    }

    #[test]
    fn test_spent_tracker_gets_no_observations() {
        let host = MockHost::new(&PAGE);
        let mut spent = tracker();
        spent.mount();
        spent.unmount();
        let spy = ScrollSpy::mount(host.clone(), spent);
        assert_eq!(spy.observed(), 0);
        assert!(host.live().is_empty());
        host.cross("about");
        assert_eq!(spy.active(), "home");

        let mut mounted = tracker();
        mounted.mount();
        let spy = ScrollSpy::mount(host.clone(), mounted);
        assert_eq!(spy.observed(), 0);
        assert!(host.live().is_empty());
    }

    #[test]
    fn test_listener_can_read_and_resubscribe() {
        let host = MockHost::new(&PAGE);
        let spy = ScrollSpy::mount(host.clone(), tracker());
        let shared = spy.tracker();
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = Arc::clone(&seen);
        spy.subscribe(move |id| {
            let mut tracker = shared.try_lock().expect("tracker should be unlocked");
            assert_eq!(tracker.active(), id);
            let extra = tracker.subscribe(|_| {});
            assert!(tracker.unsubscribe(extra));
            sink.lock().unwrap().push(id.to_string());
        });

        host.cross("about");
        host.cross("contact");
        assert_eq!(*seen.lock().unwrap(), vec!["about", "contact"]);
        assert_eq!(spy.active(), "contact");
    }

    #[test]
    fn test_unsubscribe_through_spy() {
        let host = MockHost::new(&PAGE);
        let spy = ScrollSpy::mount(host.clone(), tracker());
        let id = spy.subscribe(|_| {});
        assert!(spy.unsubscribe(id));
        assert!(!spy.unsubscribe(id));
    }
}
