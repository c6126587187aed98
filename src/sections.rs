use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fraction of a section's area that must be on screen for it to become active.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SectionError {
    #[error("Section id must not be empty")]
    EmptyId,
    #[error("Section id {0:?} contains whitespace")]
    InvalidId(String),
    #[error("Duplicate section id: {0}")]
    Duplicate(String),
    #[error("At least one section is required")]
    NoSections,
    #[error("Visibility threshold {0} is outside (0, 1]")]
    InvalidThreshold(f64),
}

/// Identifier of a page section, usable as an HTML `id` and `#anchor`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Result<Self, SectionError> {
        let id = id.into();
        if id.is_empty() {
            return Err(SectionError::EmptyId);
        }
        if id.chars().any(char::is_whitespace) {
            return Err(SectionError::InvalidId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self.0)
    }
}

impl TryFrom<String> for SectionId {
    type Error = SectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SectionId> for String {
    fn from(value: SectionId) -> Self {
        value.0
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, non-empty, duplicate-free list of sections in document order.
///
/// The first section is the default active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSet {
    ids: Vec<SectionId>,
}

impl SectionSet {
    pub fn new<I, S>(ids: I) -> Result<Self, SectionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<SectionId> = Vec::new();
        for id in ids {
            let id = SectionId::new(id)?;
            if out.contains(&id) {
                return Err(SectionError::Duplicate(id.0));
            }
            out.push(id);
        }
        if out.is_empty() {
            return Err(SectionError::NoSections);
        }
        Ok(Self { ids: out })
    }

    pub fn default_section(&self) -> &SectionId {
        // non-empty by construction
        &self.ids[0]
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|s| s == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&SectionId> {
        self.ids.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SectionId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<'a> IntoIterator for &'a SectionSet {
    type Item = &'a SectionId;
    type IntoIter = std::slice::Iter<'a, SectionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(ratio: f64) -> Result<Self, SectionError> {
        if ratio > 0.0 && ratio <= 1.0 {
            Ok(Self(ratio))
        } else {
            Err(SectionError::InvalidThreshold(ratio))
        }
    }

    pub fn ratio(self) -> f64 {
        self.0
    }

    pub fn is_met(self, ratio: f64) -> bool {
        ratio >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

/// One visibility observation for a section element, as reported by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry {
    pub target: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl VisibilityEntry {
    pub fn new(target: impl Into<String>, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            target: target.into(),
            is_intersecting,
            ratio,
        }
    }

    pub fn visible(target: impl Into<String>, ratio: f64) -> Self {
        Self::new(target, true, ratio)
    }

    pub fn hidden(target: impl Into<String>) -> Self {
        Self::new(target, false, 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerPhase {
    Idle,
    Mounted,
    Unmounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Listener = Arc<dyn Fn(&SectionId) + Send + Sync>;

/// A change of active section, with the listeners to tell about it.
///
/// Notify after releasing any lock held on the tracker, so listeners are free
/// to read it or change their subscriptions.
#[must_use]
pub struct Activation {
    section: SectionId,
    listeners: Vec<Listener>,
}

impl Activation {
    pub fn section(&self) -> &SectionId {
        &self.section
    }

    pub fn notify(self) -> SectionId {
        for listener in &self.listeners {
            listener(&self.section);
        }
        self.section
    }
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activation")
            .field("section", &self.section)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Tracks which section is currently in view.
///
/// Only batches delivered while mounted can move the active section, and only
/// entries for known sections that intersect at or above the threshold count.
/// When several entries in one batch qualify, the topmost section wins.
pub struct ActiveSectionTracker {
    sections: SectionSet,
    threshold: Threshold,
    active: usize,
    phase: TrackerPhase,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl ActiveSectionTracker {
    pub fn new(sections: SectionSet) -> Self {
        Self::with_threshold(sections, Threshold::default())
    }

    pub fn with_threshold(sections: SectionSet, threshold: Threshold) -> Self {
        Self {
            sections,
            threshold,
            active: 0,
            phase: TrackerPhase::Idle,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn sections(&self) -> &SectionSet {
        &self.sections
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn phase(&self) -> TrackerPhase {
        self.phase
    }

    pub fn active(&self) -> &SectionId {
        &self.sections.ids[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == id
    }

    /// Starts accepting visibility batches. Returns false if the tracker was
    /// already mounted or has been unmounted.
    pub fn mount(&mut self) -> bool {
        if self.phase != TrackerPhase::Idle {
            log::warn!("section tracker cannot mount from {:?}", self.phase);
            return false;
        }
        self.phase = TrackerPhase::Mounted;
        log::debug!("section tracker mounted on {} sections", self.sections.len());
        true
    }

    /// Stops accepting batches and drops every listener. Final.
    pub fn unmount(&mut self) {
        if self.phase == TrackerPhase::Unmounted {
            return;
        }
        self.phase = TrackerPhase::Unmounted;
        self.listeners.clear();
        log::debug!("section tracker unmounted, last active: {}", self.active());
    }

    /// Applies one batch of observations. Returns the activation to notify if
    /// the active section changed.
    pub fn record(&mut self, entries: &[VisibilityEntry]) -> Option<Activation> {
        if self.phase != TrackerPhase::Mounted {
            log::debug!(
                "ignoring {} visibility entries while {:?}",
                entries.len(),
                self.phase
            );
            return None;
        }

        let topmost = entries
            .iter()
            .filter(|e| e.is_intersecting && self.threshold.is_met(e.ratio))
            .filter_map(|e| {
                let pos = self.sections.position(&e.target);
                if pos.is_none() {
                    log::debug!("ignoring visibility entry for untracked target {:?}", e.target);
                }
                pos
            })
            .min()?;

        if topmost == self.active {
            return None;
        }
        self.active = topmost;
        let section = self.sections.ids[topmost].clone();
        log::debug!("active section is now {section}");
        Some(Activation {
            section,
            listeners: self.listeners.iter().map(|(_, l)| Arc::clone(l)).collect(),
        })
    }

    pub fn subscribe(&mut self, listener: impl Fn(&SectionId) + Send + Sync + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for ActiveSectionTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveSectionTracker")
            .field("sections", &self.sections)
            .field("threshold", &self.threshold)
            .field("active", self.active())
            .field("phase", &self.phase)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
