//! Keeps track of which section card is in view.

use crate::sections::{ActiveSection, SectionId};
use crate::utils::visibility::{ElementKey, VisibilityEntry, VisibilityError, VisibilitySource};

struct Tracked<H> {
    key: ElementKey,
    section: SectionId,
    _subscription: H,
}

/// Sole owner of the active section. It only changes when a tracked element
/// crosses the threshold on its way into view.
pub struct SectionTracker<H> {
    threshold: f64,
    tracked: Vec<Tracked<H>>,
    active: ActiveSection,
}

impl<H> SectionTracker<H> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            tracked: Vec::new(),
            active: ActiveSection::Initial,
        }
    }

    pub fn active(&self) -> ActiveSection {
        self.active
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    /// Subscribes `target` and remembers it after every element tracked so far.
    pub fn track<S>(
        &mut self,
        source: &S,
        key: ElementKey,
        section: SectionId,
        target: &S::Target,
    ) -> Result<(), VisibilityError>
    where
        S: VisibilitySource<Handle = H>,
    {
        let subscription = source.subscribe(key, target)?;
        self.tracked.push(Tracked {
            key,
            section,
            _subscription: subscription,
        });
        Ok(())
    }

    /// Stops tracking an element. Returns false if it was not tracked.
    pub fn untrack(&mut self, key: ElementKey) -> bool {
        let before = self.tracked.len();
        self.tracked.retain(|tracked| tracked.key != key);
        self.tracked.len() != before
    }

    /// Drops every subscription.
    pub fn release(&mut self) {
        self.tracked.clear();
    }

    /// Applies one batch of visibility reports. Entries are processed in the
    /// order their elements were tracked, so the last entering section wins.
    /// Returns the new active section when it changed.
    pub fn apply_batch(&mut self, batch: &[VisibilityEntry]) -> Option<ActiveSection> {
        let mut entering: Vec<(usize, SectionId)> = batch
            .iter()
            .filter(|entry| entry.entered(self.threshold))
            .filter_map(|entry| {
                self.tracked
                    .iter()
                    .position(|tracked| tracked.key == entry.key)
                    .map(|order| (order, self.tracked[order].section))
            })
            .collect();
        entering.sort_by_key(|(order, _)| *order);

        let previous = self.active;
        for (_, section) in entering {
            self.active = ActiveSection::Section(section);
        }
        if self.active != previous {
            log::debug!("Active section is now {:?}", self.active);
            Some(self.active)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records who is subscribed; handles remove themselves on drop.
    #[derive(Default)]
    struct ManualSource {
        live: Rc<RefCell<Vec<ElementKey>>>,
    }

    struct ManualHandle {
        key: ElementKey,
        live: Rc<RefCell<Vec<ElementKey>>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.live.borrow_mut().retain(|key| *key != self.key);
        }
    }

    impl VisibilitySource for ManualSource {
        type Target = ();
        type Handle = ManualHandle;

        fn subscribe(&self, key: ElementKey, _target: &()) -> Result<ManualHandle, VisibilityError> {
            if self.live.borrow().contains(&key) {
                return Err(VisibilityError::AlreadyObserved(key));
            }
            self.live.borrow_mut().push(key);
            Ok(ManualHandle {
                key,
                live: self.live.clone(),
            })
        }
    }

    fn entering(key: usize) -> VisibilityEntry {
        VisibilityEntry {
            key: ElementKey(key),
            ratio: 0.75,
            is_intersecting: true,
        }
    }

    fn tracker_with_all_sections(source: &ManualSource) -> SectionTracker<ManualHandle> {
        let mut tracker = SectionTracker::new(0.5);
        for (index, id) in [SectionId::About, SectionId::Tech, SectionId::Project, SectionId::Contact]
            .into_iter()
            .enumerate()
        {
            tracker.track(source, ElementKey(index), id, &()).unwrap();
        }
        tracker
    }

    #[test]
    fn starts_with_nothing_active() {
        let source = ManualSource::default();
        let tracker = tracker_with_all_sections(&source);
        assert_eq!(tracker.active(), ActiveSection::Initial);
        assert_eq!(tracker.len(), 4);
    }

    #[test]
    fn entering_section_becomes_active() {
        let source = ManualSource::default();
        let mut tracker = tracker_with_all_sections(&source);
        let changed = tracker.apply_batch(&[entering(1)]);
        assert_eq!(changed, Some(ActiveSection::Section(SectionId::Tech)));
        assert_eq!(tracker.active(), ActiveSection::Section(SectionId::Tech));
    }

    #[test]
    fn last_entering_section_in_a_batch_wins() {
        let source = ManualSource::default();
        let mut tracker = tracker_with_all_sections(&source);
        tracker.apply_batch(&[entering(0), entering(1)]);
        assert_eq!(tracker.active(), ActiveSection::Section(SectionId::Tech));
    }

    #[test]
    fn batch_is_applied_in_registration_order() {
        let source = ManualSource::default();
        let mut tracker = tracker_with_all_sections(&source);
        // Delivered out of order, Project was registered after About.
        tracker.apply_batch(&[entering(2), entering(0)]);
        assert_eq!(tracker.active(), ActiveSection::Section(SectionId::Project));
    }

    #[test]
    fn leaving_or_below_threshold_does_not_change_active() {
        let source = ManualSource::default();
        let mut tracker = tracker_with_all_sections(&source);
        tracker.apply_batch(&[entering(0)]);
        let leaving = VisibilityEntry {
            key: ElementKey(0),
            ratio: 0.4,
            is_intersecting: false,
        };
        let peeking = VisibilityEntry {
            key: ElementKey(1),
            ratio: 0.3,
            is_intersecting: true,
        };
        assert_eq!(tracker.apply_batch(&[leaving, peeking]), None);
        assert_eq!(tracker.active(), ActiveSection::Section(SectionId::About));
    }

    #[test]
    fn re_entering_the_active_section_reports_no_change() {
        let source = ManualSource::default();
        let mut tracker = tracker_with_all_sections(&source);
        tracker.apply_batch(&[entering(3)]);
        assert_eq!(tracker.apply_batch(&[entering(3)]), None);
    }

    #[test]
    fn stale_callback_for_untracked_element_is_ignored() {
        let source = ManualSource::default();
        let mut tracker = tracker_with_all_sections(&source);
        tracker.apply_batch(&[entering(0)]);
        assert!(tracker.untrack(ElementKey(2)));
        assert!(!source.live.borrow().contains(&ElementKey(2)));

        assert_eq!(tracker.apply_batch(&[entering(2)]), None);
        assert_eq!(tracker.active(), ActiveSection::Section(SectionId::About));
    }

    #[test]
    fn untracking_unknown_element_is_a_no_op() {
        let source = ManualSource::default();
        let mut tracker = tracker_with_all_sections(&source);
        assert!(!tracker.untrack(ElementKey(42)));
        assert_eq!(tracker.len(), 4);
    }

    #[test]
    fn duplicate_subscription_is_rejected() {
        let source = ManualSource::default();
        let mut tracker = tracker_with_all_sections(&source);
        let result = tracker.track(&source, ElementKey(0), SectionId::About, &());
        assert!(matches!(result, Err(VisibilityError::AlreadyObserved(ElementKey(0)))));
        assert_eq!(tracker.len(), 4);
    }

    #[test]
    fn release_drops_every_subscription() {
        let source = ManualSource::default();
        let mut tracker = tracker_with_all_sections(&source);
        assert_eq!(source.live.borrow().len(), 4);
        tracker.release();
        assert!(source.live.borrow().is_empty());
        assert!(tracker.is_empty());
    }

    #[test]
    fn dropping_the_tracker_releases_subscriptions() {
        let source = ManualSource::default();
        let tracker = tracker_with_all_sections(&source);
        drop(tracker);
        assert!(source.live.borrow().is_empty());
    }
}
