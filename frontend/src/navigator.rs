use crate::sections::ActiveSection;

/// Something that can bring the card at a page position into view.
pub trait Scroller {
    fn scroll_to(&self, index: usize);
}

/// Turns "go to section i" and "go to the next section" into scroll commands.
/// It never touches the active section itself; the tracker picks up the
/// resulting visibility change.
pub struct SectionNavigator<'a, S> {
    scroller: &'a S,
    count: usize,
}

impl<'a, S: Scroller> SectionNavigator<'a, S> {
    pub fn new(scroller: &'a S, count: usize) -> Self {
        Self { scroller, count }
    }

    /// Scrolls to `index` if it names a section. Returns the position scrolled to.
    pub fn go_to(&self, index: isize) -> Option<usize> {
        let index = usize::try_from(index).ok().filter(|index| *index < self.count)?;
        log::debug!("Scrolling to section {}", index);
        self.scroller.scroll_to(index);
        Some(index)
    }

    /// Scrolls to the section after `active`. From the initial state that is the first one.
    pub fn go_to_next(&self, active: ActiveSection) -> Option<usize> {
        self.go_to(active.position() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{SectionId, SECTIONS};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingScroller {
        scrolled: RefCell<Vec<usize>>,
    }

    impl Scroller for RecordingScroller {
        fn scroll_to(&self, index: usize) {
            self.scrolled.borrow_mut().push(index);
        }
    }

    #[test]
    fn go_to_valid_index_scrolls_there() {
        let scroller = RecordingScroller::default();
        let navigator = SectionNavigator::new(&scroller, SECTIONS.len());
        for index in 0..SECTIONS.len() {
            assert_eq!(navigator.go_to(index as isize), Some(index));
        }
        assert_eq!(*scroller.scrolled.borrow(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn go_to_out_of_range_does_nothing() {
        let scroller = RecordingScroller::default();
        let navigator = SectionNavigator::new(&scroller, SECTIONS.len());
        assert_eq!(navigator.go_to(-1), None);
        assert_eq!(navigator.go_to(4), None);
        assert_eq!(navigator.go_to(isize::MAX), None);
        assert!(scroller.scrolled.borrow().is_empty());
    }

    #[test]
    fn next_from_initial_state_targets_first_section() {
        let scroller = RecordingScroller::default();
        let navigator = SectionNavigator::new(&scroller, SECTIONS.len());
        assert_eq!(navigator.go_to_next(ActiveSection::Initial), Some(0));
    }

    #[test]
    fn next_advances_one_section() {
        let scroller = RecordingScroller::default();
        let navigator = SectionNavigator::new(&scroller, SECTIONS.len());
        assert_eq!(
            navigator.go_to_next(ActiveSection::Section(SectionId::Tech)),
            Some(2)
        );
    }

    #[test]
    fn next_from_last_section_is_a_no_op() {
        let scroller = RecordingScroller::default();
        let navigator = SectionNavigator::new(&scroller, SECTIONS.len());
        assert_eq!(
            navigator.go_to_next(ActiveSection::Section(SectionId::Contact)),
            None
        );
        assert!(scroller.scrolled.borrow().is_empty());
    }

    #[test]
    fn empty_page_never_scrolls() {
        let scroller = RecordingScroller::default();
        let navigator = SectionNavigator::new(&scroller, 0);
        assert_eq!(navigator.go_to(0), None);
        assert_eq!(navigator.go_to_next(ActiveSection::Initial), None);
    }
}
