//! Derives the big vertical caption from the active section.

use crate::sections::{style_for, ActiveSection, SectionStyle};

/// One rendering of the caption. `key` is fresh for every transition so the
/// enter animation replays even when a section comes back into focus.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelView {
    pub key: u64,
    pub text: &'static str,
    pub style: SectionStyle,
}

impl LabelView {
    fn for_active(key: u64, active: ActiveSection) -> Self {
        match active.section() {
            Some(id) => Self {
                key,
                text: id.label(),
                style: style_for(id),
            },
            None => Self {
                key,
                text: "",
                style: SectionStyle::default(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelTransition {
    pub exiting: LabelView,
    pub entering: LabelView,
}

#[derive(Debug)]
pub struct LabelPresenter {
    shown_for: ActiveSection,
    current: LabelView,
    generation: u64,
}

impl Default for LabelPresenter {
    fn default() -> Self {
        Self {
            shown_for: ActiveSection::Initial,
            current: LabelView::for_active(0, ActiveSection::Initial),
            generation: 0,
        }
    }
}

impl LabelPresenter {
    pub fn current(&self) -> &LabelView {
        &self.current
    }

    /// Moves the caption to `active`. Returns the exit/enter pair to animate,
    /// or `None` when the caption already shows that section.
    pub fn present(&mut self, active: ActiveSection) -> Option<LabelTransition> {
        if active == self.shown_for {
            return None;
        }
        self.generation += 1;
        let entering = LabelView::for_active(self.generation, active);
        let exiting = std::mem::replace(&mut self.current, entering.clone());
        self.shown_for = active;
        Some(LabelTransition { exiting, entering })
    }
}
