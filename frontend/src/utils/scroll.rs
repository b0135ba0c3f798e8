use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::NodeRef;

use crate::navigator::Scroller;

/// Smooth-scrolls the rendered section cards into view.
pub struct NodeRefScroller<'a> {
    cards: &'a [NodeRef],
}

impl<'a> NodeRefScroller<'a> {
    pub fn new(cards: &'a [NodeRef]) -> Self {
        Self { cards }
    }
}

impl Scroller for NodeRefScroller<'_> {
    fn scroll_to(&self, index: usize) {
        let Some(element) = self.cards.get(index).and_then(|card| card.cast::<Element>()) else {
            log::warn!("Section {} is not mounted, nothing to scroll to", index);
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
