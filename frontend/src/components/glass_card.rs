use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::config::CARD_REVEAL_THRESHOLD;
use crate::utils::visibility::{
    ElementKey, IntersectionSource, IntersectionSubscription, VisibilitySource,
};

#[derive(Properties, PartialEq)]
pub struct GlassCardProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Frosted card that slides in the first time enough of it scrolls into view.
#[function_component(GlassCard)]
pub fn glass_card(props: &GlassCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let subscription: Rc<RefCell<Option<IntersectionSubscription>>> = Rc::default();
                let source = IntersectionSource::new(CARD_REVEAL_THRESHOLD, {
                    let revealed = revealed.clone();
                    let subscription = subscription.clone();
                    move |batch| {
                        if batch.iter().any(|entry| entry.entered(CARD_REVEAL_THRESHOLD)) {
                            revealed.set(true);
                            // Reveal once, then stop watching.
                            subscription.borrow_mut().take();
                        }
                    }
                });

                let source = match source {
                    Ok(source) => {
                        if let Some(element) = node.cast::<Element>() {
                            match source.subscribe(ElementKey(0), &element) {
                                Ok(handle) => *subscription.borrow_mut() = Some(handle),
                                Err(e) => {
                                    log::warn!("Card reveal disabled: {}", e);
                                    revealed.set(true);
                                }
                            }
                        }
                        Some(source)
                    }
                    Err(e) => {
                        log::warn!("Card reveal disabled: {}", e);
                        revealed.set(true);
                        None
                    }
                };

                move || {
                    subscription.borrow_mut().take();
                    drop(source);
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(
                "glass-card",
                if *revealed { "revealed" } else { "" },
                props.class.clone()
            )}
        >
            { for props.children.iter() }
        </div>
    }
}
