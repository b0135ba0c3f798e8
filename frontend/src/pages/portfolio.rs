use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::components::active_label::ActiveLabel;
use crate::components::background::{BackgroundVideo, TitleMarquee};
use crate::components::contact_form::ContactForm;
use crate::components::glass_card::GlassCard;
use crate::components::nav_bar::NavBar;
use crate::components::next_button::NextButton;
use crate::config::VISIBILITY_THRESHOLD;
use crate::navigator::SectionNavigator;
use crate::sections::{ActiveSection, SectionId, SECTIONS};
use crate::tracker::SectionTracker;
use crate::utils::scroll::NodeRefScroller;
use crate::utils::visibility::{ElementKey, IntersectionSource};

fn section_content(id: SectionId) -> Html {
    match id {
        SectionId::About => html! {
            <>
                <h2 class="card-title">{"About"}</h2>
                <p>{"Front-end developer building fast, animated interfaces for the web."}</p>
            </>
        },
        SectionId::Tech => html! {
            <>
                <h2 class="card-title">{"Tech"}</h2>
                <ul class="tech-list">
                    <li>{"Rust & WebAssembly"}</li>
                    <li>{"TypeScript & React"}</li>
                    <li>{"CSS animation"}</li>
                </ul>
            </>
        },
        SectionId::Project => html! {
            <>
                <h2 class="card-title">{"Projects"}</h2>
                <p>{"A selection of recent work lives here."}</p>
            </>
        },
        SectionId::Contact => html! {
            <>
                <h2 class="card-title">{"Contact"}</h2>
                <ContactForm />
            </>
        },
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let active = use_state(|| ActiveSection::Initial);
    let card_refs = use_memo(
        |_| SECTIONS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(),
        (),
    );

    // Watch every card and let the tracker decide which section is active.
    {
        let active = active.clone();
        let card_refs = card_refs.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = Rc::new(RefCell::new(SectionTracker::new(VISIBILITY_THRESHOLD)));
                let source = IntersectionSource::new(VISIBILITY_THRESHOLD, {
                    let tracker = tracker.clone();
                    move |batch| {
                        if let Some(next) = tracker.borrow_mut().apply_batch(&batch) {
                            active.set(next);
                        }
                    }
                });

                let source = match source {
                    Ok(source) => {
                        let mut tracker = tracker.borrow_mut();
                        for (index, (section, card)) in SECTIONS.iter().zip(card_refs.iter()).enumerate() {
                            let Some(element) = card.cast::<Element>() else {
                                continue;
                            };
                            if let Err(e) = tracker.track(&source, ElementKey(index), section.id, &element) {
                                log::warn!("Not tracking section {}: {}", section.id.label(), e);
                            }
                        }
                        Some(source)
                    }
                    Err(e) => {
                        log::warn!("Active section tracking disabled: {}", e);
                        None
                    }
                };

                move || {
                    tracker.borrow_mut().release();
                    drop(source);
                }
            },
            (),
        );
    }

    let on_select = {
        let card_refs = card_refs.clone();
        Callback::from(move |index: usize| {
            let scroller = NodeRefScroller::new(&card_refs);
            SectionNavigator::new(&scroller, SECTIONS.len()).go_to(index as isize);
        })
    };

    let on_next = {
        let card_refs = card_refs.clone();
        let current = *active;
        Callback::from(move |_: ()| {
            let scroller = NodeRefScroller::new(&card_refs);
            SectionNavigator::new(&scroller, SECTIONS.len()).go_to_next(current);
        })
    };

    html! {
        <div class="portfolio">
            <NavBar active={*active} {on_select} />
            <BackgroundVideo />
            <TitleMarquee />
            <ActiveLabel active={*active} />

            <div class="cards">
                { for SECTIONS.iter().zip(card_refs.iter()).map(|(section, card)| html! {
                    <div
                        key={section.id.label()}
                        ref={card.clone()}
                        id={section.id.label()}
                        class="card-slot"
                        style={format!("height: {};", section.height)}
                    >
                        <GlassCard>{ section_content(section.id) }</GlassCard>
                    </div>
                }) }
            </div>

            <NextButton {on_next} />
        </div>
    }
}
