use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::LABEL_TRANSITION_MS;
use crate::label::{LabelPresenter, LabelTransition, LabelView};
use crate::sections::ActiveSection;

#[derive(Properties, PartialEq)]
pub struct ActiveLabelProps {
    pub active: ActiveSection,
}

/// Large vertical caption naming the active section. The old caption plays
/// its exit animation before the new one enters.
#[function_component(ActiveLabel)]
pub fn active_label(props: &ActiveLabelProps) -> Html {
    let presenter = use_mut_ref(LabelPresenter::default);
    let shown = use_state(|| presenter.borrow().current().clone());
    let exiting = use_state(|| None::<LabelView>);

    {
        let presenter = presenter.clone();
        let shown = shown.clone();
        let exiting = exiting.clone();
        use_effect_with_deps(
            move |active: &ActiveSection| {
                let transition = presenter.borrow_mut().present(*active);
                let timeout = transition.map(|LabelTransition { exiting: leaving, entering }| {
                    exiting.set(Some(leaving));
                    let exiting = exiting.clone();
                    Timeout::new(LABEL_TRANSITION_MS, move || {
                        exiting.set(None);
                        shown.set(entering);
                    })
                });
                move || drop(timeout)
            },
            props.active,
        );
    }

    let (view, phase) = match &*exiting {
        Some(view) => (view, "label-exit"),
        None => (&*shown, "label-enter"),
    };

    html! {
        <div class="active-label" style={view.style.to_css()}>
            <div key={format!("{}-{}", phase, view.key)} class={classes!("active-label-text", phase)}>
                { view.text }
            </div>
        </div>
    }
}
