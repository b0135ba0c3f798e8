use yew::prelude::*;

use crate::sections::{ActiveSection, SECTIONS};

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: ActiveSection,
    pub on_select: Callback<usize>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="nav-bar">
            { for SECTIONS.iter().enumerate().map(|(index, section)| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(index));
                html! {
                    <button
                        key={section.id.label()}
                        class={classes!("nav-button", props.active.is(section.id).then_some("active"))}
                        {onclick}
                    >
                        { section.id.nav_label() }
                    </button>
                }
            }) }
        </nav>
    }
}
