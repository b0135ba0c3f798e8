use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NextButtonProps {
    pub on_next: Callback<()>,
}

#[function_component(NextButton)]
pub fn next_button(props: &NextButtonProps) -> Html {
    let onclick = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };
    html! {
        <button class="next-button" {onclick} aria-label="Next section">
            <svg
                xmlns="http://www.w3.org/2000/svg"
                class="next-icon"
                fill="none"
                viewBox="0 0 24 24"
                stroke="currentColor"
                stroke-width="2"
            >
                <line x1="12" y1="5" x2="12" y2="19" />
                <polyline points="5 12 12 19 19 12" />
            </svg>
        </button>
    }
}
