use yew::prelude::*;

use crate::config::{BACKGROUND_VIDEO, MARQUEE_REPEAT, MARQUEE_TEXT};

#[function_component(BackgroundVideo)]
pub fn background_video() -> Html {
    html! {
        <video class="background-video" autoplay=true muted=true loop=true playsinline=true>
            <source src={BACKGROUND_VIDEO} type="video/mp4" />
            {"Your browser does not support the video tag."}
        </video>
    }
}

/// Endless vertical scroll of the title. Pure CSS animation, no state.
#[function_component(TitleMarquee)]
pub fn title_marquee() -> Html {
    html! {
        <div class="marquee">
            <div class="marquee-track">
                { for (0..MARQUEE_REPEAT).map(|index| html! {
                    <div key={index} class="marquee-item">{ MARQUEE_TEXT }</div>
                }) }
            </div>
        </div>
    }
}
