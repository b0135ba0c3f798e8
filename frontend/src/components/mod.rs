pub mod active_label;
pub mod background;
pub mod contact_form;
pub mod glass_card;
pub mod nav_bar;
pub mod next_button;
