/// Local endpoint used when no override is baked in at build time.
const DEFAULT_CONTACT_ENDPOINT: &str = "http://localhost:5000/api/contact";

/// Fraction of a card that must be on screen before its section becomes active.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Fraction of a glass card that must be on screen before it fades in.
pub const CARD_REVEAL_THRESHOLD: f64 = 0.2;

/// Duration of each half of the caption transition (exit, then enter).
pub const LABEL_TRANSITION_MS: u32 = 500;

pub const BACKGROUND_VIDEO: &str = "/bg1.mp4";

pub const MARQUEE_TEXT: &str = "- WEB INTERFACE DEVELOPER";
pub const MARQUEE_REPEAT: usize = 30;

/// Where the contact form posts to. Set `CONTACT_ENDPOINT` when building to
/// point a deployed bundle somewhere other than the local dev server.
pub fn get_contact_endpoint() -> &'static str {
    option_env!("CONTACT_ENDPOINT").unwrap_or(DEFAULT_CONTACT_ENDPOINT)
}
