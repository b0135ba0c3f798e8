pub mod api;
pub mod scroll;
pub mod visibility;
