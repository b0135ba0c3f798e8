pub mod components;
pub mod config;
pub mod contact;
pub mod label;
pub mod navigator;
pub mod pages;
pub mod sections;
pub mod tracker;
pub mod utils;

pub use pages::portfolio::Portfolio;
