pub mod animation;
pub mod api_utils;
pub mod chart;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod viewport;
