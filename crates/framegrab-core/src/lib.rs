pub mod config;
pub mod logging;

pub mod animator;
pub mod encoder;
pub mod fetcher;
pub mod listing;
pub mod retrieve;
pub mod url_model;
