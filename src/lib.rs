pub mod api;
pub mod clock;
pub mod config;
pub mod display;
pub mod entry;
pub mod index;
pub mod logger;
pub mod observability;
pub mod store;
