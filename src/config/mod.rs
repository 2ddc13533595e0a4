// src/config/mod.rs
pub mod app;
pub mod sources;

pub use app::AppConfig;
pub use sources::{load_sources_default, load_sources_from, SourcesConfig};
