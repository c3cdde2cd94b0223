//! Order Viewer: look up an order by UID and read it as sections.
//!
//! - [`controller`]: the search/render state machine and its named regions
//! - [`render`]: pure renderers producing a typed display tree
//! - [`api`]: the backend endpoints, behind the [`api::OrderApi`] trait
//! - [`app`] / [`ui`]: the iced shell

pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod model;
pub mod render;
pub mod ui;

/// Install the tracing subscriber; `RUST_LOG` overrides the default filter.
pub fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
