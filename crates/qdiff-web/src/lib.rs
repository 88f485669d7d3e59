//! Question Difficulty Analyzer front-end
//!
//! Serves a single-page form that takes an exam question and shows the
//! predicted difficulty, together with a JSON API, a health probe, and a
//! Prometheus scrape endpoint. The same pipeline is available one-shot from
//! the `qdiff predict` subcommand.

pub mod cli;
pub mod config;
pub mod presenter;
pub mod server;
pub mod state;

pub use config::{AppConfig, ConfigOverrides, ServerConfig};
pub use presenter::ResultView;
pub use server::{build_app, run_server};
pub use state::{AppState, ModelStatus};
