mod app;
pub mod pages;
pub mod routes;
pub mod static_files;

pub use app::{build_app, run_server};
