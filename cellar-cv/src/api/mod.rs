//! HTTP API handlers for cellar-cv

pub mod buildinfo;
pub mod catalog;
pub mod health;
pub mod pairings;
pub mod ui;
pub mod view;

pub use buildinfo::get_build_info;
pub use catalog::get_catalog;
pub use health::health_routes;
pub use pairings::get_pairings;
pub use ui::{serve_app_js, serve_index};
pub use view::build_view;
