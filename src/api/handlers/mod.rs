//! Axum handlers, one module per endpoint group.

pub mod analytics;
pub mod health;
pub mod links;
pub mod redirect;
pub mod shorten;

pub use analytics::{analytics_handler, link_analytics_handler};
pub use health::{health_handler, root_handler};
pub use links::{delete_link_handler, list_links_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
