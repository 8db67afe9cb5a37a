//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping
//! - [`Click`] - One recorded resolution of a short code
//! - [`DailyClicks`] - Click count for a single calendar day
//!
//! Entities are created through separate input structs (`NewLink`, `NewClick`)
//! that carry only caller-supplied fields; identities and timestamps are
//! assigned by the store.

pub mod click;
pub mod link;

pub use click::{Click, DailyClicks, NewClick};
pub use link::{Link, NewLink};
