//! Utility functions for code generation, URL processing, and request handling.
//!
//! - [`code_generator`] - Random short codes and custom code validation
//! - [`url_validator`] - Structural URL validation
//! - [`short_url`] - Short URL construction from the configured base
//! - [`client_meta`] - Client IP, user agent and referrer extraction

pub mod client_meta;
pub mod code_generator;
pub mod short_url;
pub mod url_validator;
