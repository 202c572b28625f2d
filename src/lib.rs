//! In-memory faceted lookup over ticket, user and organization exports
//!
//! Three JSON collections are loaded, each is turned into per-field
//! inverted indices keyed by lowercase value, and queries resolve foreign
//! keys between the collections to produce denormalized results.
//!
//! - [`loader`]: parallel read and parse of the three collections
//! - [`index`]: field descriptors, [`index::build_index`], [`index::IndexTable`]
//! - [`search`]: query session, broad search, joins, projection
//! - [`interaction`]: line input, JSON presenter, interactive shell

pub mod config;
pub mod error;
pub mod index;
pub mod interaction;
pub mod loader;
pub mod models;
pub mod search;

pub use error::{AppError, Result};
