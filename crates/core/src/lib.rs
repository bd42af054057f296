//! Hotel Booking Core - Shared types library.
//!
//! This crate provides common types used across all hotel booking components:
//! - `web` - Public booking site
//! - `cli` - Command-line tools for seeding and store checks
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for document ids, stay dates, and booking status

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
