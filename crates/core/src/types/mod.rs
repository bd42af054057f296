//! Core types for the hotel booking service.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod date;
pub mod id;
pub mod status;

pub use date::{DateError, FORM_DATE_FORMAT, StayDate};
pub use id::*;
pub use status::*;
