//! Hotel booking web application.
//!
//! Lists hotels and runs the booking lifecycle (check-in, check-out, date
//! changes, cancellation) over a MongoDB document store. Built as a library
//! so the router can be driven in tests and the CLI can reuse the store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
