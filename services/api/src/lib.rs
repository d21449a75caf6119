//! Lesson API Library Crate
//!
//! This library contains the web-facing side of the lesson engine: the
//! application state, configuration, API handlers and routing. The binaries
//! in `bin/` are thin wrappers around this library.

pub mod config;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
