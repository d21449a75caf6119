//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds the lesson engine
//! and the configuration shared by every handler.

use crate::config::Config;
use lesson_core::LessonEngine;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The shared application state, created once at startup and passed to all handlers.
/// The engine sits behind a mutex because generation mutates session history.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Mutex<LessonEngine>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(engine: LessonEngine, config: Config) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            config: Arc::new(config),
        }
    }
}
