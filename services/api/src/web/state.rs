//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use emotion_core::EmotionAnalyzer;

/// The shared application state, created once at startup and passed to all handlers.
///
/// Nothing in here is mutated by requests; each analysis is independent.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: EmotionAnalyzer,
}
