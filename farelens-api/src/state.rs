use farelens_core::pricing::PredictionContext;

/// Shared handler state: just the immutable prediction context. Nothing
/// in here changes after startup, so cloning per request is cheap and
/// lock-free.
#[derive(Clone)]
pub struct AppState {
    pub ctx: PredictionContext,
}
