use thiserror::Error;

/// Failure taxonomy for the tutor agent.
///
/// `ConfigurationMissing` is fatal and only ever surfaces during startup.
/// `BackendFailure` is recoverable: the responder renders it as user-visible
/// text and never lets it escape a message handler.
#[derive(Debug, Error)]
pub enum TutorError {
    #[error("missing configuration: {0}")]
    ConfigurationMissing(String),

    #[error("backend failure: {0}")]
    BackendFailure(String),
}
