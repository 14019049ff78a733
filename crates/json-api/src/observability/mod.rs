//! Logging setup and request logging middleware.

use thiserror::Error;

mod logging;
mod request;

pub(crate) use logging::init_subscriber;
pub(crate) use request::RequestLogging;

/// Errors raised while initialising logging.
#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    /// A log filter directive could not be parsed.
    #[error("invalid log filter directive: {0}")]
    Directive(#[from] tracing_subscriber::filter::ParseError),

    /// Failed to initialise tracing subscriber.
    #[error("failed to initialise tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}
