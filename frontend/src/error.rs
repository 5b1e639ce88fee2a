use std::fmt::Debug;

use log::warn;
use thiserror::Error;

/// A view asked for a shared capability that no provider above it supplies.
///
/// This is a wiring mistake in the component tree, so consumers log it loudly
/// and render nothing instead of falling back to a guess.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("`{capability}` was requested outside of <{provider}>")]
    MissingProvider {
        capability: &'static str,
        provider: &'static str,
    },
}

pub fn require<T>(
    context: Option<T>,
    capability: &'static str,
    provider: &'static str,
) -> Result<T, ScopeError> {
    context.ok_or(ScopeError::MissingProvider { capability, provider })
}

/// Logs a failed browser call and reports whether it went through.
pub fn warn_on_failure<E: Debug>(result: Result<(), E>, action: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            warn!("Failed to {}: {:?}", action, err);
            false
        }
    }
}
