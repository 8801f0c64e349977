use alloc::string::String;
use thiserror::Error;

/// Fixed message raised by `O::unwrap` on an empty value.
pub const UNWRAP_NONE: &str = "called `O::unwrap()` on a `None` value";

/// Fixed message raised by `R::unwrap_err` on a success value.
pub const UNWRAP_ERR_ON_OK: &str = "called `R::unwrap_err()` on an `Ok` value";

/// Errors raised when an `O` or `R` is extracted in the wrong state.
///
/// Absence and failure are ordinary data while they flow through combinators.
/// They only become an `Error` at an extraction boundary (`unwrap`, `expect`,
/// `unwrap_err`) or when a dynamically typed value turns out not to be the
/// container it was claimed to be.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `O::unwrap` / `O::expect` on `O::None`.
    #[error("{0}")]
    ValueAbsent(String),

    /// `R::unwrap` / `R::expect` on `R::Err`.
    #[error("{0}")]
    Failed(String),

    /// `R::unwrap_err` on `R::Ok`.
    #[error("{0}")]
    UnwrapErr(String),

    /// Failed dynamic downcast in `try_from_any`.
    #[error("type mismatch: expected `{expected}`")]
    TypeMismatch { expected: &'static str },
}

/// Turns an extraction error into a panic. Every panicking `unwrap`-style
/// method in the crate ends up here.
#[cold]
#[track_caller]
pub(crate) fn raise(err: Error) -> ! {
    tracing::error!(error = %err, "extraction failed");
    panic!("{err}")
}
