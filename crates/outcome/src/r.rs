use alloc::boxed::Box;
use core::any::{type_name, Any};
use core::cmp::Ordering;

use crate::error::{raise, Error, UNWRAP_ERR_ON_OK};
use crate::payload::{describe, Payload};

/// The outcome of a fallible operation: a success value or a failure value.
///
/// The failure payload `E` may be any type. Nothing mutates an `R` in place;
/// every combinator consumes it and hands back a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum R<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> R<T, E> {
    /// Constructs an `R::Ok(val)` variant.
    pub const fn ok(val: T) -> Self {
        R::Ok(val)
    }

    /// Constructs an `R::Err(err)` variant.
    pub const fn err(err: E) -> Self {
        R::Err(err)
    }

    pub const fn is_ok(&self) -> bool {
        matches!(self, R::Ok(_))
    }

    pub const fn is_err(&self) -> bool {
        matches!(self, R::Err(_))
    }

    /// Non-panicking form of [`R::unwrap`]. The error message is the failure
    /// payload run through [`describe`].
    pub fn try_unwrap(self) -> Result<T, Error>
    where
        E: Payload,
    {
        match self {
            R::Ok(val) => Ok(val),
            R::Err(err) => Err(Error::Failed(describe(err.kind()))),
        }
    }

    /// Returns the success value, panicking with the described failure
    /// payload otherwise.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Payload,
    {
        match self.try_unwrap() {
            Ok(val) => val,
            Err(err) => raise(err),
        }
    }

    /// Non-panicking form of [`R::unwrap_err`].
    pub fn try_unwrap_err(self) -> Result<E, Error> {
        match self {
            R::Ok(_) => Err(Error::UnwrapErr(UNWRAP_ERR_ON_OK.into())),
            R::Err(err) => Ok(err),
        }
    }

    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(err) => err,
            Err(err) => raise(err),
        }
    }

    /// Returns the success value, panicking with `msg` on failure.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            R::Ok(val) => val,
            R::Err(_) => raise(Error::Failed(msg.into())),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            R::Ok(val) => val,
            R::Err(_) => default,
        }
    }

    /// `supplier` is only called on failure.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, supplier: F) -> T {
        match self {
            R::Ok(val) => val,
            R::Err(_) => supplier(),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    pub fn if_ok<F: FnOnce(&T)>(&self, consumer: F) {
        if let R::Ok(val) = self {
            consumer(val);
        }
    }

    pub fn if_err<F: FnOnce(&E)>(&self, consumer: F) {
        if let R::Err(err) = self {
            consumer(err);
        }
    }

    /// Returns `other` on success, otherwise passes the failure through.
    pub fn and<U>(self, other: R<U, E>) -> R<U, E> {
        match self {
            R::Ok(_) => other,
            R::Err(err) => R::Err(err),
        }
    }

    /// Passes the success through, otherwise returns `other`.
    pub fn or<F>(self, other: R<T, F>) -> R<T, F> {
        match self {
            R::Ok(val) => R::Ok(val),
            R::Err(_) => other,
        }
    }

    pub fn or_else<F, S: FnOnce() -> R<T, F>>(self, supplier: S) -> R<T, F> {
        match self {
            R::Ok(val) => R::Ok(val),
            R::Err(_) => supplier(),
        }
    }

    /// Maps the success payload; failures pass through without calling `f`.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> R<U, E> {
        match self {
            R::Ok(val) => R::Ok(f(val)),
            R::Err(err) => R::Err(err),
        }
    }

    /// Maps the failure payload; successes pass through without calling `f`.
    pub fn map_err<F, G: FnOnce(E) -> F>(self, f: G) -> R<T, F> {
        match self {
            R::Ok(val) => R::Ok(val),
            R::Err(err) => R::Err(f(err)),
        }
    }

    /// Chains another fallible computation on the success payload.
    pub fn flatmap<U, F: FnOnce(T) -> R<U, E>>(self, f: F) -> R<U, E> {
        match self {
            R::Ok(val) => f(val),
            R::Err(err) => R::Err(err),
        }
    }

    /// Converts from `&R<T, E>` to `R<&T, &E>`.
    pub fn as_ref(&self) -> R<&T, &E> {
        match self {
            R::Ok(val) => R::Ok(val),
            R::Err(err) => R::Err(err),
        }
    }
}

impl<T: 'static, E: 'static> R<T, E> {
    /// Recovers an `R<T, E>` from a type-erased box, failing with
    /// [`Error::TypeMismatch`] for anything else.
    pub fn try_from_any(value: Box<dyn Any>) -> Result<Self, Error> {
        value
            .downcast::<Self>()
            .map(|r| *r)
            .map_err(|_| Error::TypeMismatch {
                expected: type_name::<Self>(),
            })
    }
}

// Values of different discriminants are unordered.
impl<T: PartialOrd, E: PartialOrd> PartialOrd for R<T, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (R::Ok(a), R::Ok(b)) => a.partial_cmp(b),
            (R::Err(a), R::Err(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}
