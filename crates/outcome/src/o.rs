use alloc::boxed::Box;
use core::any::{type_name, Any};
use core::cmp::Ordering;

use crate::error::{raise, Error, UNWRAP_NONE};

/// A value of type `T` that may be absent.
///
/// `O::None` is a plain value, so every empty `O<T>` is interchangeable with
/// every other; absence is checked through the discriminant, never through
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum O<T> {
    Some(T),
    None,
}

impl<T> Default for O<T> {
    fn default() -> Self {
        O::None
    }
}

impl<T> O<T> {
    /// Constructs an `O::Some(val)` variant.
    pub const fn of(val: T) -> Self {
        O::Some(val)
    }

    /// Classifies a nullable input: `None` becomes the empty state.
    ///
    /// An explicitly stored "no value" cannot be told apart from absence.
    pub fn from_nullable(val: Option<T>) -> Self {
        match val {
            Some(val) => O::Some(val),
            None => O::None,
        }
    }

    /// Constructs an `O::None` variant.
    pub const fn empty() -> Self {
        O::None
    }

    /// Returns true if the value is `Some`.
    pub const fn is_present(&self) -> bool {
        matches!(self, O::Some(_))
    }

    /// Returns true if the value is `None`.
    pub const fn is_empty(&self) -> bool {
        matches!(self, O::None)
    }

    /// Non-panicking form of [`O::unwrap`].
    pub fn try_unwrap(self) -> Result<T, Error> {
        match self {
            O::Some(val) => Ok(val),
            O::None => Err(Error::ValueAbsent(UNWRAP_NONE.into())),
        }
    }

    /// Returns the contained value, panicking with a fixed message if empty.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(val) => val,
            Err(err) => raise(err),
        }
    }

    /// Expects the value to be `Some`, panics with `msg` if not.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            O::Some(val) => val,
            O::None => raise(Error::ValueAbsent(msg.into())),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            O::Some(val) => val,
            O::None => default,
        }
    }

    /// Returns the contained value or the result of `supplier`, which is only
    /// called when empty.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, supplier: F) -> T {
        match self {
            O::Some(val) => val,
            O::None => supplier(),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Moves the value out, leaving `O::None` in its place.
    pub fn take(&mut self) -> O<T> {
        core::mem::replace(self, O::None)
    }

    /// Calls `consumer` with the value if present.
    pub fn if_present<F: FnOnce(&T)>(&self, consumer: F) {
        if let O::Some(val) = self {
            consumer(val);
        }
    }

    /// Calls `consumer` if empty.
    pub fn if_empty<F: FnOnce()>(&self, consumer: F) {
        if self.is_empty() {
            consumer();
        }
    }

    /// Returns `other` if `self` is `Some`, otherwise `None`.
    pub fn and<U>(self, other: O<U>) -> O<U> {
        match self {
            O::Some(_) => other,
            O::None => O::None,
        }
    }

    /// Returns `self` if `Some`, otherwise `other`.
    pub fn or(self, other: O<T>) -> O<T> {
        match self {
            O::Some(_) => self,
            O::None => other,
        }
    }

    pub fn or_else<F: FnOnce() -> O<T>>(self, supplier: F) -> O<T> {
        match self {
            O::Some(_) => self,
            O::None => supplier(),
        }
    }

    /// Maps `O<T>` to `O<U>` by applying `f` to the contained value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> O<U> {
        match self {
            O::Some(val) => O::Some(f(val)),
            O::None => O::None,
        }
    }

    /// Like [`O::map`], but an empty value becomes `O::Some(default)`.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> O<U> {
        match self {
            O::Some(val) => O::Some(f(val)),
            O::None => O::Some(default),
        }
    }

    /// Like [`O::map_or`], with the default computed lazily.
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> O<U>
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            O::Some(val) => O::Some(f(val)),
            O::None => O::Some(default()),
        }
    }

    /// Chains a computation that may itself produce an empty value.
    pub fn flatmap<U, F: FnOnce(T) -> O<U>>(self, f: F) -> O<U> {
        match self {
            O::Some(val) => f(val),
            O::None => O::None,
        }
    }

    /// Converts from `&O<T>` to `O<&T>`.
    pub fn as_ref(&self) -> O<&T> {
        match self {
            O::Some(val) => O::Some(val),
            O::None => O::None,
        }
    }
}

impl<T: 'static> O<T> {
    /// Recovers an `O<T>` from a type-erased box.
    ///
    /// Fails with [`Error::TypeMismatch`] when the box holds anything other
    /// than exactly `O<T>`.
    pub fn try_from_any(value: Box<dyn Any>) -> Result<Self, Error> {
        value
            .downcast::<Self>()
            .map(|o| *o)
            .map_err(|_| Error::TypeMismatch {
                expected: type_name::<Self>(),
            })
    }
}

// Only two present values are ordered. Anything involving `None` is
// unordered, so `<`, `<=`, `>` and `>=` are all false rather than placing
// `None` before or after `Some`.
impl<T: PartialOrd> PartialOrd for O<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (O::Some(a), O::Some(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}
