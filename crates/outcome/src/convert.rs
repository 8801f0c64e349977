// Conversions between `O` and `R`, and bridges to the core types.

use crate::o::O;
use crate::r::R;

impl<T> O<T> {
    /// `O::Some(v)` becomes `R::Ok(v)`, `O::None` becomes `R::Err(err)`.
    pub fn ok_or<E>(self, err: E) -> R<T, E> {
        match self {
            O::Some(val) => R::Ok(val),
            O::None => R::Err(err),
        }
    }

    /// Like [`O::ok_or`]; `err` is only called when empty.
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, err: F) -> R<T, E> {
        match self {
            O::Some(val) => R::Ok(val),
            O::None => R::Err(err()),
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T, E> R<T, E> {
    /// Keeps the success payload and discards any failure.
    pub fn ok_option(self) -> O<T> {
        match self {
            R::Ok(val) => O::Some(val),
            R::Err(_) => O::None,
        }
    }

    /// Keeps the failure payload and discards any success.
    pub fn err_option(self) -> O<E> {
        match self {
            R::Ok(_) => O::None,
            R::Err(err) => O::Some(err),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T> From<Option<T>> for O<T> {
    fn from(val: Option<T>) -> Self {
        O::from_nullable(val)
    }
}

impl<T> From<O<T>> for Option<T> {
    fn from(val: O<T>) -> Self {
        match val {
            O::Some(val) => Some(val),
            O::None => None,
        }
    }
}

impl<T, E> From<Result<T, E>> for R<T, E> {
    fn from(val: Result<T, E>) -> Self {
        match val {
            Ok(val) => R::Ok(val),
            Err(err) => R::Err(err),
        }
    }
}

impl<T, E> From<R<T, E>> for Result<T, E> {
    fn from(val: R<T, E>) -> Self {
        match val {
            R::Ok(val) => Ok(val),
            R::Err(err) => Err(err),
        }
    }
}
