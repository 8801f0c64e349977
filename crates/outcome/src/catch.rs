use core::fmt;
use std::any::Any;
use std::boxed::Box;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::string::String;

use crate::payload::{Kind, Payload};
use crate::r::R;

const NON_STRING_PAYLOAD: &str = "<non-string panic payload>";

/// The value a panic unwound with, captured by [`R::catch`].
pub struct Raised(Box<dyn Any + Send + 'static>);

impl Raised {
    /// The panic message, when the payload is a `&str` or `String`.
    pub fn message(&self) -> Option<&str> {
        if let Some(msg) = self.0.downcast_ref::<&'static str>() {
            Some(msg)
        } else if let Some(msg) = self.0.downcast_ref::<String>() {
            Some(msg.as_str())
        } else {
            None
        }
    }

    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.0.downcast_ref::<V>()
    }

    /// Hands the payload back, e.g. to `std::panic::resume_unwind`.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.0
    }
}

impl fmt::Debug for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Raised")
            .field(&self.message().unwrap_or(NON_STRING_PAYLOAD))
            .finish()
    }
}

impl fmt::Display for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or(NON_STRING_PAYLOAD))
    }
}

impl PartialEq<str> for Raised {
    fn eq(&self, other: &str) -> bool {
        self.message() == Some(other)
    }
}

impl PartialEq<&str> for Raised {
    fn eq(&self, other: &&str) -> bool {
        self.message() == Some(*other)
    }
}

impl Payload for Raised {
    fn kind(&self) -> Kind<'_> {
        match self.message() {
            Some(msg) => Kind::Text(msg),
            None => Kind::Other("Box<dyn Any + Send>"),
        }
    }
}

impl<T> R<T, Raised> {
    /// Runs `f`, turning a normal return into `R::Ok` and a panic into
    /// `R::Err` carrying the panic payload.
    pub fn catch<F: FnOnce() -> T>(f: F) -> Self {
        Self::catch_with(|()| f(), ())
    }

    /// Like [`R::catch`], passing `args` to `f`. Use a tuple for several
    /// arguments.
    pub fn catch_with<A, F: FnOnce(A) -> T>(f: F, args: A) -> Self {
        match catch_unwind(AssertUnwindSafe(move || f(args))) {
            Ok(val) => R::Ok(val),
            Err(payload) => {
                let raised = Raised(payload);
                tracing::debug!(panic = %raised, "caught panic");
                R::Err(raised)
            }
        }
    }
}
