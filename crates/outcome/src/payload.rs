//! Failure-payload stringification.
//!
//! `R::unwrap` has to produce a readable panic message from whatever the
//! failure payload happens to be. A payload reports its [`Kind`] through the
//! [`Payload`] trait and [`describe`] maps every kind to a message:
//!
//! | kind                | message                     |
//! |---------------------|-----------------------------|
//! | `Text`              | the text itself             |
//! | `Record(Some(d))`   | `d`'s `Display` output      |
//! | `Record(None)`      | `table error`               |
//! | `Nil`               | `nil error`                 |
//! | `Boolean(b)`        | `boolean error (<b>)`       |
//! | `Number(n)`         | `number error (<n>)`        |
//! | `Other(name)`       | `error of type <name>`      |
//!
//! Types that do not override [`Payload::kind`] are records without a string
//! conversion. A structured error type opts into its own message with
//! `Kind::Record(Some(self))`; non-record types name themselves with
//! `Kind::Other(type_name::<Self>())`.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::any::type_name;
use core::fmt;

use crate::error::Error;
use crate::o::O;

/// Runtime type tag of a failure payload.
#[derive(Clone, Copy)]
pub enum Kind<'a> {
    Text(&'a str),
    /// Structured payload, with its string conversion if it has one.
    Record(Option<&'a dyn fmt::Display>),
    Nil,
    Boolean(bool),
    Number(&'a dyn fmt::Display),
    Other(&'static str),
}

impl fmt::Debug for Kind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Kind::Record(Some(_)) => f.write_str("Record(Some(..))"),
            Kind::Record(None) => f.write_str("Record(None)"),
            Kind::Nil => f.write_str("Nil"),
            Kind::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Kind::Number(n) => write!(f, "Number({n})"),
            Kind::Other(name) => f.debug_tuple("Other").field(name).finish(),
        }
    }
}

/// Implemented by anything that can sit in the failure channel of an `R` that
/// gets unwrapped.
pub trait Payload {
    fn kind(&self) -> Kind<'_> {
        Kind::Record(None)
    }
}

/// Maps a payload kind to its message. Total over [`Kind`].
pub fn describe(kind: Kind<'_>) -> String {
    match kind {
        Kind::Text(text) => text.to_string(),
        Kind::Record(Some(display)) => display.to_string(),
        Kind::Record(None) => "table error".to_string(),
        Kind::Nil => "nil error".to_string(),
        Kind::Boolean(b) => format!("boolean error ({b})"),
        Kind::Number(n) => format!("number error ({n})"),
        Kind::Other(name) => format!("error of type {name}"),
    }
}

impl Payload for str {
    fn kind(&self) -> Kind<'_> {
        Kind::Text(self)
    }
}

impl Payload for String {
    fn kind(&self) -> Kind<'_> {
        Kind::Text(self.as_str())
    }
}

impl Payload for Cow<'_, str> {
    fn kind(&self) -> Kind<'_> {
        Kind::Text(self)
    }
}

impl Payload for bool {
    fn kind(&self) -> Kind<'_> {
        Kind::Boolean(*self)
    }
}

impl Payload for () {
    fn kind(&self) -> Kind<'_> {
        Kind::Nil
    }
}

// `Text` borrows from the payload and a `char` has no UTF-8 bytes to lend.
impl Payload for char {
    fn kind(&self) -> Kind<'_> {
        Kind::Other(type_name::<Self>())
    }
}

macro_rules! number_payload {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Payload for $ty {
                fn kind(&self) -> Kind<'_> {
                    Kind::Number(self)
                }
            }
        )+
    };
}

number_payload!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl<T> Payload for [T] {
    fn kind(&self) -> Kind<'_> {
        Kind::Record(None)
    }
}

impl<T, const N: usize> Payload for [T; N] {
    fn kind(&self) -> Kind<'_> {
        Kind::Record(None)
    }
}

impl<T> Payload for Vec<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Record(None)
    }
}

impl<K, V> Payload for BTreeMap<K, V> {
    fn kind(&self) -> Kind<'_> {
        Kind::Record(None)
    }
}

impl<T: Payload> Payload for Option<T> {
    fn kind(&self) -> Kind<'_> {
        match self {
            Some(val) => val.kind(),
            None => Kind::Nil,
        }
    }
}

impl<T: Payload> Payload for O<T> {
    fn kind(&self) -> Kind<'_> {
        match self {
            O::Some(val) => val.kind(),
            O::None => Kind::Nil,
        }
    }
}

impl<T: Payload + ?Sized> Payload for &T {
    fn kind(&self) -> Kind<'_> {
        (**self).kind()
    }
}

impl<T: Payload + ?Sized> Payload for Box<T> {
    fn kind(&self) -> Kind<'_> {
        (**self).kind()
    }
}

impl Payload for Error {
    fn kind(&self) -> Kind<'_> {
        Kind::Record(Some(self))
    }
}
