//! Values stored in an error's structured fields.

use crate::types::alloc_type::{BTreeMap, Cow, String};
use core::fmt::{self, Display, Write};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key/value fields attached to a single error node.
///
/// A sorted map keeps every rendering of the fields deterministic.
pub type FieldMap = BTreeMap<String, Value>;

/// A loosely typed field value.
///
/// Anything that is not a primitive can be captured through its `Display`
/// implementation with [`Value::display`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(String),
}

impl Value {
    /// Captures any displayable value as its textual representation.
    pub fn display<T: Display + ?Sized>(value: &T) -> Self {
        let mut text = String::new();
        let _ = write!(text, "{}", value);
        Self::String(text)
    }

    /// Returns the string payload, if this is a string value.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => Display::fmt(b, f),
            Self::I64(n) => Display::fmt(n, f),
            Self::U64(n) => Display::fmt(n, f),
            Self::F64(n) => Display::fmt(n, f),
            Self::String(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Value {
                #[inline]
                fn from(value: $source) -> Self {
                    Self::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from_int!(I64 as i64: i8, i16, i32, i64, isize);
impl_from_int!(U64 as u64: u8, u16, u32, u64, usize);
impl_from_int!(F64 as f64: f32, f64);

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        let mut text = String::new();
        text.push(value);
        Self::String(text)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<&String> for Value {
    #[inline]
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Cow<'_, str>> for Value {
    #[inline]
    fn from(value: Cow<'_, str>) -> Self {
        Self::String(value.into_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
