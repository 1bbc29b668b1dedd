//! Boolean coercion.
//!
//! Strings are false when blank or when they spell one of the
//! [`FALSE_TOKENS`]; numbers are false when zero; characters are false when
//! `'0'` or invisible; enum values are false when their member is named
//! `None` or `Undefined`. Everything else is true.

use crate::enums::{is_none_or_undefined, Enumeration};
use crate::text::eq_ignore_case;

/// Strings read as `false`, compared trimmed and case-insensitively.
pub const FALSE_TOKENS: [&str; 11] = [
    "0",
    "false",
    "nan",
    "no",
    "none",
    "undefine",
    "undefined",
    "zero",
    "ложь",
    "нет",
    "ноль",
];

/// Coerces a string to `bool`.
#[must_use]
pub fn str_to_bool(s: &str) -> bool {
    let trimmed = s.trim();
    !(trimmed.is_empty() || FALSE_TOKENS.iter().any(|token| eq_ignore_case(token, trimmed)))
}

/// Coerces an enum value to `bool`.
///
/// Values without a declared member count as true.
#[must_use]
pub fn enum_to_bool<E: Enumeration>(value: E) -> bool {
    value.name().map_or(true, |name| !is_none_or_undefined(name))
}

/// Truthiness of a primitive value.
pub trait ToBool {
    /// Returns the truthiness of the value.
    fn to_bool(&self) -> bool;
}

impl ToBool for str {
    fn to_bool(&self) -> bool {
        str_to_bool(self)
    }
}

impl ToBool for String {
    fn to_bool(&self) -> bool {
        str_to_bool(self)
    }
}

impl ToBool for bool {
    fn to_bool(&self) -> bool {
        *self
    }
}

impl ToBool for char {
    fn to_bool(&self) -> bool {
        // Unicode separators (Zs, Zl, Zp) all carry White_Space.
        !(*self == '0' || self.is_whitespace() || self.is_control())
    }
}

macro_rules! to_bool_nonzero {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl ToBool for $ty {
                #[allow(clippy::float_cmp)]
                fn to_bool(&self) -> bool {
                    *self != $zero
                }
            }
        )*
    };
}

to_bool_nonzero!(
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    isize => 0,
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    u128 => 0,
    usize => 0,
    f32 => 0.0,
    f64 => 0.0,
);

impl<T: ToBool + ?Sized> ToBool for &T {
    fn to_bool(&self) -> bool {
        (**self).to_bool()
    }
}

impl<T: ToBool> ToBool for Option<T> {
    fn to_bool(&self) -> bool {
        self.as_ref().is_some_and(ToBool::to_bool)
    }
}
