//! `primext` - extension utilities for primitive types.
//!
//! Three independent groups of pure helpers:
//!
//! - **Boolean coercion**: [`ToBool`] reads strings, numbers, characters and
//!   enum values as `bool` using a fixed vocabulary of false tokens.
//! - **Enum utilities**: membership checks, lenient conversion with a
//!   fallback, flag decomposition and per-member attributes for types
//!   declared with [`enumeration!`].
//! - **String utilities**: blank checks, digit extraction and
//!   Cyrillic/Latin look-alike handling through [`StrExt`].
//!
//! # Example
//!
//! ```
//! use primext::{to_enum, enumeration, StrExt, ToBool};
//!
//! enumeration! {
//!     pub enum Status: u8 {
//!         None = 0,
//!         Active = 1,
//!     }
//! }
//!
//! assert!(!"  нет ".to_bool());
//! assert!(!Status::None.to_bool());
//! assert_eq!(to_enum::<Status>("active", None, true).unwrap(), Status::Active);
//! assert_eq!("а28о-с53р".positive_digit_runs().collect::<Vec<_>>(), ["28", "53"]);
//! assert!("Apple".starts_with_ru_en("аррle", true));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Boolean coercion.
pub mod boolean;
/// Enum introspection and conversion.
pub mod enums;
/// Conversion errors.
pub mod error;
/// String helpers.
pub mod text;

pub use boolean::{str_to_bool, ToBool, FALSE_TOKENS};
pub use enums::{
    display_name, get_attribute, has_enum_value, is_default, parse_enum, to_enum, to_flag_list,
    to_flag_name_list, values, Attribute, DisplayName, EnumSource, Enumeration, Member, Values,
};
pub use error::{ConversionError, Result};
pub use text::{
    eq_ignore_case, has_non_latin_chars, is_blank, positive_digit_runs, remove_digits,
    starts_with_ru_en, to_lower_with_title_case, to_positive_digits, to_similar_latin_letters,
    to_similar_ru_letters, DigitRuns, StrExt, LOOK_ALIKE_PAIRS,
};

#[doc(hidden)]
#[allow(missing_docs)]
pub mod __private {
    pub use bitflags;
}
