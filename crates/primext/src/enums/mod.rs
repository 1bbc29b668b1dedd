//! Enum introspection and conversion.
//!
//! Rust enums carry no runtime metadata, so every enum that takes part
//! declares its members through [`Enumeration`], usually via the
//! [`enumeration!`](crate::enumeration) macro. The member table keeps the
//! declaration order, the declared names and any attributes such as
//! [`DisplayName`], which is all the free functions below need.
//!
//! Flag enums are `bitflags` types declared with the same macro. For them
//! [`Enumeration::from_discriminant`] keeps any bit pattern, so combined
//! values survive a round trip through [`to_flag_list`].

mod attribute;
mod macros;

use std::any::Any;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{ConversionError, Result};
use crate::text::eq_ignore_case;

pub use attribute::{Attribute, DisplayName};

const NONE: &str = "None";
const UNDEFINED: &str = "Undefined";

/// An enum type with a static member table.
pub trait Enumeration: Copy + Eq + fmt::Debug + 'static {
    /// Type name used in error messages.
    const TYPE_NAME: &'static str;

    /// Declared members, in declaration order.
    const MEMBERS: &'static [Member<Self>];

    /// Underlying numeric value.
    fn discriminant(self) -> i64;

    /// Builds a value from its numeric representation.
    ///
    /// The default accepts declared members only. Flag types override it to
    /// keep combined bit patterns, rejecting values outside their backing
    /// integer.
    fn from_discriminant(value: i64) -> Option<Self> {
        Self::MEMBERS
            .iter()
            .find(|member| member.discriminant() == value)
            .map(Member::value)
    }

    /// Returns the declared member equal to this value, if any.
    fn member(self) -> Option<&'static Member<Self>> {
        Self::MEMBERS.iter().find(|member| member.value == self)
    }

    /// Returns the declared name of this value, if it is a member.
    fn name(self) -> Option<&'static str> {
        self.member().map(Member::name)
    }
}

/// A declared enum member with its name and attributes.
#[derive(Clone, Copy)]
pub struct Member<E> {
    value: E,
    name: &'static str,
    attributes: &'static [Attribute],
}

impl<E> Member<E> {
    /// Creates a member entry. Used by [`enumeration!`](crate::enumeration).
    #[must_use]
    pub const fn new(value: E, name: &'static str, attributes: &'static [Attribute]) -> Self {
        Self {
            value,
            name,
            attributes,
        }
    }

    /// Declared name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All attributes attached to the member.
    #[must_use]
    pub fn attributes(&self) -> &'static [Attribute] {
        self.attributes
    }

    /// Returns the first attribute of type `A`.
    #[must_use]
    pub fn attribute<A: Any>(&self) -> Option<&'static A> {
        self.attributes
            .iter()
            .find_map(|attribute| attribute.downcast_ref::<A>())
    }
}

impl<E: Enumeration> Member<E> {
    /// Member value.
    #[must_use]
    pub fn value(&self) -> E {
        self.value
    }

    /// Underlying numeric value of the member.
    #[must_use]
    pub fn discriminant(&self) -> i64 {
        self.value.discriminant()
    }
}

impl<E: fmt::Debug> fmt::Debug for Member<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("value", &self.value)
            .field("name", &self.name)
            .field("attributes", &self.attributes.len())
            .finish()
    }
}

/// Untyped input for enum lookups: a name, a number, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumSource<'a> {
    /// No value.
    Absent,
    /// A member name or any text to parse.
    Name(&'a str),
    /// A numeric value.
    Discriminant(i64),
}

impl EnumSource<'_> {
    /// Builds a source from an enum value of any type.
    #[must_use]
    pub fn of<E: Enumeration>(value: E) -> Self {
        Self::Discriminant(value.discriminant())
    }
}

impl fmt::Display for EnumSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => Ok(()),
            Self::Name(name) => f.write_str(name),
            Self::Discriminant(value) => write!(f, "{value}"),
        }
    }
}

impl<'a> From<&'a str> for EnumSource<'a> {
    fn from(value: &'a str) -> Self {
        Self::Name(value)
    }
}

impl<'a> From<&'a String> for EnumSource<'a> {
    fn from(value: &'a String) -> Self {
        Self::Name(value.as_str())
    }
}

impl<'a, T: Into<EnumSource<'a>>> From<Option<T>> for EnumSource<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

macro_rules! source_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for EnumSource<'_> {
                fn from(value: $ty) -> Self {
                    Self::Discriminant(i64::from(value))
                }
            }
        )*
    };
}

source_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! source_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for EnumSource<'_> {
                #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
                fn from(value: $ty) -> Self {
                    Self::Discriminant(value as i64)
                }
            }
        )*
    };
}

source_from_wide_int!(u64, isize, usize);

/// Returns true if the value is the zero value of its type.
///
/// A flag type's empty value is its default even when no member is declared
/// for it.
#[must_use]
pub fn is_default<E: Enumeration>(value: E) -> bool {
    value.discriminant() == 0
}

/// Returns true if `value` names or equals a declared member of `E`.
///
/// With `ignore_case`, names are trimmed and compared case-insensitively.
/// Otherwise a name must match exactly.
#[must_use]
pub fn has_enum_value<'a, E: Enumeration>(
    value: impl Into<EnumSource<'a>>,
    ignore_case: bool,
) -> bool {
    match value.into() {
        EnumSource::Absent => false,
        EnumSource::Name(name) if ignore_case => find_by_name::<E>(name.trim(), true).is_some(),
        EnumSource::Name(name) => find_by_name::<E>(name, false).is_some(),
        EnumSource::Discriminant(value) => is_defined::<E>(value),
    }
}

/// Converts `value` to a member of `E`.
///
/// Exact member names and values resolve first. Anything else goes through
/// [`parse_enum`] and must produce a declared member. When both fail the
/// `default` is returned if given.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidEnumValue`] when the value cannot be
/// resolved and no default was supplied.
pub fn to_enum<'a, E: Enumeration>(
    value: impl Into<EnumSource<'a>>,
    default: Option<E>,
    ignore_case: bool,
) -> Result<E> {
    let source = value.into();
    if let Some(resolved) = resolve::<E>(source, ignore_case) {
        return Ok(resolved);
    }

    let input = source.to_string();
    if source != EnumSource::Absent {
        trace!(enum_type = E::TYPE_NAME, %input, "lenient enum parse");
        let parsed = parse_enum::<E>(&input, ignore_case)
            .filter(|parsed| is_defined::<E>(parsed.discriminant()));
        if let Some(parsed) = parsed {
            return Ok(parsed);
        }
    }

    if let Some(default) = default {
        debug!(enum_type = E::TYPE_NAME, %input, ?default, "enum conversion fell back to default");
        return Ok(default);
    }
    debug!(enum_type = E::TYPE_NAME, %input, "enum conversion failed");
    Err(ConversionError::invalid_enum_value(
        "value",
        E::TYPE_NAME,
        input,
    ))
}

fn resolve<E: Enumeration>(source: EnumSource<'_>, ignore_case: bool) -> Option<E> {
    if !has_enum_value::<E>(source, ignore_case) {
        return None;
    }
    match source {
        EnumSource::Absent => None,
        EnumSource::Name(name) => {
            let name = if ignore_case { name.trim() } else { name };
            find_by_name::<E>(name, ignore_case).map(Member::value)
        }
        EnumSource::Discriminant(value) => E::from_discriminant(value),
    }
}

/// Parses text into a value of `E`.
///
/// The text is a comma-separated list whose parts are member names or
/// integers (leading digit or sign). The parts are combined with bitwise OR.
/// The result is not required to be a declared member; plain enums still
/// reject values without one.
#[must_use]
pub fn parse_enum<E: Enumeration>(text: &str, ignore_case: bool) -> Option<E> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let mut bits = 0i64;
    for part in text.split(',') {
        bits |= parse_part::<E>(part.trim(), ignore_case)?;
    }
    E::from_discriminant(bits)
}

fn parse_part<E: Enumeration>(part: &str, ignore_case: bool) -> Option<i64> {
    match part.chars().next()? {
        first if first.is_ascii_digit() || first == '-' || first == '+' => part.parse().ok(),
        _ => find_by_name::<E>(part, ignore_case).map(Member::discriminant),
    }
}

/// Iterates every declared member of `E` in declaration order.
#[must_use]
pub fn values<E: Enumeration>() -> Values<E> {
    Values {
        inner: E::MEMBERS.iter(),
    }
}

/// Iterator returned by [`values`].
#[derive(Debug, Clone)]
pub struct Values<E: 'static> {
    inner: std::slice::Iter<'static, Member<E>>,
}

impl<E: Enumeration> Iterator for Values<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Member::value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E: Enumeration> DoubleEndedIterator for Values<E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Member::value)
    }
}

impl<E: Enumeration> ExactSizeIterator for Values<E> {}

impl<E: Enumeration> std::iter::FusedIterator for Values<E> {}

/// Splits a flag value into the declared members it contains.
///
/// A member is contained when all of its bits are set in `value`. When more
/// than one member matches, `None` and `Undefined` members are left out.
#[must_use]
pub fn to_flag_list<E: Enumeration>(value: E) -> Vec<E> {
    flag_members(value).map(Member::value).collect()
}

/// Names of the members returned by [`to_flag_list`].
#[must_use]
pub fn to_flag_name_list<E: Enumeration>(value: E) -> Vec<&'static str> {
    flag_members(value).map(Member::name).collect()
}

fn flag_members<E: Enumeration>(value: E) -> impl Iterator<Item = &'static Member<E>> {
    let bits = value.discriminant();
    let matched: Vec<&'static Member<E>> = E::MEMBERS
        .iter()
        .filter(|member| bits & member.discriminant() == member.discriminant())
        .collect();
    let drop_empty = matched.len() > 1;
    matched
        .into_iter()
        .filter(move |member| !(drop_empty && is_none_or_undefined(member.name)))
}

/// Returns the attribute of type `A` attached to the member equal to `value`.
#[must_use]
pub fn get_attribute<A: Any, E: Enumeration>(value: E) -> Option<&'static A> {
    value.member()?.attribute::<A>()
}

/// Returns the [`DisplayName`] name of the member, or `""` when there is none.
#[must_use]
pub fn display_name<E: Enumeration>(value: E) -> &'static str {
    get_attribute::<DisplayName, E>(value).map_or("", |display| display.name)
}

pub(crate) fn is_none_or_undefined(name: &str) -> bool {
    eq_ignore_case(name, NONE) || eq_ignore_case(name, UNDEFINED)
}

fn find_by_name<E: Enumeration>(name: &str, ignore_case: bool) -> Option<&'static Member<E>> {
    E::MEMBERS.iter().find(|member| {
        if ignore_case {
            eq_ignore_case(member.name, name)
        } else {
            member.name == name
        }
    })
}

fn is_defined<E: Enumeration>(value: i64) -> bool {
    E::MEMBERS
        .iter()
        .any(|member| member.discriminant() == value)
}
