//! Enum fixtures shared by the integration tests.
#![allow(dead_code)]

use primext::{enumeration, DisplayName};

/// Marker attribute used to check typed attribute lookup.
#[derive(Debug, PartialEq, Eq)]
pub struct Code(pub &'static str);

enumeration! {
    /// Plain enum with display names.
    pub enum Color: i32 {
        Undefined = 0,
        Red = 1 => [DisplayName::new("Красный"), Code("R")],
        Green = 2 => [DisplayName::with_description("Зелёный", "traffic light go")],
        Blue = 4,
    }
}

enumeration! {
    /// Plain enum without a zero member.
    pub enum Weekday: u8 {
        Monday = 1,
        Tuesday = 2,
        Wednesday = 3,
    }
}

enumeration! {
    /// Flag enum with an explicit empty member.
    pub struct Permission: u32 {
        const NONE = 0;
        const READ = 1 => [DisplayName::new("Чтение")];
        const WRITE = 2;
        const EXECUTE = 4;
        const READ_WRITE = 3;
    }
}

enumeration! {
    /// Flag enum without an empty member.
    pub struct Channel: u8 {
        const LEFT = 1;
        const RIGHT = 2;
    }
}
