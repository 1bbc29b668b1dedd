//! Member attributes.

use std::any::Any;

/// Type-erased attribute attached to an enum member.
pub type Attribute = &'static (dyn Any + Send + Sync);

/// Human readable name for an enum member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayName {
    /// Name shown to users.
    pub name: &'static str,
    /// Optional longer description.
    pub description: Option<&'static str>,
}

impl DisplayName {
    /// Creates a display attribute with a name only.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            description: None,
        }
    }

    /// Creates a display attribute with a name and a description.
    #[must_use]
    pub const fn with_description(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description: Some(description),
        }
    }
}
