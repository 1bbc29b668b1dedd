//! Declaration macro for [`Enumeration`](crate::Enumeration) types.

/// Declares an enum together with its [`Enumeration`](crate::Enumeration)
/// member table and [`ToBool`](crate::ToBool) impl.
///
/// Two forms are accepted. `enum` declares a plain Rust enum with explicit
/// discriminants and a primitive `repr`. `struct` declares a flag type backed
/// by `bitflags`, whose values may combine several members.
///
/// Attributes for a member follow its value after `=>`.
///
/// ```
/// use primext::{display_name, enumeration, to_flag_name_list, DisplayName};
///
/// enumeration! {
///     pub enum Color: i32 {
///         Undefined = 0,
///         Red = 1 => [DisplayName::new("Красный")],
///         Green = 2,
///     }
/// }
///
/// enumeration! {
///     pub struct Access: u32 {
///         const NONE = 0;
///         const READ = 1;
///         const WRITE = 2;
///     }
/// }
///
/// assert_eq!(display_name(Color::Red), "Красный");
/// assert_eq!(display_name(Color::Green), "");
/// assert_eq!(to_flag_name_list(Access::READ | Access::WRITE), ["READ", "WRITE"]);
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:expr $(=> [$($attr:expr),* $(,)?])?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )*
        }

        impl $crate::Enumeration for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [$crate::Member<Self>] = &[
                $(
                    $crate::Member::new(
                        Self::$variant,
                        stringify!($variant),
                        &[$($(&$attr),*)?],
                    ),
                )*
            ];

            fn discriminant(self) -> i64 {
                self as $repr as i64
            }
        }

        impl $crate::ToBool for $name {
            fn to_bool(&self) -> bool {
                $crate::boolean::enum_to_bool(*self)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $repr:ty {
            $(
                $(#[$vmeta:meta])*
                const $flag:ident = $value:expr $(=> [$($attr:expr),* $(,)?])?;
            )*
        }
    ) => {
        $crate::__private::bitflags::bitflags! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            $vis struct $name: $repr {
                $(
                    $(#[$vmeta])*
                    const $flag = $value;
                )*
            }
        }

        impl $crate::Enumeration for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [$crate::Member<Self>] = &[
                $(
                    $crate::Member::new(
                        Self::$flag,
                        stringify!($flag),
                        &[$($(&$attr),*)?],
                    ),
                )*
            ];

            #[allow(clippy::cast_possible_wrap, clippy::cast_lossless)]
            fn discriminant(self) -> i64 {
                self.bits() as i64
            }

            fn from_discriminant(value: i64) -> Option<Self> {
                <$repr>::try_from(value).ok().map(Self::from_bits_retain)
            }
        }

        impl $crate::ToBool for $name {
            fn to_bool(&self) -> bool {
                $crate::boolean::enum_to_bool(*self)
            }
        }
    };
}
