//! Macro for implementing Display and FromStr for calendar name enums
//!
//! Provides one implementation for both traits so that enums naming
//! calendar concepts render and parse consistently: lowercase canonical
//! names out, case-insensitive names in.
//!
//! # Example
//!
//! ```rust
//! use calspan_domain::impl_calendar_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Granularity {
//!     Coarse,
//!     Fine,
//! }
//!
//! impl_calendar_name_conversions!(Granularity {
//!     Coarse => "coarse",
//!     Fine => "fine",
//! });
//! ```

/// Implements Display and FromStr traits for calendar name enums
///
/// This macro generates:
/// - Display trait: converts enum variants to their canonical lowercase name
/// - FromStr trait: parses case-insensitive names back to enum variants,
///   failing with an `InvalidInput` domain error naming the enum
#[macro_export]
macro_rules! impl_calendar_name_conversions {
    ($enum_name:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $name),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::errors::CalspanError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($name => Ok(Self::$variant),)+
                    _ => Err($crate::errors::CalspanError::InvalidInput(format!(
                        "unknown {} name: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}
