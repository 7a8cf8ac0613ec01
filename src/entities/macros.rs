//! Macros for reducing builder boilerplate
//!
//! Every builder keeps its fields as `Option<T>` so `build()` can tell an
//! unset field from a set one. These macros generate the move-based setters
//! (`fn field(mut self, value) -> Self`).

/// Setters taking the field type as-is
///
/// # Example
/// ```rust,ignore
/// impl CandleBuilder {
///     builder_setters! {
///         /// Catalogue number
///         candle_number: u32,
///         price: f64,
///     }
/// }
/// ```
macro_rules! builder_setters {
    ($( $(#[$meta:meta])* $field:ident : $ty:ty ),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $field(mut self, $field: $ty) -> Self {
                self.$field = Some($field);
                self
            }
        )*
    };
}

/// Setters for `String` fields accepting anything `Into<String>`
macro_rules! builder_string_setters {
    ($( $(#[$meta:meta])* $field:ident ),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $field(mut self, $field: impl Into<String>) -> Self {
                self.$field = Some($field.into());
                self
            }
        )*
    };
}

/// Unwrap a required builder field or fail with `MissingField`
macro_rules! required {
    ($entity:expr, $builder:ident . $field:ident) => {
        $builder.$field.ok_or_else(|| {
            $crate::core::error::ValidationError::missing($entity, stringify!($field))
        })?
    };
}
