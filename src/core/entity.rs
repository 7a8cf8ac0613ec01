//! Entity trait defining the identity shared by every aggregate

use std::fmt;
use std::hash::Hash;

/// Base trait for all entities in the system.
///
/// An entity has an identity that survives changes to its other fields:
/// - id: Unique identifier (numeric or UUID depending on the entity)
/// - entity_type: Stable lower-case type name (e.g., "candle", "order")
///
/// Value objects (`Address`, `ContactDetails`, `PersonInfo`) and
/// `OrderItem` have no identity and do not implement this trait.
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    /// Identifier type (e.g. `u32` or `Uuid`)
    type Id: Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync;

    /// The singular type name used in errors and logs
    fn entity_type() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Self::Id;
}

/// Implement [`Entity`] for a type whose id is returned by an accessor
#[macro_export]
macro_rules! impl_entity {
    ($type:ty, $name:literal, $id_type:ty, $accessor:ident) => {
        impl $crate::core::entity::Entity for $type {
            type Id = $id_type;

            fn entity_type() -> &'static str {
                $name
            }

            fn id(&self) -> Self::Id {
                self.$accessor()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Wick {
        number: u32,
    }

    impl Wick {
        fn number(&self) -> u32 {
            self.number
        }
    }

    impl_entity!(Wick, "wick", u32, number);

    #[test]
    fn test_macro_generated_entity() {
        let wick = Wick { number: 7 };
        assert_eq!(Wick::entity_type(), "wick");
        assert_eq!(wick.id(), 7);
    }
}
