//! Repository trait for the persistence collaborator
//!
//! The construction layer never calls a repository itself; this trait only
//! fixes the contract that a storage layer built on top of it must meet.
//! Every factory-produced entity is a candidate for [`Repository::save`].

use crate::core::entity::Entity;
use anyhow::Result;

/// Storage contract for a single entity type
///
/// Implementations own their own synchronisation; the entities handed to
/// them are plain immutable values.
pub trait Repository<T: Entity>: Send + Sync {
    /// Persist an entity, returning its identifier
    fn save(&self, entity: T) -> Result<T::Id>;

    /// Get an entity by ID
    fn find_by_id(&self, id: &T::Id) -> Result<Option<T>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Candle;

    // Any repository can be driven generically
    #[allow(dead_code)]
    fn save_all<T, R>(repository: &R, entities: Vec<T>) -> Result<Vec<T::Id>>
    where
        T: Entity,
        R: Repository<T>,
    {
        entities.into_iter().map(|e| repository.save(e)).collect()
    }

    struct Discard;

    impl Repository<Candle> for Discard {
        fn save(&self, entity: Candle) -> Result<u32> {
            Ok(entity.candle_number())
        }

        fn find_by_id(&self, _id: &u32) -> Result<Option<Candle>> {
            Ok(None)
        }
    }

    #[test]
    fn test_trait_is_object_safe_and_generic() {
        let candle = Candle::builder()
            .candle_number(3)
            .name("Vanilla Glow")
            .price(89.99)
            .build()
            .unwrap();

        let repository: Box<dyn Repository<Candle>> = Box::new(Discard);
        assert_eq!(repository.save(candle.clone()).unwrap(), 3);
        assert!(repository.find_by_id(&3).unwrap().is_none());
        assert_eq!(save_all(&Discard, vec![candle]).unwrap(), vec![3]);
    }
}
