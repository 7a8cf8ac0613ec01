//! Core module containing the traits, errors and checks shared by every entity

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;
pub mod validation;

pub use entity::Entity;
pub use error::{ErrorKind, ErrorResponse, ValidationError, ValidationResult};
pub use id::{NumberSequence, generate_unique_id};
pub use repository::Repository;
