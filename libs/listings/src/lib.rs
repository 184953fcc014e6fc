//! Data layer for the classified listings application
//!
//! Two entities make up the model: [`User`], a poster identity, and
//! [`Item`], an individual listing that references the user who posted it.
//! Both validate every field on assignment and persist themselves against a
//! PostgreSQL pool supplied by the caller, one store round-trip per
//! operation. Routing, rendering, and pool ownership belong to the
//! consuming application.

pub mod error;
pub mod models;
pub mod schema;
pub mod validation;

pub use error::{FieldError, PersistenceError};
pub use models::{Item, User};
