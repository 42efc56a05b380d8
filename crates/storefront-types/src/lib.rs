//! Storefront Types - Pure data types shared by the server and its tests
//!
//! This crate has no runtime dependencies beyond serde, so the wire shapes can
//! be reused by clients without pulling in the HTTP stack.

pub mod wire;

pub mod product;
pub mod transaction;
pub mod user;

pub use product::*;
pub use transaction::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Initial contents for the entity store, loaded once at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub products: Vec<Product>,
    pub users: Vec<User>,
}
