//! Product types

use crate::wire;
use serde::Serialize;

/// Catalog entry. The id is assigned by the caller and is not checked for
/// uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "wire::number")]
    pub price: f64,
}

wire::lenient_deserialize!(Product {
    id => "id",
    name => "name",
    price => "price",
});

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}
