//! Transaction types

use crate::wire;
use serde::Serialize;

/// A purchase record.
///
/// Neither `product_id` nor `username` is checked against the product and
/// user collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transaction {
    #[serde(rename = "productID")]
    pub product_id: String,
    pub username: String,
    #[serde(serialize_with = "wire::number")]
    pub amount: f64,
}

wire::lenient_deserialize!(Transaction {
    product_id => "productID",
    username => "username",
    amount => "amount",
});

impl Transaction {
    pub fn new(product_id: impl Into<String>, username: impl Into<String>, amount: f64) -> Self {
        Self {
            product_id: product_id.into(),
            username: username.into(),
            amount,
        }
    }
}
