//! User types

use crate::wire;
use serde::Serialize;

/// User account. Usernames are expected to be unique but this is not enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: String,
    pub password: String,
}

wire::lenient_deserialize!(User {
    username => "username",
    password => "password",
});

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
