use std::fmt;
use serde::{Deserialize, Deserializer};
use crate::util::lenient::string_or_number;

/// Identifier of the user whose activities are shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        string_or_number(deserializer).map(UserId)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The user record of the backend, of which only the identifier is used.
#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct User {
    #[serde(rename = "UserID")]
    pub id: UserId
}
