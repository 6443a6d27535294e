use super::contents::CartContents;
use super::errors::CartError;
use crate::domain::shared::value_objects::Username;

/// One stored cart row. A user's cart may be spread over several of these.
#[derive(Debug, Clone, PartialEq)]
pub struct CartDetail {
    pub id: i64,
    pub username: Username,
    /// Serialized product ids, see [`CartContents`].
    pub contents: String,
    pub cost: f64,
}

impl CartDetail {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i64, username: Username, contents: String, cost: f64) -> Self {
        Self {
            id,
            username,
            contents,
            cost,
        }
    }

    pub fn decode_contents(&self) -> Result<CartContents, CartError> {
        CartContents::decode(&self.contents)
    }
}
