//! Identifiers for persisted records
//!
//! Ids are assigned by the surrounding persistence layer; a value of zero
//! means "not yet assigned".

use serde::{Deserialize, Serialize};

/// Identifier of the user that owns a record
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Whether a real user id has been assigned
    pub fn is_assigned(self) -> bool {
        self.0 > 0
    }
}

/// Identifier of a record (loan, income, bill, ...) within its own table
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(pub i64);
