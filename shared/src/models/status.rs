//! Record status shared by every managed entity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Active / Inactive flag stored as TEXT (`'Active'`, `'Inactive'`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }

    pub const fn is_active(&self) -> bool {
        matches!(self, Status::Active)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status text read from storage
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid status: {0}")]
pub struct InvalidStatus(pub String);

impl TryFrom<String> for Status {
    type Error = InvalidStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Active" => Ok(Status::Active),
            "Inactive" => Ok(Status::Inactive),
            _ => Err(InvalidStatus(value)),
        }
    }
}

/// `PATCH` payload toggling a record's status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_roundtrip() {
        assert_eq!(Status::try_from("Active".to_string()), Ok(Status::Active));
        assert_eq!(
            Status::try_from("Inactive".to_string()),
            Ok(Status::Inactive)
        );
        assert_eq!(
            Status::try_from("active".to_string()),
            Err(InvalidStatus("active".to_string()))
        );
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&Status::Inactive).unwrap(), "\"Inactive\"");
        let update: StatusUpdate = serde_json::from_str(r#"{"status":"Active"}"#).unwrap();
        assert_eq!(update.status, Status::Active);
        assert_eq!(Status::default(), Status::Active);
    }
}
