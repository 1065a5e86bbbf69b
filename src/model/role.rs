use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Organizational role tag, assigned once per user by the membership
/// provider and immutable afterwards.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Owner,
    Hr,
    Finance,
    Manager,
    Employee,
}

impl Role {
    /// Parses a role tag from a membership record. Foreign or malformed
    /// tags yield `None`; downstream permission lookups treat that as the
    /// least-privilege default.
    pub fn parse(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tags() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("owner"), Some(Role::Owner));
        assert_eq!(Role::parse("hr"), Some(Role::Hr));
        assert_eq!(Role::parse("finance"), Some(Role::Finance));
        assert_eq!(Role::parse("manager"), Some(Role::Manager));
        assert_eq!(Role::parse("employee"), Some(Role::Employee));
    }

    #[test]
    fn foreign_tag_is_none() {
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        assert_eq!(serde_json::to_string(&Role::Finance).unwrap(), "\"finance\"");
        let role: Role = serde_json::from_str("\"manager\"").unwrap();
        assert_eq!(role, Role::Manager);
    }
}
