use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// User entity as stored in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// System-assigned identifier, strictly increasing at creation
    pub id: i64,
    /// User name (unique across the directory)
    pub name: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// DTO for creating a new user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateUser {
    pub name: String,
}

impl CreateUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Query filters for listing users
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserFilter {
    /// Case-sensitive substring the user name must contain
    pub filter_name: Option<String>,
}

impl UserFilter {
    pub fn by_name(fragment: impl Into<String>) -> Self {
        Self {
            filter_name: Some(fragment.into()),
        }
    }

    /// An absent or empty filter matches every name.
    pub fn matches(&self, name: &str) -> bool {
        match self.filter_name.as_deref() {
            Some(fragment) if !fragment.is_empty() => name.contains(fragment),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_absent_matches_everything() {
        let filter = UserFilter::default();
        assert!(filter.matches("Alice"));
        assert!(filter.matches(""));
    }

    #[test]
    fn test_filter_empty_matches_everything() {
        assert!(UserFilter::by_name("").matches("Bob"));
    }

    #[test]
    fn test_filter_is_case_sensitive_substring() {
        let filter = UserFilter::by_name("li");
        assert!(filter.matches("Alice"));
        assert!(filter.matches("Charlie"));
        assert!(!filter.matches("Bob"));
        assert!(!UserFilter::by_name("al").matches("Alice"));
    }

    #[test]
    fn test_user_serializes_as_id_and_name() {
        let json = serde_json::to_value(User::new(7, "Alice")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 7, "name": "Alice" }));
    }
}
