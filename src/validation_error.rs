use derive_more::derive::Display;
use serde::Serialize;

pub const POLICY_REQUIRED: &str = "A is Required";
pub const POLICY_AUTH: &str = "Auth";

/// A single policy violation found in a field group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
#[display("[{policy}] {}: {message}", tags.join(", "))]
pub struct ValidationError {
    /// Field paths the violation applies to, outermost key first
    pub tags: Vec<String>,
    pub policy: String,
    pub message: String,
}

impl ValidationError {
    /// Error for a required field that is missing or zero
    pub fn required(tag: &str) -> Self {
        Self {
            tags: vec![tag.to_string()],
            policy: String::from(POLICY_REQUIRED),
            message: format!("{} is required for Elasticsearch", tag),
        }
    }

    /// Error for a failed live credential check against the given fields
    pub fn auth(tags: &[&str]) -> Self {
        Self {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            policy: String::from(POLICY_AUTH),
            message: String::from("Could not validate Elasticsearch credentials"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_error_names_the_field() {
        let err = ValidationError::required("LOGS_MODEL_CONFIG");
        assert_eq!(err.tags, vec!["LOGS_MODEL_CONFIG"]);
        assert_eq!(err.policy, "A is Required");
        assert_eq!(err.message, "LOGS_MODEL_CONFIG is required for Elasticsearch");
    }

    #[test]
    fn display_lists_policy_tags_and_message() {
        let err = ValidationError::auth(&["A", "B"]);
        assert_eq!(
            err.to_string(),
            "[Auth] A, B: Could not validate Elasticsearch credentials"
        );
    }

    #[test]
    fn serializes_as_lowercase_record() {
        let err = ValidationError::required("X");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["tags"][0], "X");
        assert_eq!(json["policy"], "A is Required");
        assert_eq!(json["message"], "X is required for Elasticsearch");
    }
}
