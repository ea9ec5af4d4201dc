//! Validation of the Elasticsearch logs field group of a registry configuration.
//!
//! The validator checks that the backend settings are present and then probes
//! the cluster once with the configured credentials.

pub mod config;
pub mod credential_checker;
pub mod field_group;
pub mod validation_error;
pub mod validator;

pub use credential_checker::{CredentialChecker, HttpCredentialChecker};
pub use field_group::{ElasticsearchConfig, FieldGroupConfig, LogsModelConfig};
pub use validation_error::ValidationError;
pub use validator::FieldGroupValidator;
