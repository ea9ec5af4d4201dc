use crate::credential_checker::CredentialChecker;
use crate::field_group::{ELASTICSEARCH_LOGS_MODEL, FieldGroupConfig};
use crate::validation_error::ValidationError;

pub const TAG_LOGS_MODEL_CONFIG: &str = "LOGS_MODEL_CONFIG";
pub const TAG_ELASTICSEARCH_CONFIG: &str = "LOGS_MODEL_CONFIG.ELASTIC_SEARCH_CONFIG";
pub const TAG_HOST: &str = "LOGS_MODEL_CONFIG.ELASTIC_SEARCH_CONFIG.HOST";
pub const TAG_PORT: &str = "LOGS_MODEL_CONFIG.ELASTIC_SEARCH_CONFIG.PORT";
pub const TAG_ACCESS_KEY: &str = "LOGS_MODEL_CONFIG.ELASTIC_SEARCH_CONFIG.ACCESS_KEY";
pub const TAG_SECRET_KEY: &str = "LOGS_MODEL_CONFIG.ELASTIC_SEARCH_CONFIG.SECRET_KEY";

/// Validates the Elasticsearch logs field group
pub struct FieldGroupValidator<C> {
    checker: C,
}

impl<C: CredentialChecker> FieldGroupValidator<C> {
    pub fn new(checker: C) -> Self {
        Self { checker }
    }

    /// Checks the field group and returns every violation found, empty when valid
    ///
    /// # Behavior
    /// - Groups using another logs model are not checked
    /// - A missing `LOGS_MODEL_CONFIG` or `elasticsearch_config` section stops
    ///   the check with a single error
    /// - Host, port and both keys are checked independently
    /// - The credential check always runs once both sections exist, even if
    ///   required fields are missing, and adds one `Auth` error on failure
    pub async fn validate(&self, fg: &FieldGroupConfig) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if fg.logs_model != ELASTICSEARCH_LOGS_MODEL {
            return errors;
        }

        let Some(logs_model_config) = &fg.logs_model_config else {
            errors.push(ValidationError::required(TAG_LOGS_MODEL_CONFIG));
            return errors;
        };

        let Some(es) = &logs_model_config.elasticsearch_config else {
            errors.push(ValidationError::required(TAG_ELASTICSEARCH_CONFIG));
            return errors;
        };

        if es.host.is_empty() {
            errors.push(ValidationError::required(TAG_HOST));
        }
        if es.port == 0 {
            errors.push(ValidationError::required(TAG_PORT));
        }
        if es.access_key.is_empty() {
            errors.push(ValidationError::required(TAG_ACCESS_KEY));
        }
        if es.secret_key.is_empty() {
            errors.push(ValidationError::required(TAG_SECRET_KEY));
        }

        let url = es.endpoint_url();
        log::info!("Checking Elasticsearch credentials against {}", url);

        if !self
            .checker
            .check_credentials(&url, &es.access_key, &es.secret_key)
            .await
        {
            // Each key of the rejected pair once, not the secret key twice
            errors.push(ValidationError::auth(&[TAG_ACCESS_KEY, TAG_SECRET_KEY]));
        }

        log::debug!("Elasticsearch field group produced {} validation errors", errors.len());
        errors
    }
}
