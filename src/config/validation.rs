use super::models::Config;
use thiserror::Error;

pub const MAX_LINE_SPACING: usize = 10;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Store directory must not be empty")]
    EmptyStoreDir,

    #[error("line_spacing ({actual}) exceeds limit of {limit}")]
    LineSpacingTooLarge { actual: usize, limit: usize },

    #[error("Default query limit must be positive")]
    InvalidDefaultLimit,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_store(config)?;
    validate_server(config)?;
    Ok(())
}

fn validate_store(config: &Config) -> Result<(), ValidationError> {
    if config.store.dir.as_os_str().is_empty() {
        return Err(ValidationError::EmptyStoreDir);
    }

    if config.store.line_spacing > MAX_LINE_SPACING {
        return Err(ValidationError::LineSpacingTooLarge {
            actual: config.store.line_spacing,
            limit: MAX_LINE_SPACING,
        });
    }

    Ok(())
}

fn validate_server(config: &Config) -> Result<(), ValidationError> {
    if config.server.default_limit == 0 {
        return Err(ValidationError::InvalidDefaultLimit);
    }
    Ok(())
}
