use crate::{ConfigError, ConfigErrorResult, DEFAULT_UPLOAD_DIRECTORY, DEFAULT_UPLOAD_MAX_BYTES};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Directory for uploaded images, relative to the config directory
    pub dir: String,
    pub max_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_UPLOAD_DIRECTORY),
            max_bytes: DEFAULT_UPLOAD_MAX_BYTES,
        }
    }
}

impl UploadConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_bytes == 0 {
            return Err(ConfigError::upload("upload.max_bytes must be > 0"));
        }

        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::upload(
                "upload.dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
