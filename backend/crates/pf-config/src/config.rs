use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, ServerConfig,
    UploadConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub upload: UploadConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PF_CONFIG_DIR env var, else use ./.pf/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PF_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: PF_CONFIG_DIR env var > ./.pf/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("PF_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".pf"))
    }

    /// Validate all configuration. Call after load() to fail at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.upload.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn upload_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.upload.dir))
    }

    /// Full log file path when file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(filename) => {
                let dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: HS256 (secret {}), issuer={}, ttl={}s",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.issuer,
            self.auth.token_ttl_secs
        );
        info!(
            "  password hashing: argon2id m={}KiB t={} p={}",
            self.auth.hash_memory_kib, self.auth.hash_iterations, self.auth.hash_parallelism
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  upload: dir={}, max={} bytes",
            self.upload.dir, self.upload.max_bytes
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PF_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PF_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("PF_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("PF_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_string("PF_AUTH_ISSUER", &mut self.auth.issuer);
        Self::apply_env_parse("PF_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);
        Self::apply_env_parse("PF_AUTH_HASH_MEMORY_KIB", &mut self.auth.hash_memory_kib);
        Self::apply_env_parse("PF_AUTH_HASH_ITERATIONS", &mut self.auth.hash_iterations);
        Self::apply_env_parse(
            "PF_AUTH_HASH_PARALLELISM",
            &mut self.auth.hash_parallelism,
        );

        // Logging
        Self::apply_env_parse("PF_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PF_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PF_LOG_FILE", &mut self.logging.file);

        // Upload
        Self::apply_env_string("PF_UPLOAD_DIR", &mut self.upload.dir);
        Self::apply_env_parse("PF_UPLOAD_MAX_BYTES", &mut self.upload.max_bytes);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
