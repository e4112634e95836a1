mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod upload_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use upload_config::UploadConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "portfolio.db";

const DEFAULT_JWT_ISSUER: &str = "https://dynamic-portfolio-tool.herokuapp.com";
/// Two days
const DEFAULT_TOKEN_TTL_SECS: u64 = 2 * 24 * 60 * 60;
const MIN_JWT_SECRET_LENGTH: usize = 32;
// Argon2id defaults (OWASP minimum profile)
const DEFAULT_HASH_MEMORY_KIB: u32 = 19 * 1024;
const DEFAULT_HASH_ITERATIONS: u32 = 2;
const DEFAULT_HASH_PARALLELISM: u32 = 1;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_UPLOAD_DIRECTORY: &str = "uploads";
/// 5 MiB
const DEFAULT_UPLOAD_MAX_BYTES: usize = 5 * 1024 * 1024;
