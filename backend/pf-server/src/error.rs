use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] pf_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] pf_db::DbError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] pf_auth::AuthError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
