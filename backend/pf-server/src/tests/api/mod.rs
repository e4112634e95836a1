mod error;
mod extractors;
mod upload;
