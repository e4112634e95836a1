use pf_access::AccessLayer;

use std::path::PathBuf;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub access: AccessLayer,
    /// Directory uploaded images are written to and served from
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}
