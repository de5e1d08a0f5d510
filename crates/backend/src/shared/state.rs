use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::a001_configuration_document::ConfigurationService;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub configurations: Arc<ConfigurationService>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(configurations: ConfigurationService, static_dir: PathBuf) -> Self {
        Self {
            configurations: Arc::new(configurations),
            static_dir,
        }
    }

    pub fn index_html(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
