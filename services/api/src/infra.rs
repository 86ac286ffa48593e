use metrics_exporter_prometheus::PrometheusHandle;
use scheme_finder::catalog::{CatalogImporter, SchemeCatalog};
use scheme_finder::config::CatalogConfig;
use scheme_finder::error::AppError;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the configured catalog file, or fall back to the built-in starter
/// catalog when none is configured.
pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<SchemeCatalog, AppError> {
    match &config.path {
        Some(path) => {
            let catalog = CatalogImporter::from_path(path)?;
            info!(path = %path.display(), schemes = catalog.len(), "loaded scheme catalog");
            Ok(catalog)
        }
        None => {
            let catalog = SchemeCatalog::standard();
            info!(schemes = catalog.len(), "using built-in scheme catalog");
            Ok(catalog)
        }
    }
}
