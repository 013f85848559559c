//! Shared services for the editor components.
//!
//! Built once in `main` from the command line and handed to the launcher,
//! so every component reads the same photo source, exporter and save
//! target through `use_services`.

use std::sync::Arc;

use dioxus::prelude::*;
use polaroid_core::{Exporter, PicsumSource, SaveTarget};

#[derive(Clone)]
pub struct AppServices {
    pub source: PicsumSource,
    pub exporter: Arc<Exporter>,
    pub save_target: Arc<dyn SaveTarget>,
}

/// Hook to access the shared services from context.
pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}
