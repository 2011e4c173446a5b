use std::sync::{RwLockReadGuard, RwLockWriteGuard};

use catalog::{Catalog, SharedCatalog};

use crate::config::AppConfig;
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub catalog: SharedCatalog,
    pub config: AppConfig,
}

impl AppState {
    /// State backed by a fresh, empty catalog.
    pub fn new(config: AppConfig) -> Self {
        Self {
            catalog: Catalog::new().into_shared(),
            config,
        }
    }

    pub fn read_catalog(&self) -> Result<RwLockReadGuard<'_, Catalog>, AppError> {
        self.catalog
            .read()
            .map_err(|_| AppError::Internal("Catalog lock poisoned".into()))
    }

    /// Exclusive access for the whole of one write operation.
    pub fn write_catalog(&self) -> Result<RwLockWriteGuard<'_, Catalog>, AppError> {
        self.catalog
            .write()
            .map_err(|_| AppError::Internal("Catalog lock poisoned".into()))
    }
}
