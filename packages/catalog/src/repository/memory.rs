use std::collections::HashMap;

use super::traits::Repository;
use crate::entity::Entity;
use crate::error::{CatalogError, Result};

/// Process-lifetime store backed by a map plus an insertion-order index.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    records: HashMap<String, T>,
    order: Vec<String>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn add(&mut self, entity: T) {
        let id = entity.id().to_string();
        if self.records.insert(id.clone(), entity).is_none() {
            self.order.push(id);
        }
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    fn get_all(&self) -> Vec<&T> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .collect()
    }

    fn update(&mut self, id: &str, patch: T::Patch) -> Result<&T> {
        let entity = self
            .records
            .get_mut(id)
            .ok_or_else(|| CatalogError::not_found(format!("{} not found", T::KIND)))?;
        entity.apply(patch)?;
        Ok(&*entity)
    }

    fn delete(&mut self, id: &str) -> bool {
        if self.records.remove(id).is_none() {
            return false;
        }
        self.order.retain(|stored| stored != id);
        true
    }
}
