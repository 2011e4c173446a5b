use crate::entity::{Attribute, Entity};
use crate::error::Result;

/// Keyed store for a single record kind.
pub trait Repository<T: Entity>: Send + Sync {
    /// Store `entity` under its id, replacing any record with the same id.
    fn add(&mut self, entity: T);

    fn get(&self, id: &str) -> Option<&T>;

    /// Every stored record, in insertion order.
    fn get_all(&self) -> Vec<&T>;

    /// Apply a partial update and return the updated record.
    ///
    /// Fails with `NotFound` when `id` is absent and with `Validation` when
    /// the merged record breaks a field rule; in both cases nothing changes.
    fn update(&mut self, id: &str, patch: T::Patch) -> Result<&T>;

    /// Remove the record with `id`.
    ///
    /// Returns `true` if a record was removed, `false` if none existed.
    fn delete(&mut self, id: &str) -> bool;

    /// First record whose attribute `name` equals `value`. Linear scan.
    fn find_by_attribute(&self, name: &str, value: Attribute<'_>) -> Option<&T> {
        self.get_all()
            .into_iter()
            .find(|entity| entity.attribute(name) == Some(value))
    }

    /// Every record whose attribute `name` equals `value`. Linear scan.
    fn filter_by_attribute(&self, name: &str, value: Attribute<'_>) -> Vec<&T> {
        self.get_all()
            .into_iter()
            .filter(|entity| entity.attribute(name) == Some(value))
            .collect()
    }
}
