use crate::{error::CatalogError, record::FileRecord};

/// Owns every record, split into a live set and an archived set.
///
/// Both sets keep insertion order. Name lookups scan the live set and take the
/// first match; duplicate names are allowed and never disambiguated.
#[derive(Debug, Default)]
pub struct Catalog {
    live: Vec<FileRecord>,
    archived: Vec<FileRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: FileRecord) {
        self.live.push(record);
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.live.iter().position(|r| r.name() == name)
    }

    fn live_mut(&mut self, name: &str) -> Result<&mut FileRecord, CatalogError> {
        self.live
            .iter_mut()
            .find(|r| r.name() == name)
            .ok_or_else(|| CatalogError::NotFound(name.to_owned()))
    }

    /// First live record with this name. Archived records are not visible.
    pub fn find_by_name(&self, name: &str) -> Option<&FileRecord> {
        self.live.iter().find(|r| r.name() == name)
    }

    /// Move the first live match to the archived set. There is no way back.
    pub fn archive(&mut self, name: &str) -> Result<(), CatalogError> {
        let pos = self
            .position(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_owned()))?;

        let record = self.live.remove(pos);
        self.archived.push(record);
        Ok(())
    }

    /// Permanently remove the first live match.
    ///
    /// Without `confirmed` nothing changes and `Ok(None)` is returned. The
    /// removed record is handed back to the caller and is not archived.
    pub fn delete(
        &mut self,
        name: &str,
        confirmed: bool,
    ) -> Result<Option<FileRecord>, CatalogError> {
        let pos = self
            .position(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_owned()))?;

        if !confirmed {
            return Ok(None);
        }

        Ok(Some(self.live.remove(pos)))
    }

    pub fn set_modification_date(&mut self, name: &str, date: &str) -> Result<(), CatalogError> {
        self.live_mut(name)?.set_modification_date(date);
        Ok(())
    }

    pub fn add_tag(&mut self, name: &str, tag: &str) -> Result<(), CatalogError> {
        self.live_mut(name)?.add_tag(tag);
        Ok(())
    }

    /// The type-specific "open" action for a live record.
    pub fn open(&self, name: &str) -> Result<String, CatalogError> {
        self.find_by_name(name)
            .map(FileRecord::open_description)
            .ok_or_else(|| CatalogError::NotFound(name.to_owned()))
    }

    pub fn all_live(&self) -> &[FileRecord] {
        &self.live
    }

    pub fn all_archived(&self) -> &[FileRecord] {
        &self.archived
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn archived_len(&self) -> usize {
        self.archived.len()
    }
}

impl Extend<FileRecord> for Catalog {
    fn extend<T: IntoIterator<Item = FileRecord>>(&mut self, iter: T) {
        self.live.extend(iter);
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
