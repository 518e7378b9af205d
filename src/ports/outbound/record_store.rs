use crate::recommendation::domain::ImageRecord;
use crate::shared::Result;

/// RecordStore port for persisted scan results
///
/// Records are keyed by their tag-qualified image name; `upsert` replaces
/// the whole record, never merges fields.
pub trait RecordStore {
    /// Loads every persisted record.
    fn load_all(&self) -> Result<Vec<ImageRecord>>;

    /// True when a record for the tag-qualified `name` already exists.
    fn contains(&self, name: &str) -> Result<bool>;

    /// Inserts or fully replaces the record for `record.name`.
    fn upsert(&self, record: &ImageRecord) -> Result<()>;

    /// Deletes all records.
    fn reset(&self) -> Result<()>;
}
