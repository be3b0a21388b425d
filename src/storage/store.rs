use super::codec::{self, BatchFile};
use super::error::Result;
use super::file;
use super::record::Record;
use std::path::{Path, PathBuf};

/// A batch of records persisted to a single file.
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encode `records` and replace the file contents with them.
    pub fn save(&self, records: &[Record]) -> Result<()> {
        let encoded = codec::encode_batch(records)?;
        tracing::debug!(
            "encoded {} records into {} bytes",
            records.len(),
            encoded.len()
        );
        file::write_file(&self.path, &encoded)?;
        tracing::info!("wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<Vec<Record>> {
        Ok(self.load_envelope()?.records)
    }

    pub fn load_envelope(&self) -> Result<BatchFile> {
        let data = file::read_file(&self.path)?;
        tracing::debug!("read {} bytes from {}", data.len(), self.path.display());
        let envelope = codec::decode_envelope(&data).map_err(|e| {
            tracing::warn!("could not decode {}: {}", self.path.display(), e);
            e
        })?;
        tracing::info!(
            "loaded {} records written at {}",
            envelope.records.len(),
            envelope.written_at
        );
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::batch::build_sample_batch;
    use crate::storage::error::{DecodeError, StoreError};
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_save_load_through_disk() {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path().join("data.dat"));
        let records = build_sample_batch();

        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn test_second_save_replaces_first() {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path().join("data.dat"));
        let records = build_sample_batch();

        store.save(&records).unwrap();
        store.save(&records[..2]).unwrap();
        assert_eq!(store.load().unwrap(), records[..2].to_vec());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path().join("missing.dat"));

        let err = store.load().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let store = RecordStore::new(temp_file.path());

        match store.load() {
            Err(StoreError::Decoding(DecodeError::Empty)) => {}
            other => panic!("expected empty input error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_truncated_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path().join("data.dat"));
        store.save(&build_sample_batch()).unwrap();

        let bytes = std::fs::read(store.path()).unwrap();
        std::fs::write(store.path(), &bytes[..bytes.len() / 2]).unwrap();

        match store.load() {
            Err(StoreError::Decoding(DecodeError::Truncated { .. })) => {}
            other => panic!("expected truncation error, got {:?}", other),
        }
    }
}
