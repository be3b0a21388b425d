use super::error::{Result, StoreError};
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

/// Create or truncate `path` and write `data` in full.
///
/// The handle lives only inside this function and is closed on every return.
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| StoreError::io(path, e))?;
    file.write_all(data).map_err(|e| StoreError::io(path, e))?;
    file.flush().map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| StoreError::io(path, e))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.dat");

        write_file(&path, &[1, 2, 3]).unwrap();
        assert_eq!(read_file(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_write_truncates_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.dat");

        write_file(&path, &[9; 64]).unwrap();
        write_file(&path, &[4, 5]).unwrap();
        assert_eq!(read_file(&path).unwrap(), vec![4, 5]);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.dat");

        let err = read_file(&path).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("missing.dat"));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("data.dat");

        let err = write_file(&path, &[1]).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
