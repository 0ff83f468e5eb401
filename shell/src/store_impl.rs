//! StoreOps trait 实现
//!
//! 此模块实现 vfs crate 的 [`StoreOps`] trait，把一个宿主目录桥接为
//! 存储介质：目录本身即介质，`index.txt` 是索引记录文件，扇区以其
//! 十进制编号命名为目录下的普通文件。每次调用独立打开和关闭文件，
//! 不跨操作持有句柄。

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::warn;
use vfs::{SectorId, StoreOps, VfsError, WriteMode};

use crate::config::INDEX_FILE_NAME;

/// 以宿主目录为介质的扇区存储
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// 挂载介质目录
    ///
    /// 目录不存在即视为介质未插入，返回错误。
    pub fn mount(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("storage medium not present at {}", root.display()),
            ));
        }
        Ok(Self { root })
    }

    fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE_NAME)
    }

    fn sector_path(&self, id: SectorId) -> PathBuf {
        self.root.join(id.to_string())
    }

    fn read_lines(path: &Path) -> Result<Vec<String>, VfsError> {
        let content = fs::read_to_string(path).map_err(|err| {
            warn!("cannot open {} for reading: {err}", path.display());
            VfsError::CannotOpen
        })?;
        Ok(content.lines().map(String::from).collect())
    }

    fn write_lines(path: &Path, lines: &[String], mode: WriteMode) -> Result<(), VfsError> {
        let mut options = OpenOptions::new();
        options.write(true).create(true);
        match mode {
            WriteMode::Truncate => options.truncate(true),
            WriteMode::Append => options.append(true),
        };
        let mut file = options.open(path).map_err(|err| {
            warn!("cannot open {} for writing: {err}", path.display());
            VfsError::CannotOpen
        })?;
        for line in lines {
            writeln!(file, "{line}").map_err(|_| VfsError::CannotOpen)?;
        }
        Ok(())
    }
}

impl StoreOps for FileStore {
    fn index_exists(&self) -> bool {
        self.index_path().is_file()
    }

    fn create_index(&self) -> Result<(), VfsError> {
        File::create(self.index_path()).map_err(|err| {
            warn!("cannot create index file: {err}");
            VfsError::CannotOpen
        })?;
        Ok(())
    }

    fn read_index(&self) -> Result<Vec<String>, VfsError> {
        Self::read_lines(&self.index_path())
    }

    fn write_index(&self, lines: &[String]) -> Result<(), VfsError> {
        Self::write_lines(&self.index_path(), lines, WriteMode::Truncate)
    }

    fn read_sector(&self, id: SectorId) -> Result<Vec<String>, VfsError> {
        Self::read_lines(&self.sector_path(id))
    }

    fn write_sector(
        &self,
        id: SectorId,
        lines: &[String],
        mode: WriteMode,
    ) -> Result<(), VfsError> {
        Self::write_lines(&self.sector_path(id), lines, mode)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use vfs::Vfs;

    use super::*;

    #[test]
    fn test_mount_requires_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileStore::mount(dir.path()).is_ok());
        assert!(FileStore::mount(dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_index_lifecycle_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::mount(dir.path()).unwrap();

        assert!(!store.index_exists());
        store.create_index().unwrap();
        assert!(store.index_exists());
        assert!(store.read_index().unwrap().is_empty());

        store.write_index(&["/a/0".to_string()]).unwrap();
        assert_eq!(store.read_index().unwrap(), vec!["/a/0"]);
    }

    #[test]
    fn test_sector_files_named_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::mount(dir.path()).unwrap();

        store
            .write_sector(3, &["line".to_string()], WriteMode::Truncate)
            .unwrap();
        assert!(dir.path().join("3").is_file());
        assert_eq!(store.read_sector(3).unwrap(), vec!["line"]);
    }

    #[test]
    fn test_read_missing_sector_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::mount(dir.path()).unwrap();
        assert!(matches!(store.read_sector(0), Err(VfsError::CannotOpen)));
    }

    #[test]
    fn test_append_mode_extends_sector_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::mount(dir.path()).unwrap();

        store
            .write_sector(0, &["a".to_string()], WriteMode::Truncate)
            .unwrap();
        store
            .write_sector(0, &["b".to_string()], WriteMode::Append)
            .unwrap();
        assert_eq!(store.read_sector(0).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_vfs_over_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::mount(dir.path()).unwrap();
        let vfs = Vfs::new(Arc::new(store)).unwrap();

        assert_eq!(vfs.create("/log.txt", false).unwrap(), 0);
        vfs.write("/log.txt", "hello").unwrap();
        assert_eq!(vfs.read("/log.txt").unwrap(), "hello\n");
        assert_eq!(
            fs::read_to_string(dir.path().join(INDEX_FILE_NAME)).unwrap(),
            "/log.txt/0\n"
        );
        assert_eq!(fs::read_to_string(dir.path().join("0")).unwrap(), "hello\n");

        vfs.delete("/log.txt").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("0")).unwrap(), "");
        assert!(!vfs.exists("/log.txt").unwrap());
    }
}
