//! 内存模拟的扇区存储

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicBool, Ordering};

use spin::Mutex;
use vfs::{SectorId, StoreOps, VfsError, WriteMode};

/// 内存模拟的扇区存储
///
/// 用于测试和开发：索引记录文件与各扇区全部驻留内存。
pub struct RamStore {
    /// 索引记录文件内容；`None` 表示文件尚不存在
    index: Mutex<Option<Vec<String>>>,

    /// 各扇区的行内容
    sectors: Mutex<BTreeMap<SectorId, Vec<String>>>,

    /// 只读开关，用于演练打开失败
    read_only: AtomicBool,
}

impl RamStore {
    /// 创建空介质（索引记录文件尚不存在）
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            index: Mutex::new(None),
            sectors: Mutex::new(BTreeMap::new()),
            read_only: AtomicBool::new(false),
        })
    }

    /// 以给定的索引记录行创建介质
    pub fn with_index(lines: Vec<String>) -> Arc<Self> {
        Arc::new(Self {
            index: Mutex::new(Some(lines)),
            sectors: Mutex::new(BTreeMap::new()),
            read_only: AtomicBool::new(false),
        })
    }

    /// 设置只读；只读介质上的创建与写入一律失败
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::Release);
    }

    /// 获取扇区原始内容（用于调试）
    pub fn raw_sector(&self, id: SectorId) -> Option<Vec<String>> {
        self.sectors.lock().get(&id).cloned()
    }

    /// 获取索引记录原始内容（用于调试）
    pub fn raw_index(&self) -> Option<Vec<String>> {
        self.index.lock().clone()
    }

    fn writable(&self) -> Result<(), VfsError> {
        if self.read_only.load(Ordering::Acquire) {
            Err(VfsError::CannotOpen)
        } else {
            Ok(())
        }
    }
}

impl StoreOps for RamStore {
    fn index_exists(&self) -> bool {
        self.index.lock().is_some()
    }

    fn create_index(&self) -> Result<(), VfsError> {
        self.writable()?;
        let mut index = self.index.lock();
        if index.is_none() {
            *index = Some(Vec::new());
        }
        Ok(())
    }

    fn read_index(&self) -> Result<Vec<String>, VfsError> {
        self.index.lock().clone().ok_or(VfsError::CannotOpen)
    }

    fn write_index(&self, lines: &[String]) -> Result<(), VfsError> {
        self.writable()?;
        *self.index.lock() = Some(lines.to_vec());
        Ok(())
    }

    fn read_sector(&self, id: SectorId) -> Result<Vec<String>, VfsError> {
        self.sectors
            .lock()
            .get(&id)
            .cloned()
            .ok_or(VfsError::CannotOpen)
    }

    fn write_sector(
        &self,
        id: SectorId,
        lines: &[String],
        mode: WriteMode,
    ) -> Result<(), VfsError> {
        self.writable()?;
        let mut sectors = self.sectors.lock();
        match mode {
            WriteMode::Truncate => {
                sectors.insert(id, lines.to_vec());
            }
            WriteMode::Append => {
                sectors.entry(id).or_default().extend(lines.iter().cloned());
            }
        }
        Ok(())
    }
}
