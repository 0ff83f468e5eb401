//! VFS 操作
//!
//! 在索引、路径规范化和扇区分配之上构成公共契约。每个操作先整体装载
//! 索引，在内存中完成查找或变更，变更操作再把索引整体写回。扇区截断
//! 与索引重写是两个互相独立、非原子的步骤：两步之间的失败会留下已
//! 记录在案的不一致（扇区已截断而记录仍在，或反之），核心不掩盖也不
//! 修复。

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use log::{debug, info};

use crate::VfsError;
use crate::index::{Entry, Index};
use crate::path::{SEPARATOR, normalize_path};
use crate::sector::{self, SectorId};
use crate::store::{StoreOps, WriteMode};

/// 虚拟文件系统会话
///
/// 持有存储介质的句柄。假定整个会话期间只有一个逻辑执行者串行发出
/// 操作，介质由本会话独占；多进程访问同一介质不受支持。
pub struct Vfs {
    store: Arc<dyn StoreOps>,
}

impl Vfs {
    /// 初始化虚拟文件系统
    ///
    /// 索引记录文件不存在时创建为空文件；创建失败返回
    /// [`VfsError::InitFailed`]。
    pub fn new(store: Arc<dyn StoreOps>) -> Result<Self, VfsError> {
        if !store.index_exists() {
            info!("index store missing, creating empty index");
            store.create_index().map_err(|_| VfsError::InitFailed)?;
        }
        Ok(Self { store })
    }

    /// 判断路径是否存在有效记录
    pub fn exists(&self, path: &str) -> Result<bool, VfsError> {
        let path = normalize_path(path);
        let index = Index::load(&*self.store)?;
        Ok(index.contains(&path))
    }

    /// 查询路径对应的扇区
    ///
    /// 返回扇区编号的十进制文本，按值返回，调用方可在索引快照丢弃后
    /// 继续使用；没有记录时返回 `None`。
    pub fn sector_of(&self, path: &str) -> Result<Option<String>, VfsError> {
        let path = normalize_path(path);
        let index = Index::load(&*self.store)?;
        Ok(index.find(&path).map(|entry| entry.sector.clone()))
    }

    /// 列出目录下的条目
    ///
    /// 目录参数规范化后补上尾部分隔符作为边界前缀，路径以该前缀开头
    /// 的记录贡献其剩余部分。非递归时，剩余部分若还含分隔符则折叠为
    /// 第一段加尾部分隔符（合成目录名）。结果去重并保持首见顺序。
    /// 没有匹配不是错误，返回空序列。
    pub fn list(&self, dir: &str, recursive: bool) -> Result<Vec<String>, VfsError> {
        let index = Index::load(&*self.store)?;

        let mut prefix = normalize_path(dir);
        if !prefix.ends_with(SEPARATOR) {
            prefix.push(SEPARATOR);
        }

        let mut names: Vec<String> = Vec::new();
        for entry in index.entries() {
            let Some(rest) = entry.path.strip_prefix(&prefix) else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }
            let name = match rest.find(SEPARATOR) {
                Some(pos) if !recursive => format!("{}{}", &rest[..pos], SEPARATOR),
                _ => String::from(rest),
            };
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Ok(names)
    }

    /// 创建虚拟文件
    ///
    /// 路径已有记录时：要求覆盖则先执行完整的 [`Vfs::delete`]，否则
    /// 返回 [`VfsError::AlreadyExists`]。随后分配最小空闲扇区、追加
    /// 记录并整体写回索引，最后把扇区后备存储截断为空。返回分配到的
    /// 扇区编号。
    pub fn create(&self, path: &str, overwrite: bool) -> Result<SectorId, VfsError> {
        let path = normalize_path(path);
        let mut index = Index::load(&*self.store)?;

        if index.contains(&path) {
            if !overwrite {
                return Err(VfsError::AlreadyExists(path));
            }
            self.delete(&path)?;
            index = Index::load(&*self.store)?;
        }

        let id = sector::allocate(&index);
        index.push(Entry::new(path.clone(), id));
        index.save(&*self.store)?;
        self.store.write_sector(id, &[], WriteMode::Truncate)?;

        debug!("created {path} in sector {id}");
        Ok(id)
    }

    /// 删除虚拟文件
    ///
    /// 没有记录时返回 [`VfsError::NotFound`]。先把记录的扇区内容截断
    /// 为空，再写回移除该记录后的索引，其余记录顺序保持不变。扇区
    /// 编号随之可被重新分配。
    pub fn delete(&self, path: &str) -> Result<(), VfsError> {
        let path = normalize_path(path);
        let mut index = Index::load(&*self.store)?;

        let entry = index
            .find(&path)
            .ok_or_else(|| VfsError::NotFound(path.clone()))?;
        let id = entry.sector_id()?;

        self.store.write_sector(id, &[], WriteMode::Truncate)?;
        index.remove(&path);
        index.save(&*self.store)?;

        debug!("deleted {path}, sector {id} freed");
        Ok(())
    }

    /// 写入虚拟文件
    ///
    /// 路径没有记录时先以覆盖方式创建（绝不因路径不存在而失败）。
    /// 数据按换行符切分，一行一条记录，截断写入扇区；返回（可能新
    /// 分配的）扇区编号。
    pub fn write(&self, path: &str, data: &str) -> Result<SectorId, VfsError> {
        let path = normalize_path(path);
        let index = Index::load(&*self.store)?;

        let id = match index.find(&path) {
            Some(entry) => entry.sector_id()?,
            None => self.create(&path, true)?,
        };

        let lines: Vec<String> = data.split('\n').map(String::from).collect();
        self.store.write_sector(id, &lines, WriteMode::Truncate)?;
        Ok(id)
    }

    /// 读出虚拟文件
    ///
    /// 没有记录时返回 [`VfsError::NotFound`]。逐行拼接，每行（含最后
    /// 一行）补一个换行符：与写入构成忠实而非净化的往返。
    pub fn read(&self, path: &str) -> Result<String, VfsError> {
        let path = normalize_path(path);
        let index = Index::load(&*self.store)?;

        let entry = index
            .find(&path)
            .ok_or_else(|| VfsError::NotFound(path))?;
        let lines = self.store.read_sector(entry.sector_id()?)?;

        let mut text = String::new();
        for line in &lines {
            text.push_str(line);
            text.push('\n');
        }
        Ok(text)
    }

    /// 取索引记录的快照（写入顺序）
    pub fn entries(&self) -> Result<Vec<Entry>, VfsError> {
        let index = Index::load(&*self.store)?;
        Ok(index.entries().to_vec())
    }
}
