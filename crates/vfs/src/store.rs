//! 存储介质操作 trait 定义
//!
//! 此模块定义了 VFS 层对外部存储介质的依赖接口：一个公共的索引记录
//! 文件，加上以非负整数编号的扇区。介质对路径一无所知；核心也不关心
//! 介质如何实现打开与截断。后端（内存存储、宿主文件）实现此 trait，
//! 并在构造 [`crate::Vfs`] 时传入。

use alloc::string::String;
use alloc::vec::Vec;

use crate::VfsError;
use crate::sector::SectorId;

/// 扇区写入方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// 截断后写入，旧内容丢弃
    Truncate,
    /// 追加到现有内容之后
    Append,
}

/// 存储介质操作
///
/// 所有方法都在单次调用体内完成打开、使用和关闭；核心不跨操作持有
/// 任何介质句柄。
pub trait StoreOps: Send + Sync {
    // ========== 索引记录文件 ==========

    /// 索引记录文件是否存在
    fn index_exists(&self) -> bool;

    /// 创建空的索引记录文件
    fn create_index(&self) -> Result<(), VfsError>;

    /// 整体读出索引记录，每条记录一行
    ///
    /// 无法以读方式打开时返回 [`VfsError::CannotOpen`]。
    fn read_index(&self) -> Result<Vec<String>, VfsError>;

    /// 整体重写索引记录
    ///
    /// 无法以写方式打开时返回 [`VfsError::CannotOpen`]。首次写入时
    /// 允许隐式创建记录文件。
    fn write_index(&self, lines: &[String]) -> Result<(), VfsError>;

    // ========== 扇区 ==========

    /// 读出扇区的全部行
    ///
    /// 扇区无法打开（包括从未写入过的扇区）时返回
    /// [`VfsError::CannotOpen`]。
    fn read_sector(&self, id: SectorId) -> Result<Vec<String>, VfsError>;

    /// 向扇区写入若干行
    ///
    /// 扇区不存在时创建。核心自身只发出截断写；追加方式是边界契约的
    /// 一部分，后端必须同样支持。
    fn write_sector(
        &self,
        id: SectorId,
        lines: &[String],
        mode: WriteMode,
    ) -> Result<(), VfsError>;
}
