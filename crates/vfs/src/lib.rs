//! SectorFS 虚拟文件系统核心
//!
//! 在只提供编号扇区和一个公共索引文件的存储介质之上，提供以路径寻址
//! 的层级命名空间。没有真正的目录对象：目录语义完全由路径字符串结构
//! 合成。
//!
//! - [`path`] - 路径规范化（只保证单个前导分隔符，刻意宽容）
//! - [`index`] - 路径到扇区的持久映射，整读整写
//! - [`sector`] - 最小空闲扇区分配
//! - [`store`] - 对外部存储介质的依赖接口
//! - [`Vfs`] - 由以上组成的公共操作契约
//!
//! 持久化没有事务支持：扇区截断与索引重写是两个独立步骤，其间的失败
//! 窗口是已知且已记录的限制。

#![no_std]
#![allow(clippy::module_inception)]

extern crate alloc;

pub mod error;
pub mod index;
pub mod path;
pub mod sector;
pub mod store;

mod vfs;

// Re-export error
pub use error::VfsError;

// Re-export index
pub use index::{Entry, Index};

// Re-export path
pub use path::{SEPARATOR, is_directory, normalize_path};

// Re-export sector
pub use sector::SectorId;

// Re-export store
pub use store::{StoreOps, WriteMode};

// Re-export vfs
pub use vfs::Vfs;
