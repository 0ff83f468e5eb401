//! SectorFS 存储后端
//!
//! 提供实现 [`vfs::StoreOps`] 的具体存储介质。目前包含完全驻留内存的
//! [`RamStore`]，用于测试和开发；宿主文件系统后端由 shell 二进制
//! 提供。

#![no_std]

extern crate alloc;

mod ram;

pub use ram::RamStore;
