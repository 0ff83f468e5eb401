//! VFS 错误类型
//!
//! 定义了虚拟文件系统的错误种类，每种错误对应一个稳定的短错误码，
//! 可通过 [`VfsError::code()`] 获取，供 shell 以 `[E#]` 前缀展示。

use alloc::string::String;
use core::fmt;

/// VFS 错误类型
///
/// 每个变体对应一种失败，最多携带一个用于诊断的路径字符串。
/// 所有错误对发起它的操作都是终止性的：核心不重试，也不掩盖扇区与
/// 索引两步持久化之间的不一致窗口。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    /// 索引记录文件不存在且无法创建
    InitFailed,
    /// 索引文件或扇区无法打开（读或写）
    CannotOpen,
    /// 路径没有对应的有效记录
    NotFound(String),
    /// 路径已有有效记录，且调用方未要求覆盖
    AlreadyExists(String),
}

impl VfsError {
    /// 获取稳定的短错误码
    pub fn code(&self) -> &'static str {
        match self {
            VfsError::InitFailed => "E1",
            VfsError::CannotOpen => "E2",
            VfsError::NotFound(_) => "E3",
            VfsError::AlreadyExists(_) => "E4",
        }
    }
}

impl fmt::Display for VfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.code())?;
        match self {
            VfsError::InitFailed => write!(f, "index store missing and cannot be created"),
            VfsError::CannotOpen => write!(f, "cannot open index or sector"),
            VfsError::NotFound(path) => write!(f, "file {path} not found"),
            VfsError::AlreadyExists(path) => write!(f, "file {path} already exists"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(VfsError::InitFailed.code(), "E1");
        assert_eq!(VfsError::CannotOpen.code(), "E2");
        assert_eq!(VfsError::NotFound(String::from("/x")).code(), "E3");
        assert_eq!(VfsError::AlreadyExists(String::from("/x")).code(), "E4");
    }

    #[test]
    fn test_display_includes_code_and_path() {
        let err = VfsError::NotFound(String::from("/log.txt"));
        assert_eq!(err.to_string(), "[E3] file /log.txt not found");
    }
}
