//! 路径规范化
//!
//! 该模块实现 VFS 的路径处理。与 POSIX 解析不同，这里的规范化只保证
//! 路径以单个分隔符开头：不折叠重复分隔符，不解析 `.`/`..`，也不剥除
//! 尾部分隔符。畸形输入（空串、控制字符）不被拒绝，原样参与查找与
//! 分配；路径的合理性由调用方（shell）保证。

use alloc::format;
use alloc::string::String;

/// 路径分隔符
pub const SEPARATOR: char = '/';

/// 规范化路径
///
/// 已以分隔符开头的路径原样返回，否则在前面补一个分隔符。
pub fn normalize_path(path: &str) -> String {
    if path.starts_with(SEPARATOR) {
        String::from(path)
    } else {
        format!("{SEPARATOR}{path}")
    }
}

/// 判断路径是否表示目录
///
/// 纯字符串谓词：规范化后以分隔符结尾即视为目录，不查询索引。
/// [`crate::Vfs::list`] 合成的目录名总以分隔符结尾，因此调用方可以用
/// 它来分类列表输出。
pub fn is_directory(path: &str) -> bool {
    normalize_path(path).ends_with(SEPARATOR)
}
