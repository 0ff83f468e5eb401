//! Shell 配置常量

/// 索引记录文件在介质根目录下的文件名
pub const INDEX_FILE_NAME: &str = "index.txt";

/// 默认的介质挂载目录
pub const DEFAULT_ROOT: &str = "sdcard";
