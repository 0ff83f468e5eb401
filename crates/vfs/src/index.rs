//! 索引：路径到扇区的持久映射
//!
//! 索引是权威的 `(path, sector)` 记录序列，整体持久化在一个公共的
//! 记录文件中，每条记录一行，格式为 `path` + 分隔符 + `sector`。
//! 路径本身可以合法地包含分隔符，因此解析以**最后一个**分隔符为分割
//! 点。记录顺序即写入顺序；查找只按路径相等比较，顺序不参与语义，
//! 但会原样暴露给打印索引的调用方。
//!
//! 索引没有增量更新：每个需要它的操作整体读入，变更后整体重写。

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::VfsError;
use crate::path::SEPARATOR;
use crate::sector::SectorId;
use crate::store::StoreOps;

/// 索引中的一条记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 规范化的绝对路径
    pub path: String,
    /// 扇区编号的十进制文本形式
    ///
    /// 保留为字符串：磁盘上缺失或无法解析的扇区部分在装载时退化为
    /// 空串，错误推迟到真正寻址该扇区时再以 [`VfsError::CannotOpen`]
    /// 暴露。
    pub sector: String,
}

impl Entry {
    /// 以给定路径和扇区编号构造记录
    pub fn new(path: String, sector: SectorId) -> Self {
        Self {
            path,
            sector: sector.to_string(),
        }
    }

    /// 从一行索引记录解析
    ///
    /// 最后一个分隔符之前是路径，之后是扇区；没有分隔符的行整行视为
    /// 路径，扇区为空串。
    pub fn parse(line: &str) -> Self {
        match line.rfind(SEPARATOR) {
            Some(pos) => Self {
                path: String::from(&line[..pos]),
                sector: String::from(&line[pos + 1..]),
            },
            None => Self {
                path: String::from(line),
                sector: String::new(),
            },
        }
    }

    /// 渲染为一行索引记录
    pub fn format(&self) -> String {
        let mut line = self.path.clone();
        line.push(SEPARATOR);
        line.push_str(&self.sector);
        line
    }

    /// 解析扇区编号
    ///
    /// 无法解析时返回 [`VfsError::CannotOpen`]：以这样的值寻址存储
    /// 介质注定失败。
    pub fn sector_id(&self) -> Result<SectorId, VfsError> {
        self.sector.parse().map_err(|_| VfsError::CannotOpen)
    }
}

/// 内存中的索引快照
#[derive(Debug)]
pub struct Index {
    entries: Vec<Entry>,
}

impl Index {
    /// 从记录文件整体装载索引
    ///
    /// 记录文件无法以读方式打开时返回 [`VfsError::CannotOpen`]。
    pub fn load(store: &dyn StoreOps) -> Result<Self, VfsError> {
        let lines = store.read_index()?;
        let entries = lines.iter().map(|line| Entry::parse(line)).collect();
        Ok(Self { entries })
    }

    /// 将索引整体重写回记录文件
    ///
    /// 这是唯一的持久化原语：没有追加日志，也没有原子换名。记录文件
    /// 无法以写方式打开时返回 [`VfsError::CannotOpen`]。
    pub fn save(&self, store: &dyn StoreOps) -> Result<(), VfsError> {
        let lines: Vec<String> = self.entries.iter().map(Entry::format).collect();
        store.write_index(&lines)
    }

    /// 全部记录（写入顺序）
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// 按路径查找记录（线性扫描）
    pub fn find(&self, path: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// 判断路径是否有记录
    pub fn contains(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    /// 按扇区文本字面量查找记录（线性扫描）
    pub fn find_by_sector(&self, sector: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.sector == sector)
    }

    /// 追加一条记录
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// 移除路径对应的记录，其余记录顺序不变
    pub fn remove(&mut self, path: &str) {
        self.entries.retain(|e| e.path != path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_parse_splits_on_last_separator() {
        let entry = Entry::parse("/a/b/c/12");
        assert_eq!(entry.path, "/a/b/c");
        assert_eq!(entry.sector, "12");
    }

    #[test]
    fn test_entry_parse_without_separator() {
        let entry = Entry::parse("garbage");
        assert_eq!(entry.path, "garbage");
        assert_eq!(entry.sector, "");
    }

    #[test]
    fn test_entry_format_round_trip() {
        let entry = Entry::new(String::from("/log.txt"), 3);
        assert_eq!(entry.format(), "/log.txt/3");
        assert_eq!(Entry::parse(&entry.format()), entry);
    }

    #[test]
    fn test_entry_sector_id_rejects_junk() {
        let entry = Entry::parse("no-slot-here");
        assert!(matches!(entry.sector_id(), Err(VfsError::CannotOpen)));
    }
}
