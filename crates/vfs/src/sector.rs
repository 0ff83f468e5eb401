//! 扇区分配
//!
//! 为新建路径选择扇区编号：从 0 开始扫描，返回第一个十进制文本形式
//! 未被任何现存记录占用的整数。被删除记录的编号会被之后的分配重新
//! 使用（最小空闲整数规则）。

use alloc::string::ToString;

use crate::index::Index;

/// 扇区编号
///
/// 持久化时使用十进制文本形式；对存储介质而言只是不透明标识。
pub type SectorId = u32;

/// 分配最小的空闲扇区编号
///
/// 分配是索引内容的纯函数：相同的索引总是得到相同的结果，没有随机
/// 性，也没有跨调用的分配计数器。最坏情况下扫描到当前记录数加一。
pub fn allocate(index: &Index) -> SectorId {
    let mut id: SectorId = 0;
    while index.find_by_sector(&id.to_string()).is_some() {
        id += 1;
    }
    id
}
