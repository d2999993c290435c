//! 条目元数据
//!
//! 文件系统实现对外只暴露元数据快照 [`EntryInfo`]，宿主据此填充目录列表和
//! 属性查询结果。快照是值拷贝，之后条目本身的变化不会反映到已返回的快照上。

use alloc::string::String;
use uapi::fs::FileAttributes;
use uapi::time::TimeSpec;

/// 条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// 普通文件
    File,
    /// 目录
    Directory,
}

/// 条目元数据快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// 条目名称（根目录为空串）
    pub name: String,
    /// 属性位
    pub attributes: FileAttributes,
    /// 创建时间
    pub created: TimeSpec,
    /// 最后访问时间
    pub accessed: TimeSpec,
    /// 最后修改时间
    pub modified: TimeSpec,
    /// 长度（字节），目录恒为 0
    pub length: u64,
}

impl EntryInfo {
    /// 条目类型，由目录属性位决定
    pub fn kind(&self) -> EntryKind {
        if self.attributes.is_directory() {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }

    /// 是否为目录
    pub fn is_directory(&self) -> bool {
        self.kind() == EntryKind::Directory
    }

    /// 返回改名后的副本（用于目录列表中的 `.` 和 `..`）
    pub fn renamed(mut self, name: &str) -> Self {
        self.name = String::from(name);
        self
    }
}

/// 宿主为每次打开维护的上下文
///
/// 文件系统在打开/创建时填写，宿主在后续调用中据此区分文件与目录。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandleInfo {
    /// 打开的是否为目录
    pub is_directory: bool,
}
