//! 路径解析（字符串侧）
//!
//! 宿主传入的都是绝对路径，`/` 与 `\` 均可作为分隔符。本模块只负责把路径
//! 拆成“父目录组件链 + 末端名称”，沿目录树逐级查找由文件系统实现完成。
//!
//! 约定：
//!
//! - 前导分隔符产生的空组件被丢弃；不以分隔符开头的路径视为无法解析
//! - 单独一个分隔符表示根目录，需要特殊处理：直接拆分会得到两个空组件，
//!   而根目录下并不存在名为空串的子项
//! - `.` 与 `..` 不做特殊解析，它们不是合法名称，因此查找时自然不存在

use alloc::vec::Vec;

use crate::FsError;

/// 路径分隔符
const SEPARATORS: [char; 2] = ['/', '\\'];

/// 解析后的路径目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathTarget<'a> {
    /// 根目录
    Root,
    /// 根目录之下的某个条目
    Child {
        /// 从根开始的父目录组件链（不含末端名称）
        parent: Vec<&'a str>,
        /// 末端名称（可能为空或非法，由调用方按操作决定如何处理）
        name: &'a str,
    },
}

impl<'a> PathTarget<'a> {
    /// 从根开始的完整组件链，根目录为空链
    pub fn components(&self) -> Vec<&'a str> {
        match self {
            PathTarget::Root => Vec::new(),
            PathTarget::Child { parent, name } => {
                let mut comps = parent.clone();
                comps.push(*name);
                comps
            }
        }
    }

    /// 末端名称，根目录没有名称
    pub fn name(&self) -> Option<&'a str> {
        match self {
            PathTarget::Root => None,
            PathTarget::Child { name, .. } => Some(*name),
        }
    }

    /// 是否为根目录
    pub fn is_root(&self) -> bool {
        matches!(self, PathTarget::Root)
    }
}

/// 检查名称是否可作为目录中的条目名
///
/// 非空、不含任一分隔符、且不是 `.` 或 `..`。
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(SEPARATORS)
}

/// 路径是否恰好是根目录（单个分隔符）
pub fn is_root_path(path: &str) -> bool {
    path == "/" || path == "\\"
}

/// 将绝对路径解析为父目录组件链和末端名称
pub fn parse_path(path: &str) -> Result<PathTarget<'_>, FsError> {
    if is_root_path(path) {
        return Ok(PathTarget::Root);
    }

    let mut parts = path.split(SEPARATORS);

    // 绝对路径的第一个组件必然为空
    if parts.next() != Some("") {
        log::trace!("vfs: relative path rejected: {:?}", path);
        return Err(FsError::NotFound);
    }

    let mut parent: Vec<&str> = parts.collect();
    let name = parent.pop().ok_or(FsError::NotFound)?;

    Ok(PathTarget::Child { parent, name })
}
