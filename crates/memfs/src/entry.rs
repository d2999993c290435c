//! 目录树
//!
//! 目录独占其子项：`Entry::Directory` 直接内嵌子目录，文件以 `Arc` 持有，
//! 使读写可以在释放目录树锁之后继续访问文件数据。子项名称在同一目录内唯一，
//! 遍历顺序无意义（`BTreeMap` 的顺序不构成约定）。

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;

use vfs::{EntryInfo, EntryKind, FileAttributes, FsError, TimeSpec, is_valid_name, vfs_ops};

use crate::attr;
use crate::file::FileNode;
use crate::stats::MemFsStats;
use sync::SpinLock;

/// 条目公共元数据
#[derive(Debug, Clone)]
pub struct EntryMeta {
    /// 名称
    pub name: String,
    /// 属性位
    pub attributes: FileAttributes,
    /// 创建时间
    pub created: TimeSpec,
    /// 最后访问时间
    pub accessed: TimeSpec,
    /// 最后修改时间
    pub modified: TimeSpec,
}

impl EntryMeta {
    /// 以当前时间创建
    pub fn new(name: &str, attributes: FileAttributes) -> Self {
        let now = vfs_ops().timespec_now();
        Self {
            name: String::from(name),
            attributes,
            created: now,
            accessed: now,
            modified: now,
        }
    }

    /// 生成快照
    pub fn info(&self, length: u64) -> EntryInfo {
        EntryInfo {
            name: self.name.clone(),
            attributes: self.attributes,
            created: self.created,
            accessed: self.accessed,
            modified: self.modified,
            length,
        }
    }

    /// 更新名称
    pub fn set_name(&mut self, name: &str) {
        self.name = String::from(name);
    }

    /// 更新访问时间
    pub fn touch_accessed(&mut self) {
        self.accessed = vfs_ops().timespec_now();
    }

    /// 更新修改时间（同时视为一次访问）
    pub fn touch_modified(&mut self) {
        let now = vfs_ops().timespec_now();
        self.modified = now;
        self.accessed = now;
    }
}

/// 目录树中的条目
pub enum Entry {
    /// 目录
    Directory(Directory),
    /// 文件
    File(Arc<FileNode>),
}

impl Entry {
    /// 条目类型
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Directory(_) => EntryKind::Directory,
            Entry::File(_) => EntryKind::File,
        }
    }

    /// 元数据快照
    pub fn info(&self) -> EntryInfo {
        match self {
            Entry::Directory(dir) => dir.info(),
            Entry::File(file) => file.info(),
        }
    }

    /// 更新存储的名称
    pub fn set_name(&mut self, name: &str) {
        match self {
            Entry::Directory(dir) => dir.meta.set_name(name),
            Entry::File(file) => file.set_name(name),
        }
    }
}

/// 添加子项失败，附带未能放入的条目
pub struct AddError {
    /// 失败原因
    pub error: FsError,
    /// 原样交还的条目
    pub entry: Entry,
}

/// 目录
pub struct Directory {
    /// 元数据
    meta: EntryMeta,

    /// 子项
    children: BTreeMap<String, Entry>,
}

impl Directory {
    /// 创建空目录
    pub fn new(name: &str) -> Self {
        Self {
            meta: EntryMeta::new(name, attr::default_attributes(EntryKind::Directory)),
            children: BTreeMap::new(),
        }
    }

    /// 创建根目录（名称为空）
    pub fn new_root() -> Self {
        Self::new("")
    }

    /// 元数据快照，目录长度恒为 0
    pub fn info(&self) -> EntryInfo {
        self.meta.info(0)
    }

    /// 设置属性位
    pub fn set_attributes(&mut self, requested: FileAttributes) -> Result<(), FsError> {
        self.meta.attributes = attr::validate(EntryKind::Directory, requested)?;
        Ok(())
    }

    /// 子项数量
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// 是否没有子项
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// 在此目录下新建文件
    pub fn add_file(
        &mut self,
        name: &str,
        delete_on_close: bool,
        stats: Arc<SpinLock<MemFsStats>>,
    ) -> Result<Arc<FileNode>, FsError> {
        self.check_new_name(name)?;
        let file = FileNode::new(name, delete_on_close, stats);
        self.insert(name, Entry::File(file.clone()));
        Ok(file)
    }

    /// 在此目录下新建子目录
    pub fn add_directory(&mut self, name: &str) -> Result<&mut Directory, FsError> {
        self.check_new_name(name)?;
        self.insert(name, Entry::Directory(Directory::new(name)));
        match self.children.get_mut(name) {
            Some(Entry::Directory(dir)) => Ok(dir),
            _ => Err(FsError::GenericFailure),
        }
    }

    /// 放入一个已有条目（重命名/移动使用）
    ///
    /// 条目存储的名称由调用方负责与 `name` 保持一致。失败时条目原样交还。
    pub fn add_entry(&mut self, name: &str, entry: Entry) -> Result<(), AddError> {
        if let Err(error) = self.check_new_name(name) {
            return Err(AddError { error, entry });
        }
        self.insert(name, entry);
        Ok(())
    }

    /// 移除子项并交出所有权
    pub fn remove_entry(&mut self, name: &str) -> Result<Entry, FsError> {
        let entry = self.children.remove(name).ok_or(FsError::NotFound)?;
        self.meta.touch_modified();
        Ok(entry)
    }

    /// 查找子项
    pub fn get_entry(&self, name: &str) -> Option<&Entry> {
        self.children.get(name)
    }

    /// 查找子项（可变）
    pub fn get_entry_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.children.get_mut(name)
    }

    /// 所有子项
    pub fn list_entries(&self) -> impl Iterator<Item = &Entry> {
        self.children.values()
    }

    /// 沿组件链逐级进入子目录
    ///
    /// 任一组件不存在或不是目录时返回 `NotFound`。
    pub fn dir(&self, components: &[&str]) -> Result<&Directory, FsError> {
        let mut current = self;
        for name in components {
            current = match current.children.get(*name) {
                Some(Entry::Directory(dir)) => dir,
                _ => return Err(FsError::NotFound),
            };
        }
        Ok(current)
    }

    /// 沿组件链逐级进入子目录（可变）
    pub fn dir_mut(&mut self, components: &[&str]) -> Result<&mut Directory, FsError> {
        let mut current = self;
        for name in components {
            current = match current.children.get_mut(*name) {
                Some(Entry::Directory(dir)) => dir,
                _ => return Err(FsError::NotFound),
            };
        }
        Ok(current)
    }

    fn check_new_name(&self, name: &str) -> Result<(), FsError> {
        if !is_valid_name(name) {
            return Err(FsError::InvalidName);
        }
        if self.children.contains_key(name) {
            return Err(FsError::AlreadyExists);
        }
        Ok(())
    }

    fn insert(&mut self, name: &str, entry: Entry) {
        self.children.insert(String::from(name), entry);
        self.meta.touch_modified();
    }
}
