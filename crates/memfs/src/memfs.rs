//! MemFS 文件系统实现
//!
//! 宿主的每个请求都在这里落到目录树、文件数据和句柄状态上。
//!
//! 锁规则：
//!
//! - 根目录放在一把读写锁里，查找持读锁，增删改名持写锁
//! - 读写和改变长度只在读锁下克隆文件的 `Arc`，随后释放读锁再操作文件数据
//! - 加锁顺序：目录树 → 句柄状态 → 文件数据 → 文件元数据

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use sync::{RwLock, SpinLock};
use vfs::{
    CreationMode, DiskFreeSpace, EntryInfo, EntryKind, FileAccess, FileAttributes, FileOptions,
    FileShare, FileSystem, FsError, HandleInfo, PathTarget, TimeSpec, VolumeInfo, is_valid_name,
    parse_path, vfs_ops,
};

use crate::config::{FS_NAME, MAX_COMPONENT_LENGTH, MountOptions};
use crate::entry::{AddError, Directory, Entry};
use crate::file::FileNode;
use crate::stats::MemFsStats;

/// 路径解析的结果
enum Node<'a> {
    Dir(&'a Directory),
    File(&'a Arc<FileNode>),
}

/// 在目录树中查找路径目标
fn resolve<'a>(root: &'a Directory, target: &PathTarget<'_>) -> Result<Node<'a>, FsError> {
    match target {
        PathTarget::Root => Ok(Node::Dir(root)),
        PathTarget::Child { parent, name } => match root.dir(parent)?.get_entry(name) {
            Some(Entry::Directory(dir)) => Ok(Node::Dir(dir)),
            Some(Entry::File(file)) => Ok(Node::File(file)),
            None => Err(FsError::NotFound),
        },
    }
}

/// 内存文件系统
pub struct MemFs {
    /// 根目录（全局结构锁）
    root: RwLock<Directory>,

    /// 容量统计
    stats: Arc<SpinLock<MemFsStats>>,

    /// 挂载选项
    options: MountOptions,
}

impl MemFs {
    /// 以默认选项创建
    pub fn new() -> Arc<Self> {
        Self::with_options(MountOptions::default())
    }

    /// 以给定选项创建
    pub fn with_options(options: MountOptions) -> Arc<Self> {
        let stats = Arc::new(SpinLock::new(MemFsStats::new(options.max_bytes)));
        log::debug!(
            "memfs: new volume {:?} at {:?}, max_bytes={}",
            options.volume_label,
            options.mount_point,
            options.max_bytes
        );
        Arc::new(Self {
            root: RwLock::new(Directory::new_root()),
            stats,
            options,
        })
    }

    /// 挂载选项
    pub fn options(&self) -> &MountOptions {
        &self.options
    }

    /// 所有文件数据占用的字节数
    pub fn used_bytes(&self) -> usize {
        self.stats.lock().used_bytes
    }

    /// 查找文件并返回其引用，目录树锁在返回前释放
    fn lookup_file(&self, path: &str) -> Result<Arc<FileNode>, FsError> {
        let target = parse_path(path)?;
        let root = self.root.read();
        match resolve(&root, &target)? {
            Node::File(file) => Ok(file.clone()),
            Node::Dir(_) => Err(FsError::KindMismatch),
        }
    }

    /// 打开已存在的文件
    fn open_existing(
        file: &FileNode,
        mode: CreationMode,
        delete_on_close: bool,
    ) -> Result<(), FsError> {
        let mut handles = file.handles();
        if !handles.can_open(delete_on_close) {
            log::debug!(
                "memfs: delete-on-close requested on a file open {} times",
                handles.open_count
            );
            return Err(FsError::GenericFailure);
        }
        if mode == CreationMode::Truncate {
            file.resize(0)?;
        }
        handles.open(delete_on_close);
        Ok(())
    }
}

impl FileSystem for MemFs {
    fn create_file(
        &self,
        path: &str,
        access: FileAccess,
        share: FileShare,
        mode: CreationMode,
        options: FileOptions,
        info: &mut HandleInfo,
    ) -> Result<(), FsError> {
        log::trace!(
            "memfs: create_file {:?} mode={:?} access={:?} share={:?} options={:?}",
            path,
            mode,
            access,
            share,
            options
        );
        let delete_on_close = options.contains(FileOptions::DELETE_ON_CLOSE);

        let (parent, name) = match parse_path(path)? {
            PathTarget::Root => {
                info.is_directory = true;
                return Ok(());
            }
            PathTarget::Child { parent, name } => (parent, name),
        };

        let mut root = self.root.write();
        let dir = root.dir_mut(&parent)?;

        let existing = match dir.get_entry(name) {
            Some(Entry::Directory(_)) => {
                info.is_directory = true;
                return Ok(());
            }
            Some(Entry::File(file)) => Some(file.clone()),
            None => None,
        };

        if let Some(file) = existing {
            match mode {
                CreationMode::CreateNew => return Err(FsError::AlreadyExists),
                CreationMode::Create => {
                    dir.remove_entry(name)?;
                }
                _ => {
                    Self::open_existing(&file, mode, delete_on_close)?;
                    info.is_directory = false;
                    return Ok(());
                }
            }
        } else if !mode.permits_creation() {
            return Err(FsError::NotFound);
        }

        dir.add_file(name, delete_on_close, self.stats.clone())?;
        info.is_directory = false;
        Ok(())
    }

    fn open_directory(&self, path: &str, info: &mut HandleInfo) -> Result<(), FsError> {
        let target = parse_path(path)?;
        let root = self.root.read();
        match resolve(&root, &target)? {
            Node::Dir(_) => {
                info.is_directory = true;
                Ok(())
            }
            Node::File(_) => Err(FsError::KindMismatch),
        }
    }

    fn create_directory(&self, path: &str, info: &mut HandleInfo) -> Result<(), FsError> {
        let (parent, name) = match parse_path(path)? {
            PathTarget::Root => return Err(FsError::AlreadyExists),
            PathTarget::Child { parent, name } => (parent, name),
        };

        let mut root = self.root.write();
        root.dir_mut(&parent)?.add_directory(name)?;
        info.is_directory = true;
        Ok(())
    }

    fn close_file(&self, path: &str) -> Result<(), FsError> {
        let (parent, name) = match parse_path(path) {
            Ok(PathTarget::Child { parent, name }) => (parent, name),
            _ => return Ok(()),
        };

        let mut root = self.root.write();
        let Ok(dir) = root.dir_mut(&parent) else {
            return Ok(());
        };
        let file = match dir.get_entry(name) {
            Some(Entry::File(file)) => file.clone(),
            _ => return Ok(()),
        };

        if file.handles().close() {
            dir.remove_entry(name)?;
            log::debug!("memfs: {:?} deleted on close", path);
        }
        Ok(())
    }

    fn read_file(&self, path: &str, buf: &mut [u8], offset: i64) -> Result<usize, FsError> {
        self.lookup_file(path)?.read_at(offset, buf)
    }

    fn write_file(&self, path: &str, buf: &[u8], offset: i64) -> Result<usize, FsError> {
        self.lookup_file(path)?
            .write_at(offset, buf)
            .inspect_err(|e| log::debug!("memfs: write {:?} at {} failed: {}", path, offset, e))
    }

    fn set_end_of_file(&self, path: &str, length: i64) -> Result<(), FsError> {
        self.lookup_file(path)?
            .resize(length)
            .inspect_err(|e| log::debug!("memfs: resize {:?} to {} failed: {}", path, length, e))
    }

    fn get_file_information(&self, path: &str) -> Result<EntryInfo, FsError> {
        let target = parse_path(path)?;
        let root = self.root.read();
        Ok(match resolve(&root, &target)? {
            Node::Dir(dir) => dir.info(),
            Node::File(file) => file.info(),
        })
    }

    fn find_files(&self, path: &str) -> Result<Vec<EntryInfo>, FsError> {
        let target = parse_path(path)?;
        let root = self.root.read();

        let (dir, parent) = match &target {
            PathTarget::Root => (&*root, &*root),
            PathTarget::Child { parent, name } => {
                let parent = root.dir(parent)?;
                match parent.get_entry(name) {
                    Some(Entry::Directory(dir)) => (dir, parent),
                    Some(Entry::File(_)) => return Err(FsError::KindMismatch),
                    None => return Err(FsError::NotFound),
                }
            }
        };

        let mut entries = Vec::with_capacity(dir.len() + 2);
        entries.push(dir.info().renamed("."));
        entries.push(parent.info().renamed(".."));
        entries.extend(dir.list_entries().map(Entry::info));
        Ok(entries)
    }

    fn set_file_attributes(&self, path: &str, attributes: FileAttributes) -> Result<(), FsError> {
        let target = parse_path(path)?;
        let mut root = self.root.write();
        let result = match target {
            PathTarget::Root => root.set_attributes(attributes),
            PathTarget::Child { parent, name } => {
                match root.dir_mut(&parent)?.get_entry_mut(name) {
                    Some(Entry::Directory(dir)) => dir.set_attributes(attributes),
                    Some(Entry::File(file)) => file.set_attributes(attributes),
                    None => Err(FsError::NotFound),
                }
            }
        };
        result.inspect_err(|e| {
            log::debug!(
                "memfs: set attributes {:#x} on {:?} rejected: {}",
                attributes.bits(),
                path,
                e
            )
        })
    }

    fn set_file_time(
        &self,
        path: &str,
        _created: TimeSpec,
        _accessed: TimeSpec,
        _modified: TimeSpec,
    ) -> Result<(), FsError> {
        // 时间戳只由读写维护，宿主的设置请求被接受但忽略
        log::trace!("memfs: set_file_time {:?} ignored", path);
        Ok(())
    }

    fn delete_file(&self, path: &str) -> Result<(), FsError> {
        let (parent, name) = match parse_path(path)? {
            PathTarget::Root => return Err(FsError::KindMismatch),
            PathTarget::Child { parent, name } => (parent, name),
        };

        let mut root = self.root.write();
        let dir = root.dir_mut(&parent)?;
        match dir.get_entry(name) {
            Some(Entry::File(_)) => dir.remove_entry(name).map(drop),
            Some(Entry::Directory(_)) => Err(FsError::KindMismatch),
            None => Err(FsError::NotFound),
        }
    }

    fn delete_directory(&self, path: &str) -> Result<(), FsError> {
        let (parent, name) = match parse_path(path)? {
            PathTarget::Root => {
                log::warn!("memfs: refusing to delete the root directory");
                return Err(FsError::GenericFailure);
            }
            PathTarget::Child { parent, name } => (parent, name),
        };

        let mut root = self.root.write();
        let dir = root.dir_mut(&parent)?;
        match dir.get_entry(name) {
            Some(Entry::Directory(sub)) => {
                if !sub.is_empty() {
                    log::debug!("memfs: {:?} removed with {} children", path, sub.len());
                }
                dir.remove_entry(name).map(drop)
            }
            Some(Entry::File(_)) => Err(FsError::KindMismatch),
            None => Err(FsError::NotFound),
        }
    }

    fn move_file(&self, path: &str, new_path: &str, replace: bool) -> Result<(), FsError> {
        let src = parse_path(path)?;
        let dst = parse_path(new_path)?;

        let (src_parent, src_name) = match &src {
            PathTarget::Root => return Err(FsError::GenericFailure),
            PathTarget::Child { parent, name } => (parent, *name),
        };
        let (dst_parent, dst_name) = match &dst {
            PathTarget::Root if replace => return Err(FsError::GenericFailure),
            PathTarget::Root => return Err(FsError::AlreadyExists),
            PathTarget::Child { parent, name } => (parent, *name),
        };

        let src_comps = src.components();
        let dst_comps = dst.components();

        let mut root = self.root.write();

        // 全部检查在任何修改之前完成
        let src_kind = root
            .dir(src_parent)?
            .get_entry(src_name)
            .ok_or(FsError::NotFound)?
            .kind();
        // 同一路径：目标即源本身，允许覆盖时不做任何事，不会先删掉源
        if src_comps == dst_comps {
            return if replace {
                Ok(())
            } else {
                Err(FsError::AlreadyExists)
            };
        }
        if !is_valid_name(dst_name) {
            return Err(FsError::InvalidName);
        }
        if src_kind == EntryKind::Directory && dst_comps.starts_with(&src_comps) {
            log::debug!("memfs: cannot move {:?} beneath itself", path);
            return Err(FsError::GenericFailure);
        }
        let dst_exists = root.dir(dst_parent)?.get_entry(dst_name).is_some();
        if dst_exists {
            if !replace {
                return Err(FsError::AlreadyExists);
            }
            if src_comps.starts_with(&dst_comps) {
                log::debug!("memfs: cannot replace {:?}, an ancestor of {:?}", new_path, path);
                return Err(FsError::GenericFailure);
            }
            root.dir_mut(dst_parent)?.remove_entry(dst_name)?;
        }

        let mut entry = root.dir_mut(src_parent)?.remove_entry(src_name)?;
        entry.set_name(dst_name);
        let attached = match root.dir_mut(dst_parent) {
            Ok(dir) => dir.add_entry(dst_name, entry),
            Err(error) => Err(AddError { error, entry }),
        };

        if let Err(AddError { error, mut entry }) = attached {
            log::warn!(
                "memfs: move {:?} -> {:?} failed ({}), restoring source",
                path,
                new_path,
                error
            );
            entry.set_name(src_name);
            match root.dir_mut(src_parent) {
                Ok(dir) => {
                    if let Err(e) = dir.add_entry(src_name, entry) {
                        log::warn!("memfs: could not restore {:?}: {}", path, e.error);
                    }
                }
                Err(e) => log::warn!("memfs: could not restore {:?}: {}", path, e),
            }
            return Err(FsError::GenericFailure);
        }

        log::trace!("memfs: moved {:?} -> {:?}", path, new_path);
        Ok(())
    }

    fn get_disk_free_space(&self) -> Result<DiskFreeSpace, FsError> {
        let (max_bytes, remaining) = {
            let stats = self.stats.lock();
            (stats.max_bytes, stats.remaining())
        };

        Ok(match remaining {
            Some(remaining) => DiskFreeSpace {
                free_bytes_available: remaining as u64,
                total_bytes: max_bytes as u64,
                total_free_bytes: remaining as u64,
            },
            None => {
                let status = vfs_ops().memory_status();
                DiskFreeSpace {
                    free_bytes_available: status.avail_page_file,
                    total_bytes: status.total_page_file,
                    total_free_bytes: status.avail_page_file,
                }
            }
        })
    }

    fn get_volume_information(&self) -> Result<VolumeInfo, FsError> {
        Ok(VolumeInfo {
            volume_label: self.options.volume_label.clone(),
            fs_name: String::from(FS_NAME),
            max_component_length: MAX_COMPONENT_LENGTH,
        })
    }

    fn unmount(&self) -> Result<(), FsError> {
        log::debug!(
            "memfs: unmounted {:?}, {} bytes in use",
            self.options.mount_point,
            self.used_bytes()
        );
        Ok(())
    }
}
