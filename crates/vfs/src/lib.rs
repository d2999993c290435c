//! 虚拟文件系统层
//!
//! 此 crate 定义宿主驱动框架与文件系统实现之间的契约，包括：
//!
//! - [`FileSystem`] trait - 宿主调用的固定操作集合
//! - [`FsError`] - 错误分类及其到宿主状态码的映射
//! - [`EntryInfo`] - 条目元数据快照
//! - 路径解析（字符串侧）：[`parse_path`]、[`is_valid_name`]
//! - [`VfsOps`] - 运行时依赖（时钟、内存状态）的注册

#![no_std]
#![allow(clippy::module_inception)]

extern crate alloc;

pub mod error;
pub mod ops;

mod entry;
mod file_system;
mod path;

// Re-export ops
pub use ops::{VfsOps, register_vfs_ops, vfs_ops};

// Re-export error
pub use error::FsError;

// Re-export entry
pub use entry::{EntryInfo, EntryKind, HandleInfo};

// Re-export file_system
pub use file_system::{DiskFreeSpace, FileSystem, VolumeInfo};

// Re-export path
pub use path::{PathTarget, is_root_path, is_valid_name, parse_path};

// Re-export uapi types for convenience
pub use uapi::fcntl::{CreationMode, FileAccess, FileOptions, FileShare};
pub use uapi::fs::FileAttributes;
pub use uapi::sysinfo::MemoryStatus;
pub use uapi::time::TimeSpec;
