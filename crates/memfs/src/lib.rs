//! # 内存文件系统 (MemFS)
//!
//! 整棵目录树和所有文件内容都保存在内存中，通过 [`vfs::FileSystem`] 暴露给
//! 宿主驱动框架。进程结束即全部丢失，不做任何持久化。
//!
//! ## 组成
//!
//! - [`entry`]: 目录树，子项名称唯一
//! - [`data`]: 每个文件的可增长数据缓冲
//! - [`handle`]: 打开计数与关闭时删除
//! - [`attr`]: 按条目类型校验属性位
//! - [`MemFs`]: 宿主操作的分发与加锁
//!
//! 使用前宿主需通过 [`vfs::register_vfs_ops`] 注册时钟和内存状态来源。

#![no_std]
#![doc = "内存文件系统实现"]

extern crate alloc;

pub mod attr;
pub mod config;
pub mod data;
pub mod entry;
pub mod file;
pub mod handle;
pub mod stats;

mod memfs;

pub use config::MountOptions;
pub use entry::{Directory, Entry};
pub use file::FileNode;
pub use handle::HandleState;
pub use memfs::MemFs;
pub use stats::MemFsStats;

#[cfg(test)]
mod tests;
