//! 文件系统抽象
//!
//! [`FileSystem`] 是宿主驱动框架消费的固定操作集合。宿主以路径和参数调用
//! 每个操作，操作同步执行到结束并返回结果；宿主再通过
//! [`FsError::to_status`] 将错误映射为自己的状态码。

use alloc::string::String;
use alloc::vec::Vec;
use uapi::fcntl::{CreationMode, FileAccess, FileOptions, FileShare};
use uapi::fs::FileAttributes;
use uapi::time::TimeSpec;

use crate::{EntryInfo, FsError, HandleInfo};

/// 文件系统 trait
///
/// 宿主可能从多个工作线程并发调用，实现必须自行保证同步。
pub trait FileSystem: Send + Sync {
    // ========== 打开与关闭 ==========

    /// 打开或创建条目
    ///
    /// 目标为目录时直接成功并设置 `info.is_directory`。
    fn create_file(
        &self,
        path: &str,
        access: FileAccess,
        share: FileShare,
        mode: CreationMode,
        options: FileOptions,
        info: &mut HandleInfo,
    ) -> Result<(), FsError>;

    /// 打开目录，仅当路径解析为目录时成功
    fn open_directory(&self, path: &str, info: &mut HandleInfo) -> Result<(), FsError>;

    /// 创建新目录
    fn create_directory(&self, path: &str, info: &mut HandleInfo) -> Result<(), FsError>;

    /// 句柄清理（关闭前的最后一次调用）
    fn cleanup(&self, _path: &str) -> Result<(), FsError> {
        Ok(())
    }

    /// 关闭句柄，可能触发关闭时删除
    fn close_file(&self, path: &str) -> Result<(), FsError>;

    // ========== 数据 ==========

    /// 从 `offset` 开始读取，返回实际读取的字节数
    fn read_file(&self, path: &str, buf: &mut [u8], offset: i64) -> Result<usize, FsError>;

    /// 从 `offset` 开始写入，返回实际写入的字节数
    fn write_file(&self, path: &str, buf: &[u8], offset: i64) -> Result<usize, FsError>;

    /// 刷新缓冲
    fn flush_file_buffers(&self, _path: &str) -> Result<(), FsError> {
        Ok(())
    }

    /// 设置文件长度
    fn set_end_of_file(&self, path: &str, length: i64) -> Result<(), FsError>;

    /// 设置分配大小，与 [`FileSystem::set_end_of_file`] 同义
    fn set_allocation_size(&self, path: &str, length: i64) -> Result<(), FsError> {
        self.set_end_of_file(path, length)
    }

    // ========== 元数据 ==========

    /// 获取条目元数据快照
    fn get_file_information(&self, path: &str) -> Result<EntryInfo, FsError>;

    /// 列出目录：先 `.`，再 `..`，然后是所有子项
    fn find_files(&self, path: &str) -> Result<Vec<EntryInfo>, FsError>;

    /// 设置属性位
    fn set_file_attributes(&self, path: &str, attributes: FileAttributes) -> Result<(), FsError>;

    /// 设置时间戳
    fn set_file_time(
        &self,
        path: &str,
        created: TimeSpec,
        accessed: TimeSpec,
        modified: TimeSpec,
    ) -> Result<(), FsError>;

    // ========== 结构 ==========

    /// 删除文件
    fn delete_file(&self, path: &str) -> Result<(), FsError>;

    /// 删除目录
    fn delete_directory(&self, path: &str) -> Result<(), FsError>;

    /// 重命名/移动
    fn move_file(&self, path: &str, new_path: &str, replace: bool) -> Result<(), FsError>;

    // ========== 锁 ==========

    /// 字节范围加锁
    fn lock_file(&self, _path: &str, _offset: i64, _length: i64) -> Result<(), FsError> {
        Ok(())
    }

    /// 字节范围解锁
    fn unlock_file(&self, _path: &str, _offset: i64, _length: i64) -> Result<(), FsError> {
        Ok(())
    }

    // ========== 卷 ==========

    /// 查询卷的容量与剩余空间
    fn get_disk_free_space(&self) -> Result<DiskFreeSpace, FsError>;

    /// 查询卷信息
    fn get_volume_information(&self) -> Result<VolumeInfo, FsError>;

    /// 卸载卷
    fn unmount(&self) -> Result<(), FsError> {
        Ok(())
    }
}

/// 卷空间统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskFreeSpace {
    /// 调用者可用的字节数
    pub free_bytes_available: u64,
    /// 总字节数
    pub total_bytes: u64,
    /// 空闲字节数
    pub total_free_bytes: u64,
}

/// 卷信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeInfo {
    /// 卷标
    pub volume_label: String,
    /// 文件系统名称
    pub fs_name: String,
    /// 单个路径组件的最大长度
    pub max_component_length: u32,
}
