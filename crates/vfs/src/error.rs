//! VFS 错误类型
//!
//! 定义了文件系统核心的错误分类，可通过 [`FsError::to_status()`] 转换为宿主框架的状态码。

use uapi::errno::{
    ERROR_ALREADY_EXISTS, ERROR_FILE_NOT_FOUND, STATUS_GENERIC_FAILURE, STATUS_SUCCESS,
};

/// VFS 错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    /// 路径无法解析到已有条目，或中间组件缺失/不是目录
    NotFound,
    /// 创建或重命名的目标已被占用
    AlreadyExists,
    /// 名称为空、为 `.`/`..` 或包含路径分隔符
    InvalidName,
    /// 请求的属性位不允许用于该类条目
    InvalidAttributeTransition,
    /// 期望文件却是目录，或反之
    KindMismatch,
    /// 缓冲区长度或容量超出可表示/允许的范围
    CapacityExceeded,
    /// 其它本地失败（如扩容时内存分配失败）
    GenericFailure,
}

impl FsError {
    /// 转换为宿主状态码（负数）
    ///
    /// 宿主只区分“不存在”和“已存在”，其余统一为通用失败。
    pub fn to_status(&self) -> i32 {
        match self {
            FsError::NotFound => -ERROR_FILE_NOT_FOUND,
            FsError::AlreadyExists => -ERROR_ALREADY_EXISTS,
            FsError::InvalidName
            | FsError::InvalidAttributeTransition
            | FsError::KindMismatch
            | FsError::CapacityExceeded
            | FsError::GenericFailure => STATUS_GENERIC_FAILURE,
        }
    }

    /// 将操作结果折叠为宿主状态码，成功为 0
    pub fn status_of<T>(result: &Result<T, FsError>) -> i32 {
        match result {
            Ok(_) => STATUS_SUCCESS,
            Err(e) => e.to_status(),
        }
    }
}

impl core::fmt::Display for FsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FsError::NotFound => "no such file or directory",
            FsError::AlreadyExists => "file exists",
            FsError::InvalidName => "invalid name",
            FsError::InvalidAttributeTransition => "attribute not allowed for this entry",
            FsError::KindMismatch => "wrong entry kind",
            FsError::CapacityExceeded => "capacity exceeded",
            FsError::GenericFailure => "operation failed",
        };
        f.write_str(msg)
    }
}
