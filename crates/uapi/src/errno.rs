//! 宿主框架使用的状态码
//!
//! 宿主约定：0 表示成功，失败时返回负的 Win32 错误码；
//! 未细分的失败统一返回 -1。

/// 操作成功
pub const STATUS_SUCCESS: i32 = 0;

/// 未细分的失败
pub const STATUS_GENERIC_FAILURE: i32 = -1;

/// 文件不存在
pub const ERROR_FILE_NOT_FOUND: i32 = 2;
/// 目标已存在
pub const ERROR_ALREADY_EXISTS: i32 = 183;
