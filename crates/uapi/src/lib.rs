//! 与宿主驱动框架共用的定义和声明
//!
//! 包含文件属性、打开/创建模式、状态码、时间戳和内存状态等类型，
//! 确保文件系统核心与宿主框架之间的数值约定一致

#![no_std]
#![allow(dead_code)]
// uapi 中包含大量与宿主框架一致的常量定义；逐项补 `///` 噪声较大。
#![allow(missing_docs)]

pub mod errno;
pub mod fcntl;
pub mod fs;
pub mod sysinfo;
pub mod time;
