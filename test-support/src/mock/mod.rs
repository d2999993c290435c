//! Mock 实现模块
//!
//! 提供运行时依赖的 Mock 实现，用于测试

pub mod vfs;
