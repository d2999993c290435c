//! 测试支持 crate
//!
//! 提供 Mock 实现和测试工具

#![no_std]

pub mod mock;

/// 注册 Mock 运行时操作
///
/// 可重复调用，每次注册的都是同一个静态实例。
pub fn init_mock_ops() {
    // SAFETY: 注册的是 'static 实例，重复注册写入相同的值
    unsafe { vfs::register_vfs_ops(&mock::vfs::MOCK_VFS_OPS) };
}
