//! 同步原语
//!
//! 向文件系统核心提供基本的锁：
//!
//! - [`SpinLock`] - 互斥自旋锁，用于单个文件的数据、元数据和句柄状态
//! - [`RwLock`] - 读写自旋锁，用于整棵目录树的结构锁
//!
//! 两者都基于 `lock_api` 构建，原始锁只负责原子状态，守卫与数据访问由
//! `lock_api` 提供。宿主驱动框架的工作线程可能并发调用，所有锁都不可重入。

#![no_std]

mod raw_spin_lock;
mod rwlock;
mod spin_lock;

pub use raw_spin_lock::*;
pub use rwlock::*;
pub use spin_lock::*;
