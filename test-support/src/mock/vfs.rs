//! VFS 运行时操作的 Mock 实现

use core::sync::atomic::{AtomicI64, Ordering};

use uapi::sysinfo::MemoryStatus;
use uapi::time::TimeSpec;

/// Mock 时钟的起点：2024-01-01T00:00:00Z
pub const MOCK_EPOCH_SECS: i64 = 1_704_067_200;

/// Mock 报告的页文件总量（16 GiB）
pub const MOCK_TOTAL_PAGE_FILE: u64 = 16 << 30;

/// Mock 报告的可用页文件（8 GiB）
pub const MOCK_AVAIL_PAGE_FILE: u64 = 8 << 30;

/// Mock 的 VFS 操作
///
/// 时钟每次读取前进一秒，保证先后两次读取严格递增；内存状态固定不变。
pub struct MockVfsOps {
    clock: AtomicI64,
}

impl MockVfsOps {
    pub const fn new() -> Self {
        Self {
            clock: AtomicI64::new(MOCK_EPOCH_SECS),
        }
    }
}

impl Default for MockVfsOps {
    fn default() -> Self {
        Self::new()
    }
}

impl vfs::VfsOps for MockVfsOps {
    fn timespec_now(&self) -> TimeSpec {
        TimeSpec::new(self.clock.fetch_add(1, Ordering::Relaxed), 0)
    }

    fn memory_status(&self) -> MemoryStatus {
        MemoryStatus {
            memory_load: 50,
            total_phys: 16 << 30,
            avail_phys: 8 << 30,
            total_page_file: MOCK_TOTAL_PAGE_FILE,
            avail_page_file: MOCK_AVAIL_PAGE_FILE,
            total_virtual: 128 << 40,
            avail_virtual: 127 << 40,
        }
    }
}

/// 全局 Mock 实例
pub static MOCK_VFS_OPS: MockVfsOps = MockVfsOps::new();
