//! 容量统计

use vfs::FsError;

/// MemFS 统计信息
///
/// 所有文件的数据缓冲共享同一份统计（`Arc<SpinLock<MemFsStats>>`）。
#[derive(Debug, Clone, Default)]
pub struct MemFsStats {
    /// 已占用的数据字节数
    pub used_bytes: usize,

    /// 最大允许的字节数（0 表示无限制）
    pub max_bytes: usize,
}

impl MemFsStats {
    /// 创建统计信息
    pub fn new(max_bytes: usize) -> Self {
        Self {
            used_bytes: 0,
            max_bytes,
        }
    }

    /// 预留 `bytes` 字节，超出上限时失败且不做任何修改
    pub fn reserve(&mut self, bytes: usize) -> Result<(), FsError> {
        let used = self
            .used_bytes
            .checked_add(bytes)
            .ok_or(FsError::CapacityExceeded)?;
        if self.max_bytes != 0 && used > self.max_bytes {
            return Err(FsError::CapacityExceeded);
        }
        self.used_bytes = used;
        Ok(())
    }

    /// 归还 `bytes` 字节
    pub fn release(&mut self, bytes: usize) {
        self.used_bytes = self.used_bytes.saturating_sub(bytes);
    }

    /// 剩余可用字节数，无限制时返回 None
    pub fn remaining(&self) -> Option<usize> {
        if self.max_bytes == 0 {
            None
        } else {
            Some(self.max_bytes.saturating_sub(self.used_bytes))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_reserve() {
        let mut stats = MemFsStats::new(0);
        stats.reserve(1 << 20).unwrap();
        assert_eq!(stats.used_bytes, 1 << 20);
        assert_eq!(stats.remaining(), None);
    }

    #[test]
    fn test_limited_reserve_rejects_overflow() {
        let mut stats = MemFsStats::new(100);
        stats.reserve(60).unwrap();
        assert_eq!(stats.reserve(41), Err(FsError::CapacityExceeded));
        assert_eq!(stats.used_bytes, 60);
        stats.reserve(40).unwrap();
        assert_eq!(stats.remaining(), Some(0));
    }

    #[test]
    fn test_release_saturates() {
        let mut stats = MemFsStats::new(0);
        stats.reserve(10).unwrap();
        stats.release(25);
        assert_eq!(stats.used_bytes, 0);
    }
}
