//! 文件数据缓冲
//!
//! 每个文件拥有一个可增长的字节缓冲，缓冲长度即文件大小。缓冲随文件一起
//! 释放，占用的字节在释放时归还给共享统计。

use alloc::sync::Arc;
use alloc::vec::Vec;

use sync::SpinLock;
use vfs::FsError;

use crate::stats::MemFsStats;

/// 单次读写允许的最大长度（宿主以 32 位有符号数表示长度）
pub const MAX_IO_LEN: usize = i32::MAX as usize;

/// 文件数据缓冲
pub struct FileData {
    /// 文件内容，`buf.len()` 即文件大小
    buf: Vec<u8>,

    /// 共享的容量统计
    stats: Arc<SpinLock<MemFsStats>>,
}

impl FileData {
    /// 创建空缓冲
    pub fn new(stats: Arc<SpinLock<MemFsStats>>) -> Self {
        Self {
            buf: Vec::new(),
            stats,
        }
    }

    /// 当前大小（字节）
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// 调整为恰好 `new_size` 字节
    ///
    /// 增长部分填零；容量不足或内存分配失败时缓冲保持原样。
    pub fn resize(&mut self, new_size: usize) -> Result<(), FsError> {
        let old_size = self.buf.len();
        if new_size == old_size {
            return Ok(());
        }

        if new_size > old_size {
            let extra = new_size - old_size;
            self.stats.lock().reserve(extra)?;
            if self.buf.try_reserve_exact(extra).is_err() {
                self.stats.lock().release(extra);
                log::warn!("memfs: failed to grow file buffer to {} bytes", new_size);
                return Err(FsError::GenericFailure);
            }
            self.buf.resize(new_size, 0);
        } else {
            self.buf.truncate(new_size);
            self.buf.shrink_to_fit();
            self.stats.lock().release(old_size - new_size);
        }

        Ok(())
    }

    /// 从 `offset` 读取到 `buf`，返回读取的字节数
    ///
    /// `offset` 恰为文件末尾时读取 0 字节并成功；越过末尾则失败。
    pub fn read_at(&self, offset: usize, buf: &mut [u8]) -> Result<usize, FsError> {
        if buf.len() > MAX_IO_LEN {
            return Err(FsError::CapacityExceeded);
        }
        let size = self.buf.len();
        if offset > size {
            return Err(FsError::GenericFailure);
        }
        if buf.is_empty() || offset == size {
            return Ok(0);
        }

        let read_len = buf.len().min(size - offset);
        buf[..read_len].copy_from_slice(&self.buf[offset..offset + read_len]);
        Ok(read_len)
    }

    /// 将 `data` 完整写入到 `offset`，必要时先扩容
    pub fn write_at(&mut self, offset: usize, data: &[u8]) -> Result<usize, FsError> {
        if data.len() > MAX_IO_LEN {
            return Err(FsError::CapacityExceeded);
        }
        let end = offset
            .checked_add(data.len())
            .ok_or(FsError::CapacityExceeded)?;
        if end > self.buf.len() {
            self.resize(end)?;
        }

        self.buf[offset..end].copy_from_slice(data);
        Ok(data.len())
    }
}

impl Drop for FileData {
    fn drop(&mut self) {
        self.stats.lock().release(self.buf.len());
    }
}
