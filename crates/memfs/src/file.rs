//! 文件节点

use alloc::sync::Arc;

use sync::{SpinLock, SpinLockGuard};
use vfs::{EntryInfo, EntryKind, FileAttributes, FsError};

use crate::attr;
use crate::data::FileData;
use crate::entry::EntryMeta;
use crate::handle::HandleState;
use crate::stats::MemFsStats;

/// 文件节点
///
/// 元数据、数据缓冲和句柄状态各自加锁，读写同一文件只在该文件的数据锁上
/// 串行，不占用全局目录树锁。数据锁与元数据锁从不同时持有。
pub struct FileNode {
    /// 元数据
    meta: SpinLock<EntryMeta>,

    /// 文件内容
    data: SpinLock<FileData>,

    /// 打开计数与关闭时删除标记
    handles: SpinLock<HandleState>,
}

impl FileNode {
    /// 创建新文件，创建者即持有第一个句柄
    pub fn new(name: &str, delete_on_close: bool, stats: Arc<SpinLock<MemFsStats>>) -> Arc<Self> {
        Arc::new(Self {
            meta: SpinLock::new(EntryMeta::new(
                name,
                attr::default_attributes(EntryKind::File),
            )),
            data: SpinLock::new(FileData::new(stats)),
            handles: SpinLock::new(HandleState::created(delete_on_close)),
        })
    }

    /// 当前大小（字节）
    pub fn size(&self) -> usize {
        self.data.lock().len()
    }

    /// 元数据快照
    pub fn info(&self) -> EntryInfo {
        let length = self.size() as u64;
        self.meta.lock().info(length)
    }

    /// 句柄状态
    pub fn handles(&self) -> SpinLockGuard<'_, HandleState> {
        self.handles.lock()
    }

    /// 从 `offset` 读取
    pub fn read_at(&self, offset: i64, buf: &mut [u8]) -> Result<usize, FsError> {
        let offset = usize::try_from(offset).map_err(|_| FsError::GenericFailure)?;
        let read = self.data.lock().read_at(offset, buf)?;
        self.meta.lock().touch_accessed();
        Ok(read)
    }

    /// 写入到 `offset`
    pub fn write_at(&self, offset: i64, buf: &[u8]) -> Result<usize, FsError> {
        let offset = usize::try_from(offset).map_err(|_| FsError::GenericFailure)?;
        let written = self.data.lock().write_at(offset, buf)?;
        self.meta.lock().touch_modified();
        Ok(written)
    }

    /// 调整文件长度
    pub fn resize(&self, length: i64) -> Result<(), FsError> {
        if length < 0 {
            return Err(FsError::GenericFailure);
        }
        let length = usize::try_from(length).map_err(|_| FsError::CapacityExceeded)?;
        self.data.lock().resize(length)?;
        self.meta.lock().touch_modified();
        Ok(())
    }

    /// 设置属性位
    pub fn set_attributes(&self, requested: FileAttributes) -> Result<(), FsError> {
        let attributes = attr::validate(EntryKind::File, requested)?;
        self.meta.lock().attributes = attributes;
        Ok(())
    }

    /// 更新存储的名称
    pub fn set_name(&self, name: &str) {
        self.meta.lock().set_name(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_file() -> Arc<FileNode> {
        test_support::init_mock_ops();
        let stats = Arc::new(SpinLock::new(MemFsStats::new(0)));
        FileNode::new("a.txt", false, stats)
    }

    #[test]
    fn test_new_file_is_open_and_normal() {
        let file = new_file();
        assert_eq!(file.handles().open_count, 1);
        let info = file.info();
        assert_eq!(info.name, "a.txt");
        assert_eq!(info.attributes, FileAttributes::NORMAL);
        assert_eq!(info.length, 0);
    }

    #[test]
    fn test_negative_offset_rejected() {
        let file = new_file();
        let mut buf = [0u8; 4];
        assert_eq!(file.read_at(-1, &mut buf), Err(FsError::GenericFailure));
        assert_eq!(file.write_at(-1, b"x"), Err(FsError::GenericFailure));
        assert_eq!(file.resize(-1), Err(FsError::GenericFailure));
    }

    #[test]
    fn test_write_updates_modified() {
        let file = new_file();
        let before = file.info();
        file.write_at(0, b"data").unwrap();
        let after = file.info();
        assert!(after.modified > before.modified);
        assert_eq!(after.length, 4);
    }

    #[test]
    fn test_read_updates_accessed_only() {
        let file = new_file();
        file.write_at(0, b"data").unwrap();
        let before = file.info();
        let mut buf = [0u8; 4];
        file.read_at(0, &mut buf).unwrap();
        let after = file.info();
        assert!(after.accessed > before.accessed);
        assert_eq!(after.modified, before.modified);
    }

    #[test]
    fn test_rejected_attributes_leave_state() {
        let file = new_file();
        assert_eq!(
            file.set_attributes(FileAttributes::HIDDEN),
            Err(FsError::InvalidAttributeTransition)
        );
        assert_eq!(file.info().attributes, FileAttributes::NORMAL);
    }
}
