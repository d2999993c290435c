//! 句柄生命周期
//!
//! 每个文件维护打开计数和关闭时删除标记。最后一个句柄关闭且标记已设置时，
//! 文件由调用方从父目录移除。

/// 文件的句柄状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandleState {
    /// 当前打开的句柄数
    pub open_count: u32,
    /// 最后一个句柄关闭时是否删除
    pub delete_on_close: bool,
}

impl HandleState {
    /// 新建文件的句柄状态：创建即打开
    pub fn created(delete_on_close: bool) -> Self {
        Self {
            open_count: 1,
            delete_on_close,
        }
    }

    /// 以给定的关闭时删除请求打开是否被允许
    ///
    /// 文件已被其他句柄以不同的删除约定打开时拒绝，避免悄悄改变它们的约定。
    pub fn can_open(&self, delete_on_close: bool) -> bool {
        !(delete_on_close && self.open_count > 0 && !self.delete_on_close)
    }

    /// 记录一次打开，调用前需经过 [`HandleState::can_open`] 检查
    pub fn open(&mut self, delete_on_close: bool) {
        if delete_on_close {
            self.delete_on_close = true;
        }
        self.open_count = self.open_count.saturating_add(1);
    }

    /// 记录一次关闭，返回文件是否应被删除
    pub fn close(&mut self) -> bool {
        self.open_count = self.open_count.saturating_sub(1);
        self.open_count == 0 && self.delete_on_close
    }
}
