//! 挂载配置

use alloc::string::String;

/// 默认卷标
pub const DEFAULT_VOLUME_LABEL: &str = "MEMFS";
/// 默认挂载点
pub const DEFAULT_MOUNT_POINT: &str = "M:\\";
/// 报告给宿主的文件系统名称
pub const FS_NAME: &str = "MemFS";
/// 单个路径组件的最大长度
pub const MAX_COMPONENT_LENGTH: u32 = 255;

/// 挂载选项
///
/// 挂载点、线程数和调试开关由宿主在注册卷时使用，文件系统本身只读取卷标和容量。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountOptions {
    /// 挂载点（盘符或目录）
    pub mount_point: String,
    /// 宿主调度本卷请求的工作线程数
    pub thread_count: u16,
    /// 卷标
    pub volume_label: String,
    /// 是否开启宿主调试输出
    pub debug: bool,
    /// 文件数据总容量上限（字节），0 表示不限制
    pub max_bytes: usize,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            mount_point: String::from(DEFAULT_MOUNT_POINT),
            thread_count: 1,
            volume_label: String::from(DEFAULT_VOLUME_LABEL),
            debug: false,
            max_bytes: 0,
        }
    }
}

impl MountOptions {
    /// 设置容量上限
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// 设置卷标
    pub fn with_volume_label(mut self, label: &str) -> Self {
        self.volume_label = String::from(label);
        self
    }
}
