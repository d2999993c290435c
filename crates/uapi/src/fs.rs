//! 文件属性位

bitflags::bitflags! {
    /// 文件属性位掩码（与宿主框架的数值一致）
    ///
    /// 未知位原样保留，由属性校验决定是否接受。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FileAttributes: u32 {
        const READONLY            = 0x0000_0001;
        const HIDDEN              = 0x0000_0002;
        const SYSTEM              = 0x0000_0004;
        const DIRECTORY           = 0x0000_0010;
        const ARCHIVE             = 0x0000_0020;
        const DEVICE              = 0x0000_0040;
        const NORMAL              = 0x0000_0080;
        const TEMPORARY           = 0x0000_0100;
        const SPARSE_FILE         = 0x0000_0200;
        const REPARSE_POINT       = 0x0000_0400;
        const COMPRESSED          = 0x0000_0800;
        const OFFLINE             = 0x0000_1000;
        const NOT_CONTENT_INDEXED = 0x0000_2000;
        const ENCRYPTED           = 0x0000_4000;

        const _ = !0;
    }
}

impl FileAttributes {
    /// 从宿主传入的原始值构造，保留未知位
    pub const fn from_raw(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }

    /// 是否带有目录位
    pub const fn is_directory(&self) -> bool {
        self.contains(Self::DIRECTORY)
    }
}
