//! 打开/创建请求的参数定义

bitflags::bitflags! {
    /// 请求的访问权限
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FileAccess: u32 {
        const READ       = 0x1;
        const WRITE      = 0x2;
        const READ_WRITE = Self::READ.bits() | Self::WRITE.bits();
    }
}

bitflags::bitflags! {
    /// 与其它句柄的共享方式
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FileShare: u32 {
        const READ        = 0x1;
        const WRITE       = 0x2;
        const DELETE      = 0x4;
        const INHERITABLE = 0x10;
    }
}

bitflags::bitflags! {
    /// 打开选项
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FileOptions: u32 {
        const ENCRYPTED       = 0x0000_4000;
        const DELETE_ON_CLOSE = 0x0400_0000;
        const SEQUENTIAL_SCAN = 0x0800_0000;
        const RANDOM_ACCESS   = 0x1000_0000;
        const ASYNCHRONOUS    = 0x4000_0000;
        const WRITE_THROUGH   = 0x8000_0000;

        const _ = !0;
    }
}

/// 创建模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CreationMode {
    /// 仅在不存在时创建，存在则失败
    CreateNew = 1,
    /// 总是创建，存在则覆盖
    Create = 2,
    /// 仅打开已存在的文件
    Open = 3,
    /// 存在则打开，否则创建
    OpenOrCreate = 4,
    /// 打开已存在的文件并截断为 0
    Truncate = 5,
    /// 打开已存在的文件用于追加
    Append = 6,
}

impl CreationMode {
    /// 从宿主传入的原始值转换
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            1 => Some(Self::CreateNew),
            2 => Some(Self::Create),
            3 => Some(Self::Open),
            4 => Some(Self::OpenOrCreate),
            5 => Some(Self::Truncate),
            6 => Some(Self::Append),
            _ => None,
        }
    }

    /// 目标不存在时是否允许创建
    pub fn permits_creation(self) -> bool {
        matches!(self, Self::Create | Self::CreateNew | Self::OpenOrCreate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_mode_from_raw() {
        assert_eq!(CreationMode::from_raw(1), Some(CreationMode::CreateNew));
        assert_eq!(CreationMode::from_raw(5), Some(CreationMode::Truncate));
        assert_eq!(CreationMode::from_raw(6), Some(CreationMode::Append));
        assert_eq!(CreationMode::from_raw(0), None);
        assert_eq!(CreationMode::from_raw(7), None);
    }

    #[test]
    fn test_creation_permitting_modes() {
        let permitting: [bool; 6] = [1, 2, 3, 4, 5, 6].map(|raw| {
            CreationMode::from_raw(raw).is_some_and(CreationMode::permits_creation)
        });
        assert_eq!(permitting, [true, true, false, true, false, false]);
    }
}
