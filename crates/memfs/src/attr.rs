//! 属性校验
//!
//! 按条目类型检查请求的属性位，校验通过才应用，失败时条目属性保持不变。

use vfs::{EntryKind, FileAttributes, FsError};

/// 目录不允许的属性位
const DIRECTORY_FORBIDDEN: FileAttributes = FileAttributes::COMPRESSED
    .union(FileAttributes::ENCRYPTED)
    .union(FileAttributes::NORMAL)
    .union(FileAttributes::READONLY)
    .union(FileAttributes::REPARSE_POINT)
    .union(FileAttributes::HIDDEN);

/// 文件不允许的属性位
const FILE_FORBIDDEN: FileAttributes = FileAttributes::COMPRESSED
    .union(FileAttributes::ENCRYPTED)
    .union(FileAttributes::READONLY)
    .union(FileAttributes::REPARSE_POINT)
    .union(FileAttributes::HIDDEN)
    .union(FileAttributes::DIRECTORY);

/// 新建条目的默认属性
pub fn default_attributes(kind: EntryKind) -> FileAttributes {
    match kind {
        EntryKind::File => FileAttributes::NORMAL,
        EntryKind::Directory => FileAttributes::DIRECTORY,
    }
}

/// 校验请求的属性位，返回实际应存储的值
///
/// 文件缺少 NORMAL 位时自动补上，全零掩码即表示“普通文件”。
pub fn validate(kind: EntryKind, requested: FileAttributes) -> Result<FileAttributes, FsError> {
    match kind {
        EntryKind::Directory => {
            if requested.intersects(DIRECTORY_FORBIDDEN) || !requested.is_directory() {
                return Err(FsError::InvalidAttributeTransition);
            }
            Ok(requested)
        }
        EntryKind::File => {
            let attrs = requested | FileAttributes::NORMAL;
            if attrs.intersects(FILE_FORBIDDEN) {
                return Err(FsError::InvalidAttributeTransition);
            }
            Ok(attrs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_zero_mask_becomes_normal() {
        assert_eq!(
            validate(EntryKind::File, FileAttributes::empty()),
            Ok(FileAttributes::NORMAL)
        );
    }

    #[test]
    fn test_file_keeps_archive() {
        assert_eq!(
            validate(EntryKind::File, FileAttributes::ARCHIVE),
            Ok(FileAttributes::ARCHIVE | FileAttributes::NORMAL)
        );
    }

    #[test]
    fn test_file_rejects_directory_and_hidden() {
        for bit in [
            FileAttributes::DIRECTORY,
            FileAttributes::HIDDEN,
            FileAttributes::READONLY,
            FileAttributes::COMPRESSED,
            FileAttributes::ENCRYPTED,
            FileAttributes::REPARSE_POINT,
        ] {
            assert_eq!(
                validate(EntryKind::File, bit),
                Err(FsError::InvalidAttributeTransition)
            );
        }
    }

    #[test]
    fn test_directory_requires_directory_bit() {
        assert_eq!(
            validate(EntryKind::Directory, FileAttributes::ARCHIVE),
            Err(FsError::InvalidAttributeTransition)
        );
        assert_eq!(
            validate(EntryKind::Directory, FileAttributes::DIRECTORY),
            Ok(FileAttributes::DIRECTORY)
        );
    }

    #[test]
    fn test_directory_rejects_normal() {
        assert_eq!(
            validate(
                EntryKind::Directory,
                FileAttributes::DIRECTORY | FileAttributes::NORMAL
            ),
            Err(FsError::InvalidAttributeTransition)
        );
    }
}
