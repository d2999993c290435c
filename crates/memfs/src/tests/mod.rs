// MemFS 行为测试
//
// 通过 `FileSystem` trait 驱动，与宿主的调用方式一致。

extern crate std;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use vfs::{
    CreationMode, FileAccess, FileOptions, FileShare, FileSystem, FsError, HandleInfo,
};

use crate::{MemFs, MountOptions};

mod find;
mod handles;

fn create_test_memfs() -> Arc<MemFs> {
    test_support::init_mock_ops();
    MemFs::new()
}

fn create_limited_memfs(max_bytes: usize) -> Arc<MemFs> {
    test_support::init_mock_ops();
    MemFs::with_options(MountOptions::default().with_max_bytes(max_bytes))
}

fn open_with(
    fs: &MemFs,
    path: &str,
    mode: CreationMode,
    options: FileOptions,
) -> Result<HandleInfo, FsError> {
    let mut info = HandleInfo::default();
    fs.create_file(
        path,
        FileAccess::READ_WRITE,
        FileShare::READ | FileShare::WRITE | FileShare::DELETE,
        mode,
        options,
        &mut info,
    )?;
    Ok(info)
}

fn open(fs: &MemFs, path: &str, mode: CreationMode) -> Result<HandleInfo, FsError> {
    open_with(fs, path, mode, FileOptions::empty())
}

/// 新建文件并关闭创建时得到的句柄
fn touch(fs: &MemFs, path: &str) {
    open(fs, path, CreationMode::CreateNew).unwrap();
    fs.close_file(path).unwrap();
}

fn mkdir(fs: &MemFs, path: &str) {
    let mut info = HandleInfo::default();
    fs.create_directory(path, &mut info).unwrap();
    assert!(info.is_directory);
}

fn read_all(fs: &MemFs, path: &str) -> Vec<u8> {
    let len = fs.get_file_information(path).unwrap().length as usize;
    let mut buf = vec![0u8; len];
    let read = fs.read_file(path, &mut buf, 0).unwrap();
    assert_eq!(read, len);
    buf
}

fn exists(fs: &MemFs, path: &str) -> bool {
    match fs.get_file_information(path) {
        Ok(_) => true,
        Err(FsError::NotFound) => false,
        Err(e) => panic!("unexpected error for {}: {:?}", path, e),
    }
}
