use super::*;

#[test]
fn test_delete_on_close_waits_for_last_handle() {
    let fs = create_test_memfs();
    open_with(
        &fs,
        "/tmp.dat",
        CreationMode::CreateNew,
        FileOptions::DELETE_ON_CLOSE,
    )
    .unwrap();
    open(&fs, "/tmp.dat", CreationMode::Open).unwrap();

    fs.close_file("/tmp.dat").unwrap();
    assert!(exists(&fs, "/tmp.dat"));

    fs.close_file("/tmp.dat").unwrap();
    assert!(!exists(&fs, "/tmp.dat"));
}

#[test]
fn test_first_open_marks_delete_on_close() {
    let fs = create_test_memfs();
    touch(&fs, "/f");
    fs.write_file("/f", b"bytes", 0).unwrap();

    open_with(&fs, "/f", CreationMode::Open, FileOptions::DELETE_ON_CLOSE).unwrap();
    assert!(exists(&fs, "/f"));
    fs.close_file("/f").unwrap();
    assert!(!exists(&fs, "/f"));
    assert_eq!(fs.used_bytes(), 0);
}

#[test]
fn test_delete_on_close_conflict_rejected() {
    let fs = create_test_memfs();
    open(&fs, "/f", CreationMode::CreateNew).unwrap();

    assert_eq!(
        open_with(&fs, "/f", CreationMode::Open, FileOptions::DELETE_ON_CLOSE),
        Err(FsError::GenericFailure)
    );

    // 拒绝不改变原有约定
    fs.close_file("/f").unwrap();
    assert!(exists(&fs, "/f"));
}

#[test]
fn test_already_marked_file_accepts_delete_on_close() {
    let fs = create_test_memfs();
    open_with(&fs, "/f", CreationMode::CreateNew, FileOptions::DELETE_ON_CLOSE).unwrap();
    open_with(&fs, "/f", CreationMode::Open, FileOptions::DELETE_ON_CLOSE).unwrap();
    fs.close_file("/f").unwrap();
    fs.close_file("/f").unwrap();
    assert!(!exists(&fs, "/f"));
}

#[test]
fn test_close_without_delete_keeps_file() {
    let fs = create_test_memfs();
    open(&fs, "/f", CreationMode::CreateNew).unwrap();
    fs.close_file("/f").unwrap();
    // 多余的关闭不会让计数变负
    fs.close_file("/f").unwrap();
    assert!(exists(&fs, "/f"));

    open_with(&fs, "/f", CreationMode::Open, FileOptions::DELETE_ON_CLOSE).unwrap();
    fs.close_file("/f").unwrap();
    assert!(!exists(&fs, "/f"));
}

#[test]
fn test_close_unresolvable_paths() {
    let fs = create_test_memfs();
    mkdir(&fs, "/d");
    fs.close_file("/missing").unwrap();
    fs.close_file("/no/such/path").unwrap();
    fs.close_file("relative").unwrap();
    fs.close_file("/").unwrap();
    fs.close_file("/d").unwrap();
    assert!(exists(&fs, "/d"));
}

#[test]
fn test_create_replaces_marked_file() {
    let fs = create_test_memfs();
    open_with(&fs, "/f", CreationMode::CreateNew, FileOptions::DELETE_ON_CLOSE).unwrap();
    fs.write_file("/f", b"old", 0).unwrap();

    // 覆盖创建得到一个新文件，不继承关闭时删除
    open(&fs, "/f", CreationMode::Create).unwrap();
    fs.close_file("/f").unwrap();
    assert!(exists(&fs, "/f"));
    assert_eq!(fs.get_file_information("/f").unwrap().length, 0);
}
