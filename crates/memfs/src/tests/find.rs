use super::*;
use alloc::string::String;
use vfs::EntryInfo;

fn sorted_children(entries: &[EntryInfo]) -> Vec<String> {
    let mut names: Vec<String> = entries[2..].iter().map(|e| e.name.clone()).collect();
    names.sort();
    names
}

#[test]
fn test_enumerate_root() {
    let fs = create_test_memfs();
    mkdir(&fs, "/b");
    touch(&fs, "/a");
    touch(&fs, "/c");

    let root = fs.get_file_information("/").unwrap();
    let entries = fs.find_files("/").unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0], root.clone().renamed("."));
    assert_eq!(entries[1], root.renamed(".."));
    assert_eq!(sorted_children(&entries), ["a", "b", "c"]);
}

#[test]
fn test_enumerate_nested_uses_parent_metadata() {
    let fs = create_test_memfs();
    mkdir(&fs, "/p");
    mkdir(&fs, "/p/q");
    touch(&fs, "/p/q/f");
    fs.write_file("/p/q/f", b"1234", 0).unwrap();

    let parent = fs.get_file_information("/p").unwrap();
    let dir = fs.get_file_information("/p/q").unwrap();
    let entries = fs.find_files("\\p\\q").unwrap();

    assert_eq!(entries[0], dir.renamed("."));
    assert_eq!(entries[1], parent.renamed(".."));
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[2].name, "f");
    assert_eq!(entries[2].length, 4);
    assert!(!entries[2].is_directory());
}

#[test]
fn test_enumerate_empty_directory() {
    let fs = create_test_memfs();
    mkdir(&fs, "/empty");
    let entries = fs.find_files("/empty").unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, ".");
    assert_eq!(entries[1].name, "..");
}

#[test]
fn test_enumerate_errors() {
    let fs = create_test_memfs();
    touch(&fs, "/f");
    assert_eq!(fs.find_files("/f"), Err(FsError::KindMismatch));
    assert_eq!(fs.find_files("/none"), Err(FsError::NotFound));
}
