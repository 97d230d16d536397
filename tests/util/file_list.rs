use std::fs;

use bt3zip::util::create_file_list;
use tempfile::TempDir;

fn make_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("d1/d2")).unwrap();
    fs::write(root.join("top.bin"), b"t").unwrap();
    fs::write(root.join("d1/mid.bin"), b"m").unwrap();
    fs::write(root.join("d1/d2/deep.bin"), b"d").unwrap();
    dir
}

#[test]
fn recursive_listing_finds_every_file() {
    let dir = make_tree();
    let list = create_file_list(&[dir.path()], true).unwrap();
    assert_eq!(list.len(), 3);
    assert!(list.contains(&dir.path().join("d1/d2/deep.bin")));
}

#[test]
fn flat_listing_ignores_subdirectories() {
    let dir = make_tree();
    let list = create_file_list(&[dir.path()], false).unwrap();
    assert_eq!(list, vec![dir.path().join("top.bin")]);
}

#[test]
fn inputs_keep_their_order() {
    let dir = make_tree();
    let a = dir.path().join("top.bin");
    let b = dir.path().join("d1");
    let list = create_file_list(&[b.clone(), a.clone()], false).unwrap();
    assert_eq!(list, vec![b.join("mid.bin"), a]);
}

#[test]
fn missing_paths_are_forwarded_for_the_caller_to_report() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let list = create_file_list(&[&missing], true).unwrap();
    assert_eq!(list, vec![missing]);
}
