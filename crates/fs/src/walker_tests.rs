use super::*;

use std::{
    fs::{self, create_dir, write},
    path::PathBuf,
    time::Duration,
};

use dutop_elist::EList;

fn new_list() -> EList<FileRecord> {
    EList::with_capacity(0).expect("create list")
}

fn rel_paths(list: &EList<FileRecord>, root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = list
        .iter()
        .map(|r| r.path.strip_prefix(root).unwrap().to_path_buf())
        .collect();
    paths.sort();
    paths
}

#[test]
fn to_unix_secs_handles_missing_and_pre_epoch_times() {
    let cases: &[(Option<SystemTime>, u64)] = &[
        (None, 0),
        (Some(UNIX_EPOCH), 0),
        (Some(UNIX_EPOCH + Duration::from_secs(1_677_215_473)), 1_677_215_473),
        (UNIX_EPOCH.checked_sub(Duration::from_secs(60)), 0),
    ];

    for (input, expected) in cases {
        assert_eq!(
            to_unix_secs(*input),
            *expected,
            "to_unix_secs({input:?})"
        );
    }
}

#[test]
fn scan_records_regular_files_across_subdirectories() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    // root/
    //   a.txt        (1 byte)
    //   sub/
    //     b.txt      (2 bytes)
    //     deeper/
    //       c.txt    (3 bytes)
    write(root.join("a.txt"), b"a").expect("write a.txt");
    create_dir(root.join("sub")).expect("create sub");
    write(root.join("sub").join("b.txt"), b"bb").expect("write b.txt");
    create_dir(root.join("sub").join("deeper")).expect("create deeper");
    write(root.join("sub").join("deeper").join("c.txt"), b"ccc").expect("write c.txt");

    let mut list = new_list();
    let mut stats = ScanStats::default();

    scan_tree(root, &mut list, &mut stats).expect("scan_tree");

    assert_eq!(
        rel_paths(&list, root),
        vec![
            PathBuf::from("a.txt"),
            PathBuf::from("sub/b.txt"),
            PathBuf::from("sub/deeper/c.txt"),
        ]
    );

    // Sizes travel with the records.
    let mut sizes: Vec<u64> = list.iter().map(|r| r.size).collect();
    sizes.sort();
    assert_eq!(sizes, vec![1, 2, 3]);

    assert_eq!(stats.scanned_files, 3);
    assert_eq!(stats.skipped_dirs, 0);
    assert_eq!(stats.skipped_files, 0);
}

#[test]
fn directories_themselves_produce_no_records() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    create_dir(root.join("only_dirs")).expect("create dir");
    create_dir(root.join("only_dirs").join("inner")).expect("create inner");

    let mut list = new_list();
    let mut stats = ScanStats::default();

    scan_tree(root, &mut list, &mut stats).expect("scan_tree");

    assert!(list.is_empty());
    assert_eq!(stats.scanned_files, 0);
}

#[test]
fn empty_directory_yields_empty_list() {
    let tmp = tempfile::tempdir().expect("create temp dir");

    let mut list = new_list();
    let mut stats = ScanStats::default();

    scan_tree(tmp.path(), &mut list, &mut stats).expect("scan_tree");

    assert!(list.is_empty());
    assert_eq!(stats, ScanStats::default());
}

#[test]
fn missing_root_is_an_error() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let gone = tmp.path().join("does-not-exist");

    let mut list = new_list();
    let mut stats = ScanStats::default();

    let err = scan_tree(&gone, &mut list, &mut stats).expect_err("scan should fail");
    assert!(matches!(err, ScanError::Root(_)));
    assert!(list.is_empty());
}

#[test]
fn root_that_is_a_file_is_an_error() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let file = tmp.path().join("plain.txt");
    write(&file, b"not a directory").expect("write file");

    let mut list = new_list();
    let mut stats = ScanStats::default();

    let err = scan_tree(&file, &mut list, &mut stats).expect_err("scan should fail");
    assert!(matches!(err, ScanError::Root(_)));
}

#[cfg(unix)]
#[test]
fn symlinks_are_not_followed() {
    use std::os::unix::fs::symlink;

    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    write(root.join("real.txt"), b"real").expect("write real.txt");
    create_dir(root.join("target_dir")).expect("create target_dir");
    write(root.join("target_dir").join("inside.txt"), b"x").expect("write inside.txt");

    // A link to a file, a link to a directory, and a self-cycle.
    symlink(root.join("real.txt"), root.join("file_link")).expect("file symlink");
    symlink(root.join("target_dir"), root.join("dir_link")).expect("dir symlink");
    symlink(root.join("loop_link"), root.join("loop_link")).expect("cyclic symlink");

    let mut list = new_list();
    let mut stats = ScanStats::default();

    scan_tree(root, &mut list, &mut stats).expect("scan_tree");

    // Only the real file and the one inside the real directory are seen;
    // none of the links produce records or recursion.
    assert_eq!(
        rel_paths(&list, root),
        vec![
            PathBuf::from("real.txt"),
            PathBuf::from("target_dir/inside.txt"),
        ]
    );
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_is_skipped_and_counted() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    write(root.join("visible.txt"), b"v").expect("write visible.txt");
    let locked = root.join("locked");
    create_dir(&locked).expect("create locked");

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");

    // A privileged user can read the directory anyway; nothing to observe.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod back");
        return;
    }

    let mut list = new_list();
    let mut stats = ScanStats::default();

    let result = scan_tree(root, &mut list, &mut stats);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod back");

    result.expect("scan should continue past the locked subtree");
    assert_eq!(rel_paths(&list, root), vec![PathBuf::from("visible.txt")]);
    assert_eq!(stats.skipped_dirs, 1);
    assert_eq!(stats.scanned_files, 1);
}

#[test]
fn access_times_are_plausible() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    write(root.join("fresh.txt"), b"fresh").expect("write fresh.txt");

    let mut list = new_list();
    let mut stats = ScanStats::default();

    scan_tree(root, &mut list, &mut stats).expect("scan_tree");

    let rec = list.get(0).expect("one record");
    // A file created just now should not claim an access time in 1970,
    // on any filesystem that reports atime at all.
    let year_2000 = 946_684_800;
    assert!(
        rec.atime_secs == 0 || rec.atime_secs > year_2000,
        "suspicious atime {}",
        rec.atime_secs
    );
}
