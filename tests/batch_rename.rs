use std::fs;
use std::path::Path;

use retitle::renamer::{RenameOutcome, rename_all};
use retitle::scanner::collect_candidates;

fn write_tagged(path: &Path, title: &str) {
    let mut data = vec![0x55u8; 2048];
    let mut block = [b' '; 128];
    block[..3].copy_from_slice(b"TAG");
    block[3..3 + 30].fill(b' ');
    block[3..3 + title.len()].copy_from_slice(title.as_bytes());
    data.extend_from_slice(&block);
    fs::write(path, data).unwrap();
}

fn mp3s() -> Vec<String> {
    vec![".mp3".to_string()]
}

#[test]
fn test_directory_batch_renames_only_tagged_media() {
    let dir = tempfile::tempdir().unwrap();
    let tagged = dir.path().join("track01.mp3");
    let untagged = dir.path().join("track02.mp3");
    let notes = dir.path().join("notes.txt");

    write_tagged(&tagged, "Alpha");
    fs::write(&untagged, vec![0u8; 4096]).unwrap();
    fs::write(&notes, b"TAG looks like a tag but is not media").unwrap();

    let scan = collect_candidates(dir.path(), &mp3s(), false).unwrap();
    assert_eq!(scan.candidates.len(), 2);
    assert_eq!(scan.skipped, 1);

    let mut outcomes = Vec::new();
    let stats = rename_all(&scan.candidates, false, |path, outcome| {
        outcomes.push((path.to_path_buf(), format!("{:?}", outcome)));
    });

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].1.starts_with("Renamed"));
    assert!(outcomes[1].1.starts_with("NoTag"));
    assert_eq!(stats.renamed, 1);
    assert_eq!(stats.no_tag, 1);
    assert_eq!(stats.failed, 0);

    assert!(dir.path().join("Alpha.mp3").exists());
    assert!(!tagged.exists());
    assert!(untagged.exists());
    assert_eq!(
        fs::read(&notes).unwrap(),
        b"TAG looks like a tag but is not media"
    );

    let mut names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["Alpha.mp3", "notes.txt", "track02.mp3"]);
}

#[test]
fn test_second_run_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_tagged(&dir.path().join("a.mp3"), "Bohemian Rhapsody");
    write_tagged(&dir.path().join("b.mp3"), "Test");

    let first = collect_candidates(dir.path(), &mp3s(), false).unwrap();
    let stats = rename_all(&first.candidates, false, |_, _| {});
    assert_eq!(stats.renamed, 2);

    let second = collect_candidates(dir.path(), &mp3s(), false).unwrap();
    let mut already = 0;
    let stats = rename_all(&second.candidates, false, |_, outcome| {
        if matches!(outcome, RenameOutcome::AlreadyNamed) {
            already += 1;
        }
    });

    assert_eq!(already, 2);
    assert_eq!(stats.renamed, 0);
    assert_eq!(stats.unchanged, 2);
    assert!(dir.path().join("Bohemian Rhapsody.mp3").exists());
    assert!(dir.path().join("Test.mp3").exists());
}

#[test]
fn test_colliding_titles_keep_both_files() {
    let dir = tempfile::tempdir().unwrap();
    write_tagged(&dir.path().join("a.mp3"), "Same");
    write_tagged(&dir.path().join("b.mp3"), "Same");

    let scan = collect_candidates(dir.path(), &mp3s(), false).unwrap();
    let stats = rename_all(&scan.candidates, false, |_, _| {});

    assert_eq!(stats.renamed, 1);
    assert_eq!(stats.failed, 1);
    assert!(dir.path().join("Same.mp3").exists());
    assert!(dir.path().join("b.mp3").exists());
    assert!(stats.errors[0].contains("already exists"));
}
