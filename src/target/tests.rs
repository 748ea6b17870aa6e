use super::*;

#[test]
fn test_selected_directory_is_used_as_is() {
    let tmp = tempfile::tempdir().unwrap();
    let target = resolve_target(Some(tmp.path()), None).unwrap();
    assert_eq!(target.as_path(), tmp.path());
}

#[test]
fn test_selected_file_resolves_to_parent() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("main.rs");
    std::fs::write(&file, "fn main() {}").unwrap();

    let target = resolve_target(Some(&file), None).unwrap();
    assert_eq!(target.as_path(), tmp.path());
}

#[test]
fn test_selection_takes_precedence_over_active_file() {
    let selected = tempfile::tempdir().unwrap();
    let other = tempfile::tempdir().unwrap();
    let active = other.path().join("lib.rs");
    std::fs::write(&active, "").unwrap();

    let target = resolve_target(Some(selected.path()), Some(&active)).unwrap();
    assert_eq!(target.as_path(), selected.path());
}

#[test]
fn test_active_file_used_without_selection() {
    let tmp = tempfile::tempdir().unwrap();
    let sub = tmp.path().join("src");
    std::fs::create_dir(&sub).unwrap();
    let active = sub.join("lib.rs");
    std::fs::write(&active, "").unwrap();

    let target = resolve_target(None, Some(&active)).unwrap();
    assert_eq!(target.as_path(), sub);
}

#[test]
fn test_no_context_is_an_error() {
    let err = resolve_target(None, None).unwrap_err();
    assert!(matches!(err, TargetError::NoContext));
    assert_eq!(
        err.to_string(),
        "No directory context: pass a path or --active-file"
    );
}

#[test]
fn test_missing_parent_is_not_a_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("gone").join("file.txt");
    let err = resolve_target(Some(&missing), None).unwrap_err();
    assert!(matches!(err, TargetError::NotADirectory(_)));
}

#[test]
fn test_display_is_the_raw_path() {
    let dir = TargetDirectory::new("/home/me/projects/foo/src");
    assert_eq!(dir.to_string(), "/home/me/projects/foo/src");
    assert_eq!(dir.as_str(), "/home/me/projects/foo/src");
}
