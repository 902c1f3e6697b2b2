use super::*;

fn items(names: &[&str]) -> Vec<Item<usize>> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| Item::new(*n, i))
        .collect()
}

#[test]
fn from_sizes_builds_contiguous_groups() {
    let p = Partition::from_sizes(items(&["a", "b", "c"]), &[2, 1]).unwrap();
    assert_eq!(p.len(), 2);
    assert_eq!(p.item_count(), 3);
    let first = p.group(0).unwrap();
    assert_eq!(first.names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(first.first().unwrap().name, "a");
    assert_eq!(first.last().unwrap().name, "b");
    assert!(p.group(2).is_none());
}

#[test]
fn zero_sized_group_is_an_invariant_error() {
    let err = Partition::from_sizes(items(&["a", "b"]), &[2, 0]).unwrap_err();
    assert!(matches!(err, SplitError::Invariant(_)));
}

#[test]
fn oversized_group_sizes_are_an_invariant_error() {
    let err = Partition::from_sizes(items(&["a"]), &[usize::MAX, 1]).unwrap_err();
    assert!(matches!(err, SplitError::Invariant(_)));
}

#[test]
fn group_views_outlive_the_lookup() {
    let p = Partition::from_sizes(items(&["a", "b", "c"]), &[1, 2]).unwrap();
    let views: Vec<GroupView<'_, usize>> = p.groups().collect();
    let second = p.group(1).unwrap();
    assert_eq!(views[1].len(), second.len());
    assert_eq!(second.name, None);
    assert_eq!(views[0].names().collect::<Vec<_>>(), vec!["a"]);
}

#[test]
fn sizes_must_cover_all_items() {
    assert!(Partition::from_sizes(items(&["a", "b", "c"]), &[2]).is_err());
    assert!(Partition::from_sizes(items(&["a"]), &[1, 1]).is_err());
}

#[test]
fn gaps_between_ranges_are_rejected() {
    let err = Partition::from_ranges(items(&["a", "b", "c"]), vec![0..1, 2..3]).unwrap_err();
    assert!(matches!(err, SplitError::Invariant(_)));
}

#[test]
fn names_are_write_once() {
    let mut p = Partition::from_sizes(items(&["a", "b"]), &[1, 1]).unwrap();
    p.set_name(0, "a".to_string()).unwrap();
    p.set_name(0, "a".to_string()).unwrap();
    assert!(p.set_name(0, "z".to_string()).is_err());
    assert!(p.set_name(5, "x".to_string()).is_err());
    assert_eq!(p.group(0).unwrap().name, Some("a"));
    assert!(!p.is_named());
}

#[test]
fn into_folders_requires_names() {
    let p = Partition::from_sizes(items(&["a", "b"]), &[1, 1]).unwrap();
    assert!(p.into_folders().is_err());
}

#[test]
fn into_folders_moves_payloads() {
    let mut p = Partition::from_sizes(items(&["a", "b", "c"]), &[1, 2]).unwrap();
    p.set_name(0, "a".to_string()).unwrap();
    p.set_name(1, "b->c".to_string()).unwrap();
    let folders = p.into_folders().unwrap();
    assert_eq!(
        folders,
        vec![
            Folder {
                name: "a".to_string(),
                items: vec![0],
            },
            Folder {
                name: "b->c".to_string(),
                items: vec![1, 2],
            },
        ]
    );
}

#[test]
fn largest_group_of_empty_partition() {
    let p = Partition::from_sizes(items(&[]), &[]).unwrap();
    assert_eq!(p.largest_group(), 0);
    assert!(p.is_named());
}
