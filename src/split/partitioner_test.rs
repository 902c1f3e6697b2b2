use super::*;
use crate::split::prefix::common_prefix_len;

fn items(names: &[&str]) -> Vec<Item<()>> {
    names.iter().map(|n| Item::named(*n)).collect()
}

fn grouped<'a>(partition: &'a Partition<()>) -> Vec<Vec<&'a str>> {
    partition.groups().map(|g| g.names().collect()).collect()
}

fn sizes(partition: &Partition<()>) -> Vec<usize> {
    partition.groups().map(|g| g.len()).collect()
}

/// Distinct names with several levels of shared prefixes, already sorted.
fn layered_names() -> Vec<String> {
    let mut names = Vec::new();
    for first in ["a", "b", "c"] {
        for second in ["a", "b"] {
            for n in 0..5 {
                names.push(format!("{first}{second}{n}"));
                if n % 2 == 0 {
                    names.push(format!("{first}{second}{n}x"));
                }
            }
        }
    }
    names.sort_by_key(|n| n.to_lowercase());
    names
}

fn common_prefix(names: &[&str]) -> usize {
    names
        .iter()
        .map(|n| common_prefix_len(names[0], n))
        .min()
        .unwrap_or(0)
}

#[test]
fn rejects_zero_max_size() {
    let err = Partitioner::new(0, false, OverflowPolicy::Split).unwrap_err();
    assert_eq!(err, SplitError::InvalidMaxSize(0));
    assert!(err.is_configuration());
}

#[test]
fn from_config_validates() {
    let config = SplitConfig {
        max_group_size: 0,
        ..SplitConfig::default()
    };
    assert!(Partitioner::from_config(&config).is_err());
    assert_eq!(
        Partitioner::from_config(&SplitConfig::default())
            .unwrap()
            .max_size(),
        SplitConfig::default().max_group_size
    );
}

#[test]
fn empty_input_yields_empty_partition() {
    let p = Partitioner::new(3, true, OverflowPolicy::Split).unwrap();
    let partition = p.partition(items(&[])).unwrap();
    assert!(partition.is_empty());
    assert_eq!(partition.item_count(), 0);
}

#[test]
fn fixed_size_groups_without_preservation() {
    let p = Partitioner::new(2, false, OverflowPolicy::Split).unwrap();
    let partition = p
        .partition(items(&["apple", "apricot", "banana", "cherry"]))
        .unwrap();
    assert_eq!(
        grouped(&partition),
        vec![vec!["apple", "apricot"], vec!["banana", "cherry"]]
    );
}

#[test]
fn last_group_holds_the_remainder() {
    let names: Vec<String> = (0..10).map(|i| format!("file{i:02}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let p = Partitioner::new(3, false, OverflowPolicy::Split).unwrap();
    let partition = p.partition(items(&refs)).unwrap();
    assert_eq!(sizes(&partition), vec![3, 3, 3, 1]);
}

#[test]
fn no_rollback_when_extended_prefixes_differ() {
    let p = Partitioner::new(2, true, OverflowPolicy::Split).unwrap();
    let partition = p.partition(items(&["aa1", "aa2", "ab1", "ac1"])).unwrap();
    assert_eq!(
        grouped(&partition),
        vec![vec!["aa1", "aa2"], vec!["ab1", "ac1"]]
    );
}

#[test]
fn extended_prefix_is_one_past_common_prefix() {
    // Common prefix of ["aa1", "aa1x"] is "aa1", so the boundary check looks
    // at four characters: "aa1x" and "aa1y" belong to different runs.
    let p = Partitioner::new(2, true, OverflowPolicy::Split).unwrap();
    let partition = p
        .partition(items(&["aa1", "aa1x", "aa1y", "ab1"]))
        .unwrap();
    assert_eq!(
        grouped(&partition),
        vec![vec!["aa1", "aa1x"], vec!["aa1y", "ab1"]]
    );
}

#[test]
fn rollback_moves_run_into_next_group() {
    let p = Partitioner::new(3, true, OverflowPolicy::Split).unwrap();
    let partition = p
        .partition(items(&["apple", "apricot", "banana", "bear", "cherry"]))
        .unwrap();
    assert_eq!(
        grouped(&partition),
        vec![vec!["apple", "apricot"], vec!["banana", "bear", "cherry"]]
    );
}

#[test]
fn rollback_stops_at_first_item() {
    let p = Partitioner::new(3, true, OverflowPolicy::Split).unwrap();
    let partition = p
        .partition(items(&["ant", "bat", "bee", "bid"]))
        .unwrap();
    assert_eq!(
        grouped(&partition),
        vec![vec!["ant"], vec!["bat", "bee", "bid"]]
    );
}

#[test]
fn rollback_ignores_case() {
    let p = Partitioner::new(3, true, OverflowPolicy::Split).unwrap();
    let partition = p
        .partition(items(&["Apple", "apricot", "Banana", "bear"]))
        .unwrap();
    assert_eq!(
        grouped(&partition),
        vec![vec!["Apple", "apricot"], vec!["Banana", "bear"]]
    );
}

#[test]
fn max_size_one_is_one_item_per_group() {
    let p = Partitioner::new(1, true, OverflowPolicy::Split).unwrap();
    let partition = p.partition(items(&["a", "ab", "b", "c"])).unwrap();
    assert_eq!(sizes(&partition), vec![1, 1, 1, 1]);
}

#[test]
fn overflow_split_keeps_capacity() {
    let p = Partitioner::new(2, true, OverflowPolicy::Split).unwrap();
    let partition = p
        .partition(items(&["cat", "cat", "cat", "dog"]))
        .unwrap();
    assert_eq!(
        grouped(&partition),
        vec![vec!["cat", "cat"], vec!["cat", "dog"]]
    );
}

#[test]
fn overflow_extend_keeps_run_whole() {
    let p = Partitioner::new(2, true, OverflowPolicy::Extend).unwrap();
    let partition = p
        .partition(items(&["cat", "Cat", "CAT", "dog"]))
        .unwrap();
    assert_eq!(
        grouped(&partition),
        vec![vec!["cat", "Cat", "CAT"], vec!["dog"]]
    );
    assert_eq!(partition.largest_group(), 3);
}

#[test]
fn overflow_extend_with_single_item_groups() {
    let p = Partitioner::new(1, true, OverflowPolicy::Extend).unwrap();
    let partition = p.partition(items(&["x", "x", "y"])).unwrap();
    assert_eq!(grouped(&partition), vec![vec!["x", "x"], vec!["y"]]);
}

#[test]
fn payload_travels_with_item() {
    let p = Partitioner::new(1, false, OverflowPolicy::Split).unwrap();
    let input = vec![Item::new("a", 10), Item::new("b", 20)];
    let partition = p.partition(input).unwrap();
    let payloads: Vec<i32> = partition.items().iter().map(|i| i.payload).collect();
    assert_eq!(payloads, vec![10, 20]);
}

#[test]
fn every_item_appears_once_in_order() {
    let names = layered_names();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();

    for max_size in 1..=8 {
        for preserve in [false, true] {
            let p = Partitioner::new(max_size, preserve, OverflowPolicy::Split).unwrap();
            let partition = p.partition(items(&refs)).unwrap();
            let flattened: Vec<&str> = grouped(&partition).into_iter().flatten().collect();
            assert_eq!(flattened, refs, "max_size={max_size} preserve={preserve}");
            assert!(partition.groups().all(|g| !g.is_empty()));
            assert!(partition.largest_group() <= max_size);
        }
    }
}

#[test]
fn capacity_is_exact_without_preservation() {
    let names = layered_names();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();

    for max_size in 1..=8 {
        let p = Partitioner::new(max_size, false, OverflowPolicy::Split).unwrap();
        let partition = p.partition(items(&refs)).unwrap();
        let sizes = sizes(&partition);
        let (last, full) = sizes.split_last().unwrap();
        assert!(full.iter().all(|s| *s == max_size));
        assert!(*last >= 1 && *last <= max_size);
    }
}

#[test]
fn boundaries_never_split_an_extended_prefix_run() {
    let names = layered_names();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();

    for max_size in 2..=8 {
        let p = Partitioner::new(max_size, true, OverflowPolicy::Split).unwrap();
        let partition = p.partition(items(&refs)).unwrap();
        let groups = grouped(&partition);

        for pair in groups.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            let extended = common_prefix(current) + 1;
            let last = current[current.len() - 1];
            assert!(
                !prefix_eq(last, next[0], extended),
                "max_size={max_size}: {last:?} and {:?} share {extended} chars",
                next[0]
            );
        }
    }
}
