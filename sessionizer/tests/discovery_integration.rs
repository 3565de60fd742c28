//! Integration tests for target discovery across roots.
//!
//! These tests exercise the public discovery API end to end on real
//! directory trees, including symlinks between separate trees.

mod common;

use common::{resolver, set, Tree};
use sessionizer::{DepthBoundedWalker, Error, Root, TargetAggregator};

fn is_descending(targets: &[String]) -> bool {
    targets.windows(2).all(|pair| pair[0] > pair[1])
}

// ============================================================================
// Depth Tiers Across Trees
// ============================================================================

/// Two trees where the first links to a subtree of the second:
///
/// ```text
/// first/{sub_dir_1, sub_dir_2, symlink -> second/sub_dir_3}
/// second/sub_dir_3/{sub_dir_4, sub_dir_5}
/// ```
#[cfg(unix)]
fn linked_trees() -> (Tree, Tree) {
    let second = Tree::new().dir("sub_dir_3/sub_dir_4").dir("sub_dir_3/sub_dir_5");
    let first = Tree::new()
        .dir("sub_dir_1")
        .dir("sub_dir_2")
        .symlink(&second.path("sub_dir_3"), "symlink");
    (first, second)
}

#[cfg(unix)]
#[test]
fn test_depth_tiers_with_symlinked_subtree() {
    let (first, _second) = linked_trees();
    let resolver = resolver();
    let walker = DepthBoundedWalker::new(&resolver);
    let root = resolver.normalize(&first.display("")).unwrap();

    let depth0 = walker.walk(&root, 0).unwrap();
    assert_eq!(depth0, vec![first.display("")]);

    let depth1 = walker.walk(&root, 1).unwrap();
    assert_eq!(
        set(depth1),
        set([
            first.display(""),
            first.display("sub_dir_1"),
            first.display("sub_dir_2"),
            first.display("symlink"),
        ])
    );

    let full = walker.walk(&root, 3).unwrap();
    assert_eq!(
        set(full),
        set([
            first.display(""),
            first.display("sub_dir_1"),
            first.display("sub_dir_2"),
            first.display("symlink"),
            first.display("symlink/sub_dir_4"),
            first.display("symlink/sub_dir_5"),
        ])
    );
}

#[cfg(unix)]
#[test]
fn test_symlinked_subtree_and_its_target_merge() {
    let (first, second) = linked_trees();
    let aggregator = TargetAggregator::new(resolver());

    // second/sub_dir_3 and first/symlink are the same directory; the
    // smaller display string represents it.
    let targets = aggregator
        .collect(&[first.root_at("", 3), second.root_at("sub_dir_3", 1)])
        .unwrap();

    assert!(is_descending(&targets));
    assert_eq!(targets.len(), 6);
    let expected_link = std::cmp::min(first.display("symlink"), second.display("sub_dir_3"));
    assert!(targets.contains(&expected_link));
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn test_concrete_scenario() {
    let tree = Tree::new().dir("A/sub1").dir("A/sub2");
    let aggregator = TargetAggregator::new(resolver());

    assert_eq!(
        aggregator.collect(&[tree.root_at("A", 1)]).unwrap(),
        vec![
            tree.display("A/sub2"),
            tree.display("A/sub1"),
            tree.display("A"),
        ]
    );
    assert_eq!(
        aggregator.collect(&[tree.root_at("A", 0)]).unwrap(),
        vec![tree.display("A")]
    );
}

#[test]
fn test_depth_is_monotonic() {
    let tree = Tree::new()
        .dir("a/b/c/d")
        .dir("a/x/y")
        .dir("e")
        .file("a/file.txt");
    let aggregator = TargetAggregator::new(resolver());

    let mut previous = set(Vec::<String>::new());
    for depth in 0..6 {
        let current = set(aggregator.collect(&[tree.root_at("", depth)]).unwrap());
        assert!(
            previous.is_subset(&current),
            "depth {depth} lost targets: {:?}",
            previous.difference(&current).collect::<Vec<_>>()
        );
        previous = current;
    }
    assert_eq!(previous.len(), 8);
}

/// `a/b/l` links to `z`, which is also a direct child of the root. The deep
/// link must not hide the shallow directory once the limit reaches it.
#[cfg(unix)]
#[test]
fn test_depth_is_monotonic_with_deep_link_to_shallow_directory() {
    let tree = Tree::new().dir("a/b").dir("z/child");
    let tree = {
        let target = tree.path("z");
        tree.symlink(&target, "a/b/l")
    };
    let aggregator = TargetAggregator::new(resolver());

    let mut previous = set(Vec::<String>::new());
    for depth in 0..6 {
        let current = set(aggregator.collect(&[tree.root_at("", depth)]).unwrap());
        assert!(
            previous.is_subset(&current),
            "depth {depth} lost targets: {:?}",
            previous.difference(&current).collect::<Vec<_>>()
        );
        previous = current;
    }

    let depth3 = set(aggregator.collect(&[tree.root_at("", 3)]).unwrap());
    assert_eq!(
        depth3,
        set([
            tree.display(""),
            tree.display("a"),
            tree.display("a/b"),
            tree.display("z"),
            tree.display("z/child"),
        ])
    );
}

#[test]
fn test_partial_failure_reports_only_failed_root() {
    let tree = Tree::new().dir("ok/one").dir("also_ok");
    let aggregator = TargetAggregator::new(resolver());

    let err = aggregator
        .collect(&[
            tree.root_at("ok", 1),
            tree.root_at("missing", 2),
            tree.root_at("also_ok", 0),
        ])
        .unwrap_err();

    match err {
        Error::Discovery(aggregate) => {
            assert_eq!(aggregate.len(), 1);
            assert_eq!(aggregate.causes()[0].root, tree.display("missing"));
        }
        other => panic!("expected discovery error, got {other:?}"),
    }
}

#[test]
fn test_file_root_yields_nothing() {
    let tree = Tree::new().file("plain.txt").dir("dir");
    let aggregator = TargetAggregator::new(resolver());

    let targets = aggregator
        .collect(&[tree.root_at("plain.txt", 2), tree.root_at("dir", 0)])
        .unwrap();
    assert_eq!(targets, vec![tree.display("dir")]);
}

#[test]
fn test_collect_is_idempotent_across_many_roots() {
    let mut tree = Tree::new();
    for i in 0..20 {
        tree = tree.dir(&format!("root_{i}/child/grandchild"));
    }
    let roots: Vec<Root> = (0..20u8)
        .map(|i| tree.root_at(&format!("root_{i}"), i % 3))
        .collect();
    let aggregator = TargetAggregator::new(resolver());

    let first = aggregator.collect(&roots).unwrap();
    for _ in 0..5 {
        assert_eq!(aggregator.collect(&roots).unwrap(), first);
    }
    assert!(is_descending(&first));
}

#[test]
fn test_trailing_separator_matches_plain_root() {
    let tree = Tree::new().dir("proj/src");
    let aggregator = TargetAggregator::new(resolver());

    let plain = aggregator.collect(&[tree.root_at("proj", 1)]).unwrap();
    let trailing = aggregator
        .collect(&[Root::new(format!("{}/", tree.display("proj")), 1)])
        .unwrap();
    assert_eq!(plain, trailing);
}

// ============================================================================
// Home Collapsing
// ============================================================================

#[test]
fn test_targets_under_home_use_tilde() {
    let tree = Tree::new().dir("code/api").dir("code/.hidden");
    let aggregator = TargetAggregator::new(sessionizer::PathResolver::with_home(tree.root()));

    assert_eq!(
        aggregator.collect(&[Root::new("~/code", 1)]).unwrap(),
        vec!["~/code/api", "~/code/.hidden", "~/code"]
    );
}

#[test]
fn test_home_root_itself_is_tilde() {
    let tree = Tree::new();
    let aggregator = TargetAggregator::new(sessionizer::PathResolver::with_home(tree.root()));

    assert_eq!(
        aggregator.collect(&[Root::new(tree.display(""), 0)]).unwrap(),
        vec!["~"]
    );
}
