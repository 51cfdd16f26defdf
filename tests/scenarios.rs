use rb_multiset::{Error, RbMultiset};
use simplelog::{Config, LevelFilter, TestLogger};

/// Surfaces the tree's fix-up trace in the captured output of failing tests.
fn init_logging() {
    // Only the first call in the test binary installs the logger.
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

#[test]
fn test_empty_tree() {
    init_logging();
    let tree = RbMultiset::<i32>::default();
    assert_eq!(tree.size(), 0);
    assert!(tree.is_empty());
    assert!(tree.verify_properties());
}

#[test]
fn test_single_insert_black_root() {
    init_logging();
    let mut tree = RbMultiset::new();
    tree.insert(5);

    assert_eq!(tree.size(), 1);
    assert_eq!(tree.count(&5), 1);
    assert!(tree.verify_black_root());
    assert_eq!(tree.dump().to_string(), "5 (b,1) \nNULL (b,0) NULL (b,0) \n");
}

#[test]
fn test_duplicate_then_drain() {
    init_logging();
    let mut tree = RbMultiset::new();
    tree.insert(5);
    tree.insert(5);

    assert_eq!(tree.count(&5), 2);
    assert_eq!(tree.size(), 2);
    assert_eq!(tree.distinct_len(), 1);

    assert_eq!(tree.remove(&5), Ok(1));
    assert_eq!(tree.count(&5), 1);

    assert_eq!(tree.remove(&5), Ok(0));
    assert_eq!(tree.count(&5), 0);
    assert!(!tree.contains(&5));
    assert_eq!(tree.size(), 0);
    assert!(tree.is_empty());
}

#[test]
fn test_remove_from_empty() {
    init_logging();
    let mut tree = RbMultiset::<i32>::new();
    assert_eq!(tree.remove(&7), Err(Error::NotFound));
    assert_eq!(tree.size(), 0);
    assert!(tree.verify_properties());
}

#[test]
fn test_remove_absent_values_never_changes_tree() {
    init_logging();
    let mut tree = RbMultiset::<i32>::new();
    for i in 0..1000 {
        assert_eq!(tree.remove(&i), Err(Error::NotFound));
    }
    assert!(tree.is_empty());

    let mut tree2: RbMultiset<_> = (0..100).map(|i| i * 2).collect();
    let before = tree2.clone();
    for i in 0..100 {
        assert_eq!(tree2.remove(&(i * 2 + 1)), Err(Error::NotFound));
    }
    assert_eq!(tree2, before);
}

#[test]
fn test_increasing_insert_decreasing_remove() {
    init_logging();
    let mut tree = RbMultiset::new();
    for i in 0..1000 {
        tree.insert(i);
        assert!(tree.verify_properties(), "invalid after inserting {i}");
    }
    for i in (0..1000).rev() {
        tree.remove(&i).unwrap();
        assert!(tree.verify_properties(), "invalid after removing {i}");
    }
    assert!(tree.is_empty());
}

#[test]
fn test_interleaved_workload() {
    init_logging();
    let mut tree = RbMultiset::new();
    let mut expected = vec![0usize; 257];

    // Walk a fixed permutation of 0..257 several times, removing on every
    // third step once the value is present.
    let mut v = 0usize;
    for step in 0..5_000 {
        v = (v + 101) % 257;
        if step % 3 == 2 && expected[v] > 0 {
            tree.remove(&v).unwrap();
            expected[v] -= 1;
        } else {
            tree.insert(v);
            expected[v] += 1;
        }
        assert!(tree.verify_properties(), "invalid at step {step}");
    }

    for (value, &count) in expected.iter().enumerate() {
        assert_eq!(tree.count(&value), count);
    }
    assert_eq!(tree.size(), expected.iter().sum::<usize>());
}

#[test]
fn test_large_height_bound() {
    let mut tree = RbMultiset::with_capacity(10_000);
    let mut v = 0u64;
    for n in 1..=10_000u64 {
        v = (v + 7919) % 10_007;
        tree.insert(v);

        let distinct = tree.distinct_len() as f64;
        assert!(
            tree.height() as f64 <= 2.0 * (distinct + 1.0).log2(),
            "height {} exceeds bound after {n} inserts",
            tree.height()
        );
    }
    assert_eq!(tree.distinct_len(), 10_000);
}

#[test]
fn test_clear_then_reuse() {
    init_logging();
    let mut tree: RbMultiset<_> = (0..500).collect();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.count(&10), 0);

    tree.extend([3, 1, 2, 3]);
    assert_eq!(tree.size(), 4);
    assert_eq!(tree.count(&3), 2);
    assert!(tree.verify_properties());
}
