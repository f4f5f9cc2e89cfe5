use crate::util::{
    init_tracing,
    map::{avl_height_bound, stress_sequential},
};
use avlcount::{AVLTree, Counters, Lookup};

fn keys<R: Copy>(avl: &AVLTree<R>) -> Vec<R> {
    avl.iter().copied().collect()
}

#[test]
fn test_insert_find_avl_tree() {
    let mut avl: AVLTree<i32> = AVLTree::new();

    for i in 0..65535 {
        // 65535 = 2^16 - 1, ascending keys build the perfect tree
        avl.insert(i);
    }

    assert_eq!(avl.len(), 65535);
    assert_eq!(avl.height(), 15);
    assert_eq!(avl.validate(), Ok(()));

    for i in 0..65535 {
        let lookup = avl.find(&i);
        assert!(lookup.found);
        assert!(lookup.comparisons <= 16);
    }

    assert_eq!(avl.insert(65536), 16);
    assert_eq!(avl.height(), 16);
    assert_eq!(avl.validate(), Ok(()));
}

#[test]
fn test_balanced_input_avl_tree() {
    let mut avl: AVLTree<i32> = AVLTree::new();

    /* no rotation is needed
     *
     *          5
     *       3     8
     *     1   4 7   9
     */
    let comparisons: Vec<usize> = [5, 3, 8, 1, 4, 7, 9]
        .iter()
        .map(|key| avl.insert(*key))
        .collect();

    assert_eq!(comparisons, vec![0, 1, 1, 2, 2, 2, 2]);
    assert_eq!(keys(&avl), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(avl.height(), 2);
    assert_eq!(avl.validate(), Ok(()));

    assert_eq!(avl.find(&5).comparisons, 1);
    assert_eq!(avl.find(&3).comparisons, 2);
    assert_eq!(avl.find(&8).comparisons, 2);
    for key in &[1, 4, 7, 9] {
        assert_eq!(
            avl.find(key),
            Lookup {
                found: true,
                comparisons: 3
            }
        );
    }
}

#[test]
fn test_ascending_input_avl_tree() {
    let mut avl: AVLTree<i32> = AVLTree::new();

    // an unbalanced tree would be a list of height 6
    let comparisons: Vec<usize> = (1..=7)
        .map(|key| {
            let comparisons = avl.insert(key);
            assert_eq!(avl.validate(), Ok(()), "after inserting {}", key);
            comparisons
        })
        .collect();

    assert_eq!(comparisons, vec![0, 1, 2, 2, 3, 3, 3]);
    assert_eq!(keys(&avl), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(avl.height(), 2);

    // 4 is the root after the rotations
    assert_eq!(avl.find(&4).comparisons, 1);
    for key in 1..=7 {
        let lookup = avl.find(&key);
        assert!(lookup.found);
        assert!(lookup.comparisons <= 3); // ceil(log2(7 + 1))
    }
}

#[test]
fn test_descending_input_avl_tree() {
    let mut avl: AVLTree<i32> = AVLTree::new();

    /* mirror of the ascending case
     *
     *          4
     *       2     6
     *     1   3 5   7
     */
    let comparisons: Vec<usize> = (1..=7)
        .rev()
        .map(|key| {
            let comparisons = avl.insert(key);
            assert_eq!(avl.validate(), Ok(()), "after inserting {}", key);
            comparisons
        })
        .collect();

    assert_eq!(comparisons, vec![0, 1, 2, 2, 3, 3, 3]);
    assert_eq!(keys(&avl), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(avl.height(), 2);
    assert_eq!(avl.find(&4).comparisons, 1);
    for key in &[1, 3, 5, 7] {
        assert_eq!(avl.find(key).comparisons, 3);
    }
}

#[test]
fn test_find_missing_avl_tree() {
    let avl: AVLTree<i32> = [4, 2, 6, 1, 3, 5, 7].iter().copied().collect();

    // every miss walks one full root-to-leaf path of the perfect tree
    for key in &[0, 8, 100, -100] {
        assert_eq!(
            avl.find(key),
            Lookup {
                found: false,
                comparisons: 3
            }
        );
    }
    assert_eq!(avl.get(&0), None);
    assert_eq!(avl.get(&6), Some(&6));
}

#[test]
fn test_empty_avl_tree() {
    let avl: AVLTree<u64> = AVLTree::new();
    let mut counters = Counters::new();

    counters.reset();
    let lookup = avl.find(&42);
    counters.find += lookup.comparisons;

    assert!(!lookup.found);
    assert_eq!(counters.find, 0);
    assert_eq!(counters, Counters::default());
    assert_eq!(avl.height(), -1);
    assert!(avl.is_empty());
    assert_eq!(avl.iter().next(), None);
    assert_eq!(avl.validate(), Ok(()));
}

#[test]
fn test_first_insert_avl_tree() {
    let mut avl: AVLTree<u64> = AVLTree::new();

    // nothing to compare against on an empty tree
    assert_eq!(avl.insert(10), 0);
    assert_eq!(avl.height(), 0);
    assert_eq!(avl.insert(20), 1);
    assert_eq!(avl.height(), 1);
}

#[test]
fn test_rotation_cases_avl_tree() {
    init_tracing();

    // (insertion order, case)
    let cases = [
        ([3, 2, 1], "left-left"),
        ([1, 2, 3], "right-right"),
        ([3, 1, 2], "left-right"),
        ([1, 3, 2], "right-left"),
    ];

    for (input, case) in cases.iter() {
        let mut avl: AVLTree<i32> = AVLTree::new();
        for key in input {
            avl.insert(*key);
            assert_eq!(avl.validate(), Ok(()), "{}: after inserting {}", case, key);
        }

        assert_eq!(avl.height(), 1, "{}", case);
        assert_eq!(avl.find(&2).comparisons, 1, "{}: 2 should be the root", case);
        assert_eq!(avl.find(&1).comparisons, 2, "{}", case);
        assert_eq!(avl.find(&3).comparisons, 2, "{}", case);
        assert_eq!(keys(&avl), vec![1, 2, 3], "{}", case);
    }
}

#[test]
fn test_duplicate_keys_go_right_avl_tree() {
    let mut avl: AVLTree<(i32, char)> = AVLTree::new();

    assert_eq!(avl.insert((5, 'a')), 0);
    assert_eq!(avl.insert((5, 'b')), 1);

    // 'b' is after the root 'a' in order, so it went to the right
    assert_eq!(avl.get(&5), Some(&(5, 'a')));
    assert_eq!(
        avl.iter().map(|(_, v)| *v).collect::<Vec<_>>(),
        vec!['a', 'b']
    );

    // right-right rotation makes 'b' the root, and the order of the equal keys is kept
    assert_eq!(avl.insert((5, 'c')), 2);
    assert_eq!(avl.get(&5), Some(&(5, 'b')));
    assert_eq!(avl.height(), 1);
    assert_eq!(avl.len(), 3);
    assert_eq!(
        avl.iter().map(|(_, v)| *v).collect::<Vec<_>>(),
        vec!['a', 'b', 'c']
    );

    for (i, value) in "defghijklmnop".chars().enumerate() {
        avl.insert((5, value));
        avl.insert((i as i32, value));
    }
    assert_eq!(avl.validate(), Ok(()));
    assert_eq!(
        avl.iter()
            .filter(|(k, _)| *k == 5)
            .map(|(_, v)| *v)
            .collect::<String>(),
        "abcdefghiijklmnop"
    );
}

#[test]
fn test_random_order_avl_tree() {
    use rand::{prelude::SliceRandom, rngs::StdRng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut input: Vec<u32> = (0..10_000).collect();
    input.shuffle(&mut rng);

    let mut avl: AVLTree<u32> = AVLTree::new();
    for (n, key) in input.iter().enumerate() {
        let height = avl.height();
        let comparisons = avl.insert(*key);

        assert!(comparisons as isize <= height + 1);
        assert!(avl.height() <= avl_height_bound(n + 1));
    }

    assert_eq!(avl.validate(), Ok(()));
    assert_eq!(keys(&avl), (0..10_000).collect::<Vec<_>>());

    for key in &input {
        let lookup = avl.find(key);
        assert!(lookup.found);
        assert!(lookup.comparisons as isize <= avl.height() + 1);
    }
}

#[test]
fn test_debug_avl_tree() {
    let avl: AVLTree<i32> = vec![2, 1].into_iter().collect();

    assert_eq!(
        format!("{:?}", avl),
        "AVLTree { len: 2, height: 1, records: [1, 2] }"
    );
}

#[test]
fn stress_avl_tree() {
    stress_sequential::<u64, AVLTree<_>>(20_000, true);
}

#[test]
fn stress_avl_tree_string() {
    stress_sequential::<String, AVLTree<_>>(20_000, true);
}

#[test]
fn stress_avl_tree_duplicates() {
    stress_sequential::<u8, AVLTree<_>>(20_000, true);
}
