use searchtree::SearchTree;

use quickcheck_macros::quickcheck;
use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and cursor removals we have the same keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut SearchTree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                assert_eq!(bst.insert(k.clone()), set.insert(k.clone()));
            }
            Op::Remove(k) => {
                assert_eq!(bst.remove(k), set.remove(k));
            }
            Op::Sweep(k) => {
                let mut cursor = bst.cursor();
                while cursor.peek_next().is_some_and(|next| next <= k) {
                    let removed = cursor.remove_next().unwrap();
                    assert!(set.remove(&removed));
                }
            }
        }
    }
}

/// Whether the in-order keys strictly ascend.
fn ascending<K: Ord>(tree: &SearchTree<K>) -> bool {
    let keys: Vec<_> = tree.iter().collect();
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = SearchTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    ascending(&tree) && tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: SearchTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: SearchTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn insert_existing_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree: SearchTree<_> = xs.iter().copied().collect();
    let before = tree.render();

    xs.iter().all(|x| !tree.insert(*x)) && tree.render() == before
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: SearchTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        let len = tree.len();
        let present = tree.contains(delete);
        if tree.remove(delete) != present || tree.len() != len - usize::from(present) {
            return false;
        }
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    ascending(&tree)
        && deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn remove_next_drains_in_order(xs: Vec<i16>) -> bool {
    let mut tree: SearchTree<_> = xs.iter().copied().collect();
    let expected: Vec<_> = tree.iter().copied().collect();

    let mut removed = Vec::new();
    let mut cursor = tree.cursor();
    while cursor.has_next() {
        removed.push(cursor.remove_next().unwrap());
    }

    removed == expected && tree.is_empty()
}

#[quickcheck]
fn interleaved_cursor_visits_every_key_once(xs: Vec<i16>, pattern: Vec<bool>) -> bool {
    let mut tree: SearchTree<_> = xs.iter().copied().collect();
    let expected: Vec<_> = tree.iter().copied().collect();

    let mut visited = Vec::new();
    let mut kept = Vec::new();
    let mut cursor = tree.cursor();
    let mut step = 0;
    while cursor.has_next() {
        let remove = !pattern.is_empty() && pattern[step % pattern.len()];
        if remove {
            visited.push(cursor.remove_next().unwrap());
        } else {
            let key = *cursor.next_key().unwrap();
            visited.push(key);
            kept.push(key);
        }
        step += 1;
    }

    visited == expected && tree.iter().copied().eq(kept) && ascending(&tree)
}

#[quickcheck]
fn clone_is_independent(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let original: SearchTree<_> = xs.iter().copied().collect();
    let before = original.render();

    let mut copy = original.clone();
    for delete in &deletes {
        copy.remove(delete);
    }
    copy.insert(0);

    original.render() == before
}
