use classic_collections::map::OrderedMap;
use classic_collections::Error;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeMap`.
/// This way we can ensure that after a random smattering of sets
/// and deletes we have the same keys, values and ordering in both.
fn do_ops<K, V>(ops: &[Op<K, V>], map: &mut OrderedMap<K, V>, reference: &mut BTreeMap<K, V>) -> bool
where
    K: Ord + Clone + std::fmt::Debug,
    V: PartialEq + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Set(k, v) => {
                let replaced = map.set(k.clone(), v.clone());
                if replaced != reference.insert(k.clone(), v.clone()) {
                    return false;
                }
            }
            Op::Delete(k) => {
                let deleted = map.delete(k).ok();
                if deleted != reference.remove(k) {
                    return false;
                }
            }
            Op::Get(k) => {
                if map.get(k).ok() != reference.get(k) {
                    return false;
                }
            }
            Op::Iter => {
                if !map.items().eq(reference.iter()) {
                    return false;
                }
            }
        }
        if map.len() != reference.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    crate::init_tracing();
    let mut map = OrderedMap::new();
    let mut reference = BTreeMap::new();

    do_ops(&ops, &mut map, &mut reference)
        && reference.keys().all(|key| map.get(key).ok() == reference.get(key))
        && map.items().eq(reference.iter())
}

#[quickcheck]
fn keys_strictly_increasing(pairs: Vec<(i16, u8)>) -> bool {
    let map: OrderedMap<_, _> = pairs.into_iter().collect();
    let keys: Vec<_> = map.keys().collect();
    keys.len() == map.len() && keys.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn set_then_get(xs: Vec<i8>) -> bool {
    let mut map = OrderedMap::new();
    for x in &xs {
        map.set(*x, *x);
    }

    xs.iter().all(|x| map.get(x) == Ok(x))
}

#[quickcheck]
fn reset_keeps_len(xs: Vec<i8>) -> bool {
    let mut map = OrderedMap::new();
    for x in &xs {
        map.set(*x, 0);
    }
    let len = map.len();
    for x in &xs {
        map.set(*x, 1);
    }

    map.len() == len && map.values().all(|v| *v == 1)
}

#[quickcheck]
fn missing_keys_fail(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut map = OrderedMap::new();
    for x in &xs {
        map.set(*x, *x);
    }
    let len = map.len();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| {
        map.get(x) == Err(Error::KeyNotFound)
            && map.delete(x) == Err(Error::KeyNotFound)
            && map.len() == len
    })
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut map = OrderedMap::new();
    for x in &xs {
        map.set(*x, *x);
    }
    for delete in &deletes {
        let before = map.len();
        match map.delete(delete) {
            Ok(_) if map.len() + 1 != before => return false,
            Err(_) if map.len() != before => return false,
            _ => {}
        }
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !map.contains(x))
        && still_present.iter().all(|x| map.contains(x))
        && map.keys().all(|k| !deletes.contains(k))
}

#[quickcheck]
fn views_are_repeatable(pairs: Vec<(u8, i32)>) -> bool {
    let map: OrderedMap<_, _> = pairs.into_iter().collect();

    map.keys().eq(map.keys()) && map.values().eq(map.values()) && map.items().eq(map.items())
}
