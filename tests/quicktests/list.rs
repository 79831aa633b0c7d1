use classic_collections::list::ArrayList;
use classic_collections::queue::CircularQueue;
use classic_collections::Error;

use std::collections::VecDeque;

use crate::ListOp;

/// Applies the operations to an `ArrayList` and a `Vec` side by side and
/// reports whether they ever disagreed.
fn do_ops(ops: &[ListOp<i8>], list: &mut ArrayList<i8>, reference: &mut Vec<i8>) -> bool {
    for op in ops {
        let agreed = match *op {
            ListOp::Push(x) => {
                list.push(x);
                reference.push(x);
                true
            }
            ListOp::Insert(at, x) => {
                let at = at % (reference.len() + 1);
                reference.insert(at, x);
                list.insert(at as isize, x).is_ok()
            }
            ListOp::Pop(at) if reference.is_empty() => list.pop(at as isize).is_err(),
            ListOp::Pop(at) => {
                let at = at % reference.len();
                list.pop(at as isize) == Ok(reference.remove(at))
            }
            ListOp::Remove(x) => match reference.iter().position(|&y| y == x) {
                Some(at) => list.remove(&x) == Ok(reference.remove(at)),
                None => list.remove(&x) == Err(Error::ValueNotFound),
            },
        };
        if !agreed || list.len() != reference.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn list_behaves_like_vec(ops: Vec<ListOp<i8>>) -> bool {
    let mut list = ArrayList::new();
    let mut reference = Vec::new();

    do_ops(&ops, &mut list, &mut reference) && list.iter().eq(reference.iter())
}

#[quickcheck]
fn negative_indices_count_from_the_end(xs: Vec<u8>, back: usize) -> bool {
    let list: ArrayList<_> = xs.iter().copied().collect();
    if xs.is_empty() {
        return list.get(-1).is_err();
    }
    let back = back % xs.len() + 1;

    list.get(-(back as isize)) == Ok(&xs[xs.len() - back])
}

#[quickcheck]
fn queue_behaves_like_vecdeque(ops: Vec<Option<u8>>, capacity: u8) -> bool {
    let mut queue = CircularQueue::with_capacity(usize::from(capacity % 16));
    let mut reference = VecDeque::new();

    for op in ops {
        match op {
            Some(x) if queue.is_full() => {
                if queue.enqueue(x) != Err(Error::QueueFull) {
                    return false;
                }
                let grown = queue.capacity() * 2 + 1;
                if queue.resize(grown).is_err() || queue.enqueue(x).is_err() {
                    return false;
                }
                reference.push_back(x);
            }
            Some(x) => {
                if queue.enqueue(x).is_err() {
                    return false;
                }
                reference.push_back(x);
            }
            None => {
                if queue.dequeue().ok() != reference.pop_front() {
                    return false;
                }
            }
        }
    }

    queue.iter().eq(reference.iter())
}
