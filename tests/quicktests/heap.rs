use classic_collections::heap::PriorityHeap;
use classic_collections::Error;

/// Extracts everything from the heap, top first.
fn drain<T, P>(heap: &mut PriorityHeap<T, P>) -> Vec<T>
where
    P: classic_collections::heap::Priority<T>,
{
    std::iter::from_fn(|| heap.extract_top().ok()).collect()
}

#[quickcheck]
fn drains_in_non_increasing_order(xs: Vec<i32>) -> bool {
    let mut heap: PriorityHeap<_> = xs.iter().copied().collect();
    let mut expected = xs;
    expected.sort_unstable_by(|a, b| b.cmp(a));

    drain(&mut heap) == expected && heap.extract_top() == Err(Error::EmptyHeap)
}

#[quickcheck]
fn negated_projection_drains_ascending(xs: Vec<i16>) -> bool {
    let mut heap = PriorityHeap::with_priority(|x: &i16| -i32::from(*x));
    heap.extend(xs.iter().copied());
    let mut expected = xs;
    expected.sort_unstable();

    drain(&mut heap) == expected
}

#[quickcheck]
fn custom_priority_is_respected(words: Vec<String>) -> bool {
    let mut heap = PriorityHeap::with_priority(|s: &String| s.len());
    heap.extend(words);

    drain(&mut heap).windows(2).all(|w| w[0].len() >= w[1].len())
}

#[quickcheck]
fn peek_never_mutates(xs: Vec<u8>) -> bool {
    let heap: PriorityHeap<_> = xs.iter().copied().collect();
    let before = heap.as_slice().to_vec();
    let top = heap.peek().ok().copied();

    top == xs.iter().copied().max() && heap.as_slice() == before.as_slice() && heap.len() == xs.len()
}
