use growvec::{growvec, GrowVec};
use std::collections::BTreeSet;

fn main() {
    // Slice algorithms through Deref.
    let mut v: GrowVec<u32> = (1..=10).rev().collect();
    v.sort_unstable();
    assert_eq!(v.binary_search(&7), Ok(6));
    v.rotate_left(3);
    assert_eq!(v.first(), Some(&4));
    v.reverse();
    assert_eq!(v.iter().max(), Some(&10));

    // Extend acts as an output sink.
    let mut evens: GrowVec<u32> = GrowVec::new();
    evens.extend(v.iter().filter(|x| *x % 2 == 0));
    evens.sort();
    assert_eq!(evens, [2, 4, 6, 8, 10]);

    // Containers of containers, keyed and ordered.
    let mut seen = BTreeSet::new();
    seen.insert(growvec![1, 2]);
    seen.insert(growvec![1, 2, 3]);
    seen.insert(growvec![1, 2]);
    assert_eq!(seen.len(), 2);
    assert_eq!(seen.iter().next(), Some(&growvec![1, 2]));

    // Round trip through std.
    let as_std: Vec<u32> = evens.into();
    let back: GrowVec<u32> = as_std.into();
    assert_eq!(back.len(), 5);
}
