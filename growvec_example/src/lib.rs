#![allow(dead_code)]
use growvec::prelude::*;

/// A record built in place with [`GrowVec::emplace_back`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Entry {
    /// Sort key.
    pub id: i32,
    /// Payload.
    pub name: String,
}

/// Output sink that appends everything written to it, for algorithms that produce
/// values one at a time.
pub struct BackInserter<'a, T> {
    target: &'a mut GrowVec<T>,
}

impl<'a, T> BackInserter<'a, T> {
    /// Appends to `target`.
    pub fn new(target: &'a mut GrowVec<T>) -> Self {
        BackInserter { target }
    }

    /// Appends one value.
    pub fn put(&mut self, value: T) {
        self.target.push_back(value)
    }
}

impl<'a, T> Extend<T> for BackInserter<'a, T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.target.extend(items)
    }
}

/// Copies the items that satisfy `keep` into `out`, returning how many were copied.
pub fn copy_if<T: Clone>(
    items: &[T],
    out: &mut impl Extend<T>,
    mut keep: impl FnMut(&T) -> bool,
) -> usize {
    let mut copied = 0;
    out.extend(items.iter().filter(|x| keep(x)).cloned().inspect(|_| copied += 1));
    copied
}

/// Removes every element equal to `value` by cursor, returning how many were removed.
pub fn erase_all<T: PartialEq>(v: &mut GrowVec<T>, value: &T) -> usize {
    let mut removed = 0;
    let mut c = v.begin();
    while c != v.end() {
        if v[c] != *value {
            // Reads do not invalidate, so the cursor can keep walking.
            c += 1;
            continue;
        }
        match v.erase(c) {
            Ok(next) => c = next,
            Err(_) => break,
        }
        removed += 1;
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counted {
        drops: Rc<Cell<usize>>,
    }

    impl Drop for Counted {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn constructors() {
        let v1: GrowVec<i32> = GrowVec::new();
        assert!(v1.is_empty());

        let v2: GrowVec<i32> = GrowVec::with_len(5);
        assert_eq!(v2.len(), 5);

        let v3 = GrowVec::from_elem(3, 42);
        assert_eq!(v3, [42, 42, 42]);

        let v4 = growvec![1, 2, 3];
        assert_eq!(v4.len(), 3);
        assert_eq!(v4[1], 2);

        let mut v5 = v4.clone();
        assert_eq!(v5, v4);

        let v6 = v5.take();
        assert_eq!(v6, v4);
        assert!(v5.is_empty());

        let from_std: GrowVec<i32> = vec![1, 2, 3, 4].into();
        assert_eq!(from_std.iter().map(|x| x.to_string()).collect::<Vec<_>>().join(" "), "1 2 3 4");
    }

    #[test]
    fn assignment() {
        let v1 = growvec![1, 2, 3];
        let mut v2 = GrowVec::new();
        v2.clone_from(&v1);
        assert_eq!(v2, v1);

        let mut v3 = GrowVec::new();
        v3.assign_slice(&[4, 5]);
        assert_eq!(v3[0], 4);

        let mut v4 = GrowVec::new();
        v4.move_from(&mut v3);
        assert_eq!(v4[1], 5);
        assert_eq!((v3.len(), v3.capacity()), (0, 0));
    }

    #[test]
    fn accessors() {
        let v = growvec![7, 8, 9];
        assert_eq!(v.front(), Some(&7));
        assert_eq!(v.back(), Some(&9));
        assert_eq!(v[1], 8);
        assert_eq!(v.at(5), Err(Error::OutOfRange { index: 5, len: 3 }));
        for i in 0..v.len() {
            assert_eq!(v.at(i), Ok(&v[i]));
        }
    }

    #[test]
    fn modifiers() {
        let mut v = GrowVec::new();
        v.push_back(1);
        v.push_back(2);
        assert_eq!(v.len(), 2);
        assert_eq!(v.back(), Some(&2));

        assert_eq!(v.pop_back(), Some(2));
        assert_eq!(v.len(), 1);
        assert_eq!(v.back(), Some(&1));

        v.resize(5, 100);
        assert_eq!(v.len(), 5);
        assert_eq!(v[4], 100);

        v.shrink_to_fit();
        assert!(v.capacity() >= v.len());

        v.clear();
        assert!(v.is_empty());
    }

    #[test]
    fn insert_erase_sequence() {
        let mut v = GrowVec::new();
        v.push_back(1);
        v.push_back(2);
        v.insert(v.begin() + 1, 99);
        assert_eq!(v, [1, 99, 2]);
        v.erase(v.begin()).unwrap();
        assert_eq!(v, [99, 2]);
    }

    #[test]
    fn insert_range_and_erase_range() {
        let mut v = growvec![1, 2, 3];
        let range = growvec![5, 6];
        v.insert_range(v.begin(), range.iter().copied());
        assert_eq!(v, [5, 6, 1, 2, 3]);

        v.erase(v.begin() + 1).unwrap();
        assert_eq!(v, [5, 1, 2, 3]);

        v.erase_range(v.begin(), v.begin() + 2);
        assert_eq!(v, [2, 3]);
    }

    #[test]
    fn forward_and_reverse_walks() {
        let v = growvec![10, 20, 30];
        let mut sum = 0;
        let mut c = v.begin();
        while c != v.end() {
            sum += v[c];
            c += 1;
        }
        assert_eq!(sum, 60);

        let mut seen = Vec::new();
        let mut r = v.rbegin();
        while r != v.rend() {
            seen.push(v[r]);
            r += 1;
        }
        assert_eq!(seen, [30, 20, 10]);
    }

    #[test]
    fn lexicographic_order() {
        assert!(growvec![1, 2, 3] < growvec![1, 2, 4]);
        assert!(growvec![1, 2] < growvec![1, 2, 3]);
        assert_eq!(growvec![1, 2, 3], growvec![1, 2, 3]);
    }

    #[test]
    fn clone_is_independent() {
        let v = growvec![String::from("a"), String::from("b")];
        let mut c = v.clone();
        c[0].push('!');
        c.push_back(String::from("c"));
        assert_eq!(v, ["a", "b"]);
        assert_eq!(c, ["a!", "b", "c"]);
    }

    #[test]
    fn live_elements_balance_with_drops() {
        let drops = Rc::new(Cell::new(0));
        let mut created = 0;
        {
            let mut v = GrowVec::new();
            for _ in 0..50 {
                v.push_back(Counted { drops: drops.clone() });
                created += 1;
                assert!(v.len() <= v.capacity());
            }
            v.erase_range(v.begin() + 10, v.begin() + 20);
            v.truncate(30);
            v.shrink_to_fit();
            assert_eq!(drops.get(), 20);
            assert_eq!(created - drops.get(), v.len());
        }
        assert_eq!(drops.get(), created);
    }

    #[test]
    fn emplace_pairs() {
        let mut v: GrowVec<Entry> = GrowVec::new();
        v.emplace_back(With(|| Entry { id: 42, name: "answer".to_string() }));
        v.emplace(v.begin(), Value(Entry { id: 7, name: "seven".to_string() }));
        v.sort();
        assert_eq!(v[0].id, 7);
        assert_eq!(v.back().map(|e| e.name.as_str()), Some("answer"));
    }

    #[test]
    fn back_inserter_sink() {
        let source = [1, 2, 3, 4, 5, 6];
        let mut evens = GrowVec::new();
        let copied = copy_if(&source, &mut BackInserter::new(&mut evens), |x| x % 2 == 0);
        assert_eq!(copied, 3);
        assert_eq!(evens, [2, 4, 6]);

        let mut sink = BackInserter::new(&mut evens);
        sink.put(8);
        assert_eq!(evens, [2, 4, 6, 8]);
    }

    #[test]
    fn erase_all_walks_with_cursor() {
        let mut v = growvec![1, 0, 0, 2, 0, 3];
        assert_eq!(erase_all(&mut v, &0), 3);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn nested_containers() {
        let mut grid: GrowVec<GrowVec<u8>> = GrowVec::new();
        for row in 0..3 {
            grid.push_back(GrowVec::from_init(row + 1, FillSequentially(|i| i as u8)));
        }
        let last = grid.back().cloned().unwrap_or_default();
        grid.push_back(last);
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[3], [0, 1, 2]);
        assert_eq!(grid.iter().map(|row| row.len()).sum::<usize>(), 9);
    }

    #[cfg(not(miri))]
    #[test]
    fn programs_run() {
        let t = trybuild::TestCases::new();
        t.pass("shouldpass/*.rs");
    }
}
