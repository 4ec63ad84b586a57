use growvec::prelude::*;

fn constructors() {
    let v1: GrowVec<i32> = GrowVec::new();
    assert!(v1.is_empty());

    let v2: GrowVec<i32> = GrowVec::with_len(5);
    assert_eq!(v2.len(), 5);

    let v3 = GrowVec::from_elem(3, 42);
    assert!(v3.iter().all(|&x| x == 42));

    let v4 = growvec![1, 2, 3];
    assert_eq!(v4[1], 2);

    let mut v5 = v4.clone();
    assert_eq!(v5, v4);

    let v6 = v5.take();
    assert_eq!(v6, v4);
}

fn accessors() {
    let v = growvec![7, 8, 9];
    assert_eq!(v.front(), Some(&7));
    assert_eq!(v.back(), Some(&9));
    match v.at(5) {
        Err(Error::OutOfRange { index: 5, len: 3 }) => {}
        other => panic!("expected out of range, got {:?}", other),
    }
}

fn modifiers() {
    let mut v = GrowVec::new();
    v.push_back(1);
    v.push_back(2);
    v.pop_back();
    assert_eq!(v.back(), Some(&1));
    v.resize(5, 100);
    assert_eq!(v[4], 100);
    v.shrink_to_fit();
    v.clear();
    assert!(v.is_empty());
}

fn insert_erase() {
    let mut v = growvec![1, 2, 3];
    v.insert(v.begin() + 1, 99);
    assert_eq!(v[1], 99);

    let range = growvec![5, 6];
    v.insert_slice(v.begin(), &range);
    assert_eq!(v, [5, 6, 1, 99, 2, 3]);

    v.erase(v.begin() + 1).unwrap();
    assert_eq!(v[1], 1);

    v.erase_range(v.begin(), v.begin() + 2);
    assert_eq!(v[0], 99);
}

fn iterators() {
    let v = growvec![10, 20, 30];
    let mut sum = 0;
    let mut it = v.begin();
    while it != v.end() {
        sum += v[it];
        it += 1;
    }
    assert_eq!(sum, 60);

    let mut r = v.rbegin();
    assert_eq!(v[r], 30);
    r += 1;
    assert_eq!(v[r], 20);
}

fn main() {
    let mut pairs: GrowVec<(i32, String)> = GrowVec::new();
    pairs.emplace_back(With(|| (42, "answer".to_string())));

    let std_vec = vec![1, 2, 3, 4];
    let myvec: GrowVec<i32> = std_vec.iter().copied().collect();
    let line: Vec<String> = myvec.iter().map(|x| x.to_string()).collect();
    println!("{}", line.join(" "));

    constructors();
    accessors();
    modifiers();
    insert_erase();
    iterators();

    println!("All tests passed successfully.");
}
