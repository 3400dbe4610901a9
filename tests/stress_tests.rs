//! Stress tests that push the heaps to their limits
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use rust_dary_heap::{DaryHeap, Heap, MaxFirst};

const ARITIES: [usize; 4] = [2, 3, 8, 64];

/// Small deterministic generator so the tests stay reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> i32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as i32
    }
}

/// Test massive numbers of pushes and pops
fn test_massive_operations<H: Heap<i32>>(mut heap: H) {
    for i in 0..10_000 {
        heap.push(i);
    }

    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Ok(i));
    }

    assert!(heap.is_empty());
}

/// Test alternating push and pop
fn test_alternating_ops<H: Heap<i32>>(mut heap: H) {
    for i in 0..2_000 {
        heap.push(i * 2);
        heap.push(i * 2 + 1);

        // Pop one, leaving one extra element per round
        assert!(heap.pop().is_ok());
    }

    assert_eq!(heap.len(), 2_000);

    let mut last = i32::MIN;
    while let Ok(x) = heap.pop() {
        assert!(x >= last);
        last = x;
    }
}

/// Test pseudo-random workload against a sorted reference
fn test_random_workload<H: Heap<i32>>(mut heap: H, seed: u64) {
    let mut rng = Lcg(seed);
    let mut reference: Vec<i32> = Vec::new();

    for _ in 0..20_000 {
        let r = rng.next();
        if r % 3 == 0 && !reference.is_empty() {
            // Reference is kept sorted descending, so the minimum is last
            let expected = reference.pop();
            assert_eq!(heap.pop().ok(), expected);
        } else {
            let v = r % 1_000;
            let pos = reference.partition_point(|&x| x > v);
            reference.insert(pos, v);
            heap.push(v);
        }
        assert_eq!(heap.len(), reference.len());
    }

    while let Some(expected) = reference.pop() {
        assert_eq!(heap.pop(), Ok(expected));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_dary_massive() {
    for arity in ARITIES {
        test_massive_operations(DaryHeap::with_arity(arity).unwrap());
    }
}

#[test]
fn test_dary_alternating() {
    for arity in ARITIES {
        test_alternating_ops(DaryHeap::with_arity(arity).unwrap());
    }
}

#[test]
fn test_dary_random_workload() {
    for (seed, arity) in ARITIES.into_iter().enumerate() {
        test_random_workload(DaryHeap::with_arity(arity).unwrap(), seed as u64 + 1);
    }
}

#[test]
fn test_dary_max_heap_large() {
    let mut heap = DaryHeap::<i32, MaxFirst>::max_heap(7).unwrap();
    let mut rng = Lcg(42);
    let mut values: Vec<i32> = (0..50_000).map(|_| rng.next()).collect();
    heap.extend(values.iter().copied());
    assert!(heap.is_valid_heap());

    values.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(heap.into_sorted_vec(), values);
}
