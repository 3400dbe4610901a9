//! Kani verification proofs for heap operations
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani

#[cfg(kani)]
use rust_dary_heap::{DaryHeap, Heap, HeapError, MaxFirst};

/// Proof that push always increments the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_push_increments_len() {
    let arity: usize = kani::any();
    kani::assume(arity >= 2 && arity <= 4);
    let mut heap: DaryHeap<u32> = DaryHeap::with_arity(arity).unwrap();

    heap.push(kani::any());
    heap.push(kani::any());
    let initial_len = heap.len();

    heap.push(kani::any());

    assert!(heap.len() == initial_len + 1);
}

/// Proof that top and pop on an empty heap underflow without side effects
#[cfg(kani)]
#[kani::proof]
fn verify_empty_underflow() {
    let mut heap: DaryHeap<u32> = DaryHeap::new();

    assert!(heap.top() == Err(HeapError::Underflow));
    assert!(heap.pop() == Err(HeapError::Underflow));
    assert!(heap.len() == 0);
}

/// Proof that arities below 2 are always rejected
#[cfg(kani)]
#[kani::proof]
fn verify_degenerate_arity_rejected() {
    let arity: usize = kani::any();
    kani::assume(arity < 2);

    assert!(matches!(
        DaryHeap::<u32>::with_arity(arity),
        Err(HeapError::InvalidArity(a)) if a == arity
    ));
}

/// Proof that pop returns the minimum of everything pushed
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_pop_returns_min() {
    let mut heap: DaryHeap<u32> = DaryHeap::with_arity(3).unwrap();

    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();
    let d: u32 = kani::any();
    heap.push(a);
    heap.push(b);
    heap.push(c);
    heap.push(d);

    let min = a.min(b).min(c).min(d);
    assert!(heap.pop() == Ok(min));
    assert!(heap.is_valid_heap());
}

/// Proof that the heap property holds after a push/pop sequence on a max-heap
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_heap_property_after_pop() {
    let mut heap: DaryHeap<u8, MaxFirst> = DaryHeap::max_heap(2).unwrap();

    for _ in 0..5 {
        heap.push(kani::any());
    }
    let _ = heap.pop();
    let _ = heap.pop();

    assert!(heap.len() == 3);
    assert!(heap.is_valid_heap());
}
