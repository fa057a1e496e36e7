use super::*;

#[test]
fn test_heap_deref() {
    let h = Heap::new(42i64);
    assert_eq!(*h, 42);
}

#[test]
fn test_heap_clone_shares_allocation() {
    let h1 = Heap::new(vec![1, 2, 3]);
    let h2 = h1.clone();
    assert_eq!(*h1, *h2);
    assert!(Heap::ptr_eq(&h1, &h2));
    assert_eq!(h1.addr(), h2.addr());
}

#[test]
fn test_heap_distinct_allocations() {
    let h1 = Heap::from_text("hello");
    let h2 = Heap::from_text("hello");
    assert_eq!(&*h1, &*h2);
    assert!(!Heap::ptr_eq(&h1, &h2));
}

#[test]
fn test_shared_write_visible_through_clone() {
    let s1 = Shared::new(vec![1]);
    let s2 = s1.clone();
    s1.write().push(2);
    assert_eq!(*s2.read(), vec![1, 2]);
    assert!(Shared::ptr_eq(&s1, &s2));
}

#[test]
fn test_shared_recursive_read() {
    let s = Shared::new(5);
    let outer = s.read();
    let inner = s.read();
    assert_eq!(*outer, 5);
    assert_eq!(*inner, 5);
}
