use super::*;

#[test]
fn empty_subset_has_zero_size() {
    let s: VertexSubset = VertexSubset::empty(10);
    assert!(s.is_empty());
    assert_eq!(s.size(), 0);
}

#[test]
fn singleton_has_one_member() {
    let s: VertexSubset<u32> = VertexSubset::make_singleton(5, 2, 99);
    assert_eq!(s.size(), 1);
    assert_eq!(s.members(), vec![(2, 99)]);
}

#[test]
fn to_dense_then_to_sparse_preserves_membership_and_payload() {
    let mut s: VertexSubset<u32> =
        VertexSubset::make_sparse(8, vec![1, 4, 6], vec![10, 40, 60]);
    let before = s.members();

    s.to_dense();
    assert!(s.is_dense());
    let mut during = s.members();
    during.sort_by_key(|&(v, _)| v);
    assert_eq!(during, before);

    s.to_sparse();
    assert!(!s.is_dense());
    let mut after = s.members();
    after.sort_by_key(|&(v, _)| v);
    assert_eq!(after, before);
}

#[test]
fn to_sparse_then_to_dense_preserves_membership_and_payload() {
    let present = vec![false, true, false, true, true];
    let payload = vec![0u32, 11, 0, 33, 44];
    let mut s: VertexSubset<u32> = VertexSubset::make_dense(5, present, payload);
    let mut before = s.members();
    before.sort_by_key(|&(v, _)| v);

    s.to_sparse();
    assert!(!s.is_dense());
    let mut during = s.members();
    during.sort_by_key(|&(v, _)| v);
    assert_eq!(during, before);

    s.to_dense();
    assert!(s.is_dense());
    let mut after = s.members();
    after.sort_by_key(|&(v, _)| v);
    assert_eq!(after, before);
}

#[test]
fn to_dense_is_idempotent() {
    let mut s: VertexSubset<u32> = VertexSubset::make_sparse(4, vec![0, 3], vec![1, 2]);
    s.to_dense();
    let first = s.members();
    s.to_dense();
    assert_eq!(s.members(), first);
}

#[test]
fn out_work_sums_member_out_degrees_and_is_cached() {
    // 0 -> 1, 0 -> 2, 1 -> 2
    let g = GraphView::<()>::from_csr_unchecked(vec![0, 2, 3, 3], vec![1, 2, 2], None, false);
    let s: VertexSubset = VertexSubset::make_sparse(3, vec![0, 1], vec![(), ()]);
    assert_eq!(s.out_work(&g), 3);
    // second call hits the cache and must return the same value
    assert_eq!(s.out_work(&g), 3);
}

#[test]
#[should_panic(expected = "duplicate vid")]
fn make_sparse_rejects_duplicates() {
    let _: VertexSubset = VertexSubset::make_sparse(4, vec![1, 1], vec![(), ()]);
}
