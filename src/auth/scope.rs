/// Returns `true` if every element of `a` is contained in `b`.
///
/// An empty `a` or `b` is never a subset: a request for no scopes, or a grant
/// of none, is rejected.
pub fn is_subset<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    a.iter().all(|item| b.contains(item))
}
