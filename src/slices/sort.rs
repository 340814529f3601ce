/// Returns a copy of `s`, ordered by the comparator `f` using a merge sort.
///
/// `f(x, y)` must return `true` if `x` is larger than `y` (so `y` comes first) and `false` if `x`
/// is smaller. For equal elements the return value doesn't matter, so the relative order of equal
/// elements is unspecified.
///
/// Runs in `O(n log n)` time.
pub fn sort_by<T, F>(s: Option<&[T]>, mut f: F) -> Option<Vec<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let s = s?;
    tracing::trace!(len = s.len(), "sort_by");
    Some(merge_sort(s, &mut f))
}

/// Returns a copy of `s` in descending order. See [`sort_by`].
///
/// Incomparable elements, like `NaN`, are treated as equal.
pub fn sort<T: PartialOrd + Clone>(s: Option<&[T]>) -> Option<Vec<T>> {
    sort_by(s, |x, y| x < y)
}

fn merge_sort<T: Clone, F: FnMut(&T, &T) -> bool>(s: &[T], f: &mut F) -> Vec<T> {
    if s.len() <= 1 {
        return s.to_vec();
    }
    let (left, right) = s.split_at(s.len() / 2);
    let left = merge_sort(left, f);
    let right = merge_sort(right, f);
    merge(left, right, f)
}

fn merge<T, F: FnMut(&T, &T) -> bool>(left: Vec<T>, right: Vec<T>, f: &mut F) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(x), Some(y)) = (left.peek(), right.peek()) {
        let next = if f(x, y) { right.next() } else { left.next() };
        merged.extend(next);
    }
    // At most one of these still holds elements.
    merged.extend(left);
    merged.extend(right);
    merged
}
