/// Sorts a pair of values into nondescending order.
pub fn sort_pair<K: Ord>(a: K, b: K) -> (K, K) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Removes the first occurrence of `value` from `items`, preserving the order
/// of the rest.  Returns false if `value` is absent.
pub fn remove_first<T: PartialEq>(items: &mut Vec<T>, value: &T) -> bool {
    match items.iter().position(|item| item == value) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}
