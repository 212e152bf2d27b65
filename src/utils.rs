/// Returns the index after `current` in a list of `len` items, wrapping back to `0` at the end.
/// Returns `None` for an empty list, where there is nothing to rotate to.
pub fn next_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some((current + 1) % len)
}

#[cfg(test)]
mod tests {
    use super::next_index;

    #[test]
    fn wraps_around() {
        assert_eq!(next_index(0, 3), Some(1));
        assert_eq!(next_index(1, 3), Some(2));
        assert_eq!(next_index(2, 3), Some(0));
    }

    #[test]
    fn single_item_stays_put() {
        assert_eq!(next_index(0, 1), Some(0));
    }

    #[test]
    fn empty_list_has_no_next() {
        assert_eq!(next_index(0, 0), None);
    }
}
