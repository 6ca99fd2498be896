pub struct BoundResult<T> {
    pub kept: Vec<T>,
    pub dropped: usize,
}

/// Keep the first `limit` items, preserving order.
pub fn take_first<T>(mut items: Vec<T>, limit: usize) -> BoundResult<T> {
    let dropped = items.len().saturating_sub(limit);
    items.truncate(limit);

    BoundResult {
        kept: items,
        dropped,
    }
}
