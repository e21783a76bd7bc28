/// Compute effective limit with precedence: local arg -> global flag -> config default.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// Keep at most `limit` items from the end, for newest-last feeds.
pub fn keep_last<T>(items: &mut Vec<T>, limit: u32) {
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    let skip = items.len().saturating_sub(limit);
    items.drain(..skip);
}
