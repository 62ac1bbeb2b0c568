//! Fixed-size page slicing over an already-ordered collection.

/// Number of items returned per paginated request. Fixed by contract,
/// not configurable at runtime.
pub const PAGE_SIZE: usize = 10;

/// Return the slice of `items` belonging to `page` (1-based).
///
/// The input must already be in the caller's stable order (ascending id
/// everywhere in this service). Out-of-range pages yield an empty slice
/// rather than an error; whether that empty slice is a 404 is the
/// handler's decision, not this function's. Page 0 is treated as page 1.
pub fn paginate<T>(items: &[T], page: u32) -> &[T] {
    let page = page.max(1) as usize;
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}
