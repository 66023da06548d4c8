/// Lazy iterator over the ancestor prefixes of a segment list
///
/// For segments `[a, b, c]`, yields: `[a, b, c]` → `[a, b]` → `[a]` → `[]`
///
/// Stops as soon as the consumer finds what it needs (short-circuit
/// evaluation with `find`/`find_map`). Only borrows from the input slice.
///
/// # Examples
///
/// ```
/// use routeview_router::path::SegmentHierarchy;
///
/// let segments = ["a", "b", "c"];
/// let prefixes: Vec<&[&str]> = SegmentHierarchy::new(&segments).collect();
/// assert_eq!(prefixes, vec![&["a", "b", "c"][..], &["a", "b"][..], &["a"][..], &[][..]]);
/// ```
#[derive(Debug)]
pub struct SegmentHierarchy<'a, T> {
    current: Option<&'a [T]>,
}

impl<'a, T> SegmentHierarchy<'a, T> {
    /// Creates a new hierarchy iterator starting from the full segment list
    pub fn new(segments: &'a [T]) -> Self {
        Self {
            current: Some(segments),
        }
    }
}

impl<'a, T> Iterator for SegmentHierarchy<'a, T> {
    type Item = &'a [T];

    /// Returns the next (shorter) prefix
    ///
    /// The empty prefix is yielded last; iteration ends after it.
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        self.current = current.split_last().map(|(_, parent)| parent);

        Some(current)
    }
}

// Derive would require `T: Clone`
impl<'a, T> Clone for SegmentHierarchy<'a, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
        }
    }
}
