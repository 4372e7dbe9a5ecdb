use super::DisplaySurface;

/// Surface that keeps nodes in memory; used by terminal front ends and tests
#[derive(Debug, Clone)]
pub struct MemorySurface<N> {
    items: Vec<N>,
    pagination: Option<N>,
    clears: usize,
}

impl<N> MemorySurface<N> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
            clears: 0,
        }
    }

    pub fn items(&self) -> &[N] {
        &self.items
    }

    pub fn pagination(&self) -> Option<&N> {
        self.pagination.as_ref()
    }

    /// How many times the item area has been cleared
    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl<N> Default for MemorySurface<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> DisplaySurface for MemorySurface<N> {
    type Node = N;

    fn clear_items(&mut self) {
        self.items.clear();
        self.clears += 1;
    }

    fn append_items(&mut self, nodes: Vec<N>) {
        self.items.extend(nodes);
    }

    fn replace_pagination(&mut self, node: N) {
        self.pagination = Some(node);
    }
}
