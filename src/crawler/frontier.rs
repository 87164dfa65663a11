//! Depth-first worklist of URLs waiting to be fetched
//!
//! The frontier is a LIFO stack. A page's children are pushed in reverse
//! extraction order so the first extracted link is popped next, which gives
//! the same pre-order visitation as a recursive descent would.

use crate::state::CrawlState;

/// A URL waiting in the frontier with its remaining depth budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedUrl {
    /// The URL to fetch
    pub url: String,

    /// Hops left, including this one; nodes at `<= 0` are never fetched
    pub depth: i64,
}

impl QueuedUrl {
    pub fn new(url: impl Into<String>, depth: i64) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }

    /// Returns true if this node has budget left to be fetched
    pub fn within_budget(&self) -> bool {
        self.depth > 0
    }
}

/// Pending crawl nodes
#[derive(Debug, Default)]
pub struct Frontier {
    stack: Vec<QueuedUrl>,
}

impl Frontier {
    /// Creates a frontier holding only the seed
    pub fn seeded(seed_url: impl Into<String>, depth: i64) -> Self {
        Self {
            stack: vec![QueuedUrl::new(seed_url, depth)],
        }
    }

    /// Queues the links found on a page
    ///
    /// Nothing is queued when `depth` is exhausted, and links already marked
    /// in `state` are left out. Returns the number of links queued.
    pub fn push_children(
        &mut self,
        links: &[String],
        depth: i64,
        state: &CrawlState,
    ) -> usize {
        if depth <= 0 {
            return 0;
        }

        let before = self.stack.len();
        self.stack.extend(
            links
                .iter()
                .rev()
                .filter(|link| !state.is_visited(link))
                .map(|link| QueuedUrl::new(link.clone(), depth)),
        );
        self.stack.len() - before
    }

    pub fn pop(&mut self) -> Option<QueuedUrl> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
