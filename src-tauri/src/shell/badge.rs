use std::sync::atomic::{AtomicU32, Ordering};

/// Units of background work finished while the window was unfocused.
#[derive(Debug, Default)]
pub struct BadgeCounter {
    count: AtomicU32,
}

impl BadgeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one completed unit and return the new total.
    pub fn increment(&self) -> u32 {
        let previous = self
            .count
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| Some(n.saturating_add(1)))
            .unwrap_or_else(|n| n);
        previous.saturating_add(1)
    }

    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }

    pub fn get(&self) -> u32 {
        self.count.load(Ordering::SeqCst)
    }
}

/// Badge text for a count; zero clears the badge.
pub fn badge_label(count: u32) -> Option<String> {
    (count > 0).then(|| count.to_string())
}
