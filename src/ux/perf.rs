/// Navigation timing marks in epoch milliseconds, as reported by
/// `performance.timing`. Unset marks read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageLoadTiming {
    pub navigation_start: f64,
    pub load_event_end: f64,
}

impl PageLoadTiming {
    /// Page-load duration in whole milliseconds, once the load event has finished.
    pub fn duration_ms(&self) -> Option<u64> {
        if self.load_event_end <= 0.0 || self.load_event_end < self.navigation_start {
            return None;
        }
        Some((self.load_event_end - self.navigation_start).round() as u64)
    }
}
