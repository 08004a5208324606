use std::{
    fmt::{Debug, Display},
    time::{Duration, Instant},
};

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub queue_pushes: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.queue_pushes = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }

    /// Elapsed search time, zero if the search has not finished.
    pub fn elapsed(&self) -> Duration {
        self.duration.unwrap_or_default()
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled in {:?}",
            self.nodes_settled,
            self.elapsed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_resets_counters() {
        let mut stats = SearchStats {
            nodes_settled: 12,
            queue_pushes: 40,
            ..Default::default()
        };
        stats.finish();
        assert!(stats.duration.is_none());

        stats.init();
        assert_eq!(stats.nodes_settled, 0);
        assert_eq!(stats.queue_pushes, 0);

        stats.finish();
        assert!(stats.duration.is_some());
    }

    #[test]
    fn display() {
        let stats = SearchStats {
            nodes_settled: 3,
            duration: Some(Duration::from_millis(2)),
            ..Default::default()
        };
        assert_eq!(stats.to_string(), "Stats: 3 nodes settled in 2ms");
    }
}
