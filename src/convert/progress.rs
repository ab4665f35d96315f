/// Sink for conversion progress: discrete named phases with a completion
/// percentage that never decreases over one run. There is no cancel signal;
/// once the pipeline starts mutating the tree it runs to the end.
pub trait ProgressSink {
    fn report(&mut self, status: &str, percent: u8);
}

/// Discards all progress reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn report(&mut self, _status: &str, _percent: u8) {}
}

/// Records reports for assertions in tests.
#[cfg(test)]
pub struct RecordingProgress {
    pub reports: Vec<(String, u8)>,
}

#[cfg(test)]
impl RecordingProgress {
    pub fn new() -> Self {
        Self {
            reports: Vec::new(),
        }
    }

    pub fn is_monotonic(&self) -> bool {
        self.reports.windows(2).all(|w| w[0].1 <= w[1].1)
    }
}

#[cfg(test)]
impl ProgressSink for RecordingProgress {
    fn report(&mut self, status: &str, percent: u8) {
        self.reports.push((status.to_string(), percent));
    }
}
