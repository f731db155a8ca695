#[cfg(test)]
#[path = "diag_test.rs"]
mod diag_test;

/// Which background read failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadOp {
    Videos,
    Markers,
}

/// One swallowed read failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadFailure {
    pub op: ReadOp,
    pub detail: String,
}

const MAX_FAILURES: usize = 32;

/// List-load failures are never surfaced to the user; the previous data
/// stays on screen. They land here (and in the console log) instead, with
/// a bounded history.
#[derive(Clone, Debug, Default)]
pub struct DiagState {
    pub read_failures: Vec<ReadFailure>,
}

impl DiagState {
    pub fn record(&mut self, op: ReadOp, detail: impl Into<String>) {
        if self.read_failures.len() == MAX_FAILURES {
            self.read_failures.remove(0);
        }
        self.read_failures.push(ReadFailure {
            op,
            detail: detail.into(),
        });
    }

    pub fn last(&self) -> Option<&ReadFailure> {
        self.read_failures.last()
    }
}
