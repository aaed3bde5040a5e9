//! Transfer-outcome classification for the echo loop.
//!
//! Pure functions over the byte count a transport reports for a transfer
//! attempt: `Some(n)` when the transfer completed with `n` bytes, `None`
//! when the transport failed outright. The echo loop only logs these
//! outcomes; they never alter control flow.

/// Outcome of one read attempt on the OUT endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadOutcome {
    /// A full report was read.
    Complete,
    /// Fewer bytes than a full report arrived within the wait.
    Partial(usize),
    /// The transport reported an error.
    Failed,
}

/// Outcome of one write attempt on the IN endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteOutcome {
    /// The full report was sent.
    Complete,
    /// Zero bytes: the transfer was started asynchronously, or timed out
    /// before any data moved.
    Started,
    /// Some but not all bytes were sent within the wait.
    Partial(usize),
    /// The transport reported an error.
    Failed,
}

/// Classify a read attempt against the expected report size.
pub fn classify_read(outcome: Option<usize>, expected: usize) -> ReadOutcome {
    match outcome {
        Some(n) if n >= expected => ReadOutcome::Complete,
        Some(n) => ReadOutcome::Partial(n),
        None => ReadOutcome::Failed,
    }
}

/// Classify a write attempt against the expected report size.
pub fn classify_write(outcome: Option<usize>, expected: usize) -> WriteOutcome {
    match outcome {
        Some(n) if n >= expected => WriteOutcome::Complete,
        Some(0) => WriteOutcome::Started,
        Some(n) => WriteOutcome::Partial(n),
        None => WriteOutcome::Failed,
    }
}
