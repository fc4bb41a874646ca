use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Deliver the order if it has been processing for at least `dwell` as of `as_of`.
    /// Answers whether the status changed.
    Promote {
        as_of: DateTime<Utc>,
        dwell: TimeDelta,
    },
}
