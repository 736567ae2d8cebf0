use super::tree_flattener::TreeRow;
use serde::Serialize;

/// Aggregate health of the rows currently visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ForestSummary {
    pub visible: usize,
    pub synced: usize,
    pub ready: usize,
    /// Visible nodes that are not both Synced and Ready
    pub degraded: usize,
}

impl ForestSummary {
    pub fn is_healthy(&self) -> bool {
        self.degraded == 0
    }
}

pub struct ForestSummarizer;

impl ForestSummarizer {
    pub fn summarize(rows: &[TreeRow<'_>]) -> ForestSummary {
        rows.iter().fold(ForestSummary::default(), |mut acc, row| {
            let status = &row.node.status;
            acc.visible += 1;
            acc.synced += usize::from(status.synced);
            acc.ready += usize::from(status.ready);
            acc.degraded += usize::from(!status.is_healthy());
            acc
        })
    }
}
