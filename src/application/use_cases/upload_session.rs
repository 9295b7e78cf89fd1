// ============================================================
// UPLOAD SESSION
// ============================================================
// Owns the single active dataset report with stale-upload protection

use tracing::{info, warn};

use crate::domain::dataset::DatasetReport;

/// Outcome of completing an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The report became the active dataset
    Installed,

    /// A newer upload started after this one; its result was discarded
    Superseded,
}

/// Claim ticket for one upload. Only the most recently issued ticket
/// may install its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    generation: u64,
}

/// At most one dataset is active at a time; a new upload replaces the
/// previous one wholesale.
///
/// Uploads race: a user can start a second upload while the first is
/// still being analyzed. Each upload claims a monotonically increasing
/// generation, and completion with a stale generation is ignored, so
/// the last upload started always wins regardless of finish order.
#[derive(Debug, Default)]
pub struct UploadSession {
    generation: u64,
    active: Option<DatasetReport>,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new upload, invalidating any upload still in flight
    pub fn begin_upload(&mut self) -> UploadTicket {
        self.generation += 1;
        UploadTicket {
            generation: self.generation,
        }
    }

    /// Install a finished analysis unless a newer upload has started
    /// since the ticket was issued
    pub fn complete_upload(
        &mut self,
        ticket: UploadTicket,
        report: DatasetReport,
    ) -> UploadOutcome {
        if ticket.generation != self.generation {
            warn!(
                ticket = ticket.generation,
                current = self.generation,
                "stale upload result discarded"
            );
            return UploadOutcome::Superseded;
        }
        info!(rows = report.basic.row_count, "active dataset replaced");
        self.active = Some(report);
        UploadOutcome::Installed
    }

    pub fn active(&self) -> Option<&DatasetReport> {
        self.active.as_ref()
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}
