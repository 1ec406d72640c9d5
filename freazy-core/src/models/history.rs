use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::invoice::Invoice;

/// Lifecycle status of an archived document.
///
/// - Draft: saved but not sent to the client
/// - Sent: sent, payment expected
/// - Paid: settled (terminal)
/// - Late: sent and past its due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Late,
}

impl InvoiceStatus {
    pub fn code(self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Late => "late",
        }
    }

    /// Whether the document still waits for a payment.
    pub fn is_pending(self) -> bool {
        matches!(self, InvoiceStatus::Sent | InvoiceStatus::Late)
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Status transitions applied by the overdue sweep.
pub trait Transition {
    /// Determines the next status of a document.
    ///
    /// # Arguments
    ///
    /// * `current` - The current status
    /// * `days_overdue` - Days elapsed since the due date, negative before it
    ///
    /// # Returns
    ///
    /// Returns the status the document should move to.
    fn transition(current: InvoiceStatus, days_overdue: i64) -> InvoiceStatus;

    /// Status of a freshly archived document.
    fn initial_status() -> InvoiceStatus {
        InvoiceStatus::Draft
    }
}

/// Default transitions:
/// - Sent -> Late once the due date has passed
/// - every other status is left alone
pub struct OverdueSweep;

impl Transition for OverdueSweep {
    fn transition(current: InvoiceStatus, days_overdue: i64) -> InvoiceStatus {
        match current {
            InvoiceStatus::Sent if days_overdue > 0 => InvoiceStatus::Late,
            other => other,
        }
    }
}

/// An archived document: the invoice snapshot plus its status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub invoice: Invoice,

    /// Missing in old backups, read as draft
    #[serde(default)]
    pub status: InvoiceStatus,
}

impl HistoryEntry {
    pub fn new(invoice: Invoice) -> Self {
        Self {
            invoice,
            status: OverdueSweep::initial_status(),
        }
    }

    /// Days elapsed between the resolved due date and `today`, if the
    /// document has a due date.
    pub fn days_overdue(&self, today: NaiveDate) -> Option<i64> {
        self.invoice
            .resolved_due_date()
            .map(|due| (today - due).num_days())
    }
}
