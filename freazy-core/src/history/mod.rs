pub mod export;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::HistoryError;
use crate::models::history::{HistoryEntry, InvoiceStatus, OverdueSweep, Transition};
use crate::models::invoice::Invoice;
use crate::money::round2;

/// Days a document stays in the history after its issue date.
pub const DEFAULT_RETENTION_DAYS: i64 = 30;

/// Backing storage of the history list, newest entry first.
pub trait HistoryStore {
    /// Reads the whole list; an empty store yields an empty list.
    fn load(&self) -> Result<Vec<HistoryEntry>, HistoryError>;

    /// Replaces the whole list.
    fn persist(&mut self, entries: &[HistoryEntry]) -> Result<(), HistoryError>;
}

/// Store kept in memory, used by tests and one-shot tools.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<HistoryEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self.entries.clone())
    }

    fn persist(&mut self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        self.entries = entries.to_vec();
        Ok(())
    }
}

/// Store backed by a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        if !self.path.exists() {
            debug!("No history file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        export::import_json(&raw)
    }

    /// Writes to a sibling temporary file, then renames it over the target.
    fn persist(&mut self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, export::export_json(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Figures shown on the history dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    /// Subtotals of paid documents issued in the current month
    pub revenue: Decimal,

    /// Totals, VAT included, of documents awaiting payment
    pub pending: Decimal,
}

/// Computes the dashboard figures over a list of entries.
///
/// Amounts come from the shared totals calculator; currencies are not
/// converted.
pub fn compute_stats(entries: &[HistoryEntry], today: NaiveDate) -> HistoryStats {
    let in_current_month = |date: Option<NaiveDate>| {
        date.is_some_and(|d| d.year() == today.year() && d.month() == today.month())
    };

    let revenue = entries
        .iter()
        .filter(|e| e.status == InvoiceStatus::Paid && in_current_month(e.invoice.date))
        .map(|e| e.invoice.totals().subtotal)
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v));

    let pending = entries
        .iter()
        .filter(|e| e.status.is_pending())
        .map(|e| e.invoice.totals().total)
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v));

    HistoryStats {
        revenue: round2(revenue),
        pending: round2(pending),
    }
}

/// Whether an entry is still inside a retention window ending `today`.
///
/// The window is open at its far end: a document issued exactly
/// `retention_days` ago has expired. Entries without an issue date are never
/// retained.
pub fn is_retained(entry: &HistoryEntry, retention_days: i64, today: NaiveDate) -> bool {
    let Some(limit) = Duration::try_days(retention_days)
        .and_then(|window| today.checked_sub_signed(window))
    else {
        return true;
    };
    entry.invoice.date.is_some_and(|date| date > limit)
}

/// Drops every entry that fell out of the retention window.
///
/// # Returns
///
/// Returns the number of entries removed.
pub fn retain_recent(entries: &mut Vec<HistoryEntry>, retention_days: i64, today: NaiveDate) -> usize {
    let before = entries.len();
    entries.retain(|entry| is_retained(entry, retention_days, today));
    let dropped = before - entries.len();
    if dropped > 0 {
        info!("Dropped {} expired history entr(ies)", dropped);
    }
    dropped
}

/// The document history over a store.
///
/// Saving a document drops the entries whose issue date left the retention
/// window.
pub struct InvoiceHistory<S: HistoryStore> {
    store: S,
    retention_days: i64,
}

impl<S: HistoryStore> InvoiceHistory<S> {
    /// Creates a history keeping documents for `retention_days`.
    pub fn new(store: S, retention_days: i64) -> Self {
        Self {
            store,
            retention_days,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn entries(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        self.store.load()
    }

    /// Archives a document at the head of the list as a draft, then drops
    /// every entry that fell out of the retention window.
    ///
    /// # Arguments
    ///
    /// * `invoice` - The document to archive
    /// * `today` - Reference date of the retention window
    ///
    /// # Returns
    ///
    /// Returns the list as stored.
    pub fn save(&mut self, invoice: Invoice, today: NaiveDate) -> Result<Vec<HistoryEntry>, HistoryError> {
        let previous = self.store.load()?;
        let mut entries = Vec::with_capacity(previous.len() + 1);
        entries.push(HistoryEntry::new(invoice));
        entries.extend(previous);

        retain_recent(&mut entries, self.retention_days, today);

        self.store.persist(&entries)?;
        Ok(entries)
    }

    /// Removes the entry at `index`.
    pub fn delete(&mut self, index: usize) -> Result<HistoryEntry, HistoryError> {
        let mut entries = self.store.load()?;
        if index >= entries.len() {
            return Err(HistoryError::IndexOutOfRange(index));
        }
        let removed = entries.remove(index);
        self.store.persist(&entries)?;
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.store.persist(&[])
    }

    /// Sets the status of the entry at `index`.
    pub fn update_status(&mut self, index: usize, status: InvoiceStatus) -> Result<(), HistoryError> {
        let mut entries = self.store.load()?;
        let entry = entries
            .get_mut(index)
            .ok_or(HistoryError::IndexOutOfRange(index))?;
        entry.status = status;
        self.store.persist(&entries)
    }

    /// Replaces the whole list, as when restoring a backup.
    pub fn replace(&mut self, entries: Vec<HistoryEntry>) -> Result<(), HistoryError> {
        info!("Restoring {} history entr(ies)", entries.len());
        self.store.persist(&entries)
    }

    pub fn stats(&self, today: NaiveDate) -> Result<HistoryStats, HistoryError> {
        Ok(compute_stats(&self.store.load()?, today))
    }

    /// Moves sent documents past their due date to late.
    ///
    /// # Returns
    ///
    /// Returns the number of entries that changed status.
    pub fn mark_overdue(&mut self, today: NaiveDate) -> Result<usize, HistoryError> {
        let mut entries = self.store.load()?;
        let mut changed = 0;
        for entry in entries.iter_mut() {
            let Some(days_overdue) = entry.days_overdue(today) else {
                continue;
            };
            let next = OverdueSweep::transition(entry.status, days_overdue);
            if next != entry.status {
                debug!(
                    "Document {} moves from {} to {}",
                    entry.invoice.number, entry.status, next
                );
                entry.status = next;
                changed += 1;
            }
        }
        if changed > 0 {
            self.store.persist(&entries)?;
            info!("Marked {} document(s) as late", changed);
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::invoice::LineItem;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
    }

    fn invoice(number: &str, date: Option<NaiveDate>) -> Invoice {
        let mut invoice = Invoice::draft();
        invoice.number = number.to_string();
        invoice.date = date;
        invoice.items = vec![
            LineItem::new("Design", dec!(2), dec!(50)),
            LineItem::new("Hosting", dec!(1), dec!(19.99)),
        ];
        invoice
    }

    fn days_ago(days: i64) -> Option<NaiveDate> {
        today().checked_sub_signed(Duration::days(days))
    }

    fn history() -> InvoiceHistory<MemoryStore> {
        InvoiceHistory::new(MemoryStore::new(), DEFAULT_RETENTION_DAYS)
    }

    #[test]
    fn test_save_prepends_as_draft() {
        let mut history = history();
        history.save(invoice("F-1", days_ago(1)), today()).unwrap();
        let entries = history.save(invoice("F-2", days_ago(0)), today()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].invoice.number, "F-2");
        assert_eq!(entries[0].status, InvoiceStatus::Draft);
        assert_eq!(entries[1].invoice.number, "F-1");
    }

    #[test]
    fn test_save_applies_retention() {
        let mut history = history();
        history
            .replace(vec![
                HistoryEntry::new(invoice("old", days_ago(31))),
                HistoryEntry::new(invoice("day30", days_ago(30))),
                HistoryEntry::new(invoice("day29", days_ago(29))),
                HistoryEntry::new(invoice("undated", None)),
            ])
            .unwrap();

        let entries = history.save(invoice("new", days_ago(0)), today()).unwrap();
        let numbers: Vec<_> = entries.iter().map(|e| e.invoice.number.as_str()).collect();
        assert_eq!(numbers, vec!["new", "day29"]);
    }

    #[test]
    fn test_document_issued_exactly_at_window_end_expires() {
        let day30 = HistoryEntry::new(invoice("day30", days_ago(30)));
        assert!(!is_retained(&day30, DEFAULT_RETENTION_DAYS, today()));
        assert!(is_retained(&day30, 31, today()));

        let mut entries = vec![
            HistoryEntry::new(invoice("today", days_ago(0))),
            day30,
        ];
        assert_eq!(retain_recent(&mut entries, DEFAULT_RETENTION_DAYS, today()), 1);
        assert_eq!(entries[0].invoice.number, "today");
    }

    #[test]
    fn test_delete_and_update_status_by_index() {
        let mut history = history();
        history.save(invoice("F-1", days_ago(2)), today()).unwrap();
        history.save(invoice("F-2", days_ago(1)), today()).unwrap();

        history.update_status(1, InvoiceStatus::Paid).unwrap();
        assert_eq!(history.entries().unwrap()[1].status, InvoiceStatus::Paid);

        let removed = history.delete(0).unwrap();
        assert_eq!(removed.invoice.number, "F-2");
        assert_eq!(history.entries().unwrap().len(), 1);

        assert!(matches!(history.delete(5), Err(HistoryError::IndexOutOfRange(5))));
        assert!(matches!(
            history.update_status(3, InvoiceStatus::Sent),
            Err(HistoryError::IndexOutOfRange(3))
        ));
    }

    #[test]
    fn test_clear() {
        let mut history = history();
        history.save(invoice("F-1", days_ago(0)), today()).unwrap();
        history.clear().unwrap();
        assert!(history.entries().unwrap().is_empty());
    }

    #[test]
    fn test_stats() {
        let mut paid = HistoryEntry::new(invoice("paid", NaiveDate::from_ymd_opt(2024, 6, 3)));
        paid.status = InvoiceStatus::Paid;
        let mut paid_last_month =
            HistoryEntry::new(invoice("paid-may", NaiveDate::from_ymd_opt(2024, 5, 28)));
        paid_last_month.status = InvoiceStatus::Paid;
        let mut sent = HistoryEntry::new(invoice("sent", days_ago(3)));
        sent.status = InvoiceStatus::Sent;
        let mut late = HistoryEntry::new(invoice("late", days_ago(40)));
        late.status = InvoiceStatus::Late;
        late.invoice.vat_enabled = false;
        let draft = HistoryEntry::new(invoice("draft", days_ago(1)));

        let stats = compute_stats(&[paid, paid_last_month, sent, late, draft], today());
        assert_eq!(stats.revenue, dec!(119.99));
        assert_eq!(stats.pending, dec!(263.98));
    }

    #[test]
    fn test_mark_overdue() {
        let mut overdue = invoice("overdue", days_ago(40));
        overdue.due_date = days_ago(10);
        let mut not_yet = invoice("not-yet", days_ago(5));
        not_yet.due_date = today().checked_add_signed(Duration::days(5));
        let mut paid = invoice("paid", days_ago(40));
        paid.due_date = days_ago(10);

        let mut entries = vec![
            HistoryEntry::new(overdue),
            HistoryEntry::new(not_yet),
            HistoryEntry::new(paid),
            HistoryEntry::new(invoice("no-due-date", days_ago(40))),
        ];
        entries[0].status = InvoiceStatus::Sent;
        entries[1].status = InvoiceStatus::Sent;
        entries[2].status = InvoiceStatus::Paid;
        entries[3].status = InvoiceStatus::Sent;

        let mut history = history();
        history.replace(entries).unwrap();
        assert_eq!(history.mark_overdue(today()).unwrap(), 1);

        let statuses: Vec<_> = history.entries().unwrap().iter().map(|e| e.status).collect();
        assert_eq!(
            statuses,
            vec![
                InvoiceStatus::Late,
                InvoiceStatus::Sent,
                InvoiceStatus::Paid,
                InvoiceStatus::Sent
            ]
        );
        assert_eq!(history.mark_overdue(today()).unwrap(), 0);
    }

    #[test]
    fn test_json_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");

        let mut history = InvoiceHistory::new(JsonFileStore::new(&path), DEFAULT_RETENTION_DAYS);
        assert!(history.entries().unwrap().is_empty());

        history.save(invoice("F-1", days_ago(0)), today()).unwrap();
        history.update_status(0, InvoiceStatus::Sent).unwrap();

        let reopened = InvoiceHistory::new(JsonFileStore::new(&path), DEFAULT_RETENTION_DAYS);
        let entries = reopened.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].invoice.number, "F-1");
        assert_eq!(entries[0].status, InvoiceStatus::Sent);
        assert_eq!(entries[0].invoice.totals().total, dec!(143.99));
    }

    #[test]
    fn test_json_file_store_rejects_non_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, r#"{"number": "F-1"}"#).unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(HistoryError::InvalidFormat(_))));
    }
}
