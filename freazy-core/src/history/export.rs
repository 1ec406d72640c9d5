use chrono::NaiveDate;
use csv::WriterBuilder;

use crate::error::HistoryError;
use crate::i18n::{base_labels, Language};
use crate::models::history::HistoryEntry;

/// Byte order mark prefixed to CSV exports so spreadsheets detect UTF-8.
pub const UTF8_BOM: &str = "\u{feff}";

const CSV_HEADERS: [&str; 10] = [
    "Type de document",
    "Numéro",
    "Date d'émission",
    "Date d'échéance",
    "Client",
    "SIRET Client",
    "Total HT",
    "TVA",
    "Total TTC",
    "Statut",
];

pub fn backup_file_name(today: NaiveDate) -> String {
    format!("free-facture-backup-{}.json", today.format("%Y-%m-%d"))
}

pub fn csv_file_name(today: NaiveDate) -> String {
    format!("export_compta_{}.csv", today.format("%Y-%m-%d"))
}

/// Serializes the whole history as a pretty-printed JSON array.
pub fn export_json(entries: &[HistoryEntry]) -> Result<String, HistoryError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Reads a JSON backup. The top level must be an array of documents.
pub fn import_json(raw: &str) -> Result<Vec<HistoryEntry>, HistoryError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.is_array() {
        return Err(HistoryError::InvalidFormat(
            "a backup must be a list of documents".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

fn csv_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

/// Flattens the history into the accounting CSV.
///
/// Amounts come from the shared calculator with two decimals and dates are
/// written `dd/mm/yyyy`. Fields containing a comma, a quote or a newline
/// are quoted. The output starts with a UTF-8 BOM.
pub fn export_csv(entries: &[HistoryEntry]) -> Result<String, HistoryError> {
    let titles = &base_labels(Language::Fr).titles;
    let mut writer = WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for entry in entries {
        let invoice = &entry.invoice;
        let totals = invoice.totals();
        writer.write_record([
            titles.get(invoice.doc_type).to_string(),
            invoice.number.clone(),
            csv_date(invoice.date),
            csv_date(invoice.resolved_due_date()),
            invoice.client.name.clone(),
            invoice.client.tax_id.clone().unwrap_or_default(),
            format!("{:.2}", totals.subtotal),
            format!("{:.2}", totals.vat_amount),
            format!("{:.2}", totals.total),
            entry.status.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| HistoryError::Storage(e.into_error()))?;
    let body = String::from_utf8(bytes)
        .map_err(|e| HistoryError::InvalidFormat(e.to_string()))?;
    Ok(format!("{UTF8_BOM}{body}"))
}
