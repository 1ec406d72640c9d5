mod dictionaries;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic category of the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum DocumentType {
    #[default]
    Invoice,
    Quote,
    Proforma,
    CreditNote,
    Receipt,
}

impl DocumentType {
    pub const ALL: [DocumentType; 5] = [
        DocumentType::Invoice,
        DocumentType::Quote,
        DocumentType::Proforma,
        DocumentType::CreditNote,
        DocumentType::Receipt,
    ];

    /// Reads a wire code; anything unknown is an invoice.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "quote" => DocumentType::Quote,
            "proforma" => DocumentType::Proforma,
            "credit_note" => DocumentType::CreditNote,
            "receipt" => DocumentType::Receipt,
            _ => DocumentType::Invoice,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            DocumentType::Invoice => "invoice",
            DocumentType::Quote => "quote",
            DocumentType::Proforma => "proforma",
            DocumentType::CreditNote => "credit_note",
            DocumentType::Receipt => "receipt",
        }
    }
}

impl From<String> for DocumentType {
    fn from(code: String) -> Self {
        DocumentType::from_code(&code)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Supported document languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Language {
    #[default]
    Fr,
    En,
    Es,
    It,
    De,
    Pt,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::Fr,
        Language::En,
        Language::Es,
        Language::It,
        Language::De,
        Language::Pt,
    ];

    /// Reads a language code such as `en` or `en-GB`; unsupported codes
    /// resolve to the default language.
    pub fn from_code(code: &str) -> Self {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Language::En,
            "es" => Language::Es,
            "it" => Language::It,
            "de" => Language::De,
            "pt" => Language::Pt,
            _ => Language::Fr,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
            Language::Es => "es",
            Language::It => "it",
            Language::De => "de",
            Language::Pt => "pt",
        }
    }

    /// Locale used for date formatting.
    pub fn locale(self) -> chrono::Locale {
        match self {
            Language::Fr => chrono::Locale::fr_FR,
            Language::En => chrono::Locale::en_US,
            Language::Es => chrono::Locale::es_ES,
            Language::It => chrono::Locale::it_IT,
            Language::De => chrono::Locale::de_DE,
            Language::Pt => chrono::Locale::pt_PT,
        }
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Language::from_code(&code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Document title per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentTitles {
    pub invoice: &'static str,
    pub quote: &'static str,
    pub proforma: &'static str,
    pub credit_note: &'static str,
    pub receipt: &'static str,
}

impl DocumentTitles {
    pub fn get(&self, doc_type: DocumentType) -> &'static str {
        match doc_type {
            DocumentType::Invoice => self.invoice,
            DocumentType::Quote => self.quote,
            DocumentType::Proforma => self.proforma,
            DocumentType::CreditNote => self.credit_note,
            DocumentType::Receipt => self.receipt,
        }
    }
}

/// Placeholder values shown while a field is still empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemoValues {
    pub issuer_name: &'static str,
    pub issuer_address: &'static str,
    pub issuer_tax_id: &'static str,
    pub issuer_email: &'static str,
    pub issuer_phone: &'static str,
    pub client_name: &'static str,
    pub client_address: &'static str,
    pub client_email: &'static str,
    pub payment_info: &'static str,
    pub legal_mentions: &'static str,
}

/// Names of the history statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusLabels {
    /// Saved, not sent yet
    pub draft: &'static str,

    /// Sent, payment expected
    pub sent: &'static str,

    /// Settled
    pub paid: &'static str,

    /// Past its due date
    pub late: &'static str,
}

/// Captions of the history dashboard figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsLabels {
    /// Paid subtotals of the current month
    pub revenue: &'static str,

    /// Totals still awaiting payment
    pub pending: &'static str,
}

/// Help texts attached to form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tooltips {
    /// Sequential numbering rule
    pub invoice_number: &'static str,

    /// Issue date
    pub date: &'static str,

    /// Legal name of the issuer
    pub issuer_name: &'static str,

    /// Registration number of the issuer
    pub issuer_tax_id: &'static str,

    /// Name of the billed party
    pub client_name: &'static str,
}

/// Complete set of display strings for one language and document type.
///
/// Every field is a plain string, so a resolved set cannot miss a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelSet {
    /// Document title per type
    pub titles: DocumentTitles,

    /// Issue date caption
    pub date: &'static str,

    /// Due date caption; validity or payment date for some types
    pub due_date: &'static str,

    /// Heading of the client block
    pub billed_to: &'static str,

    /// Prefix of the document number
    pub number: &'static str,

    // items table headers
    pub description: &'static str,
    pub qty: &'static str,
    pub unit_price: &'static str,
    /// Header of the line-total column
    pub line_total: &'static str,

    // totals block
    pub subtotal: &'static str,
    pub vat: &'static str,
    /// Label of the grand total row
    pub total: &'static str,
    /// Caption of the amount the client owes
    pub total_due: &'static str,

    /// Type-specific wording picked up by the overlays
    pub quote_validity: &'static str,
    pub quote_billed_to: &'static str,
    pub quote_total: &'static str,
    pub received_from: &'static str,
    pub payment_date: &'static str,
    pub amount_paid: &'static str,
    pub credit_note_number: &'static str,
    pub credit_amount: &'static str,

    /// Heading of the payment details block
    pub payment_info: &'static str,

    /// Heading of the legal mentions block
    pub legal_mentions: &'static str,

    /// Default page footer
    pub footer: &'static str,

    /// Caption above the signature image
    pub signature: &'static str,

    pub phone: &'static str,
    pub vat_number: &'static str,

    /// Heading of the delivery address block
    pub delivery_address: &'static str,

    /// Legal line stating no early-payment discount
    pub no_discount: &'static str,

    /// Notice printed when VAT is disabled
    pub vat_not_applicable: &'static str,

    /// History retention reminder
    pub retention_reminder: &'static str,

    pub down_payment_invoice: &'static str,

    /// Issuer name of a fresh draft
    pub default_issuer_name: &'static str,

    /// Description of the first line of a fresh draft
    pub default_item_description: &'static str,

    /// Placeholders of empty fields
    pub demo: DemoValues,

    pub status: StatusLabels,
    pub stats: StatsLabels,
    pub tooltips: Tooltips,
}

/// Label fields a document type may re-point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    BilledTo,
    DueDate,
    Total,
    TotalDue,
    Number,
    QuoteBilledTo,
    QuoteValidity,
    QuoteTotal,
    ReceivedFrom,
    PaymentDate,
    AmountPaid,
    CreditNoteNumber,
    CreditAmount,
}

impl LabelSet {
    fn get(&self, field: Field) -> &'static str {
        match field {
            Field::BilledTo => self.billed_to,
            Field::DueDate => self.due_date,
            Field::Total => self.total,
            Field::TotalDue => self.total_due,
            Field::Number => self.number,
            Field::QuoteBilledTo => self.quote_billed_to,
            Field::QuoteValidity => self.quote_validity,
            Field::QuoteTotal => self.quote_total,
            Field::ReceivedFrom => self.received_from,
            Field::PaymentDate => self.payment_date,
            Field::AmountPaid => self.amount_paid,
            Field::CreditNoteNumber => self.credit_note_number,
            Field::CreditAmount => self.credit_amount,
        }
    }

    fn set(&mut self, field: Field, value: &'static str) {
        let slot = match field {
            Field::BilledTo => &mut self.billed_to,
            Field::DueDate => &mut self.due_date,
            Field::Total => &mut self.total,
            Field::TotalDue => &mut self.total_due,
            Field::Number => &mut self.number,
            Field::QuoteBilledTo => &mut self.quote_billed_to,
            Field::QuoteValidity => &mut self.quote_validity,
            Field::QuoteTotal => &mut self.quote_total,
            Field::ReceivedFrom => &mut self.received_from,
            Field::PaymentDate => &mut self.payment_date,
            Field::AmountPaid => &mut self.amount_paid,
            Field::CreditNoteNumber => &mut self.credit_note_number,
            Field::CreditAmount => &mut self.credit_amount,
        };
        *slot = value;
    }

    /// Every flat string of the set, for completeness checks.
    pub fn values(&self) -> Vec<&'static str> {
        let t = &self.titles;
        let d = &self.demo;
        vec![
            t.invoice, t.quote, t.proforma, t.credit_note, t.receipt,
            self.date, self.due_date, self.billed_to, self.number, self.description,
            self.qty, self.unit_price, self.line_total, self.subtotal, self.vat,
            self.total, self.total_due, self.quote_validity, self.quote_billed_to,
            self.quote_total, self.received_from, self.payment_date, self.amount_paid,
            self.credit_note_number, self.credit_amount, self.payment_info,
            self.legal_mentions, self.footer, self.signature, self.phone,
            self.vat_number, self.delivery_address, self.no_discount,
            self.vat_not_applicable, self.retention_reminder, self.down_payment_invoice,
            self.default_issuer_name, self.default_item_description,
            d.issuer_name, d.issuer_address, d.issuer_tax_id, d.issuer_email,
            d.issuer_phone, d.client_name, d.client_address, d.client_email,
            d.payment_info, d.legal_mentions,
            self.status.draft, self.status.sent, self.status.paid, self.status.late,
            self.stats.revenue, self.stats.pending,
            self.tooltips.invoice_number, self.tooltips.date, self.tooltips.issuer_name,
            self.tooltips.issuer_tax_id, self.tooltips.client_name,
        ]
    }
}

/// `(target, source)` pairs: the target label takes the source's wording.
type Overlay = &'static [(Field, Field)];

const QUOTE_OVERLAY: Overlay = &[
    (Field::BilledTo, Field::QuoteBilledTo),
    (Field::DueDate, Field::QuoteValidity),
    (Field::Total, Field::QuoteTotal),
    (Field::TotalDue, Field::QuoteTotal),
];

const CREDIT_NOTE_OVERLAY: Overlay = &[
    (Field::Number, Field::CreditNoteNumber),
    (Field::Total, Field::CreditAmount),
    (Field::TotalDue, Field::CreditAmount),
];

const RECEIPT_OVERLAY: Overlay = &[
    (Field::BilledTo, Field::ReceivedFrom),
    (Field::DueDate, Field::PaymentDate),
    (Field::Total, Field::AmountPaid),
    (Field::TotalDue, Field::AmountPaid),
];

fn overlay(doc_type: DocumentType) -> Overlay {
    match doc_type {
        DocumentType::Quote => QUOTE_OVERLAY,
        DocumentType::CreditNote => CREDIT_NOTE_OVERLAY,
        DocumentType::Receipt => RECEIPT_OVERLAY,
        DocumentType::Invoice | DocumentType::Proforma => &[],
    }
}

/// Base dictionary of a language, without any type overlay.
pub fn base_labels(language: Language) -> &'static LabelSet {
    match language {
        Language::Fr => &dictionaries::FR,
        Language::En => &dictionaries::EN,
        Language::Es => &dictionaries::ES,
        Language::It => &dictionaries::IT,
        Language::De => &dictionaries::DE,
        Language::Pt => &dictionaries::PT,
    }
}

/// Resolves the labels of a document type in a language.
///
/// Each language has one complete base dictionary. A document type
/// contributes a small overlay that re-points a few fields at type-specific
/// wording already present in the same dictionary.
pub fn resolve_labels(doc_type: DocumentType, language: Language) -> LabelSet {
    let base = base_labels(language);
    let mut labels = *base;
    for &(target, source) in overlay(doc_type) {
        labels.set(target, base.get(source));
    }
    labels
}

/// Same as [`resolve_labels`] from raw wire codes. Unknown types and
/// languages fall back to [`DocumentType::Invoice`] and [`Language::Fr`].
pub fn resolve_labels_for_codes(doc_type: &str, language: &str) -> LabelSet {
    resolve_labels(DocumentType::from_code(doc_type), Language::from_code(language))
}

/// Title of a document type in a language, as printed on the document.
pub fn document_title(doc_type: DocumentType, language: Language) -> String {
    base_labels(language).titles.get(doc_type).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_and_language_is_complete() {
        for language in Language::ALL {
            for doc_type in DocumentType::ALL {
                let labels = resolve_labels(doc_type, language);
                for (index, value) in labels.values().into_iter().enumerate() {
                    assert!(
                        !value.trim().is_empty(),
                        "empty label #{index} for {doc_type}/{language}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_unknown_type_falls_back_to_invoice() {
        assert_eq!(
            resolve_labels_for_codes("bogus_type", "fr"),
            resolve_labels(DocumentType::Invoice, Language::Fr)
        );
    }

    #[test]
    fn test_unknown_language_falls_back_to_french() {
        assert_eq!(Language::from_code("nl"), Language::Fr);
        assert_eq!(Language::from_code(""), Language::Fr);
        assert_eq!(Language::from_code("en-GB"), Language::En);
        assert_eq!(
            resolve_labels_for_codes("quote", "klingon"),
            resolve_labels(DocumentType::Quote, Language::Fr)
        );
    }

    #[test]
    fn test_quote_labels_in_english() {
        let labels = resolve_labels(DocumentType::Quote, Language::En);
        assert_eq!(labels.due_date, "Valid until");
        assert_eq!(labels.billed_to, "To");
        assert_eq!(labels.total, "Quote Total");
        assert_eq!(document_title(DocumentType::Quote, Language::En), "QUOTE");
    }

    #[test]
    fn test_credit_note_and_receipt_overlays() {
        let credit = resolve_labels(DocumentType::CreditNote, Language::En);
        assert_eq!(credit.number, "Credit Note No");
        assert_eq!(credit.total, "Credit Amount");
        assert_eq!(credit.billed_to, "Billed to");

        let receipt = resolve_labels(DocumentType::Receipt, Language::Fr);
        assert_eq!(receipt.billed_to, "Reçu de");
        assert_eq!(receipt.due_date, "Date de paiement");
        assert_eq!(receipt.total, "Montant réglé");
    }

    #[test]
    fn test_proforma_changes_only_the_title() {
        let invoice = resolve_labels(DocumentType::Invoice, Language::De);
        let proforma = resolve_labels(DocumentType::Proforma, Language::De);
        assert_eq!(invoice, proforma);
        assert_eq!(document_title(DocumentType::Proforma, Language::De), "PROFORMA-RECHNUNG");
    }

    #[test]
    fn test_overlay_keeps_line_total_header() {
        let quote = resolve_labels(DocumentType::Quote, Language::Fr);
        assert_eq!(quote.line_total, base_labels(Language::Fr).line_total);
        assert_ne!(quote.total, quote.line_total);
    }

    #[test]
    fn test_codes_round_trip() {
        for doc_type in DocumentType::ALL {
            assert_eq!(DocumentType::from_code(doc_type.code()), doc_type);
        }
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), language);
        }
    }
}
