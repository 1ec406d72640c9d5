use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::InvoiceError;
use crate::i18n::{DocumentType, Language};
use crate::money::{deserialize_amount, deserialize_optional_amount};
use crate::totals::{compute_totals, Totals};

/// VAT rate applied to new documents.
pub const DEFAULT_VAT_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Currency of new documents.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// The party issuing the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issuer {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub address: String,

    /// Company registration / tax id (SIRET in France)
    #[serde(default, rename = "siret", alias = "taxId")]
    pub tax_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,

    /// Logo as a `data:` URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// The party receiving the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,

    #[serde(default, rename = "siret", alias = "taxId", skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

/// One billable row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, deserialize_with = "deserialize_amount")]
    pub quantity: Decimal,

    #[serde(default, deserialize_with = "deserialize_amount")]
    pub unit_price: Decimal,
}

impl LineItem {
    /// Creates a line item with a fresh id.
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            quantity,
            unit_price,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Which optional blocks the renderers display.
///
/// Every flag defaults to `true` when absent from the record, so legacy
/// records without the flag keep showing the field. The default is applied
/// once, at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    #[serde(rename = "showIssuerName", default = "default_true")]
    pub issuer_name: bool,

    #[serde(rename = "showIssuerEmail", default = "default_true")]
    pub issuer_email: bool,

    #[serde(rename = "showIssuerPhone", default = "default_true")]
    pub issuer_phone: bool,

    #[serde(rename = "showClientEmail", default = "default_true")]
    pub client_email: bool,

    #[serde(rename = "showPaymentInfo", default = "default_true")]
    pub payment_info: bool,

    #[serde(rename = "showLegalMentions", default = "default_true")]
    pub legal_mentions: bool,

    #[serde(rename = "showDueDate", default = "default_true")]
    pub due_date: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            issuer_name: true,
            issuer_email: true,
            issuer_phone: true,
            client_email: true,
            payment_info: true,
            legal_mentions: true,
            due_date: true,
        }
    }
}

/// Invoice record: the single input of the computation and both renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Record identifier
    #[serde(default)]
    pub id: String,

    /// Free-text document number, not required to be unique
    #[serde(default)]
    pub number: String,

    /// Issue date
    #[serde(default, deserialize_with = "deserialize_date")]
    pub date: Option<NaiveDate>,

    /// Explicit due date
    #[serde(default, deserialize_with = "deserialize_date", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Payment terms in days, used when no explicit due date is set
    #[serde(default, deserialize_with = "deserialize_optional_amount", skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<Decimal>,

    #[serde(default)]
    pub issuer: Issuer,

    #[serde(default)]
    pub client: Client,

    #[serde(default)]
    pub items: Vec<LineItem>,

    /// Currency code, treated opaquely by the calculator
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default = "default_true")]
    pub vat_enabled: bool,

    /// VAT percentage, meaningful only when `vat_enabled`
    #[serde(default = "default_vat_rate", deserialize_with = "deserialize_amount")]
    pub vat_rate: Decimal,

    #[serde(rename = "type", default)]
    pub doc_type: DocumentType,

    #[serde(default)]
    pub language: Language,

    /// Accent colour (CSS colour string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(flatten)]
    pub visibility: Visibility,

    /// Signature image as a `data:` URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,

    /// Signature size in percent
    #[serde(default, deserialize_with = "deserialize_optional_amount", skip_serializing_if = "Option::is_none")]
    pub signature_scale: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_info: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_mentions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,

    /// Custom header of the quantity column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_label: Option<String>,

    /// Custom header of the unit price column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price_label: Option<String>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_vat_rate() -> Decimal {
    DEFAULT_VAT_RATE
}

/// Reads `YYYY-MM-DD` or a full ISO timestamp; blank means no date.
fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s).map(Some).map_err(serde::de::Error::custom),
    }
}

/// Parses the date part of an ISO-8601 date or timestamp.
pub fn parse_date(raw: &str) -> Result<NaiveDate, InvoiceError> {
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| InvoiceError::InvalidDate(raw.to_string()))
}

impl Invoice {
    /// Creates an empty draft with the application defaults.
    pub fn draft() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            number: String::new(),
            date: None,
            due_date: None,
            payment_terms: None,
            issuer: Issuer::default(),
            client: Client::default(),
            items: Vec::new(),
            currency: default_currency(),
            vat_enabled: true,
            vat_rate: DEFAULT_VAT_RATE,
            doc_type: DocumentType::Invoice,
            language: Language::default(),
            color: None,
            visibility: Visibility::default(),
            signature: None,
            signature_scale: None,
            payment_info: None,
            legal_mentions: None,
            notes: None,
            delivery_address: None,
            quantity_label: None,
            unit_price_label: None,
        }
    }

    /// Totals of this document, from the shared calculator.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.items, self.vat_enabled, self.vat_rate)
    }

    /// Due date to display: the explicit one, else issue date plus payment
    /// terms when those are positive.
    pub fn resolved_due_date(&self) -> Option<NaiveDate> {
        if self.due_date.is_some() {
            return self.due_date;
        }
        let days = self.payment_terms?.trunc();
        if days <= Decimal::ZERO {
            return None;
        }
        let days = i64::try_from(days).ok()?;
        self.date?.checked_add_signed(Duration::try_days(days)?)
    }

    /// Checks that the record is complete enough to be submitted.
    ///
    /// Every problem is reported at once. The calculator and the renderers
    /// do not require a valid record.
    pub fn validate(&self) -> Result<(), InvoiceError> {
        let mut problems = Vec::new();

        let mut require = |value: &str, field: &str| {
            if value.trim().is_empty() {
                problems.push(format!("{field} is required"));
            }
        };
        require(&self.number, "number");
        require(&self.issuer.name, "issuer.name");
        require(&self.issuer.address, "issuer.address");
        require(&self.issuer.tax_id, "issuer.siret");
        require(&self.client.name, "client.name");
        require(&self.client.address, "client.address");

        if self.date.is_none() {
            problems.push("date is required".to_string());
        }

        if self.items.is_empty() {
            problems.push("at least one item is required".to_string());
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.description.trim().is_empty() {
                problems.push(format!("items[{index}].description is required"));
            }
        }

        for (field, email) in [
            ("issuer.email", &self.issuer.email),
            ("client.email", &self.client.email),
        ] {
            if let Some(email) = email.as_deref().filter(|e| !e.trim().is_empty()) {
                if !looks_like_email(email) {
                    problems.push(format!("{field} is not a valid email"));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(InvoiceError::Validation(problems))
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.trim().split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !email.contains(char::is_whitespace)
}
