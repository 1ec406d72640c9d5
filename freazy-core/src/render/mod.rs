pub mod html;
pub mod pdf;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::RenderError;
use crate::i18n::{document_title, resolve_labels, DocumentType, LabelSet, Language};
use crate::models::invoice::Invoice;
use crate::money::{format_money, format_plain};
use crate::totals::{line_total, Totals};

pub use html::HtmlRenderer;
pub use pdf::PdfRenderer;

/// Title colour of credit notes.
pub const CREDIT_NOTE_ACCENT: &str = "#dc2626";

/// Accent used when the record has no colour.
pub const DEFAULT_ACCENT: &str = "#000000";

/// Produces one output format from a resolved view.
pub trait Renderer {
    type Output;

    /// Lays out an already resolved document.
    fn render(&self, view: &DocumentView) -> Result<Self::Output, RenderError>;

    /// Resolves the record, then renders it.
    fn render_invoice(&self, invoice: &Invoice) -> Result<Self::Output, RenderError> {
        self.render(&DocumentView::new(invoice))
    }
}

/// Display symbol of a currency code; unknown codes are shown as is.
pub fn currency_symbol(currency: &str) -> &str {
    match currency {
        "EUR" => "€",
        "USD" => "$",
        "GBP" => "£",
        other => other,
    }
}

/// Formats a date as `dd MMM yyyy` in the language's locale.
pub fn format_date(date: NaiveDate, language: Language) -> String {
    date.format_localized("%d %b %Y", language.locale()).to_string()
}

/// Download name of the PDF: `facture-<number>.pdf`, or `facture-brouillon.pdf`
/// when the document has no number yet.
pub fn pdf_file_name(number: &str) -> String {
    let number = number.trim();
    if number.is_empty() {
        return "facture-brouillon.pdf".to_string();
    }
    let safe: String = number
        .chars()
        .map(|c| match c {
            '/' | '\\' | '"' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    format!("facture-{safe}.pdf")
}

/// A decoded image embedded in the record as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Asset {
    /// Decodes `data:image/<kind>;base64,<payload>`.
    ///
    /// Returns `None` for anything malformed; callers omit the block.
    pub fn from_data_url(url: &str) -> Option<Asset> {
        let rest = url.trim().strip_prefix("data:")?;
        let (meta, payload) = rest.split_once(',')?;
        let mime = meta.strip_suffix(";base64")?;
        if !mime.starts_with("image/") {
            return None;
        }
        let bytes = STANDARD.decode(payload.trim()).ok()?;
        if bytes.is_empty() {
            return None;
        }
        Some(Asset {
            mime: mime.to_string(),
            bytes,
        })
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

fn decode_asset(kind: &str, url: Option<&str>) -> Option<Asset> {
    let url = url.filter(|u| !u.trim().is_empty())?;
    let asset = Asset::from_data_url(url);
    if asset.is_none() {
        warn!("Ignoring malformed {} image", kind);
    }
    asset
}

/// Issuer or client block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyView {
    /// Heading above the block ("Billed to", "Received from", ...)
    pub heading: Option<String>,
    pub name: Option<String>,
    pub address_lines: Vec<String>,
    /// Tax id, VAT number, email and phone lines, in that order
    pub details: Vec<String>,
}

/// A titled block of free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountLine {
    pub label: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignatureView {
    pub label: String,
    pub image: Asset,
    /// Size factor, 1.0 is the nominal size
    pub scale: f32,
}

/// Everything a renderer needs, resolved once.
///
/// Built from an [`Invoice`] by calling the shared totals calculator and
/// label resolver and resolving every visibility flag, placeholder,
/// currency symbol and date. The HTML preview and the PDF renderer only lay
/// out a view.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentView {
    pub doc_type: DocumentType,
    pub language: Language,
    pub labels: LabelSet,
    pub totals: Totals,
    pub title: String,
    pub accent: String,
    pub number_line: String,
    pub date_line: Option<String>,
    pub due_date_line: Option<String>,
    pub issuer: PartyView,
    pub client: PartyView,
    pub delivery_address: Option<TextBlock>,
    pub description_header: String,
    pub quantity_header: String,
    pub unit_price_header: String,
    pub line_total_header: String,
    pub rows: Vec<RowView>,
    pub subtotal: AmountLine,
    /// Present only when VAT is enabled
    pub vat: Option<AmountLine>,
    pub total: AmountLine,
    pub logo: Option<Asset>,
    pub signature: Option<SignatureView>,
    pub payment_info: Option<TextBlock>,
    pub legal_mentions: Option<TextBlock>,
    /// Statutory notice printed whenever VAT is disabled
    pub vat_exemption: Option<String>,
    pub notes: Vec<String>,
    pub footer: String,
    pub file_name: String,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    non_blank(Some(value)).unwrap_or(placeholder)
}

fn text_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn signature_scale(percent: Option<Decimal>) -> f32 {
    let factor = percent
        .and_then(|p| (p / Decimal::ONE_HUNDRED).to_f32())
        .unwrap_or(1.0);
    if factor > 0.0 {
        factor.min(3.0)
    } else {
        1.0
    }
}

impl DocumentView {
    /// Resolves a record into a view.
    ///
    /// Never fails: missing optional data is replaced by the language's
    /// placeholders and malformed images are dropped.
    pub fn new(invoice: &Invoice) -> Self {
        let language = invoice.language;
        let doc_type = invoice.doc_type;
        let labels = resolve_labels(doc_type, language);
        let totals = invoice.totals();
        let symbol = currency_symbol(invoice.currency.trim());
        let visibility = invoice.visibility;
        let demo = &labels.demo;

        let accent = if doc_type == DocumentType::CreditNote {
            CREDIT_NOTE_ACCENT.to_string()
        } else {
            non_blank(invoice.color.as_deref())
                .unwrap_or(DEFAULT_ACCENT)
                .to_string()
        };

        let number_line = format!("{} {}", labels.number, invoice.number.trim())
            .trim_end()
            .to_string();

        let date_line = invoice
            .date
            .map(|d| format!("{}: {}", labels.date, format_date(d, language)));

        let due_date_line = if visibility.due_date {
            invoice
                .resolved_due_date()
                .map(|d| format!("{}: {}", labels.due_date, format_date(d, language)))
        } else {
            None
        };

        let issuer = {
            let src = &invoice.issuer;
            let mut details = vec![format!(
                "SIRET: {}",
                or_placeholder(&src.tax_id, demo.issuer_tax_id)
            )];
            if let Some(vat_number) = non_blank(src.vat_number.as_deref()) {
                details.push(format!("{}: {}", labels.vat_number, vat_number));
            }
            if visibility.issuer_email {
                details.push(
                    non_blank(src.email.as_deref())
                        .unwrap_or(demo.issuer_email)
                        .to_string(),
                );
            }
            if visibility.issuer_phone {
                details.push(format!(
                    "{}: {}",
                    labels.phone,
                    non_blank(src.phone.as_deref()).unwrap_or(demo.issuer_phone)
                ));
            }
            if let Some(website) = non_blank(src.website.as_deref()) {
                details.push(website.to_string());
            }
            PartyView {
                heading: None,
                name: visibility
                    .issuer_name
                    .then(|| or_placeholder(&src.name, demo.issuer_name).to_string()),
                address_lines: text_lines(or_placeholder(&src.address, demo.issuer_address)),
                details,
            }
        };

        let client = {
            let src = &invoice.client;
            let mut details = Vec::new();
            if let Some(tax_id) = non_blank(src.tax_id.as_deref()) {
                details.push(format!("SIRET: {tax_id}"));
            }
            if let Some(vat_number) = non_blank(src.vat_number.as_deref()) {
                details.push(format!("{}: {}", labels.vat_number, vat_number));
            }
            if visibility.client_email {
                details.push(
                    non_blank(src.email.as_deref())
                        .unwrap_or(demo.client_email)
                        .to_string(),
                );
            }
            PartyView {
                heading: Some(labels.billed_to.to_string()),
                name: Some(or_placeholder(&src.name, demo.client_name).to_string()),
                address_lines: text_lines(or_placeholder(&src.address, demo.client_address)),
                details,
            }
        };

        let delivery_address = non_blank(invoice.delivery_address.as_deref()).map(|a| TextBlock {
            title: labels.delivery_address.to_string(),
            lines: text_lines(a),
        });

        let rows = invoice
            .items
            .iter()
            .map(|item| RowView {
                description: or_placeholder(&item.description, labels.default_item_description)
                    .to_string(),
                quantity: format_plain(item.quantity),
                unit_price: format_money(item.unit_price, symbol),
                total: format_money(line_total(item), symbol),
            })
            .collect();

        let vat = invoice.vat_enabled.then(|| AmountLine {
            label: format!("{} ({}%)", labels.vat, format_plain(invoice.vat_rate)),
            amount: format_money(totals.vat_amount, symbol),
        });

        let signature = decode_asset("signature", invoice.signature.as_deref()).map(|image| {
            SignatureView {
                label: labels.signature.to_string(),
                image,
                scale: signature_scale(invoice.signature_scale),
            }
        });

        let payment_info = visibility.payment_info.then(|| TextBlock {
            title: labels.payment_info.to_string(),
            lines: text_lines(
                non_blank(invoice.payment_info.as_deref()).unwrap_or(demo.payment_info),
            ),
        });

        let legal_mentions = visibility.legal_mentions.then(|| {
            let mut lines = text_lines(
                non_blank(invoice.legal_mentions.as_deref()).unwrap_or(demo.legal_mentions),
            );
            lines.push(labels.no_discount.to_string());
            TextBlock {
                title: labels.legal_mentions.to_string(),
                lines,
            }
        });

        let vat_exemption = (!invoice.vat_enabled).then(|| labels.vat_not_applicable.to_string());

        debug!(
            "Resolved {} view in {}: {} row(s), total {}",
            doc_type,
            language,
            invoice.items.len(),
            totals.total
        );

        DocumentView {
            doc_type,
            language,
            title: document_title(doc_type, language),
            accent,
            number_line,
            date_line,
            due_date_line,
            issuer,
            client,
            delivery_address,
            description_header: labels.description.to_string(),
            quantity_header: non_blank(invoice.quantity_label.as_deref())
                .unwrap_or(labels.qty)
                .to_string(),
            unit_price_header: non_blank(invoice.unit_price_label.as_deref())
                .unwrap_or(labels.unit_price)
                .to_string(),
            line_total_header: labels.line_total.to_string(),
            rows,
            subtotal: AmountLine {
                label: labels.subtotal.to_string(),
                amount: format_money(totals.subtotal, symbol),
            },
            vat,
            total: AmountLine {
                label: labels.total.to_string(),
                amount: format_money(totals.total, symbol),
            },
            logo: decode_asset("logo", invoice.issuer.logo.as_deref()),
            signature,
            payment_info,
            legal_mentions,
            vat_exemption,
            notes: invoice.notes.as_deref().map(text_lines).unwrap_or_default(),
            footer: labels.footer.to_string(),
            file_name: pdf_file_name(&invoice.number),
            labels,
            totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::invoice::LineItem;
    use rust_decimal_macros::dec;
    use serde_json::json;

    // 1x1 transparent PNG
    const PIXEL_PNG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    fn scenario_invoice() -> Invoice {
        let mut invoice = Invoice::draft();
        invoice.number = "F-2024-007".to_string();
        invoice.date = NaiveDate::from_ymd_opt(2024, 1, 15);
        invoice.due_date = NaiveDate::from_ymd_opt(2024, 2, 14);
        invoice.issuer.name = "Atelier Dupont".to_string();
        invoice.issuer.address = "1 rue de Paris\n75001 Paris".to_string();
        invoice.issuer.tax_id = "12345678900012".to_string();
        invoice.client.name = "Client SA".to_string();
        invoice.client.address = "2 avenue de Lyon".to_string();
        invoice.items = vec![
            LineItem::new("Design", dec!(2), dec!(50)),
            LineItem::new("Hosting", dec!(1), dec!(19.99)),
        ];
        invoice
    }

    #[test]
    fn test_view_uses_shared_totals() {
        let invoice = scenario_invoice();
        let view = DocumentView::new(&invoice);
        assert_eq!(view.totals, invoice.totals());
        assert_eq!(view.subtotal.amount, "119.99 €");
        assert_eq!(view.vat.as_ref().map(|v| v.amount.as_str()), Some("24.00 €"));
        assert_eq!(view.vat.as_ref().map(|v| v.label.as_str()), Some("TVA (20%)"));
        assert_eq!(view.total.amount, "143.99 €");
        assert_eq!(view.rows[0].total, "100.00 €");
        assert_eq!(view.rows[0].quantity, "2");
        assert!(view.vat_exemption.is_none());
    }

    #[test]
    fn test_vat_disabled_shows_exemption_notice() {
        let mut invoice = scenario_invoice();
        invoice.vat_enabled = false;
        let view = DocumentView::new(&invoice);
        assert!(view.vat.is_none());
        assert_eq!(view.total.amount, "119.99 €");
        assert_eq!(
            view.vat_exemption.as_deref(),
            Some("TVA non applicable, art. 293 B du CGI")
        );

        // still printed when the legal block is hidden
        invoice.visibility.legal_mentions = false;
        let view = DocumentView::new(&invoice);
        assert!(view.legal_mentions.is_none());
        assert!(view.vat_exemption.is_some());
    }

    #[test]
    fn test_zero_rate_is_not_an_exemption() {
        let mut invoice = scenario_invoice();
        invoice.vat_rate = dec!(0);
        let view = DocumentView::new(&invoice);
        assert!(view.vat_exemption.is_none());
        assert_eq!(view.vat.as_ref().map(|v| v.amount.as_str()), Some("0.00 €"));
    }

    #[test]
    fn test_quote_in_english() {
        let mut invoice = scenario_invoice();
        invoice.doc_type = DocumentType::Quote;
        invoice.language = Language::En;
        let view = DocumentView::new(&invoice);
        assert_eq!(view.title, "QUOTE");
        assert_eq!(view.due_date_line.as_deref(), Some("Valid until: 14 Feb 2024"));
        assert_eq!(view.client.heading.as_deref(), Some("To"));
        assert_eq!(view.total.label, "Quote Total");
    }

    #[test]
    fn test_missing_show_flag_renders_like_true() {
        let base = json!({
            "number": "1",
            "date": "2024-01-15",
            "dueDate": "2024-02-15",
            "items": [{ "description": "x", "quantity": 1, "unitPrice": 10 }]
        });
        let mut explicit = base.clone();
        explicit["showDueDate"] = json!(true);

        let without: Invoice = serde_json::from_value(base).unwrap();
        let with: Invoice = serde_json::from_value(explicit).unwrap();
        let a = DocumentView::new(&without);
        let b = DocumentView::new(&with);
        assert_eq!(a.due_date_line, b.due_date_line);
        assert!(a.due_date_line.is_some());
    }

    #[test]
    fn test_hidden_blocks_are_omitted() {
        let mut invoice = scenario_invoice();
        invoice.issuer.phone = Some("0102030405".to_string());
        invoice.visibility.due_date = false;
        invoice.visibility.issuer_phone = false;
        invoice.visibility.issuer_name = false;
        invoice.visibility.payment_info = false;
        let view = DocumentView::new(&invoice);
        assert!(view.due_date_line.is_none());
        assert!(view.issuer.name.is_none());
        assert!(view.payment_info.is_none());
        assert!(!view.issuer.details.iter().any(|d| d.contains("0102030405")));
    }

    #[test]
    fn test_empty_fields_show_placeholders() {
        let view = DocumentView::new(&Invoice::draft());
        assert_eq!(view.issuer.name.as_deref(), Some("Mon Entreprise"));
        assert_eq!(view.client.name.as_deref(), Some("Client VIP"));
        assert_eq!(view.issuer.details[0], "SIRET: 123 456 789 00012");
        assert_eq!(view.number_line, "N°");
        assert_eq!(view.file_name, "facture-brouillon.pdf");
        assert!(view.rows.is_empty());
        assert_eq!(view.total.amount, "0.00 €");
    }

    #[test]
    fn test_custom_column_labels() {
        let mut invoice = scenario_invoice();
        invoice.quantity_label = Some("Jours".to_string());
        invoice.unit_price_label = Some(" ".to_string());
        let view = DocumentView::new(&invoice);
        assert_eq!(view.quantity_header, "Jours");
        assert_eq!(view.unit_price_header, "PRIX UNIT.");
    }

    #[test]
    fn test_credit_note_accent_is_red() {
        let mut invoice = scenario_invoice();
        invoice.color = Some("#2563eb".to_string());
        assert_eq!(DocumentView::new(&invoice).accent, "#2563eb");
        invoice.doc_type = DocumentType::CreditNote;
        assert_eq!(DocumentView::new(&invoice).accent, CREDIT_NOTE_ACCENT);
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(currency_symbol("EUR"), "€");
        assert_eq!(currency_symbol("USD"), "$");
        assert_eq!(currency_symbol("GBP"), "£");
        assert_eq!(currency_symbol("CHF"), "CHF");

        let mut invoice = scenario_invoice();
        invoice.currency = "USD".to_string();
        assert_eq!(DocumentView::new(&invoice).total.amount, "143.99 $");
    }

    #[test]
    fn test_dates_follow_language() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date, Language::En), "05 Mar 2024");
        assert!(format_date(date, Language::De).ends_with("2024"));
    }

    #[test]
    fn test_malformed_assets_are_dropped() {
        assert!(Asset::from_data_url("not a url").is_none());
        assert!(Asset::from_data_url("data:image/png;base64,@@@").is_none());
        assert!(Asset::from_data_url("data:text/plain;base64,aGVsbG8=").is_none());

        let mut invoice = scenario_invoice();
        invoice.signature = Some("data:image/png;base64,@@@".to_string());
        invoice.issuer.logo = Some("garbage".to_string());
        let view = DocumentView::new(&invoice);
        assert!(view.signature.is_none());
        assert!(view.logo.is_none());
        assert_eq!(view.total.amount, "143.99 €");
    }

    #[test]
    fn test_signature_scale() {
        let mut invoice = scenario_invoice();
        invoice.signature = Some(PIXEL_PNG.to_string());
        let view = DocumentView::new(&invoice);
        let signature = view.signature.expect("signature decodes");
        assert_eq!(signature.scale, 1.0);
        assert_eq!(signature.image.mime, "image/png");
        assert_eq!(signature.image.to_data_url(), PIXEL_PNG);

        invoice.signature_scale = Some(dec!(50));
        let view = DocumentView::new(&invoice);
        assert_eq!(view.signature.map(|s| s.scale), Some(0.5));
    }

    #[test]
    fn test_pdf_file_name() {
        assert_eq!(pdf_file_name("F-2024-001"), "facture-F-2024-001.pdf");
        assert_eq!(pdf_file_name("  "), "facture-brouillon.pdf");
        assert_eq!(pdf_file_name("2024/01"), "facture-2024-01.pdf");
    }
}
