use askama::Template;
use tracing::debug;

use super::{DocumentView, Renderer};
use crate::error::RenderError;

/// Nominal signature box in CSS pixels, before `signatureScale`.
const SIGNATURE_WIDTH_PX: f32 = 250.0;
const SIGNATURE_HEIGHT_PX: f32 = 100.0;

struct SignatureImage {
    label: String,
    src: String,
    width: u32,
    height: u32,
}

#[derive(Template)]
#[template(path = "preview.html")]
struct PreviewTemplate<'a> {
    view: &'a DocumentView,
    logo: Option<String>,
    signature: Option<SignatureImage>,
}

/// Live HTML preview of a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    type Output = String;

    fn render(&self, view: &DocumentView) -> Result<String, RenderError> {
        let template = PreviewTemplate {
            view,
            logo: view.logo.as_ref().map(|asset| asset.to_data_url()),
            signature: view.signature.as_ref().map(|sig| SignatureImage {
                label: sig.label.clone(),
                src: sig.image.to_data_url(),
                width: (SIGNATURE_WIDTH_PX * sig.scale).round() as u32,
                height: (SIGNATURE_HEIGHT_PX * sig.scale).round() as u32,
            }),
        };

        let html = template.render()?;
        debug!("Rendered {} byte preview for {}", html.len(), view.number_line);
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{DocumentType, Language};
    use crate::render::format_date;
    use crate::models::invoice::{Invoice, LineItem};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn invoice() -> Invoice {
        let mut invoice = Invoice::draft();
        invoice.number = "F-2024-001".to_string();
        invoice.date = NaiveDate::from_ymd_opt(2024, 1, 15);
        invoice.due_date = NaiveDate::from_ymd_opt(2024, 2, 15);
        invoice.issuer.name = "Atelier <Dupont>".to_string();
        invoice.client.name = "Client SA".to_string();
        invoice.items = vec![
            LineItem::new("Design", dec!(2), dec!(50)),
            LineItem::new("Hosting", dec!(1), dec!(19.99)),
        ];
        invoice
    }

    #[test]
    fn test_preview_contains_totals_and_labels() {
        let html = HtmlRenderer.render_invoice(&invoice()).unwrap();
        assert!(html.contains("FACTURE"));
        assert!(html.contains("N° F-2024-001"));
        assert!(html.contains("119.99 €"));
        assert!(html.contains("24.00 €"));
        assert!(html.contains("143.99 €"));
        assert!(html.contains("Total HT"));
        assert!(!html.contains("TVA non applicable"));
    }

    #[test]
    fn test_preview_escapes_user_text() {
        let html = HtmlRenderer.render_invoice(&invoice()).unwrap();
        assert!(html.contains("Atelier &lt;Dupont&gt;"));
        assert!(!html.contains("Atelier <Dupont>"));
    }

    #[test]
    fn test_preview_exemption_notice_when_vat_disabled() {
        let mut invoice = invoice();
        invoice.vat_enabled = false;
        let html = HtmlRenderer.render_invoice(&invoice).unwrap();
        assert!(html.contains("TVA non applicable, art. 293 B du CGI"));
        assert!(html.contains("119.99 €"));
        assert!(!html.contains("143.99 €"));
    }

    #[test]
    fn test_preview_quote_in_english() {
        let mut invoice = invoice();
        invoice.doc_type = DocumentType::Quote;
        invoice.language = Language::En;
        let html = HtmlRenderer.render_invoice(&invoice).unwrap();
        assert!(html.contains("QUOTE"));
        assert!(html.contains("Valid until"));
        assert!(!html.contains("Due Date"));
    }

    #[test]
    fn test_preview_hides_due_date() {
        let mut invoice = invoice();
        let due = format_date(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(), Language::Fr);
        assert!(HtmlRenderer.render_invoice(&invoice).unwrap().contains(&due));

        invoice.visibility.due_date = false;
        let html = HtmlRenderer.render_invoice(&invoice).unwrap();
        assert!(!html.contains(&due));
    }
}
