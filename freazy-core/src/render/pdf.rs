use std::io::BufWriter;

use printpdf::image_crate::{self, GenericImageView};
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Rgb,
};
use tracing::{debug, warn};

use super::{Asset, DocumentView, Renderer};
use crate::error::RenderError;

const WIDTH: Mm = Mm(210.0);
const HEIGHT: Mm = Mm(297.0);
const MARGIN: f32 = 15.0;
const LEFT: f32 = MARGIN;
const RIGHT: f32 = 210.0 - MARGIN;
const TOP: f32 = 297.0 - MARGIN;
/// Lowest y the content may reach; the footer line sits below it.
const CONTENT_BOTTOM: f32 = MARGIN + 12.0;
const FOOTER_Y: f32 = MARGIN;

const TITLE_SIZE: f32 = 22.0;
const TEXT_SIZE: f32 = 10.0;
const SMALL_SIZE: f32 = 8.0;
const LINE_HEIGHT: f32 = 5.0;
const ROW_HEIGHT: f32 = 6.5;

// column x positions
const X_QTY: f32 = 120.0;
const X_UNIT: f32 = 150.0;
const DESCRIPTION_CHARS: usize = 55;
/// Height available to rows on a page below the repeated table header.
const TABLE_ROOM: f32 = TOP - CONTENT_BOTTOM - (ROW_HEIGHT + 1.0);

const LOGO_MAX: (f32, f32) = (45.0, 20.0);
/// Nominal signature box in mm, before `signatureScale`.
const SIGNATURE_BOX: (f32, f32) = (66.0, 26.0);
const IMAGE_DPI: f32 = 300.0;

const PT_TO_MM: f32 = 0.352_778;

/// Rough Helvetica advance width, good enough to right-align amounts.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5 * PT_TO_MM
}

/// Reads `#rrggbb` / `#rgb`; anything else is black.
pub fn parse_hex_color(color: &str) -> Rgb {
    let hex = color.trim().trim_start_matches('#');
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => String::new(),
    };
    let channel = |i: usize| {
        expanded
            .get(i..i + 2)
            .and_then(|h| u8::from_str_radix(h, 16).ok())
            .map(|v| f32::from(v) / 255.0)
    };
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Rgb::new(r, g, b, None),
        _ => Rgb::new(0.0, 0.0, 0.0, None),
    }
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn grey() -> Color {
    Color::Rgb(Rgb::new(0.42, 0.45, 0.5, None))
}

/// Splits text into lines of at most `max_chars`, breaking on spaces.
/// Words longer than a line are cut.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut pieces = chars.chunks(max_chars).peekable();
            while let Some(piece) = pieces.next() {
                let piece: String = piece.iter().collect();
                if pieces.peek().is_some() {
                    lines.push(piece);
                } else {
                    current = piece;
                }
            }
            continue;
        }

        let needed = current.chars().count() + chars.len() + 1;
        if !current.is_empty() && needed > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Cursor over the pages of the document being written.
struct PageWriter<'a> {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    bold: IndirectFontRef,
    footer: &'a str,
    y: f32,
    pages: usize,
}

impl<'a> PageWriter<'a> {
    fn new(title: &str, footer: &'a str) -> Result<Self, RenderError> {
        let (doc, page, layer) = PdfDocument::new(title, WIDTH, HEIGHT, "Layer 1");
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);

        let writer = Self {
            doc,
            layer,
            font,
            bold,
            footer,
            y: TOP,
            pages: 1,
        };
        writer.page_footer();
        Ok(writer)
    }

    fn page_footer(&self) {
        self.layer.set_fill_color(grey());
        self.layer
            .use_text(self.footer, SMALL_SIZE, Mm(LEFT), Mm(FOOTER_Y), &self.font);
        let page_no = self.pages.to_string();
        self.layer.use_text(
            page_no.as_str(),
            SMALL_SIZE,
            Mm(RIGHT - text_width(&page_no, SMALL_SIZE)),
            Mm(FOOTER_Y),
            &self.font,
        );
        self.layer.set_fill_color(black());
    }

    /// Starts a new page when less than `height` mm are left.
    fn ensure_space(&mut self, height: f32) {
        if self.y - height >= CONTENT_BOTTOM {
            return;
        }
        self.pages += 1;
        let (page, layer) = self
            .doc
            .add_page(WIDTH, HEIGHT, format!("Layer {}", self.pages));
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = TOP;
        self.page_footer();
    }

    fn text_at(&self, text: &str, size: f32, x: f32, y: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.font };
        self.layer.use_text(text, size, Mm(x), Mm(y), font);
    }

    fn text_right(&self, text: &str, size: f32, right: f32, y: f32, bold: bool) {
        self.text_at(text, size, right - text_width(text, size), y, bold);
    }

    /// Writes one line at the cursor and moves down.
    fn line(&mut self, text: &str, size: f32, bold: bool) {
        self.ensure_space(LINE_HEIGHT);
        self.text_at(text, size, LEFT, self.y, bold);
        self.y -= LINE_HEIGHT;
    }

    fn rule(&self, y: f32, thickness: f32) {
        self.layer.set_outline_thickness(thickness);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(LEFT), Mm(y)), false),
                (Point::new(Mm(RIGHT), Mm(y)), false),
            ],
            is_closed: false,
        });
    }

    fn table_header(&mut self, view: &DocumentView) {
        self.text_at(&view.description_header, SMALL_SIZE, LEFT, self.y, true);
        self.text_right(&view.quantity_header, SMALL_SIZE, X_QTY, self.y, true);
        self.text_right(&view.unit_price_header, SMALL_SIZE, X_UNIT + 20.0, self.y, true);
        self.text_right(&view.line_total_header, SMALL_SIZE, RIGHT, self.y, true);
        self.rule(self.y - 2.0, 0.8);
        self.y -= ROW_HEIGHT + 1.0;
    }

    /// Like `ensure_space`, repeating the table header on a new page.
    fn ensure_table_space(&mut self, height: f32, view: &DocumentView) {
        let pages_before = self.pages;
        self.ensure_space(height);
        if self.pages != pages_before {
            self.table_header(view);
        }
    }

    /// Places an image inside a `max_w` x `max_h` box whose top-left
    /// corner is at (`x`, `top`). Returns the height used, zero when the
    /// image cannot be decoded.
    fn image(&self, asset: &Asset, x: f32, top: f32, max_w: f32, max_h: f32) -> f32 {
        let decoded = match image_crate::load_from_memory(&asset.bytes) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!("Skipping undecodable {} image: {}", asset.mime, e);
                return 0.0;
            }
        };
        let (w_px, h_px) = decoded.dimensions();
        if w_px == 0 || h_px == 0 {
            return 0.0;
        }
        let natural_w = w_px as f32 / IMAGE_DPI * 25.4;
        let natural_h = h_px as f32 / IMAGE_DPI * 25.4;
        let scale = (max_w / natural_w).min(max_h / natural_h);
        let height = natural_h * scale;

        Image::from_dynamic_image(&decoded).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(x)),
                translate_y: Some(Mm(top - height)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                dpi: Some(IMAGE_DPI),
                ..Default::default()
            },
        );
        height
    }

    fn finish(self) -> Result<(Vec<u8>, usize), RenderError> {
        let pages = self.pages;
        let mut writer = BufWriter::new(Vec::<u8>::new());
        self.doc.save(&mut writer)?;
        let bytes = writer
            .into_inner()
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        Ok((bytes, pages))
    }
}

/// Paginated A4 rendering of a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    /// Renders the view and reports the number of pages written.
    pub fn render_with_pages(&self, view: &DocumentView) -> Result<(Vec<u8>, usize), RenderError> {
        let mut w = PageWriter::new(&view.title, &view.footer)?;

        // header: issuer on the left, title block on the right
        let mut left_y = TOP;
        if let Some(logo) = &view.logo {
            let used = w.image(logo, LEFT, left_y, LOGO_MAX.0, LOGO_MAX.1);
            if used > 0.0 {
                left_y -= used + 3.0;
            }
        }
        if let Some(name) = &view.issuer.name {
            w.text_at(name, 12.0, LEFT, left_y, true);
            left_y -= LINE_HEIGHT + 1.0;
        }
        for line in view.issuer.address_lines.iter().chain(&view.issuer.details) {
            w.text_at(line, TEXT_SIZE, LEFT, left_y, false);
            left_y -= LINE_HEIGHT;
        }

        let mut right_y = TOP;
        w.layer
            .set_fill_color(Color::Rgb(parse_hex_color(&view.accent)));
        w.text_right(&view.title, TITLE_SIZE, RIGHT, right_y, true);
        w.layer.set_fill_color(black());
        right_y -= 9.0;
        for line in std::iter::once(&view.number_line)
            .chain(&view.date_line)
            .chain(&view.due_date_line)
        {
            w.text_right(line, TEXT_SIZE, RIGHT, right_y, false);
            right_y -= LINE_HEIGHT;
        }

        w.y = left_y.min(right_y) - 8.0;

        // client and delivery address side by side
        let parties_top = w.y;
        let mut client_y = parties_top;
        if let Some(heading) = &view.client.heading {
            w.text_at(heading, SMALL_SIZE, LEFT, client_y, true);
            client_y -= LINE_HEIGHT;
        }
        if let Some(name) = &view.client.name {
            w.text_at(name, TEXT_SIZE, LEFT, client_y, true);
            client_y -= LINE_HEIGHT;
        }
        for line in view.client.address_lines.iter().chain(&view.client.details) {
            w.text_at(line, TEXT_SIZE, LEFT, client_y, false);
            client_y -= LINE_HEIGHT;
        }
        let mut delivery_y = parties_top;
        if let Some(block) = &view.delivery_address {
            let x = 115.0;
            w.text_at(&block.title, SMALL_SIZE, x, delivery_y, true);
            delivery_y -= LINE_HEIGHT;
            for line in &block.lines {
                w.text_at(line, TEXT_SIZE, x, delivery_y, false);
                delivery_y -= LINE_HEIGHT;
            }
        }
        w.y = client_y.min(delivery_y) - 6.0;

        // items table, header repeated on every page
        w.ensure_space(ROW_HEIGHT * 2.0);
        w.table_header(view);
        for row in &view.rows {
            let description = wrap(&row.description, DESCRIPTION_CHARS);
            let height = ROW_HEIGHT + (description.len().saturating_sub(1)) as f32 * LINE_HEIGHT;
            // a row taller than a page continues on the next ones
            w.ensure_table_space(height.min(TABLE_ROOM), view);
            w.text_right(&row.quantity, TEXT_SIZE, X_QTY, w.y, false);
            w.text_right(&row.unit_price, TEXT_SIZE, X_UNIT + 20.0, w.y, false);
            w.text_right(&row.total, TEXT_SIZE, RIGHT, w.y, false);
            for (i, line) in description.iter().enumerate() {
                if i > 0 {
                    w.y -= LINE_HEIGHT;
                    w.ensure_table_space(0.0, view);
                }
                w.text_at(line, TEXT_SIZE, LEFT, w.y, false);
            }
            w.y -= ROW_HEIGHT;
        }

        // totals
        let totals_height = ROW_HEIGHT * if view.vat.is_some() { 3.5 } else { 2.5 };
        w.ensure_space(totals_height);
        w.y -= 2.0;
        let label_x = 120.0;
        for amount in std::iter::once(&view.subtotal).chain(&view.vat) {
            w.text_at(&amount.label, TEXT_SIZE, label_x, w.y, false);
            w.text_right(&amount.amount, TEXT_SIZE, RIGHT, w.y, false);
            w.y -= ROW_HEIGHT;
        }
        w.layer.set_outline_thickness(1.0);
        w.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(label_x), Mm(w.y + 3.5)), false),
                (Point::new(Mm(RIGHT), Mm(w.y + 3.5)), false),
            ],
            is_closed: false,
        });
        w.y -= 1.5;
        w.text_at(&view.total.label, 12.0, label_x, w.y, true);
        w.text_right(&view.total.amount, 12.0, RIGHT, w.y, true);
        w.y -= ROW_HEIGHT + 4.0;

        for line in &view.notes {
            for wrapped in wrap(line, 95) {
                w.line(&wrapped, TEXT_SIZE, false);
            }
        }

        if let Some(signature) = &view.signature {
            let (max_w, max_h) = (SIGNATURE_BOX.0 * signature.scale, SIGNATURE_BOX.1 * signature.scale);
            w.ensure_space(max_h + LINE_HEIGHT + 4.0);
            w.y -= 4.0;
            w.text_at(&signature.label, TEXT_SIZE, LEFT, w.y, false);
            w.y -= 2.0;
            let used = w.image(&signature.image, LEFT, w.y, max_w, max_h);
            w.y -= used + 2.0;
        }

        // footer blocks
        for block in view.payment_info.iter().chain(&view.legal_mentions) {
            w.ensure_space(LINE_HEIGHT * 2.0 + 4.0);
            w.y -= 4.0;
            w.line(&block.title.to_uppercase(), SMALL_SIZE, true);
            for line in &block.lines {
                for wrapped in wrap(line, 110) {
                    w.line(&wrapped, SMALL_SIZE, false);
                }
            }
        }
        if let Some(notice) = &view.vat_exemption {
            w.y -= 2.0;
            w.line(notice, SMALL_SIZE, true);
        }

        let (bytes, pages) = w.finish()?;
        debug!(
            "Rendered {} byte pdf for {} on {} page(s)",
            bytes.len(),
            view.number_line,
            pages
        );
        Ok((bytes, pages))
    }
}

impl Renderer for PdfRenderer {
    type Output = Vec<u8>;

    fn render(&self, view: &DocumentView) -> Result<Vec<u8>, RenderError> {
        self.render_with_pages(view).map(|(bytes, _)| bytes)
    }
}

/// Renders on the blocking pool. The view is resolved by the caller first,
/// so only the page layout runs off the async runtime.
pub async fn render_pdf(view: DocumentView) -> Result<Vec<u8>, RenderError> {
    tokio::task::spawn_blocking(move || PdfRenderer.render(&view)).await?
}
