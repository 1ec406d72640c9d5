use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use chrono::Utc;
use dotenv::dotenv;
use freazy_core::config::AppConfig;
use freazy_core::history::{InvoiceHistory, JsonFileStore};
use freazy_core::models::Invoice;
use freazy_core::render::{DocumentView, HtmlRenderer, PdfRenderer, Renderer};
use freazy_core::smart_data::{JsonSmartDataStore, SmartDataStore};
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "usage: freazy-render <invoice.json> [output-dir]";

/// Command-line renderer.
///
/// Reads an invoice record, writes its HTML preview and PDF next to each
/// other, archives the record in the local history file and remembers its
/// client and items for autocompletion:
/// - `<output-dir>/facture-<number>.html`
/// - `<output-dir>/facture-<number>.pdf`
fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive(LevelFilter::INFO.into());

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next().map(PathBuf::from).ok_or_else(|| anyhow!(USAGE))?;
    let output_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    let config = AppConfig::from_env()?;

    let raw = std::fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let invoice: Invoice = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid invoice record in {}", input.display()))?;

    if let Err(e) = invoice.validate() {
        warn!("Rendering an incomplete document: {}", e);
    }

    let view = DocumentView::new(&invoice);
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let pdf_path = output_dir.join(&view.file_name);
    let html_path = pdf_path.with_extension("html");

    write_output(&html_path, HtmlRenderer.render(&view)?.as_bytes())?;
    write_output(&pdf_path, &PdfRenderer.render(&view)?)?;

    let today = Utc::now().date_naive();
    let mut history = InvoiceHistory::new(
        JsonFileStore::new(&config.history.path),
        config.history.retention_days,
    );
    let mut smart_store = JsonSmartDataStore::new(&config.smart_data.path);
    let mut smart_data = smart_store.load()?;
    let remembered = smart_data.remember_invoice(&invoice);
    smart_store.persist(&smart_data)?;
    info!(
        "Remembered {} client/item entr(ies) in {}",
        remembered,
        smart_store.path().display()
    );

    let entries = history.save(invoice, today)?;
    let late = history.mark_overdue(today)?;
    info!(
        "Archived in {} ({} document(s), {} newly late)",
        history.store().path().display(),
        entries.len(),
        late
    );

    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}
