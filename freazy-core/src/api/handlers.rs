use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json},
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::api::AppState;
use crate::error::InvoiceError;
use crate::history::export::{csv_file_name, export_csv};
use crate::history::{compute_stats, retain_recent, HistoryStats};
use crate::i18n::{document_title, resolve_labels, DocumentType, LabelSet, Language};
use crate::models::history::HistoryEntry;
use crate::models::invoice::{Client, Invoice, LineItem, DEFAULT_VAT_RATE};
use crate::money::deserialize_amount;
use crate::render::pdf::render_pdf;
use crate::render::{DocumentView, HtmlRenderer, Renderer};
use crate::smart_data::{SavedItem, SmartData};
use crate::totals::{compute_totals, Totals};

fn default_true() -> bool {
    true
}

fn default_vat_rate() -> Decimal {
    DEFAULT_VAT_RATE
}

/// Body of `POST /api/totals`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsRequest {
    #[serde(default)]
    pub items: Vec<LineItem>,

    #[serde(default = "default_true")]
    pub vat_enabled: bool,

    #[serde(default = "default_vat_rate", deserialize_with = "deserialize_amount")]
    pub vat_rate: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelsResponse {
    pub doc_type: DocumentType,
    pub language: Language,
    pub title: String,
    pub labels: LabelSet,
}

/// Body of `POST /api/smart-data/suggest`: the remembered lists and what
/// the user typed so far.
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    #[serde(flatten)]
    pub data: SmartData,

    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub clients: Vec<Client>,
    pub items: Vec<SavedItem>,
}

/// Body of `POST /api/smart-data/remember`.
#[derive(Debug, Deserialize)]
pub struct RememberRequest {
    #[serde(flatten)]
    pub data: SmartData,

    pub invoice: Invoice,
}

#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub problems: Vec<String>,
}

/// Totals endpoint handler.
///
/// Handles POST requests to `/api/totals`.
pub async fn totals_handler(Json(request): Json<TotalsRequest>) -> Json<Totals> {
    Json(compute_totals(
        &request.items,
        request.vat_enabled,
        request.vat_rate,
    ))
}

/// Label set of a document type in a language. Unknown codes fall back to
/// the defaults instead of failing.
pub async fn labels_handler(
    Path((doc_type, language)): Path<(String, String)>,
) -> Json<LabelsResponse> {
    let doc_type = DocumentType::from_code(&doc_type);
    let language = Language::from_code(&language);

    Json(LabelsResponse {
        doc_type,
        language,
        title: document_title(doc_type, language),
        labels: resolve_labels(doc_type, language),
    })
}

/// Preview endpoint handler.
///
/// Handles POST requests to `/api/preview` and returns the HTML preview.
pub async fn preview_handler(Json(invoice): Json<Invoice>) -> Result<Html<String>, StatusCode> {
    info!("Preview request for document {:?}", invoice.number);

    let html = HtmlRenderer.render_invoice(&invoice).map_err(|e| {
        error!("Preview rendering failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Html(html))
}

/// PDF endpoint handler.
///
/// Handles POST requests to `/api/pdf`. The view is resolved before the
/// layout is handed to the blocking pool.
pub async fn pdf_handler(Json(invoice): Json<Invoice>) -> Result<impl IntoResponse, StatusCode> {
    info!("PDF request for document {:?}", invoice.number);

    let view = DocumentView::new(&invoice);
    let file_name = view.file_name.clone();

    let bytes = render_pdf(view).await.map_err(|e| {
        error!("PDF rendering failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        bytes,
    ))
}

/// Validation endpoint handler.
///
/// Handles POST requests to `/api/validate` and lists every problem that
/// blocks submission.
pub async fn validate_handler(Json(invoice): Json<Invoice>) -> Json<ValidationResponse> {
    let problems = match invoice.validate() {
        Ok(()) => Vec::new(),
        Err(InvoiceError::Validation(problems)) => problems,
        Err(other) => vec![other.to_string()],
    };

    Json(ValidationResponse {
        valid: problems.is_empty(),
        problems,
    })
}

/// Accounting export handler.
///
/// Handles POST requests to `/api/history/export.csv` with the history
/// array as body.
pub async fn history_csv_handler(
    Json(entries): Json<Vec<HistoryEntry>>,
) -> Result<impl IntoResponse, StatusCode> {
    info!("CSV export of {} history entr(ies)", entries.len());

    let csv = export_csv(&entries).map_err(|e| {
        error!("CSV export failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let file_name = csv_file_name(Utc::now().date_naive());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        csv,
    ))
}

/// Dashboard figures of a history array, for the current month.
pub async fn history_stats_handler(Json(entries): Json<Vec<HistoryEntry>>) -> Json<HistoryStats> {
    Json(compute_stats(&entries, Utc::now().date_naive()))
}

/// Retention endpoint handler.
///
/// Handles POST requests to `/api/history/prune` and returns the history
/// array without the entries older than the configured retention window.
pub async fn history_prune_handler(
    State(state): State<AppState>,
    Json(mut entries): Json<Vec<HistoryEntry>>,
) -> Json<Vec<HistoryEntry>> {
    retain_recent(
        &mut entries,
        state.config.history.retention_days,
        Utc::now().date_naive(),
    );
    Json(entries)
}

/// Autocompletion endpoint handler.
///
/// Handles POST requests to `/api/smart-data/suggest` and returns the
/// remembered clients and items matching the query.
pub async fn smart_data_suggest_handler(Json(request): Json<SuggestRequest>) -> Json<SuggestResponse> {
    let SuggestRequest { data, query } = request;
    Json(SuggestResponse {
        clients: data.search_clients(&query).into_iter().cloned().collect(),
        items: data.search_items(&query).into_iter().cloned().collect(),
    })
}

/// Handles POST requests to `/api/smart-data/remember`: adds the client and
/// items of a generated document to the remembered lists.
pub async fn smart_data_remember_handler(Json(request): Json<RememberRequest>) -> Json<SmartData> {
    let RememberRequest { mut data, invoice } = request;
    let added = data.remember_invoice(&invoice);
    info!("Remembered {} client/item entr(ies) from {:?}", added, invoice.number);
    Json(data)
}
