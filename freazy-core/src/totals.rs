use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::invoice::LineItem;
use crate::money::round2;

/// Monetary totals of one document.
///
/// Produced only by [`compute_totals`]; the preview, the PDF and the
/// exports all read the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of the rounded line totals, before tax
    pub subtotal: Decimal,

    /// VAT on the subtotal, zero when VAT is disabled
    pub vat_amount: Decimal,

    /// Subtotal plus VAT
    pub total: Decimal,
}

impl Totals {
    pub const ZERO: Totals = Totals {
        subtotal: Decimal::ZERO,
        vat_amount: Decimal::ZERO,
        total: Decimal::ZERO,
    };
}

/// Rounded total of a single line: `round2(quantity * unit_price)`.
pub fn line_total(item: &LineItem) -> Decimal {
    round2(item.quantity.saturating_mul(item.unit_price))
}

/// Computes subtotal, VAT and grand total for a list of line items.
///
/// Rounding is applied per line, then to the subtotal, the VAT amount and
/// the total. Negative lines are not rejected and simply propagate. The
/// function never fails: arithmetic saturates instead of overflowing.
///
/// # Arguments
///
/// * `items` - Line items in document order
/// * `vat_enabled` - Whether VAT applies to this document
/// * `vat_rate` - VAT percentage, ignored when `vat_enabled` is false
///
/// # Returns
///
/// Returns the [`Totals`] of the document; an empty list yields zeros.
pub fn compute_totals(items: &[LineItem], vat_enabled: bool, vat_rate: Decimal) -> Totals {
    let subtotal = round2(
        items
            .iter()
            .map(line_total)
            .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line)),
    );

    let vat_amount = if vat_enabled {
        round2(subtotal.saturating_mul(vat_rate) / Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    let total = round2(subtotal.saturating_add(vat_amount));

    debug!(
        "Computed totals for {} item(s): subtotal={} vat={} total={}",
        items.len(),
        subtotal,
        vat_amount,
        total
    );

    Totals {
        subtotal,
        vat_amount,
        total,
    }
}
