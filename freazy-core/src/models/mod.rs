pub mod history;
pub mod invoice;

pub use history::{HistoryEntry, InvoiceStatus};
pub use invoice::{Client, Invoice, Issuer, LineItem, Visibility};
