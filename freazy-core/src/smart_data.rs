use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SmartDataError;
use crate::models::invoice::{Client, Invoice};
use crate::money::deserialize_amount;

/// Most clients, and most items, remembered at once.
pub const MAX_SAVED_ENTRIES: usize = 50;

/// A line item remembered for autocompletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub description: String,

    #[serde(default, deserialize_with = "deserialize_amount")]
    pub unit_price: Decimal,
}

/// Anything remembered under a case-insensitive name.
trait Remembered {
    fn key(&self) -> &str;
}

impl Remembered for Client {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Remembered for SavedItem {
    fn key(&self) -> &str {
        &self.description
    }
}

/// Puts `entry` at the head of `list`, replacing any entry with the same
/// name regardless of case. Entries without a name are ignored.
fn remember<T: Remembered>(list: &mut Vec<T>, entry: T) -> bool {
    if entry.key().is_empty() {
        return false;
    }
    let key = entry.key().to_lowercase();
    list.retain(|existing| existing.key().to_lowercase() != key);
    list.insert(0, entry);
    list.truncate(MAX_SAVED_ENTRIES);
    true
}

/// Case-insensitive substring search; an empty query matches everything.
fn search<'a, T: Remembered>(list: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return list.iter().collect();
    }
    let query = query.to_lowercase();
    list.iter()
        .filter(|entry| entry.key().to_lowercase().contains(&query))
        .collect()
}

/// Clients and items remembered from past documents, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmartData {
    #[serde(default)]
    pub clients: Vec<Client>,

    #[serde(default)]
    pub items: Vec<SavedItem>,
}

impl SmartData {
    /// Remembers a client. Returns `false` when it has no name.
    pub fn add_client(&mut self, client: Client) -> bool {
        remember(&mut self.clients, client)
    }

    /// Remembers an item. Returns `false` when it has no description.
    pub fn add_item(&mut self, item: SavedItem) -> bool {
        remember(&mut self.items, item)
    }

    /// Remembers the client and every described line of a document.
    ///
    /// # Arguments
    ///
    /// * `invoice` - The document just generated
    ///
    /// # Returns
    ///
    /// Returns the number of entries added or refreshed.
    pub fn remember_invoice(&mut self, invoice: &Invoice) -> usize {
        let mut added = usize::from(self.add_client(invoice.client.clone()));
        for item in &invoice.items {
            let saved = SavedItem {
                description: item.description.clone(),
                unit_price: item.unit_price,
            };
            added += usize::from(self.add_item(saved));
        }
        added
    }

    pub fn search_clients(&self, query: &str) -> Vec<&Client> {
        search(&self.clients, query)
    }

    pub fn search_items(&self, query: &str) -> Vec<&SavedItem> {
        search(&self.items, query)
    }
}

/// Backing storage of the remembered clients and items.
pub trait SmartDataStore {
    /// Reads everything; an empty store yields empty lists.
    fn load(&self) -> Result<SmartData, SmartDataError>;

    fn persist(&mut self, data: &SmartData) -> Result<(), SmartDataError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemorySmartDataStore {
    data: SmartData,
}

impl SmartDataStore for MemorySmartDataStore {
    fn load(&self) -> Result<SmartData, SmartDataError> {
        Ok(self.data.clone())
    }

    fn persist(&mut self, data: &SmartData) -> Result<(), SmartDataError> {
        self.data = data.clone();
        Ok(())
    }
}

/// Store backed by a JSON object on disk.
#[derive(Debug, Clone)]
pub struct JsonSmartDataStore {
    path: PathBuf,
}

impl JsonSmartDataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SmartDataStore for JsonSmartDataStore {
    fn load(&self) -> Result<SmartData, SmartDataError> {
        if !self.path.exists() {
            debug!("No saved data at {}, starting empty", self.path.display());
            return Ok(SmartData::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(SmartData::default());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    /// Writes to a sibling temporary file, then renames it over the target.
    fn persist(&mut self, data: &SmartData) -> Result<(), SmartDataError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(data)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
