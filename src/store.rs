use std::fs;
use std::path::Path;

use derive_more::{Display, Error, From};

use crate::model::DbItem;

#[derive(Debug, Display, Error, From)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

/// Saves a descriptor set as a JSON document.
pub fn save_items(path: &Path, items: &[DbItem]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    tracing::debug!("saved {} descriptors to {}", items.len(), path.display());
    Ok(())
}

/// Loads a descriptor set saved with [`save_items`]. Derived field names are
/// recomputed while deserializing.
pub fn load_items(path: &Path) -> Result<Vec<DbItem>, StoreError> {
    let json = fs::read_to_string(path)?;
    let items = serde_json::from_str(&json)?;
    Ok(items)
}
