//! Parser for JSON roster files.
//!
//! A roster is a JSON array of pilot objects:
//!
//! ```json
//! [
//!   { "name": "Lewis Hamilton", "category": "current",
//!     "championships": 7, "team": "Mercedes", "active": true }
//! ]
//! ```
//!
//! Category codes are taken as-is; unknown codes are kept and simply never
//! match a category filter.

use crate::error::Result;
use crate::types::Pilot;
use std::fs;
use std::path::Path;

/// Parse roster text into pilots, preserving order.
pub fn parse_roster(text: &str) -> Result<Vec<Pilot>> {
    let pilots: Vec<Pilot> = serde_json::from_str(text)?;
    Ok(pilots)
}

/// Load a roster file from disk.
pub fn load_roster(path: &Path) -> Result<Vec<Pilot>> {
    tracing::debug!("Loading roster from {}", path.display());

    let text = fs::read_to_string(path)?;
    let pilots = parse_roster(&text)?;

    tracing::debug!("Loaded {} pilots from {}", pilots.len(), path.display());
    Ok(pilots)
}
