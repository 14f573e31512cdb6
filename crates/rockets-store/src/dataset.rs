//! JSON dataset documents.
//!
//! ```json
//! {
//!   "providers": [{ "id": "lsp-00000001", "name": "ULA", "year_founded": 1990, "country": "USA" }],
//!   "payloads":  [{ "id": "pld-00000001", "type": "satellite", "name": "GPS III", "manufacturer": "lsp-00000001" }],
//!   "rockets":   [{ "id": "rkt-00000001", "name": "Atlas V", "country": "USA", "manufacturer": "lsp-00000001",
//!                   "payloads": ["pld-00000001"] }],
//!   "families":  [],
//!   "launches":  [{ "date": "2017-03-01", "outcome": "successful", "orbit": "LEO",
//!                   "vehicle": "rkt-00000001", "provider": "lsp-00000001" }]
//! }
//! ```

use std::path::Path;

use rockets_core::{Launch, Payload, Provider, Rocket, RocketFamily};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub providers: Vec<Provider>,
    #[serde(default)]
    pub payloads: Vec<Payload>,
    #[serde(default)]
    pub rockets: Vec<Rocket>,
    #[serde(default)]
    pub families: Vec<RocketFamily>,
    #[serde(default)]
    pub launches: Vec<Launch>,
}

impl Dataset {
    /// Parse a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Json` if the document does not match the shape.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a dataset file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read, or
    /// `StoreError::Json` if it cannot be parsed.
    pub fn read(path: &Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
