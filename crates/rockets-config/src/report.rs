//! Report tuning.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Countries the dominant-country report competes over.
    /// Empty means every provider country present in the data.
    #[serde(default)]
    pub countries: Vec<String>,
}
