//! Catalog descriptors and the adapter that normalizes untrusted input.
//!
//! The catalog arrives as an externally supplied JSON array and may be
//! malformed in every way: missing fields, wrong types, not an array at
//! all. Every defaulting decision lives here — downstream scoring assumes
//! a well-formed [`ModelDescriptor`] and never re-checks field presence.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// One catalog entry, fully defaulted. Numeric fields stay `None` when the
/// source omits them — "unknown" and "zero" are different answers and the
/// scorer treats them differently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelDescriptor {
    pub id: String,
    pub name: String,
    pub provider: String,
    /// Model type string, e.g. "LLM", "Code LLM", "Image Gen".
    #[serde(rename = "type")]
    pub kind: String,
    pub modalities: Vec<String>,
    /// Parameter count in billions.
    pub params_b: Option<f64>,
    /// Weights distributable and locally runnable.
    pub open: bool,
    pub license: Option<String>,
    pub min_vram_gb: Option<f64>,
    pub recommended_vram_gb: Option<f64>,
    pub min_ram_gb: Option<f64>,
    pub recommended_ram_gb: Option<f64>,
    /// Context window in thousands of tokens.
    pub context_k: Option<u32>,
    /// Supported language codes, e.g. "EN", "AR".
    pub languages: Vec<String>,
    pub notes: Option<String>,
}

impl Default for ModelDescriptor {
    fn default() -> Self {
        ModelDescriptor {
            id: String::new(),
            name: String::new(),
            provider: String::new(),
            kind: String::new(),
            modalities: Vec::new(),
            params_b: None,
            open: false,
            license: None,
            min_vram_gb: None,
            recommended_vram_gb: None,
            min_ram_gb: None,
            recommended_ram_gb: None,
            context_k: None,
            languages: Vec::new(),
            notes: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Adapter
// ---------------------------------------------------------------------------

/// Normalize a raw catalog value into well-formed descriptors.
///
/// A non-array input yields an empty list — callers observe "no candidates"
/// rather than a crash. Entries that are not objects are skipped; object
/// entries have every field defaulted individually.
pub fn normalize(raw: &Value) -> Vec<ModelDescriptor> {
    let Some(items) = raw.as_array() else {
        warn!("catalog payload is not an array, treating as empty");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item.as_object() {
            Some(obj) => Some(normalize_entry(obj)),
            None => {
                warn!("skipping non-object catalog entry");
                None
            }
        })
        .collect()
}

fn normalize_entry(obj: &Map<String, Value>) -> ModelDescriptor {
    ModelDescriptor {
        id: string_field(obj, "id"),
        name: string_field(obj, "name"),
        provider: string_field(obj, "provider"),
        kind: string_field(obj, "type"),
        modalities: string_list(obj, "modalities"),
        params_b: number_field(obj, "paramsB"),
        open: bool_field(obj, "open"),
        license: optional_string(obj, "license"),
        min_vram_gb: number_field(obj, "minVramGb"),
        recommended_vram_gb: number_field(obj, "recommendedVramGb"),
        min_ram_gb: number_field(obj, "minRamGb"),
        recommended_ram_gb: number_field(obj, "recommendedRamGb"),
        context_k: number_field(obj, "contextK").map(|v| v as u32),
        languages: string_list(obj, "languages"),
        notes: optional_string(obj, "notes"),
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn optional_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn number_field(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64)
}

fn bool_field(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn string_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Catalog sources
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog fetch failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("catalog read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where a catalog array comes from. Fetching is the only blocking boundary
/// in the engine; everything after the array is in hand is synchronous.
pub trait CatalogSource {
    /// Human-readable origin, used in log context.
    fn origin(&self) -> String;

    fn fetch(&self) -> Result<Vec<ModelDescriptor>, CatalogError>;
}

/// Fetch the catalog JSON from an HTTP endpoint.
pub struct HttpCatalogSource {
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl CatalogSource for HttpCatalogSource {
    fn origin(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<Vec<ModelDescriptor>, CatalogError> {
        let resp = ureq::get(&self.url)
            .config()
            .timeout_global(Some(std::time::Duration::from_secs(10)))
            .build()
            .call()?;
        let raw: Value = resp.into_body().read_json()?;
        Ok(normalize(&raw))
    }
}

/// Read the catalog JSON from a local file.
pub struct FileCatalogSource {
    path: std::path::PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalogSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<ModelDescriptor>, CatalogError> {
        let text = std::fs::read_to_string(&self.path)?;
        let raw: Value = serde_json::from_str(&text)?;
        Ok(normalize(&raw))
    }
}

/// Fetch from a source, degrading any failure to an empty catalog. This is
/// the "no recommendations" policy: the user sees an empty result set, never
/// an error.
pub fn load_or_empty(source: &dyn CatalogSource) -> Vec<ModelDescriptor> {
    match source.fetch() {
        Ok(models) => models,
        Err(err) => {
            warn!(origin = %source.origin(), error = %err, "catalog unavailable");
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Embedded catalog
// ---------------------------------------------------------------------------

const MODELS_JSON: &str = include_str!("../data/models.json");

/// The compiled-in reference catalog.
pub struct ModelCatalog {
    models: Vec<ModelDescriptor>,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::embedded()
    }
}

impl ModelCatalog {
    pub fn embedded() -> Self {
        let raw: Value =
            serde_json::from_str(MODELS_JSON).expect("embedded models.json is valid JSON");
        ModelCatalog {
            models: normalize(&raw),
        }
    }

    pub fn models(&self) -> &[ModelDescriptor] {
        &self.models
    }

    /// Case-insensitive substring search over name, provider and type.
    pub fn find(&self, query: &str) -> Vec<&ModelDescriptor> {
        let q = query.to_lowercase();
        self.models
            .iter()
            .filter(|m| {
                m.name.to_lowercase().contains(&q)
                    || m.provider.to_lowercase().contains(&q)
                    || m.kind.to_lowercase().contains(&q)
            })
            .collect()
    }
}
