use serde::{Deserialize, Serialize};

/// Severity level for a validation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

/// Which table a validation item refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCategory {
    Vertex,
    Triangle,
    Mesh,
    Material,
}

/// A single validation finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationItem {
    /// Unique code for this validation rule (e.g. "MESH_MATERIAL_OUT_OF_RANGE").
    pub code: String,
    /// Human-readable description.
    pub message: String,
    /// Severity level.
    pub severity: ValidationSeverity,
    /// Table the offending record belongs to.
    pub category: ValidationCategory,
    /// Position of the offending record in its table.
    pub record: usize,
}

/// Cross-reference report for a decoded model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// All validation findings.
    pub items: Vec<ValidationItem>,
    /// Whether the model passes validation (no errors).
    pub is_valid: bool,
    pub error_count: u32,
    pub warning_count: u32,
    pub info_count: u32,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self {
            items: vec![],
            is_valid: true,
            error_count: 0,
            warning_count: 0,
            info_count: 0,
        }
    }

    /// Add a validation item and update counts.
    pub fn add(&mut self, item: ValidationItem) {
        match item.severity {
            ValidationSeverity::Error => {
                self.error_count += 1;
                self.is_valid = false;
            }
            ValidationSeverity::Warning => {
                self.warning_count += 1;
            }
            ValidationSeverity::Info => {
                self.info_count += 1;
            }
        }
        self.items.push(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = ValidationItem>) {
        for item in items {
            self.add(item);
        }
    }

    /// Merge another report into this one.
    pub fn merge(&mut self, other: ValidationReport) {
        self.extend(other.items);
    }

    /// Items with the given rule code.
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a ValidationItem> + 'a {
        self.items.iter().filter(move |item| item.code == code)
    }
}
