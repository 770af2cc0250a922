//! Cross-reference checks layered on top of a decoded [`ModelDocument`].
//!
//! The decoder records table indices without checking them. This pass
//! reports dangling references according to [`ValidationOptions`].

pub mod options;
pub mod report;
pub mod rules;

use crate::ms3d::ModelDocument;

pub use options::{IndexPolicy, ValidationOptions};
pub use report::{ValidationCategory, ValidationItem, ValidationReport, ValidationSeverity};

/// Run every rule against `doc`.
pub fn validate_document(doc: &ModelDocument, options: &ValidationOptions) -> ValidationReport {
    let policy = options.out_of_range;
    let mut report = ValidationReport::new();

    report.extend(rules::validate_triangle_vertex_indices(doc, policy));
    report.extend(rules::validate_mesh_triangle_indices(doc, policy));
    report.extend(rules::validate_mesh_material_indices(doc, policy));
    report.extend(rules::validate_vertex_bone_ids(doc));
    report.extend(rules::validate_empty_meshes(doc));

    tracing::debug!(
        errors = report.error_count,
        warnings = report.warning_count,
        info = report.info_count,
        "validated MS3D document"
    );
    report
}
