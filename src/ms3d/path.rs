//! Texture path canonicalisation.

/// Normalize a texture or alpha-map path from a material record.
///
/// Backslashes become forward slashes, then any leading run of `.`, `/`
/// or `\` characters is stripped (`./a.bmp`, `.\a.bmp`, `..\a.bmp` and
/// `/a.bmp` all become `a.bmp`). Applying it twice changes nothing.
pub fn normalize(path: &str) -> String {
    let converted = path.replace('\\', "/");
    converted
        .trim_start_matches(|c| matches!(c, '.' | '/' | '\\'))
        .to_string()
}
