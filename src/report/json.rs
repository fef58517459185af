use serde::Serialize;

/// Pretty-printed JSON for any report view. The views mirror the text
/// renderers field for field, so both formats expose the same data.
pub fn render<T: Serialize>(view: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}
