//! Shared HTML fragment helpers
//!
//! The site and console renderers build fragments by hand; everything that
//! came from a row passes through [`escape`] unless the column holds
//! trusted markup (embed codes, pre-rendered bodies).

/// Escape text for HTML content and attribute positions
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
