//! Placeholder image references for catalog entries.

const PLACEHOLDER_BASE: &str = "https://placehold.co/600x400/cccccc/333333";

/// Placeholder image URL rendering `name` as dark text on a grey background.
///
/// The name is percent-encoded as a query value (RFC 3986 unreserved
/// characters pass through).
pub fn placeholder_image_url(name: &str) -> String {
    format!("{PLACEHOLDER_BASE}?text={}", urlencoding::encode(name))
}
