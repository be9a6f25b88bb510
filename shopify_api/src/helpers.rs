//! Small transforms shared by the order builders.

/// Shopify's GraphQL-style global id prefix for product variants. The REST order endpoint wants the bare
/// numeric id.
const VARIANT_GID_PREFIX: &str = "gid://shopify/ProductVariant/";

/// Strips the variant gid prefix if present; ids without the prefix pass through unchanged.
pub fn strip_variant_gid(id: &str) -> &str {
    id.strip_prefix(VARIANT_GID_PREFIX).unwrap_or(id)
}

/// Splits a full name into (first, last) at the first space. A single-token name has an empty last name.
pub fn split_full_name(name: &str) -> (String, String) {
    match name.split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.to_string()),
        None => (name.to_string(), String::new()),
    }
}
