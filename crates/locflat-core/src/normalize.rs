//! Identifier normalization for location names

/// Create a clean, uppercase identifier from a display name.
///
/// Every space becomes an underscore and ASCII letters are upper-cased.
/// All other characters pass through unchanged, so the function is total
/// and idempotent.
///
/// ```
/// use locflat_core::create_id;
///
/// assert_eq!(create_id("Van der Sterr 1024"), "VAN_DER_STERR_1024");
/// ```
pub fn create_id(name: &str) -> String {
    name.chars()
        .map(|c| if c == ' ' { '_' } else { c.to_ascii_uppercase() })
        .collect()
}
