use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Serializable BISAC code table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BisacNamesData {
    pub version: String,
    pub names: HashMap<String, String>,
}

static BISAC_NAMES: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    // Validated at compile time by build.rs
    const EMBEDDED_NAMES: &str = include_str!("../../catalogs/bisac_names.json");
    serde_json::from_str::<BisacNamesData>(EMBEDDED_NAMES)
        .map(|data| data.names)
        .unwrap_or_default()
});

/// Canonical name of a BISAC subject code, e.g. `FIC028000`
#[must_use]
pub fn canonical_name(code: &str) -> Option<&'static str> {
    BISAC_NAMES.get(code).map(String::as_str)
}

/// Number of known BISAC codes
#[must_use]
pub fn known_codes() -> usize {
    BISAC_NAMES.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_name() {
        assert_eq!(
            canonical_name("FIC028000"),
            Some("Fiction / Science Fiction / General")
        );
        assert_eq!(canonical_name("fic028000"), None);
        assert_eq!(canonical_name("XYZ000000"), None);
        assert!(known_codes() > 100);
    }
}
