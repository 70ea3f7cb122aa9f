//! Fixed lookup tables keyed by option key, each with a documented fallback.
//!
//! Lookups are total: a key missing from a table (including keys this build
//! does not recognize) yields the table's fallback.

/// A keyed table of pixel measurements with a fallback for misses.
#[derive(Debug, Clone, Copy)]
pub struct LookupTable {
    pub entries: &'static [(&'static str, f64)],
    pub fallback: f64,
}

impl LookupTable {
    pub fn get(&self, key: &str) -> f64 {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(self.fallback)
    }
}

/// Sleeve panel height (px).
pub const SLEEVE_LENGTH: LookupTable = LookupTable {
    entries: &[
        ("cap", 6.0),
        ("classicShort", 14.0),
        ("extendedDrop", 20.0),
        ("elbow", 26.0),
        ("detachable", 18.0),
    ],
    fallback: 14.0,
};

/// Garment body height (px).
pub const GARMENT_HEIGHT: LookupTable = LookupTable {
    entries: &[
        ("microCrop", 52.0),
        ("midCrop", 60.0),
        ("classic", 72.0),
        ("longline", 84.0),
        ("tunic", 96.0),
    ],
    fallback: 72.0,
};

/// Bottom corner radius of the body (px).
pub const HEM_RADIUS: LookupTable = LookupTable {
    entries: &[
        ("straight", 12.0),
        ("rounded", 28.0),
        ("split", 10.0),
        ("highLow", 18.0),
        ("raw", 4.0),
    ],
    fallback: 12.0,
};

/// Neckline band depth (px).
pub const NECKLINE_DEPTH: LookupTable = LookupTable {
    entries: &[
        ("crew", 18.0),
        ("sculptedV", 26.0),
        ("mock", 12.0),
        ("offShoulder", 38.0),
        ("asymmetric", 30.0),
    ],
    fallback: 18.0,
};

/// Material finish overlay opacity. Finishes not listed get no overlay.
pub const FINISH_OPACITY: &[(&str, f64)] = &[
    ("gloss", 0.55),
    ("sheen", 0.4),
    ("brushed", 0.25),
    ("tech", 0.25),
];

/// Top corner radius: deeper necklines flatten the shoulders, floor 6px.
pub fn top_corner_radius(neckline_depth: f64) -> f64 {
    (18.0 - neckline_depth / 4.0).max(6.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misses_fall_back() {
        assert_eq!(SLEEVE_LENGTH.get("unknown"), 14.0);
        assert_eq!(GARMENT_HEIGHT.get(""), 72.0);
        assert_eq!(HEM_RADIUS.get("scalloped"), 12.0);
        assert_eq!(NECKLINE_DEPTH.get("cowl"), 18.0);
    }

    #[test]
    fn hits_return_table_values() {
        assert_eq!(SLEEVE_LENGTH.get("elbow"), 26.0);
        assert_eq!(GARMENT_HEIGHT.get("tunic"), 96.0);
        assert_eq!(HEM_RADIUS.get("raw"), 4.0);
        assert_eq!(NECKLINE_DEPTH.get("offShoulder"), 38.0);
    }

    #[test]
    fn top_radius_never_drops_below_six() {
        for (_, depth) in NECKLINE_DEPTH.entries {
            assert!(top_corner_radius(*depth) >= 6.0);
        }
        assert_eq!(top_corner_radius(38.0), 8.5);
        assert_eq!(top_corner_radius(200.0), 6.0);
    }
}
