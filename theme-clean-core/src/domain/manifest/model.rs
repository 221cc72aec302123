// theme-clean-core/src/domain/manifest/model.rs

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

/// The build manifest: source-module key -> output metadata, in document order.
///
/// Document order matters because the live-file sequence is emitted in the
/// same order the build tool wrote the keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    entries: Vec<(String, ManifestEntry)>,
}

/// One compiled module: its primary output and the side outputs attached to it.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub file: String,

    #[serde(default)]
    pub css: Vec<String>,

    #[serde(default)]
    pub assets: Vec<String>,

    #[serde(default)]
    pub imports: Vec<String>,

    // Informational fields written by the build tool. Not used for liveness.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub is_entry: bool,

    #[serde(default)]
    pub is_dynamic_entry: bool,

    #[serde(default)]
    pub dynamic_imports: Vec<String>,
}

impl ManifestEntry {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    pub fn with_css<I, S>(mut self, css: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.css = css.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_assets<I, S>(mut self, assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assets = assets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }
}

impl Manifest {
    /// Parses manifest JSON text. `location` only feeds the error message.
    pub fn from_json(text: &str, location: &str) -> Result<Self, DomainError> {
        serde_json::from_str(text).map_err(|source| DomainError::ManifestParse {
            location: location.to_string(),
            source,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ManifestEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn entries(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    /// Inserts or replaces. A repeated key keeps its first position and its last value.
    pub fn insert(&mut self, key: String, entry: ManifestEntry) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((key, entry)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ManifestEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }
}

impl<K: Into<String>> FromIterator<(K, ManifestEntry)> for Manifest {
    fn from_iter<T: IntoIterator<Item = (K, ManifestEntry)>>(iter: T) -> Self {
        let mut manifest = Manifest::default();
        for (key, entry) in iter {
            manifest.insert(key.into(), entry);
        }
        manifest
    }
}

// A HashMap would lose document order, so the map is visited by hand.
impl<'de> Deserialize<'de> for Manifest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ManifestVisitor;

        impl<'de> Visitor<'de> for ManifestVisitor {
            type Value = Manifest;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object mapping module keys to manifest entries")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut manifest = Manifest {
                    entries: Vec::with_capacity(map.size_hint().unwrap_or(0)),
                };
                while let Some((key, entry)) = map.next_entry::<String, ManifestEntry>()? {
                    manifest.insert(key, entry);
                }
                Ok(manifest)
            }
        }

        deserializer.deserialize_map(ManifestVisitor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_deserialization() {
        let json_data = r#"
        {
            "src/entrypoints/theme.ts": {
                "file": "theme-BHk2xa9c.js",
                "name": "theme",
                "src": "src/entrypoints/theme.ts",
                "isEntry": true,
                "imports": ["_vendor-Dc8pL1.js"],
                "css": ["theme-CmXb2y1Q.css"]
            },
            "_vendor-Dc8pL1.js": {
                "file": "vendor-Dc8pL1.js",
                "name": "vendor"
            }
        }
        "#;

        let manifest = Manifest::from_json(json_data, "manifest.json").expect("Should parse");

        assert_eq!(manifest.len(), 2);
        let theme = manifest.get("src/entrypoints/theme.ts").expect("Entry should exist");
        assert!(theme.is_entry);
        assert_eq!(theme.css, vec!["theme-CmXb2y1Q.css"]);
        assert_eq!(theme.imports, vec!["_vendor-Dc8pL1.js"]);

        let vendor = manifest.get("_vendor-Dc8pL1.js").unwrap();
        assert!(vendor.css.is_empty());
        assert!(vendor.assets.is_empty());
        assert!(!vendor.is_entry);
    }

    #[test]
    fn test_document_order_is_preserved() {
        let json_data = r#"{
            "z.ts": { "file": "z-1.js" },
            "a.ts": { "file": "a-1.js" },
            "m.ts": { "file": "m-1.js" }
        }"#;

        let manifest = Manifest::from_json(json_data, "manifest.json").unwrap();
        let keys: Vec<&str> = manifest.iter().map(|(k, _)| k).collect();

        assert_eq!(keys, vec!["z.ts", "a.ts", "m.ts"]);
    }

    #[test]
    fn test_repeated_key_keeps_last_value_in_first_position() {
        let json_data = r#"{
            "src/a.ts": { "file": "a-old.js" },
            "src/b.ts": { "file": "b-1.js" },
            "src/a.ts": { "file": "a-new.js", "css": ["a-new.css"] }
        }"#;

        let manifest = Manifest::from_json(json_data, "manifest.json").unwrap();
        let keys: Vec<&str> = manifest.iter().map(|(k, _)| k).collect();

        assert_eq!(keys, vec!["src/a.ts", "src/b.ts"]);
        assert_eq!(manifest.get("src/a.ts").unwrap().file, "a-new.js");
        assert_eq!(
            crate::domain::manifest::compute_live_files(&manifest),
            vec!["a-new.js", "a-new.css", "b-1.js"]
        );
    }

    #[test]
    fn test_malformed_json_reports_location() {
        let err = Manifest::from_json("{ not json", "assets/.vite/manifest.json").unwrap_err();

        assert!(matches!(err, DomainError::ManifestParse { .. }));
        assert!(err.to_string().contains("assets/.vite/manifest.json"));
    }

    #[test]
    fn test_entry_without_file_is_rejected() {
        let result = Manifest::from_json(r#"{ "a.ts": { "css": [] } }"#, "m.json");
        assert!(result.is_err());
    }
}
