// theme-clean-core/src/domain/bundle.rs

use std::borrow::Cow;
use std::collections::HashMap;

/// What the build host tells a hook about the current invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookContext {
    /// The host stays resident and re-runs hooks on every rebuild.
    pub watch_mode: bool,
}

impl HookContext {
    pub fn one_shot() -> Self {
        Self { watch_mode: false }
    }

    pub fn watch() -> Self {
        Self { watch_mode: true }
    }
}

/// Payload of an emitted asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Text(String),
    Bytes(Vec<u8>),
}

impl AssetSource {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            AssetSource::Text(text) => Cow::Borrowed(text),
            AssetSource::Bytes(bytes) => String::from_utf8_lossy(bytes),
        }
    }
}

/// One finalized output of the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputArtifact {
    /// Emitted file with its serialized contents (the manifest lands here).
    Asset { file_name: String, source: AssetSource },
    /// Compiled code chunk. Carries no `source`.
    Chunk { file_name: String },
}

impl OutputArtifact {
    pub fn text_asset(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        OutputArtifact::Asset {
            file_name: file_name.into(),
            source: AssetSource::Text(text.into()),
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            OutputArtifact::Asset { file_name, .. } | OutputArtifact::Chunk { file_name } => {
                file_name
            }
        }
    }

    pub fn source(&self) -> Option<&AssetSource> {
        match self {
            OutputArtifact::Asset { source, .. } => Some(source),
            OutputArtifact::Chunk { .. } => None,
        }
    }
}

/// Output path -> artifact, as handed to the write-bundle hook.
pub type OutputBundle = HashMap<String, OutputArtifact>;
