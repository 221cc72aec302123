// theme-clean-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Manifest at '{location}' is not valid JSON: {source}")]
    #[diagnostic(
        code(theme_clean::domain::manifest),
        help("The build tool wrote a corrupt manifest. Rebuild or delete it before cleaning.")
    )]
    ManifestParse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}
