use crate::report::report_model::IdentifierManifest;
use crate::tree::error::TreeError;

/// SHA-1 hex digest of the identifiers joined by newlines.
pub fn fingerprint(identifiers: &[String]) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(identifiers.join("\n").as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn manifest_to_yaml(manifest: &IdentifierManifest) -> Result<String, TreeError> {
    serde_yaml::to_string(manifest).map_err(|source| TreeError::YamlSerialize {
        context: format!("manifest for {}", manifest.source),
        source,
    })
}

pub fn manifest_to_json(manifest: &IdentifierManifest) -> Result<String, TreeError> {
    serde_json::to_string_pretty(manifest)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|source| TreeError::JsonSerialize {
            context: format!("manifest for {}", manifest.source),
            source,
        })
}
