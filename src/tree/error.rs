use std::fmt;

#[derive(Debug)]
pub enum TreeError {
    /// Reading or writing a file failed
    Io { path: String, source: std::io::Error },

    /// YAML tree or expectation file could not be parsed
    YamlParse { path: String, source: serde_yaml::Error },

    /// JSON tree could not be parsed
    JsonParse { path: String, source: serde_json::Error },

    /// Manifest or tree could not be written as JSON
    JsonSerialize { context: String, source: serde_json::Error },

    /// Manifest or tree could not be written as YAML
    YamlSerialize { context: String, source: serde_yaml::Error },

    /// A node carries both `id` and `root`
    ConflictingModifiers { kind: String, label: Option<String> },

    /// Output format not one of console, yaml, json
    UnsupportedFormat(String),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::Io { path, source } => {
                write!(f, "I/O error on '{}': {}", path, source)
            }
            TreeError::YamlParse { path, source } => {
                write!(f, "YAML parse error in '{}': {}", path, source)
            }
            TreeError::JsonParse { path, source } => {
                write!(f, "JSON parse error in '{}': {}", path, source)
            }
            TreeError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            TreeError::YamlSerialize { context, source } => {
                write!(f, "YAML serialize error ({}): {}", context, source)
            }
            TreeError::ConflictingModifiers { kind, label } => match label {
                Some(label) => write!(
                    f,
                    "{} '{}' has both 'id' and 'root'; use one",
                    kind, label
                ),
                None => write!(f, "{} has both 'id' and 'root'; use one", kind),
            },
            TreeError::UnsupportedFormat(format) => {
                write!(f, "Unsupported output format '{}' (expected console, yaml or json)", format)
            }
        }
    }
}

impl std::error::Error for TreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TreeError::Io { source, .. } => Some(source),
            TreeError::YamlParse { source, .. } => Some(source),
            TreeError::JsonParse { source, .. } => Some(source),
            TreeError::JsonSerialize { source, .. } => Some(source),
            TreeError::YamlSerialize { source, .. } => Some(source),
            _ => None,
        }
    }
}
