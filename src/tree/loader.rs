use std::path::Path;

use crate::tree::{error::TreeError, tree_model::ViewNode};

/// Load a view tree from a `.json` file, or YAML for any other extension.
pub fn load_tree(path: &str) -> Result<ViewNode, TreeError> {
    let content = std::fs::read_to_string(path).map_err(|source| TreeError::Io {
        path: path.to_string(),
        source,
    })?;

    let tree = if is_json(path) {
        serde_json::from_str(&content).map_err(|source| TreeError::JsonParse {
            path: path.to_string(),
            source,
        })?
    } else {
        parse_yaml_tree(&content).map_err(|source| TreeError::YamlParse {
            path: path.to_string(),
            source,
        })?
    };

    validate(&tree)?;
    Ok(tree)
}

pub fn parse_yaml_tree(content: &str) -> Result<ViewNode, serde_yaml::Error> {
    serde_yaml::from_str(content)
}

/// Reject nodes that ask for both a nested and a root identifier.
pub fn validate(node: &ViewNode) -> Result<(), TreeError> {
    if node.id.is_some() && node.root.is_some() {
        return Err(TreeError::ConflictingModifiers {
            kind: node.kind.clone(),
            label: node.label.clone(),
        });
    }
    node.children.iter().try_for_each(validate)
}

/// Load a YAML list of expected identifiers.
pub fn load_expected(path: &str) -> Result<Vec<String>, TreeError> {
    let content = std::fs::read_to_string(path).map_err(|source| TreeError::Io {
        path: path.to_string(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| TreeError::YamlParse {
        path: path.to_string(),
        source,
    })
}

fn is_json(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
