use crate::compose::prefix::Prefix;
use crate::report::console::{format_check_report, format_console_listing};
use crate::report::manifest::{manifest_to_json, manifest_to_yaml};
use crate::report::report_model::{ExpectationReport, IdentifierManifest};
use crate::trace::logger::TraceLogger;
use crate::tree::error::TreeError;
use crate::tree::loader::{load_expected, load_tree};
use crate::tree::propagate::resolve;
use crate::tree::tree_model::ResolvedIdentifier;

// ============================================================================
// compose subcommand
// ============================================================================

/// Compose each fragment in turn, starting from `prefix`.
pub fn cmd_compose(prefix: &str, fragments: &[String], verbose: u8) -> String {
    let mut current = Prefix::root(prefix);
    for fragment in fragments {
        let next = current.compose(fragment);
        if verbose > 0 {
            eprintln!("'{}' + '{}' = '{}'", current, fragment, next);
        }
        current = next;
    }
    current.into_string()
}

// ============================================================================
// resolve subcommand
// ============================================================================

pub fn cmd_resolve(
    tree_path: &str,
    format: &str,
    output: Option<&str>,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let (manifest, resolved) = resolve_file(tree_path, verbose, tracer)?;
    let content = render(&manifest, &resolved, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &content).map_err(|source| TreeError::Io {
                path: path.to_string(),
                source,
            })?;
            if verbose > 0 {
                eprintln!("Wrote: {}", path);
            }
        }
        None => print!("{}", content),
    }

    Ok(())
}

/// Render a manifest in one of the supported output formats.
pub fn render(
    manifest: &IdentifierManifest,
    resolved: &[ResolvedIdentifier],
    format: &str,
) -> Result<String, TreeError> {
    match format {
        "console" => Ok(format_console_listing(manifest, resolved)),
        "yaml" | "yml" => manifest_to_yaml(manifest),
        "json" => manifest_to_json(manifest),
        other => Err(TreeError::UnsupportedFormat(other.to_string())),
    }
}

// ============================================================================
// check subcommand
// ============================================================================

/// Check a tree against an expected identifier list and return whether it passed.
pub fn cmd_check(
    tree_path: &str,
    expect_path: &str,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<bool, Box<dyn std::error::Error>> {
    let (_, resolved) = resolve_file(tree_path, verbose, tracer)?;
    let expected = load_expected(expect_path)?;

    if verbose > 0 {
        eprintln!("Checking {} expected identifiers...", expected.len());
    }

    let report = ExpectationReport::compare(&expected, &resolved);
    print!("{}", format_check_report(tree_path, &report));

    Ok(report.all_passed())
}

// ============================================================================
// Helpers
// ============================================================================

/// Load, propagate and summarize a tree file.
pub fn resolve_file(
    tree_path: &str,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(IdentifierManifest, Vec<ResolvedIdentifier>), TreeError> {
    let mut tree = load_tree(tree_path)?;

    if verbose > 0 {
        eprintln!("Resolving {} ({} nodes)...", tree_path, tree.node_count());
    }

    let resolved = resolve(&mut tree, tree_path, tracer);

    if verbose > 1 {
        for r in &resolved {
            eprintln!("  [{}] {}", r.depth, r.identifier);
        }
    }

    Ok((IdentifierManifest::from_resolved(tree_path, &resolved), resolved))
}
