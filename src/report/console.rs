use crate::compose::composer::segments;
use crate::report::report_model::{ExpectationReport, IdentifierManifest};
use crate::tree::tree_model::ResolvedIdentifier;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format resolved identifiers for the terminal, indented by tree depth,
/// followed by the segment count and node kind.
///
/// ```text
/// === Identifiers: demos/login_scene.yaml ===
///
/// login                  1 VStack
///   login.header         2 VStack
///     login.header.logo  3 Image "lock.shield"
///
/// === 3 identifiers, fingerprint 1f09d30c ===
/// ```
pub fn format_console_listing(manifest: &IdentifierManifest, resolved: &[ResolvedIdentifier]) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Identifiers: {} ===\n\n", manifest.source));

    let min_depth = resolved.iter().map(|r| r.depth).min().unwrap_or(0);
    let width = resolved
        .iter()
        .map(|r| (r.depth - min_depth) * 2 + r.identifier.chars().count())
        .max()
        .unwrap_or(0);

    for r in resolved {
        let indent = "  ".repeat(r.depth - min_depth);
        let entry = format!("{}{}", indent, r.identifier);
        out.push_str(&format!(
            "{:<width$}  {} {}",
            entry,
            segments(&r.identifier).count(),
            r.kind,
            width = width
        ));
        if let Some(label) = &r.label {
            out.push_str(&format!(" \"{}\"", label));
        }
        out.push('\n');
    }

    let short: String = manifest.fingerprint.chars().take(8).collect();
    out.push_str(&format!(
        "\n=== {} identifiers, fingerprint {} ===\n",
        manifest.identifiers.len(),
        short
    ));

    out
}

/// Format an expectation check for the terminal.
pub fn format_check_report(source: &str, report: &ExpectationReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Check: {} ===\n\n", source));

    for id in &report.missing {
        out.push_str(&format!("  [MISSING]    {}\n", id));
    }
    for id in &report.unexpected {
        out.push_str(&format!("  [UNEXPECTED] {}\n", id));
    }
    for id in &report.duplicates {
        out.push_str(&format!("  [DUPLICATE]  {}\n", id));
    }
    for id in &report.malformed {
        out.push_str(&format!("  [MALFORMED]  {}\n", id));
    }

    let marker = if report.all_passed() {
        "\u{2713} PASS"
    } else {
        "\u{2717} FAIL"
    };

    out.push_str(&format!(
        "\n{}  {} matched, {} missing, {} unexpected\n",
        marker,
        report.matched,
        report.missing.len(),
        report.unexpected.len()
    ));

    out
}
