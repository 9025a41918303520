use crate::{
    compose::prefix::Prefix,
    trace::{
        logger::{TraceLogger, TraceRun},
        trace::TraceEvent,
    },
    tree::tree_model::{IdentifierModifier, ResolvedIdentifier, ViewNode},
};

/// A node the propagation layer can label.
///
/// Implementors expose the modifier they carry, accept the resulting
/// identifier, and hand out their children for the descent.
pub trait A11yNode: Sized {
    fn modifier(&self) -> Option<IdentifierModifier>;

    /// Set the externally visible identifier and mark the node as a container.
    fn apply_identifier(&mut self, id: &str);

    fn children_mut(&mut self) -> &mut [Self];

    fn kind(&self) -> Option<&str> {
        None
    }

    fn label(&self) -> Option<&str> {
        None
    }
}

impl A11yNode for ViewNode {
    fn modifier(&self) -> Option<IdentifierModifier> {
        // Root wins if both are present; validation rejects that case earlier.
        if let Some(root) = &self.root {
            return Some(IdentifierModifier::Root(root.clone()));
        }
        self.id.clone().map(IdentifierModifier::Nested)
    }

    fn apply_identifier(&mut self, id: &str) {
        self.identifier = Some(id.to_string());
        self.container = true;
    }

    fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    fn kind(&self) -> Option<&str> {
        Some(&self.kind)
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Walk `node` and its descendants, threading `inherited` explicitly.
///
/// Each sibling receives the same inherited prefix; nothing a child
/// computes is visible to its siblings.
///
/// Recursion depth equals tree depth. View trees are shallow; a tree nested
/// tens of thousands of levels deep can exhaust the thread's stack.
pub fn propagate<N: A11yNode>(node: &mut N, inherited: &Prefix, tracer: &TraceLogger) {
    propagate_traced(node, inherited, None, tracer);
}

fn propagate_traced<N: A11yNode>(
    node: &mut N,
    inherited: &Prefix,
    source: Option<&str>,
    tracer: &TraceLogger,
) {
    let mut run = tracer.begin_run(source);
    propagate_at(node, inherited, 0, &mut run);
    run.finish();
}

fn propagate_at<N: A11yNode>(node: &mut N, inherited: &Prefix, depth: usize, run: &mut TraceRun<'_>) {
    let next = match node.modifier() {
        Some(modifier) if !modifier.is_empty() => {
            let composed = modifier.apply(inherited);

            if run.is_enabled() {
                run.record(
                    TraceEvent::now(depth, &modifier)
                        .with_prefix(inherited)
                        .with_result(&composed)
                        .with_node(node.kind(), node.label()),
                );
            }

            node.apply_identifier(composed.as_str());
            composed
        }
        _ => inherited.clone(),
    };

    for child in node.children_mut() {
        propagate_at(child, &next, depth + 1, run);
    }
}

/// Propagate from an empty prefix and list every applied identifier.
///
/// `source` names the tree in the trace run header.
pub fn resolve(tree: &mut ViewNode, source: &str, tracer: &TraceLogger) -> Vec<ResolvedIdentifier> {
    propagate_traced(tree, &Prefix::empty(), Some(source), tracer);
    collect_identifiers(tree)
}

/// Depth-first, document-order listing of identifiers already on the tree.
pub fn collect_identifiers(tree: &ViewNode) -> Vec<ResolvedIdentifier> {
    let mut out = Vec::new();
    collect_into(tree, 0, &mut out);
    out
}

fn collect_into(node: &ViewNode, depth: usize, out: &mut Vec<ResolvedIdentifier>) {
    if let Some(id) = &node.identifier {
        out.push(ResolvedIdentifier {
            identifier: id.clone(),
            kind: node.kind.clone(),
            label: node.label.clone(),
            depth,
        });
    }
    for child in &node.children {
        collect_into(child, depth + 1, out);
    }
}
