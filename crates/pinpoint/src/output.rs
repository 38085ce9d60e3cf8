use pinpoint_core::{StrategyReport, Synthesis};
use pinpoint_dom::{Document, NodeId};
use serde_json::json;
use std::fmt::Write;

/// One line per element: tag, winning strategy, selector. Ambiguous
/// fallbacks are marked.
pub fn render_syntheses(
    doc: &Document,
    results: &[(NodeId, Synthesis)],
    as_json: bool,
) -> serde_json::Result<String> {
    if as_json {
        let items: Vec<_> = results
            .iter()
            .map(|(node, synthesis)| {
                json!({
                    "tag": tag_of(doc, *node),
                    "selector": synthesis.selector,
                    "strategy": synthesis.strategy,
                    "unique": synthesis.unique,
                })
            })
            .collect();
        return Ok(format!("{}\n", serde_json::to_string_pretty(&items)?));
    }

    let mut out = String::new();
    for (node, synthesis) in results {
        let _ = writeln!(
            out,
            "{:<10} {:<10} {}{}",
            tag_of(doc, *node),
            synthesis.strategy,
            synthesis.selector,
            if synthesis.unique { "" } else { "  (not unique)" }
        );
    }
    Ok(out)
}

pub fn render_reports(reports: &[StrategyReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let outcome = match (&report.selector, report.skipped) {
            (_, true) => "(disabled)",
            (Some(selector), false) => selector.as_str(),
            (None, false) => "-",
        };
        let _ = writeln!(out, "{:<10} {}", report.strategy, outcome);
    }
    out
}

fn tag_of(doc: &Document, node: NodeId) -> String {
    doc.element(node)
        .map(|e| e.tag_name.clone())
        .unwrap_or_default()
}
