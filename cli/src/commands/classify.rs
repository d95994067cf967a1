use colored::*;
use zonr_common::config::ResolverConfig;
use zonr_common::network::target::{NetworkTarget, TargetClassification};
use zonr_core::TargetResolver;

use super::target::Target;
use crate::terminal::{colors, print};

/// Classifies every target and fails if any of them lands in a `deny`ed zone.
pub fn classify(
    targets: Vec<Target>,
    cfg: ResolverConfig,
    deny: &[TargetClassification],
) -> anyhow::Result<()> {
    let resolver = TargetResolver::with_defaults(cfg);
    print_chains(&resolver);

    let mut denied: Vec<String> = Vec::new();

    for (idx, target) in targets.iter().enumerate() {
        let found: NetworkTarget = match target {
            Target::Address(ip) => resolver.resolve_address(Some(*ip)),
            Target::Uri(url) => resolver.resolve_uri(Some(url)),
        };

        if deny.contains(&found.classification()) {
            denied.push(found.to_string());
        }
        print_result(idx, target, &found);
    }

    if !denied.is_empty() {
        anyhow::bail!("denied target(s): {}", denied.join(", "));
    }
    Ok(())
}

fn print_chains(resolver: &TargetResolver) {
    let describe = |chain: Vec<&'static str>| {
        if chain.is_empty() {
            "none, everything is INTERNET".to_string()
        } else {
            chain.join(" → ")
        }
    };

    print::set_key_width(13);
    print::aligned_line("URL chain", describe(resolver.uri_chain()));
    print::aligned_line("Address chain", describe(resolver.address_chain()));
    print::fat_separator();
}

fn print_result(idx: usize, target: &Target, found: &NetworkTarget) {
    let name = found
        .address()
        .map(ToString::to_string)
        .unwrap_or_else(|| target.to_string());
    print::tree_head(idx, &name);
    print::as_tree_one_level(vec![
        ("kind".to_string(), target.kind().color(colors::TEXT_DEFAULT)),
        ("zone".to_string(), colorize(found.classification())),
    ]);
}

fn colorize(classification: TargetClassification) -> ColoredString {
    let text = classification.as_str();
    match classification {
        TargetClassification::Intranet => text.green().bold(),
        TargetClassification::Internet => text.yellow().bold(),
        TargetClassification::Illegal => text.red().bold(),
        TargetClassification::Unknown => text.dimmed(),
    }
}
