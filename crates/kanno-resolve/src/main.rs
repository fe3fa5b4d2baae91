use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

use kanno_core::map::{to_route_policy, to_upstream_limits};
use kanno_model::{AnnotationKeys, Annotations, RoutePolicy, UpstreamLimits};
use kanno_observe::init_logger;

mod args;
use args::Arguments;

/// Everything resolved from one annotation set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Resolved {
    route: RoutePolicy,
    upstream: UpstreamLimits,
}

fn main() -> anyhow::Result<()> {
    // 1) arguments
    let args = Arguments::parse();

    // 2) logger
    init_logger(&args.logger_config())?;

    // 3) inputs
    let source = args.annotations.display();
    let annotations = parse_annotations(&read_input(&args.annotations)?)
        .with_context(|| format!("malformed annotations in {source}"))?;
    let keys = match &args.keys {
        Some(path) => parse_keys(&read_input(path)?)
            .with_context(|| format!("malformed annotation keys in {}", path.display()))?,
        None => AnnotationKeys::default(),
    };
    info!(%source, annotations = annotations.len(), "annotations loaded");
    debug!(?keys, "annotation keys");

    // 4) resolve
    let resolved = resolve(&annotations, &keys);
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

/// Read a whole input file; `-` reads stdin.
fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn parse_annotations(raw: &str) -> serde_json::Result<Annotations> {
    serde_json::from_str(raw)
}

fn parse_keys(raw: &str) -> serde_json::Result<AnnotationKeys> {
    serde_json::from_str(raw)
}

fn resolve(annotations: &Annotations, keys: &AnnotationKeys) -> Resolved {
    Resolved {
        route: to_route_policy(annotations, keys),
        upstream: to_upstream_limits(annotations, keys),
    }
}
