//! Subcommand bodies. Each returns a JSON report plus an accept/reject flag;
//! `main` decides where the report goes.

use std::io::Read;

use anyhow::{Context, Result};
use regions::collection::{validate_collection_values, CollectionCfg};
use regions::descriptor::Descriptor;
use regions::geom2::point;
use regions::identifier::Identifier;
use regions::validate_polygon;
use serde_json::{json, Value};

/// Report produced by one subcommand.
pub struct Outcome {
    pub accepted: bool,
    pub report: Value,
}

impl Outcome {
    fn accept(report: Value) -> Self {
        Self {
            accepted: true,
            report,
        }
    }
    fn reject(report: Value) -> Self {
        Self {
            accepted: false,
            report,
        }
    }
}

/// Read JSON from a path, or stdin for `-`.
pub fn read_input(input: &str) -> Result<Value> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {input}"))?
    };
    serde_json::from_str(&text).with_context(|| format!("parsing JSON from {input}"))
}

pub fn polygon(input: &str) -> Result<Outcome> {
    let value = read_input(input)?;
    tracing::info!(input, "polygon");
    polygon_outcome(value)
}

pub fn polygon_outcome(value: Value) -> Result<Outcome> {
    let coords: Vec<(f64, f64)> = serde_json::from_value(value)
        .context("polygon input must be a JSON array of [x, y] pairs")?;
    let vertices: Vec<_> = coords.iter().map(|&(x, y)| point(x, y)).collect();
    Ok(match validate_polygon(&vertices) {
        Ok(poly) => Outcome::accept(json!({
            "valid": true,
            "vertices": poly.vertices().len(),
            "edges": poly.num_edges(),
        })),
        Err(err) => {
            tracing::warn!(code = err.code(), %err, "polygon rejected");
            Outcome::reject(json!({
                "valid": false,
                "error": { "code": err.code(), "message": err.to_string() },
            }))
        }
    })
}

pub fn collection(input: &str, accumulate: bool) -> Result<Outcome> {
    let value = read_input(input)?;
    tracing::info!(input, accumulate, "collection");
    collection_outcome(value, accumulate)
}

pub fn collection_outcome(value: Value, accumulate: bool) -> Result<Outcome> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("descriptors") {
            Some(Value::Array(items)) => items,
            _ => anyhow::bail!("expected a \"descriptors\" array in the input object"),
        },
        _ => anyhow::bail!("collection input must be an array or an object with \"descriptors\""),
    };
    let cfg = if accumulate {
        CollectionCfg::accumulate()
    } else {
        CollectionCfg::default()
    };
    Ok(match validate_collection_values(&items, cfg) {
        Ok(collection) => {
            let descriptors: Vec<Value> = collection
                .descriptors()
                .iter()
                .enumerate()
                .map(|(index, d)| summarize(index, d))
                .collect();
            Outcome::accept(json!({ "valid": true, "descriptors": descriptors }))
        }
        Err(err) => {
            tracing::warn!(code = err.code(), %err, "collection rejected");
            let failures: Vec<Value> = err
                .failures()
                .iter()
                .map(|f| {
                    json!({
                        "index": f.index,
                        "code": f.error.code(),
                        "message": f.error.to_string(),
                    })
                })
                .collect();
            Outcome::reject(json!({
                "valid": false,
                "error": {
                    "code": err.code(),
                    "message": err.to_string(),
                    "failures": failures,
                },
            }))
        }
    })
}

fn summarize(index: usize, d: &Descriptor) -> Value {
    let mut v = json!({ "index": index, "kind": d.kind(), "text": d.text() });
    match d {
        Descriptor::Point { at, .. } => v["coordinates"] = json!([at.x, at.y]),
        Descriptor::Polygon { polygon, .. } => v["vertices"] = json!(polygon.vertices().len()),
        Descriptor::Text { .. } => {}
    }
    v
}

pub fn identifier(raw: &str) -> Result<Outcome> {
    // Bare words are taken as strings so `--value abc` works without quoting.
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok(identifier_outcome(&value))
}

pub fn identifier_outcome(value: &Value) -> Outcome {
    match Identifier::from_value(value, "identifier must be either an integer or a string") {
        Ok(id) => Outcome::accept(json!({ "valid": true, "identifier": id })),
        Err(err) => Outcome::reject(json!({
            "valid": false,
            "error": { "code": err.code(), "message": err.to_string() },
        })),
    }
}

pub fn report() -> Outcome {
    Outcome::accept(json!({
        "version": regions::VERSION,
        "code_rev": crate::provenance::current_git_rev(),
    }))
}
