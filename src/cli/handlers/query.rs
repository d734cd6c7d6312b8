use std::io::{self, Read};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::FakeGitHubEndpoint;

pub fn handle_query(
    endpoint: &mut FakeGitHubEndpoint,
    queries: Vec<String>,
    variables: Option<String>,
    snapshot: bool,
) -> Result<()> {
    let vars: Value = match variables {
        Some(v) => serde_json::from_str(&v).context("Failed to parse --variables as JSON")?,
        None => Value::Object(Default::default()),
    };

    for (i, query) in queries.into_iter().enumerate() {
        let query = resolve_query(query)?;
        let response = endpoint
            .execute(&query, vars.clone())
            .with_context(|| format!("Operation {} failed", i + 1))?;
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    if snapshot {
        println!("{}", serde_json::to_string_pretty(&endpoint.snapshot()?)?);
    }
    Ok(())
}

fn resolve_query(query: String) -> Result<String> {
    if query == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    Ok(query)
}
