//! Assertions over `--format json` command results.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the number of rows in `content.<collection>`.
pub fn assert_row_count(json: &Value, collection: &str, expected: usize) -> Result<()> {
    let rows = json["content"][collection]
        .as_array()
        .with_context(|| format!("Expected 'content.{}' array in JSON", collection))?;

    if rows.len() != expected {
        anyhow::bail!("Expected {} {}, got {}", expected, collection, rows.len());
    }

    Ok(())
}

/// Assert the row ids of `content.<collection>`, in order.
pub fn assert_row_ids(json: &Value, collection: &str, expected: &[i64]) -> Result<()> {
    let rows = json["content"][collection]
        .as_array()
        .with_context(|| format!("Expected 'content.{}' array in JSON", collection))?;

    let ids: Vec<i64> = rows.iter().filter_map(|row| row["id"].as_i64()).collect();
    if ids != expected {
        anyhow::bail!("Expected {} ids {:?}, got {:?}", collection, expected, ids);
    }

    Ok(())
}

/// Assert the status badge label.
pub fn assert_badge(json: &Value, expected: &str) -> Result<()> {
    let label = json["badge"]["label"]
        .as_str()
        .context("Expected 'badge.label' in JSON")?;

    if label != expected {
        anyhow::bail!("Expected badge '{}', got '{}'", expected, label);
    }

    Ok(())
}

/// Assert which empty state a list reported (`null` when rows exist).
pub fn assert_empty_state(json: &Value, expected: Option<&str>) -> Result<()> {
    let empty = json["content"]["meta"]["empty"].as_str();
    if empty != expected {
        anyhow::bail!("Expected empty state {:?}, got {:?}", expected, empty);
    }
    Ok(())
}
