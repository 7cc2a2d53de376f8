//! Subcommand bodies. Each returns the text to print on success.

use std::fs;
use std::path::Path;

use shapes::geom::Point;
use shapes::hit::hit_test;
use shapes::scene::{Viewport, build_scene};
use shapes::{ShapeCollection, ShapeDraft, parse_lenient, parse_strict, save_path, serialize};
use tracing::info;

use crate::CliError;

/// List every shape bottom-most first, tagged with its storage index.
pub fn show(path: &Path, json: bool) -> Result<String, CliError> {
    let shapes = load(path)?;
    if json {
        let mut out = serde_json::to_string_pretty(&shapes.render_order())?;
        out.push('\n');
        return Ok(out);
    }
    if shapes.is_empty() {
        return Ok("no shapes\n".to_owned());
    }
    Ok(shapes
        .render_indices()
        .into_iter()
        .filter_map(|index| shapes.get(index).map(|record| format!("{index:>4}  {record}\n")))
        .collect())
}

pub fn check(path: &Path) -> Result<String, CliError> {
    let text = read(path)?;
    let shapes = parse_strict(&text).map_err(|source| CliError::Parse { path: path.to_path_buf(), source })?;
    Ok(format!("{}: {} shapes ok\n", path.display(), shapes.len()))
}

/// Print the canonical form, or save it when `output` names a file.
pub fn fmt(path: &Path, output: Option<&str>) -> Result<String, CliError> {
    let shapes = load(path)?;
    if shapes.is_empty() {
        return Err(CliError::EmptySave);
    }
    match output {
        None => Ok(serialize(&shapes)),
        Some(name) => {
            let target = save_path(name);
            store(&target, &shapes)?;
            Ok(format!("wrote {} shapes to {}\n", shapes.len(), target.display()))
        }
    }
}

/// Validate a draft and append it. A missing file starts an empty drawing.
pub fn add(path: &Path, draft: &ShapeDraft) -> Result<String, CliError> {
    let record = draft.validate()?;
    let mut shapes = if path.exists() { load(path)? } else { ShapeCollection::new() };
    let line = record.to_string();
    shapes.add_shape(record);
    store(path, &shapes)?;
    Ok(format!("added #{}: {line}\n", shapes.len() - 1))
}

pub fn move_shape(path: &Path, index: usize, x: i64, y: i64) -> Result<String, CliError> {
    let mut shapes = load(path)?;
    if !shapes.move_shape(index, x, y) {
        return Err(CliError::NoSuchShape { index, len: shapes.len() });
    }
    store(path, &shapes)?;
    let line = shapes.get(index).map(ToString::to_string).unwrap_or_default();
    Ok(format!("moved #{index}: {line}\n"))
}

pub fn scene(path: &Path, viewport: Viewport) -> Result<String, CliError> {
    let shapes = load(path)?;
    let meshes = build_scene(&shapes, viewport);
    let mut out = serde_json::to_string_pretty(&meshes)?;
    out.push('\n');
    Ok(out)
}

pub fn hit(path: &Path, x: f64, y: f64) -> Result<String, CliError> {
    let shapes = load(path)?;
    let found = hit_test(&shapes, Point::new(x, y)).and_then(|index| shapes.get(index).map(|record| (index, record)));
    Ok(match found {
        Some((index, record)) => format!("#{index}: {record}\n"),
        None => format!("no shape at ({x}, {y})\n"),
    })
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}

fn load(path: &Path) -> Result<ShapeCollection, CliError> {
    let shapes = parse_lenient(&read(path)?);
    info!(path = %path.display(), count = shapes.len(), "loaded drawing");
    Ok(shapes)
}

fn store(path: &Path, shapes: &ShapeCollection) -> Result<(), CliError> {
    if shapes.is_empty() {
        return Err(CliError::EmptySave);
    }
    fs::write(path, serialize(shapes)).map_err(|source| CliError::Write { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), count = shapes.len(), "saved drawing");
    Ok(())
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
