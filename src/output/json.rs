use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::error::BlockfitError;
use crate::packing::{Orientation, PlacedBlock};
use crate::pipeline::PackRun;

#[derive(Serialize)]
struct JsonOutput {
    meta: Meta,
    runs: Vec<JsonRun>,
}

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonRun {
    container: Size,
    placed: Vec<JsonBlock>,
    unplaced: Vec<usize>,
    cavities: u64,
    block_area: u64,
    fullness: f64,
}

#[derive(Serialize)]
struct Size {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct JsonBlock {
    id: usize,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    rotated: bool,
}

/// Render the JSON report for one or more runs
pub fn report_json(runs: &[PackRun]) -> Result<String> {
    let output = JsonOutput {
        meta: Meta {
            app: "blockfit",
            version: env!("CARGO_PKG_VERSION"),
        },
        runs: runs.iter().map(run_to_json).collect(),
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

/// Write the JSON report to a file
pub fn write_json(runs: &[PackRun], path: &Path) -> Result<()> {
    let content = report_json(runs)?;

    fs::write(path, content).map_err(|e| BlockfitError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

fn run_to_json(run: &PackRun) -> JsonRun {
    JsonRun {
        container: Size {
            w: run.result.container.width(),
            h: run.result.container.height(),
        },
        placed: run.result.placed.iter().map(block_to_json).collect(),
        unplaced: run.unplaced.clone(),
        cavities: run.occupancy.cavities,
        block_area: run.occupancy.block_area,
        fullness: run.occupancy.fullness,
    }
}

fn block_to_json(block: &PlacedBlock) -> JsonBlock {
    JsonBlock {
        id: block.id,
        x: block.x,
        y: block.y,
        w: block.width,
        h: block.height,
        rotated: block.orientation == Orientation::Rotated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::{Block, Container};
    use crate::pipeline::run;

    #[test]
    fn test_report_json_shape() {
        let mut blocks = vec![Block::new(0, 3, 10), Block::new(1, 20, 20)];
        let run = run(Container::new(10, 4).unwrap(), &mut blocks).unwrap();

        let json = report_json(&[run]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["meta"]["app"], "blockfit");
        let first = &value["runs"][0];
        assert_eq!(first["container"]["w"], 10);
        assert_eq!(first["container"]["h"], 4);
        assert_eq!(first["unplaced"][0], 1);
        assert_eq!(first["placed"][0]["w"], 10);
        assert_eq!(first["placed"][0]["h"], 3);
        assert_eq!(first["placed"][0]["rotated"], true);
        assert_eq!(first["blockArea"], 30);
        assert_eq!(first["cavities"], 10);
        assert_eq!(first["fullness"], 0.75);
    }
}
