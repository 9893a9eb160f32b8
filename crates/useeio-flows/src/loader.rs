//! Flow loader
//!
//! Reads `flows.csv` from a model folder and places every flow in the slot
//! named by its index column. The first row is always a header and is never
//! looked at. Nothing is cached: every call reads the file again.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{FlowError, Result};
use crate::reader::{read_rows, RawRow};
use crate::types::{Flow, FlowSet};

/// Name of the flow file inside a model folder
pub const FLOWS_FILE_NAME: &str = "flows.csv";

/// Column order: index, id, name, category, subCategory, unit, uuid
const FLOW_COLUMNS: usize = 7;

/// How the loader treats the index column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexPolicy {
    /// Later rows overwrite earlier rows with the same index and skipped
    /// indices leave empty slots.
    #[default]
    Lenient,
    /// Indices must be a permutation of `0..N` for N data rows.
    Strict,
}

/// Folder holding the data files of `model`
pub fn model_folder(data_dir: &Path, model: &str) -> PathBuf {
    data_dir.join(model)
}

/// Loads the flows of a model folder with the lenient index policy
pub fn load_flows(folder: &Path) -> Result<FlowSet> {
    load_flows_with(folder, IndexPolicy::default())
}

/// Loads the flows of a model folder.
///
/// The returned set has one slot per data row. An index outside of that
/// range is reported as malformed data under either policy.
pub fn load_flows_with(folder: &Path, policy: IndexPolicy) -> Result<FlowSet> {
    let path = folder.join(FLOWS_FILE_NAME);
    let rows = read_rows(&path)?;

    let row_count = rows.len().saturating_sub(1);
    let mut slots: Vec<Option<Flow>> = vec![None; row_count];

    for row in rows.iter().skip(1) {
        let flow = parse_flow(&path, row)?;
        if flow.index >= row_count {
            return Err(FlowError::malformed(
                &path,
                row.line,
                format!("index {} out of range for {} rows", flow.index, row_count),
            ));
        }

        let slot = &mut slots[flow.index];
        if let Some(previous) = slot.as_ref() {
            if policy == IndexPolicy::Strict {
                return Err(FlowError::malformed(
                    &path,
                    row.line,
                    format!("duplicate index {}", flow.index),
                ));
            }
            warn!(
                "Index {} in {} used twice, replacing flow {} with {}",
                flow.index,
                path.display(),
                previous.id,
                flow.id
            );
        }
        *slot = Some(flow);
    }

    // Under the strict policy every index is in range and unique, so no slot
    // can be left empty.
    let gaps = slots.iter().filter(|slot| slot.is_none()).count();
    if gaps > 0 {
        warn!("{} has {} empty flow slots", path.display(), gaps);
    }

    debug!("Loaded {} flows from {}", row_count, path.display());
    Ok(FlowSet::from_slots(slots))
}

fn parse_flow(path: &Path, row: &RawRow) -> Result<Flow> {
    let fields = &row.fields;
    if fields.len() < FLOW_COLUMNS {
        return Err(FlowError::malformed(
            path,
            row.line,
            format!(
                "each row should have {FLOW_COLUMNS} columns, found {}",
                fields.len()
            ),
        ));
    }

    let index = fields[0].parse::<usize>().map_err(|e| {
        FlowError::malformed(
            path,
            row.line,
            format!("invalid index `{}`: {e}", fields[0]),
        )
    })?;

    Ok(Flow {
        id: fields[1].clone(),
        index,
        name: fields[2].clone(),
        category: fields[3].clone(),
        sub_category: fields[4].clone(),
        unit: fields[5].clone(),
        uuid: fields[6].clone(),
    })
}
