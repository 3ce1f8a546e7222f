use std::{fs, io, path::Path};

use lootforge_loot::LootTable;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to write a loot table: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to serialize a loot table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write every table, in catalog order, into `output_dir` as
/// pretty-printed JSON. The directory is created when missing; the
/// first failure aborts the whole run.
pub fn write_tables(tables: &[LootTable], output_dir: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(output_dir)?;
    for table in tables {
        let json = serde_json::to_string_pretty(table)?;
        let path = output_dir.join(table.file_name());
        fs::write(&path, json)?;
        log::info!("Wrote {}", path.display());
    }
    Ok(())
}
