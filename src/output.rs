// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use crate::utils::program_dir;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write `data` as 2-space indented JSON to `filename` next to the executable.
pub fn save_json<T: Serialize + ?Sized>(data: &T, filename: &str) -> Result<PathBuf> {
    let dir = program_dir()?;
    save_json_in(&dir, data, filename)
}

/// Write `data` to `dir/filename`, replacing any existing file.
pub fn save_json_in<T: Serialize + ?Sized>(dir: &Path, data: &T, filename: &str) -> Result<PathBuf> {
    let filepath = dir.join(filename);
    let file = File::create(&filepath)
        .with_context(|| format!("Failed to create {}", filepath.display()))?;
    let mut writer = BufWriter::new(file);

    // serde_json's pretty printer indents with two spaces
    serde_json::to_writer_pretty(&mut writer, data)
        .with_context(|| format!("Failed to serialize {}", filename))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", filepath.display()))?;

    println!("Data saved to {}", filepath.display());
    Ok(filepath)
}
