// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! CSV loading of date-indexed asset tables.
//!
//! Files hold a header row `date,<asset>...` followed by one row per ISO-8601 date.

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use indexmap::IndexMap;
use portmetrics_core::{AssetId, AssetTable};
use ustr::Ustr;

/// Reads an asset table from the CSV file at `path`.
///
/// Rows holding an empty cell are dropped unless `fill` supplies a value for them.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened, holds no asset column or repeats one.
/// - A date or value cannot be parsed.
/// - The dates are not strictly increasing.
pub fn read_table(path: &Path, fill: Option<f64>) -> anyhow::Result<AssetTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let headers = reader.headers()?.clone();
    let assets: Vec<AssetId> = headers.iter().skip(1).map(Ustr::from).collect();
    if assets.is_empty() {
        anyhow::bail!("{} holds no asset columns", path.display());
    }

    let mut columns: IndexMap<AssetId, Vec<f64>> = IndexMap::with_capacity(assets.len());
    for asset in &assets {
        if columns.insert(*asset, Vec::new()).is_some() {
            anyhow::bail!("{} repeats asset column '{asset}'", path.display());
        }
    }

    let mut index = Vec::new();
    let mut dropped = 0;

    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        let line = record.position().map_or(0, csv::Position::line);
        let Some(values) = parse_values(&record, fill)
            .with_context(|| format!("Invalid value at {}:{line}", path.display()))?
        else {
            dropped += 1;
            continue;
        };

        let date = record.get(0).unwrap_or_default();
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{date}' at {}:{line}", path.display()))?;

        index.push(date);
        for (column, value) in columns.values_mut().zip(values) {
            column.push(value);
        }
    }

    if dropped > 0 {
        log::debug!("Dropped {dropped} rows with missing values from {}", path.display());
    }

    let table = AssetTable::new(index, columns)
        .with_context(|| format!("Invalid table in {}", path.display()))?;
    log::debug!(
        "Loaded {} rows of {} assets from {}",
        table.len(),
        table.width(),
        path.display()
    );
    Ok(table)
}

fn parse_values(record: &StringRecord, fill: Option<f64>) -> anyhow::Result<Option<Vec<f64>>> {
    let mut values = Vec::with_capacity(record.len().saturating_sub(1));
    for field in record.iter().skip(1) {
        if field.is_empty() {
            match fill {
                Some(value) => values.push(value),
                None => return Ok(None),
            }
        } else {
            values.push(field.parse::<f64>()?);
        }
    }
    Ok(Some(values))
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
