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

//! Errors associated with time series and table integrity.

use chrono::NaiveDate;

use crate::AssetId;

/// Integrity violations detected when building a [`crate::TimeSeries`] or [`crate::AssetTable`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// The index and values have different lengths.
    #[error("Length mismatch: index has {index} entries, values have {values}")]
    LengthMismatch {
        /// Number of index entries.
        index: usize,
        /// Number of values.
        values: usize,
    },
    /// The index is not strictly increasing at the given date.
    #[error("Index not strictly increasing at {0}")]
    NonIncreasingIndex(NaiveDate),
    /// A price or value is not a positive finite number.
    #[error("Non-positive value {value} at {date}")]
    NonPositiveValue {
        /// Date of the offending observation.
        date: NaiveDate,
        /// The offending value.
        value: f64,
    },
    /// A column was added twice to the same table.
    #[error("Duplicate asset column '{0}'")]
    DuplicateAsset(AssetId),
    /// A row was requested for a date the table does not hold.
    #[error("No row for {0}")]
    MissingRow(NaiveDate),
    /// A column was requested that the table does not hold.
    #[error("Unknown asset column '{0}'")]
    UnknownAsset(AssetId),
}
