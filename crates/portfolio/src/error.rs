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

use chrono::NaiveDate;
use portmetrics_core::{AssetId, SeriesError};

/// Errors raised by portfolio valuation and its glue operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    #[error("Weight schedule needs at least 2 rebalancing dates, was {0}")]
    InsufficientSchedule(usize),
    #[error("No price row for rebalancing date {0}")]
    MissingPriceRow(NaiveDate),
    #[error("Weighted asset '{0}' has no price column")]
    UnknownAsset(AssetId),
    #[error("Return periods must be at least 1")]
    InvalidPeriods,
    #[error("Invalid rebalancing period '{0}': expected one of 'month', 'quarter', 'halfyear', 'year'")]
    InvalidPeriod(String),
    #[error(transparent)]
    Series(#[from] SeriesError),
}
