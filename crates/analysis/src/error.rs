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

//! Errors raised when building a metrics engine.

use portmetrics_core::SeriesError;

/// Errors raised by the metrics engine and its configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error(
        "Invalid frequency '{0}': expected one of 'day', 'week', 'month', 'quarter', 'half-year', 'year'"
    )]
    InvalidFrequency(String),
    #[error("Invalid input type: {0}")]
    InvalidInputType(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Series(#[from] SeriesError),
}
