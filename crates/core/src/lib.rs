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

//! Core foundational types and utilities for portfolio analytics.
//!
//! The `portmetrics-core` crate is designed to be lightweight and to supply the building blocks
//! shared by the analysis and portfolio crates, including:
//!
//! - Date-indexed time series with strictly increasing indexes.
//! - Date-indexed asset tables (price and valuation tables).
//! - Descriptive statistics over return samples.
//! - Calendar helpers.
//!
//! # Feature flags
//!
//! - `stubs`: Enables `rstest` fixtures and series constructors to facilitate testing.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod datetime;
pub mod error;
pub mod math;
pub mod series;
pub mod table;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

pub use crate::{
    error::SeriesError,
    series::TimeSeries,
    table::{AssetTable, PriceTable, ValuationTable},
};

/// Asset identifier used for table columns and weight rows.
pub type AssetId = ustr::Ustr;
