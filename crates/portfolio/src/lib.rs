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

//! Weighted portfolio valuation.
//!
//! The `portmetrics-portfolio` crate rolls a price table forward under a schedule of target
//! weights, producing the dollar value held in each asset at every date:
//!
//! - Weight schedules keyed by rebalancing date.
//! - The roll-forward valuation, compounding portfolio value across rebalances.
//! - Aggregation of a valuation table into simple or logarithmic returns.
//! - Rebalancing-date selection by calendar period, and a synthetic cash asset.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod aggregation;
pub mod cash;
pub mod error;
pub mod rebalance;
pub mod schedule;
pub mod valuation;

pub use crate::{
    aggregation::{ReturnMode, cumulative_returns, daily_returns},
    cash::add_cash,
    error::PortfolioError,
    rebalance::{RebalancePeriod, prices_on, rebalance_dates},
    schedule::WeightSchedule,
    valuation::calculate_portvals,
};
