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

//! Portfolio performance and risk metrics.
//!
//! The `portmetrics-analysis` crate computes return-based statistics over a portfolio value
//! series (or a price table summed into one) sampled at a fixed frequency:
//!
//! - Periodization of sampling frequencies into annualization scales and lookback windows.
//! - Simple return and cumulative return construction.
//! - Point statistics: annualized return and volatility, skewness, kurtosis, VaR and CVaR,
//!   drawdown, drawdown duration and total return.
//! - Ratio statistics, each available over the whole series or over a trailing window:
//!   Sharpe, Sortino, Calmar, VaR ratio, CVaR ratio, hit ratio and gain-to-pain ratio.
//! - A fixed-order textual performance report and a rolling report.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod drawdown;
pub mod error;
pub mod metrics;
pub mod periodization;
pub mod report;
pub mod returns;
pub mod statistic;
pub mod statistics;

mod window;

pub use crate::{
    config::MetricsConfig,
    error::AnalysisError,
    metrics::{Metrics, MetricsInput},
    periodization::Frequency,
    report::{PerformanceReport, RollingReport},
};
