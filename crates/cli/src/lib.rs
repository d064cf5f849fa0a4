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

//! Command-line interface for the portfolio metrics engine.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]

mod commands;
pub mod loader;
pub mod opt;

use crate::{
    commands::{portvals::run_portvals, rebalance::run_rebalance, report::run_report},
    opt::{Commands, PortmetricsCli},
};

/// Runs the command selected by `opt`.
///
/// # Errors
///
/// Returns an error if an input file cannot be read or a computation rejects its input.
pub fn run(opt: PortmetricsCli) -> anyhow::Result<()> {
    match opt.command {
        Commands::Report(report_opt) => run_report(&report_opt)?,
        Commands::Portvals(portvals_opt) => run_portvals(&portvals_opt)?,
        Commands::Rebalance(rebalance_opt) => run_rebalance(&rebalance_opt)?,
    }
    Ok(())
}
