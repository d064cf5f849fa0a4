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

use portmetrics_analysis::Metrics;
use portmetrics_core::{TimeSeries, ValuationTable, datetime::TRADING_DAYS_IN_YEAR};
use portmetrics_portfolio::{
    ReturnMode, WeightSchedule, add_cash, calculate_portvals, cumulative_returns, daily_returns,
};

use crate::{commands::resolve_config, loader::read_table, opt::PortvalsOpt};

pub fn run_portvals(opt: &PortvalsOpt) -> anyhow::Result<()> {
    let mut prices = read_table(&opt.prices, None)?;
    if let Some(rate) = opt.cash_rate {
        prices = add_cash(&prices, TRADING_DAYS_IN_YEAR, rate)?;
    }
    let schedule = WeightSchedule::from_table(&read_table(&opt.weights, Some(0.0))?)?;

    let valuation = calculate_portvals(&prices, &schedule)?;
    let mode = if opt.log {
        ReturnMode::Log
    } else {
        ReturnMode::Simple
    };
    let daily = daily_returns(&valuation, opt.periods, mode)?;
    let cumulative = cumulative_returns(&daily, mode);

    for line in value_rows(&valuation, &daily, &cumulative) {
        println!("{line}");
    }

    if opt.report {
        let config = resolve_config(&opt.metrics)?;
        let metrics = Metrics::with_config(valuation.row_sums(), &config)?;
        println!("{}", metrics.report(None, None));
    }
    Ok(())
}

/// Returns a CSV header and one `date,value,return,cumulative` row per aggregated return.
pub(crate) fn value_rows(
    valuation: &ValuationTable,
    daily: &TimeSeries,
    cumulative: &TimeSeries,
) -> Vec<String> {
    let totals = valuation.row_sums();
    let mut lines = vec!["date,value,return,cumulative".to_string()];
    for ((date, r), c) in daily.iter().zip(cumulative.values()) {
        let value = totals.get(date).unwrap_or(f64::NAN);
        lines.push(format!("{date},{value:.6},{r:.6},{c:.6}"));
    }
    lines
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use portmetrics_core::stubs::table;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_value_rows() {
        let valuation = table(&[("SPY", &[0.5, 0.55]), ("TLT", &[0.5, 0.55])]);
        let daily = daily_returns(&valuation, 1, ReturnMode::Simple).unwrap();
        let cumulative = cumulative_returns(&daily, ReturnMode::Simple);

        let lines = value_rows(&valuation, &daily, &cumulative);

        assert_eq!(
            lines,
            vec![
                "date,value,return,cumulative",
                "2024-01-01,1.000000,0.000000,1.000000",
                "2024-01-02,1.100000,0.100000,1.100000",
            ]
        );
    }
}
