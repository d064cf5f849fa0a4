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

use portmetrics_analysis::{Metrics, RollingReport};

use crate::{commands::resolve_config, loader::read_table, opt::ReportOpt};

pub fn run_report(opt: &ReportOpt) -> anyhow::Result<()> {
    let config = resolve_config(&opt.metrics)?;
    let prices = read_table(&opt.prices, None)?;
    let metrics = Metrics::with_config(prices, &config)?;

    if opt.rolling {
        let report = metrics.rolling_report(None, opt.lookback, None);
        for line in rolling_summary(&report) {
            println!("{line}");
        }
    } else {
        println!("{}", metrics.report(None, None));
    }
    Ok(())
}

/// Returns one line per rolling series holding its latest value.
pub(crate) fn rolling_summary(report: &RollingReport) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some((date, dd)) = report.drawdown.last() {
        lines.push(format!("Drawdown on {date}: {:.2}%", dd * 100.0));
    }
    if let Some((date, duration)) = report.drawdown_duration.last() {
        lines.push(format!("Drawdown Duration on {date}: {duration} days"));
    }
    for (name, series) in report.ratios() {
        if let Some((date, value)) = series.last() {
            lines.push(format!("Rolling {name} on {date}: {value:.2}"));
        }
    }
    lines
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
