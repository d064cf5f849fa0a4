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

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Main CLI structure for parsing command-line arguments and options.
#[derive(Debug, Parser)]
#[clap(version, about, author)]
pub struct PortmetricsCli {
    /// Maximum level of emitted log records.
    #[arg(long, global = true, env = "PORTMETRICS_LOG_LEVEL", default_value = "info")]
    pub log_level: LevelFilter,
    #[clap(subcommand)]
    pub command: Commands,
}

/// Available top-level commands for the portmetrics CLI.
#[derive(Parser, Debug)]
pub enum Commands {
    Report(ReportOpt),
    Portvals(PortvalsOpt),
    Rebalance(RebalanceOpt),
}

/// Metrics configuration shared by the commands producing a report.
#[derive(Parser, Debug, Clone)]
pub struct MetricsArgs {
    /// TOML file holding the metrics configuration.
    #[arg(long, env = "PORTMETRICS_CONFIG")]
    pub config: Option<PathBuf>,
    /// Sampling frequency of the price rows (day, week, month, quarter, half-year, year).
    #[arg(long)]
    pub frequency: Option<String>,
    /// Lower-tail probability of the VaR and CVaR statistics.
    #[arg(long)]
    pub delta: Option<f64>,
}

/// Options of the performance report command.
#[derive(Parser, Debug, Clone)]
#[command(about = "Performance report over the summed value of a price table", long_about = None)]
pub struct ReportOpt {
    /// CSV file with a `date` column followed by one price column per asset.
    #[arg(long)]
    pub prices: PathBuf,
    #[clap(flatten)]
    pub metrics: MetricsArgs,
    /// Summarize the rolling statistics instead of the point report.
    #[arg(long)]
    pub rolling: bool,
    /// Trailing window of the rolling statistics, in years.
    #[arg(long, requires = "rolling")]
    pub lookback: Option<f64>,
}

/// Options of the roll-forward valuation command.
#[derive(Parser, Debug, Clone)]
#[command(about = "Roll a price table forward under a weight schedule", long_about = None)]
pub struct PortvalsOpt {
    /// CSV file with a `date` column followed by one price column per asset.
    #[arg(long)]
    pub prices: PathBuf,
    /// CSV file with a `date` column followed by one weight column per asset.
    #[arg(long)]
    pub weights: PathBuf,
    /// Number of rows spanned by each aggregated return.
    #[arg(long, default_value_t = 1)]
    pub periods: usize,
    /// Aggregate logarithmic instead of simple returns.
    #[arg(long)]
    pub log: bool,
    /// Yearly rate of a synthetic `CASH` asset appended to the prices.
    #[arg(long)]
    pub cash_rate: Option<f64>,
    /// Print the performance report over the total portfolio value.
    #[arg(long)]
    pub report: bool,
    #[clap(flatten)]
    pub metrics: MetricsArgs,
}

/// Options of the rebalancing-date selection command.
#[derive(Parser, Debug, Clone)]
#[command(about = "Select the last trading date of each calendar period", long_about = None)]
pub struct RebalanceOpt {
    /// CSV file with a `date` column followed by one price column per asset.
    #[arg(long)]
    pub prices: PathBuf,
    /// Calendar period between rebalances (month, quarter, halfyear, year).
    #[arg(long, default_value = "month")]
    pub period: String,
    /// Print the price rows on each rebalancing date.
    #[arg(long)]
    pub with_prices: bool,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_parse_report() {
        let cli = PortmetricsCli::parse_from([
            "portmetrics",
            "report",
            "--prices",
            "prices.csv",
            "--frequency",
            "month",
            "--rolling",
            "--lookback",
            "2",
        ]);

        assert_eq!(cli.log_level, LevelFilter::Info);
        match cli.command {
            Commands::Report(opt) => {
                assert_eq!(opt.prices, PathBuf::from("prices.csv"));
                assert_eq!(opt.metrics.frequency.as_deref(), Some("month"));
                assert!(opt.rolling);
                assert_eq!(opt.lookback, Some(2.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[rstest]
    fn test_parse_portvals_defaults() {
        let cli = PortmetricsCli::parse_from([
            "portmetrics",
            "--log-level",
            "debug",
            "portvals",
            "--prices",
            "p.csv",
            "--weights",
            "w.csv",
        ]);

        assert_eq!(cli.log_level, LevelFilter::Debug);
        match cli.command {
            Commands::Portvals(opt) => {
                assert_eq!(opt.periods, 1);
                assert!(!opt.log);
                assert!(!opt.report);
                assert_eq!(opt.cash_rate, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[rstest]
    fn test_lookback_requires_rolling() {
        let result = PortmetricsCli::try_parse_from([
            "portmetrics",
            "report",
            "--prices",
            "p.csv",
            "--lookback",
            "2",
        ]);
        assert!(result.is_err());
    }
}
