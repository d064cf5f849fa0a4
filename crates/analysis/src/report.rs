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

//! Performance reports.

use std::fmt::{self, Display};

use portmetrics_core::TimeSeries;
use serde::Serialize;

/// Every point statistic of a [`crate::Metrics`] engine, in report order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceReport {
    pub annualized_return: f64,
    pub annualized_volatility: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    pub max_drawdown: f64,
    /// In calendar days.
    pub max_drawdown_duration: i64,
    pub sharpe_ratio: f64,
    pub sortino_ratio: f64,
    pub calmar_ratio: f64,
    pub value_at_risk: f64,
    pub var_ratio: f64,
    pub conditional_value_at_risk: f64,
    pub cvar_ratio: f64,
    pub hit_ratio: f64,
    pub gain_to_pain_ratio: f64,
}

/// Formats `value` with two decimals, writing NaN as `nan`.
fn fixed(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:.2}")
    }
}

/// Formats `value` as a percentage with two decimals, writing NaN as `nan%`.
fn percent(value: f64) -> String {
    format!("{}%", fixed(value * 100.0))
}

impl PerformanceReport {
    /// Returns the report lines in their fixed order.
    ///
    /// Percentages and ratios carry two decimals, durations whole days. Undefined values
    /// render as `nan`.
    #[must_use]
    pub fn formatted(&self) -> Vec<String> {
        vec![
            format!("Annualized Return: {}", percent(self.annualized_return)),
            format!("Annualized Volatility: {}", percent(self.annualized_volatility)),
            format!("Skewness: {}", fixed(self.skewness)),
            format!("Kurtosis: {}", fixed(self.kurtosis)),
            format!("Max Drawdown: {}", percent(self.max_drawdown)),
            format!("Max Drawdown Duration: {} days", self.max_drawdown_duration),
            format!("Annualized Sharp Ratio: {}", fixed(self.sharpe_ratio)),
            format!("Annualized Sortino Ratio: {}", fixed(self.sortino_ratio)),
            format!("Annualized Calmar Ratio: {}", fixed(self.calmar_ratio)),
            format!("Annualized VaR: {}", fixed(self.value_at_risk)),
            format!("Annualized VaR Ratio: {}", fixed(self.var_ratio)),
            format!("Annualized CVaR: {}", fixed(self.conditional_value_at_risk)),
            format!("Annualized CVaR Ratio: {}", fixed(self.cvar_ratio)),
            format!("Annualized hit Ratio: {}", fixed(self.hit_ratio)),
            format!("Annualized GtP Ratio: {}", fixed(self.gain_to_pain_ratio)),
        ]
    }
}

impl Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted().join("\n"))
    }
}

/// Every statistic of a [`crate::Metrics`] engine in rolling mode, one series each.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollingReport {
    pub drawdown: TimeSeries,
    pub drawdown_duration: TimeSeries<i64>,
    pub sharpe_ratio: TimeSeries,
    pub sortino_ratio: TimeSeries,
    pub calmar_ratio: TimeSeries,
    pub value_at_risk: TimeSeries,
    pub var_ratio: TimeSeries,
    pub conditional_value_at_risk: TimeSeries,
    pub cvar_ratio: TimeSeries,
    pub hit_ratio: TimeSeries,
    pub gain_to_pain_ratio: TimeSeries,
}

impl RollingReport {
    /// Returns `(name, series)` pairs for every ratio series, in report order.
    #[must_use]
    pub fn ratios(&self) -> Vec<(&'static str, &TimeSeries)> {
        vec![
            ("Sharp Ratio", &self.sharpe_ratio),
            ("Sortino Ratio", &self.sortino_ratio),
            ("Calmar Ratio", &self.calmar_ratio),
            ("VaR", &self.value_at_risk),
            ("VaR Ratio", &self.var_ratio),
            ("CVaR", &self.conditional_value_at_risk),
            ("CVaR Ratio", &self.cvar_ratio),
            ("hit Ratio", &self.hit_ratio),
            ("GtP Ratio", &self.gain_to_pain_ratio),
        ]
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn report() -> PerformanceReport {
        PerformanceReport {
            annualized_return: 0.123_46,
            annualized_volatility: 0.2,
            skewness: -0.456,
            kurtosis: 3.0,
            max_drawdown: -0.1,
            max_drawdown_duration: 42,
            sharpe_ratio: 1.234,
            sortino_ratio: -0.5,
            calmar_ratio: 1.0,
            value_at_risk: -0.031,
            var_ratio: 0.1,
            conditional_value_at_risk: -0.0451,
            cvar_ratio: 0.05,
            hit_ratio: 0.5,
            gain_to_pain_ratio: f64::NAN,
        }
    }

    #[rstest]
    fn test_formatted_order_and_precision(report: PerformanceReport) {
        let lines = report.formatted();
        assert_eq!(
            lines,
            vec![
                "Annualized Return: 12.35%",
                "Annualized Volatility: 20.00%",
                "Skewness: -0.46",
                "Kurtosis: 3.00",
                "Max Drawdown: -10.00%",
                "Max Drawdown Duration: 42 days",
                "Annualized Sharp Ratio: 1.23",
                "Annualized Sortino Ratio: -0.50",
                "Annualized Calmar Ratio: 1.00",
                "Annualized VaR: -0.03",
                "Annualized VaR Ratio: 0.10",
                "Annualized CVaR: -0.05",
                "Annualized CVaR Ratio: 0.05",
                "Annualized hit Ratio: 0.50",
                "Annualized GtP Ratio: nan",
            ]
        );
    }

    #[rstest]
    fn test_undefined_values_render_lowercase(mut report: PerformanceReport) {
        report.annualized_return = f64::NAN;
        report.kurtosis = f64::NAN;
        report.calmar_ratio = f64::INFINITY;

        let lines = report.formatted();

        assert_eq!(lines[0], "Annualized Return: nan%");
        assert_eq!(lines[3], "Kurtosis: nan");
        assert_eq!(lines[8], "Annualized Calmar Ratio: inf");
    }

    #[rstest]
    fn test_display_joins_lines(report: PerformanceReport) {
        let text = report.to_string();
        assert_eq!(text.lines().count(), 15);
        assert!(text.starts_with("Annualized Return: 12.35%\n"));
    }
}
