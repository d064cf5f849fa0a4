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

//! The metrics engine: point, rolling and drawdown statistics over a stored return series.
//!
//! Every statistic accepting a `returns` override computes over an owned copy of that series
//! when given, otherwise over the stored returns. Rolling variants return a series of the same
//! length as the effective returns where entries before the window fills, and undefined
//! results, are 0.

use portmetrics_core::{AssetTable, TimeSeries, math};

use crate::{
    config::MetricsConfig,
    drawdown,
    error::AnalysisError,
    periodization::Frequency,
    report::{PerformanceReport, RollingReport},
    returns::{cumulative_returns, portfolio_value, simple_returns},
    statistic::ReturnStatistic,
    statistics::{
        annualized_return::AnnualizedReturn,
        annualized_volatility::AnnualizedVolatility,
        calmar_ratio::CalmarRatio,
        cvar_ratio::CvarRatio,
        gain_to_pain::GainToPain,
        hit_ratio::HitRatio,
        sharpe_ratio::SharpeRatio,
        sortino_ratio::SortinoRatio,
        total_return::TotalReturn,
        value_at_risk::{ConditionalValueAtRisk, ValueAtRisk},
        var_ratio::VarRatio,
    },
    window::{fill_nan, rolling_apply, rolling_min, window_fits},
};

/// The input accepted by [`Metrics`]: a single value series or a table summed row-wise.
#[derive(Debug, Clone)]
pub enum MetricsInput {
    /// A total portfolio value (or single asset price) series.
    Series(TimeSeries),
    /// A per-asset table whose rows are summed into one value series.
    Table(AssetTable),
}

impl From<TimeSeries> for MetricsInput {
    fn from(value: TimeSeries) -> Self {
        Self::Series(value)
    }
}

impl From<AssetTable> for MetricsInput {
    fn from(value: AssetTable) -> Self {
        Self::Table(value)
    }
}

/// Return and risk analytics over a portfolio value series.
///
/// The return series is derived once at construction and never mutated.
#[derive(Debug, Clone)]
pub struct Metrics {
    returns: TimeSeries,
    cum_returns: TimeSeries,
    frequency: Frequency,
    config: MetricsConfig,
}

impl Metrics {
    /// Creates a new [`Metrics`] instance over `input` sampled at `frequency`, with every
    /// other parameter at its default.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidInputType`] if the input is empty, a table has no
    /// asset columns, or any value is not a positive finite number.
    pub fn new(input: impl Into<MetricsInput>, frequency: Frequency) -> Result<Self, AnalysisError> {
        let config = MetricsConfig {
            frequency,
            ..MetricsConfig::default()
        };
        Self::with_config(input, &config)
    }

    /// Creates a new [`Metrics`] instance taking the frequency and default parameters from
    /// `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidInputType`] if the input is empty, a table has no
    /// asset columns, or any value is not a positive finite number.
    pub fn with_config(
        input: impl Into<MetricsInput>,
        config: &MetricsConfig,
    ) -> Result<Self, AnalysisError> {
        let values = match input.into() {
            MetricsInput::Series(series) => series,
            MetricsInput::Table(table) => {
                if table.width() == 0 {
                    return Err(AnalysisError::InvalidInputType(
                        "table has no asset columns".to_string(),
                    ));
                }
                portfolio_value(&table)
            }
        };

        if values.is_empty() {
            return Err(AnalysisError::InvalidInputType(
                "value series is empty".to_string(),
            ));
        }
        values
            .check_positive()
            .map_err(|e| AnalysisError::InvalidInputType(e.to_string()))?;

        let returns = simple_returns(&values);
        let cum_returns = cumulative_returns(&returns);

        log::debug!(
            "Metrics over {} observations at frequency {} (scale {})",
            returns.len(),
            config.frequency,
            config.frequency.annualization_scale()
        );

        Ok(Self {
            returns,
            cum_returns,
            frequency: config.frequency,
            config: config.clone(),
        })
    }

    /// Returns the stored simple return series.
    #[must_use]
    pub fn returns(&self) -> &TimeSeries {
        &self.returns
    }

    /// Returns the stored cumulative return series.
    #[must_use]
    pub fn cum_returns(&self) -> &TimeSeries {
        &self.cum_returns
    }

    /// Returns the sampling frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the annualization scale.
    #[must_use]
    pub fn scale(&self) -> u32 {
        self.frequency.annualization_scale()
    }

    /// Returns the number of trading days per period.
    #[must_use]
    pub fn trading_days_per_period(&self) -> u32 {
        self.frequency.trading_days_per_period()
    }

    /// Returns the config the engine was built with.
    #[must_use]
    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    fn resolve(&self, returns: Option<&TimeSeries>) -> TimeSeries {
        returns.unwrap_or(&self.returns).clone()
    }

    fn point<S: ReturnStatistic<Item = f64>>(&self, statistic: &S, returns: Option<&TimeSeries>) -> f64 {
        let returns = self.resolve(returns);
        statistic
            .calculate_from_returns(returns.values())
            .unwrap_or(f64::NAN)
    }

    fn rolling<S: ReturnStatistic<Item = f64>>(
        &self,
        statistic: &S,
        returns: Option<&TimeSeries>,
        lookback: Option<f64>,
    ) -> TimeSeries {
        let returns = self.resolve(returns);
        let window = self.lookback_periods(lookback);
        let values = rolling_apply(returns.values(), window, |w| {
            statistic.calculate_from_returns(w).unwrap_or(f64::NAN)
        });
        returns.with_values(values)
    }

    fn lookback_periods(&self, lookback: Option<f64>) -> usize {
        self.frequency
            .lookback_periods(lookback.unwrap_or(self.config.lookback))
    }

    fn delta(&self, delta: Option<f64>) -> Option<f64> {
        Some(delta.unwrap_or(self.config.delta))
    }

    /// Returns the annualized return `(Π(1 + r))^(scale / n) - 1`.
    #[must_use]
    pub fn annualized_return(&self, returns: Option<&TimeSeries>) -> f64 {
        self.point(&AnnualizedReturn::new(Some(self.scale())), returns)
    }

    /// Returns the annualized volatility `std(r) × sqrt(scale)`.
    #[must_use]
    pub fn annualized_volatility(&self, returns: Option<&TimeSeries>) -> f64 {
        self.point(&AnnualizedVolatility::new(Some(self.scale())), returns)
    }

    fn sharpe(&self, risk_free_rate: Option<f64>) -> SharpeRatio {
        SharpeRatio::new(
            Some(self.scale()),
            Some(risk_free_rate.unwrap_or(self.config.sharpe_risk_free_rate)),
        )
    }

    /// Returns the annualized Sharpe ratio.
    #[must_use]
    pub fn sharpe_ratio(&self, returns: Option<&TimeSeries>, risk_free_rate: Option<f64>) -> f64 {
        self.point(&self.sharpe(risk_free_rate), returns)
    }

    /// Returns the Sharpe ratio over each trailing window of `lookback` years.
    #[must_use]
    pub fn sharpe_ratio_rolling(
        &self,
        returns: Option<&TimeSeries>,
        lookback: Option<f64>,
        risk_free_rate: Option<f64>,
    ) -> TimeSeries {
        self.rolling(&self.sharpe(risk_free_rate), returns, lookback)
    }

    fn sortino(&self, risk_free_rate: Option<f64>) -> SortinoRatio {
        SortinoRatio::new(
            Some(self.scale()),
            Some(risk_free_rate.unwrap_or(self.config.sortino_risk_free_rate)),
        )
    }

    /// Returns the Sortino ratio, `annualized return - rfr / downside deviation`.
    #[must_use]
    pub fn sortino_ratio(&self, returns: Option<&TimeSeries>, risk_free_rate: Option<f64>) -> f64 {
        self.point(&self.sortino(risk_free_rate), returns)
    }

    /// Returns the Sortino ratio over each trailing window of `lookback` years.
    #[must_use]
    pub fn sortino_ratio_rolling(
        &self,
        returns: Option<&TimeSeries>,
        lookback: Option<f64>,
        risk_free_rate: Option<f64>,
    ) -> TimeSeries {
        self.rolling(&self.sortino(risk_free_rate), returns, lookback)
    }

    /// Returns the Calmar ratio, `-annualized return / max drawdown`.
    #[must_use]
    pub fn calmar_ratio(&self, returns: Option<&TimeSeries>) -> f64 {
        self.point(&CalmarRatio::new(Some(self.scale())), returns)
    }

    /// Returns the rolling Calmar ratio.
    ///
    /// The drawdown is computed over the whole effective series, then its minimum is taken
    /// over a trailing window of `mdd_lookback` years. The annualized return uses its own
    /// trailing window of `lookback` years. An entry is 0 unless both windows are full.
    #[must_use]
    pub fn calmar_ratio_rolling(
        &self,
        returns: Option<&TimeSeries>,
        lookback: Option<f64>,
        mdd_lookback: Option<f64>,
    ) -> TimeSeries {
        let returns = self.resolve(returns);
        let window = self.lookback_periods(lookback);
        let mdd_window = self
            .frequency
            .lookback_periods(mdd_lookback.unwrap_or(self.config.mdd_lookback));

        let annual_return = AnnualizedReturn::new(Some(self.scale()));
        let rolling_returns = rolling_apply(returns.values(), window, |w| {
            annual_return.calculate_from_returns(w).unwrap_or(f64::NAN)
        });
        let dd = drawdown::drawdown(&returns);
        let rolling_mdd = rolling_min(dd.values(), mdd_window);

        let n = returns.len();
        let values = (0..n)
            .map(|i| {
                let filled = window > 0 && mdd_window > 0 && i + 1 >= window.max(mdd_window);
                if filled && window <= n {
                    fill_nan(CalmarRatio::from_parts(rolling_returns[i], rolling_mdd[i]))
                } else {
                    0.0
                }
            })
            .collect();
        returns.with_values(values)
    }

    /// Returns the `delta`-quantile of returns.
    #[must_use]
    pub fn value_at_risk(&self, returns: Option<&TimeSeries>, delta: Option<f64>) -> f64 {
        self.point(&ValueAtRisk::new(self.delta(delta)), returns)
    }

    /// Returns the VaR over each trailing window of `lookback` years.
    #[must_use]
    pub fn value_at_risk_rolling(
        &self,
        returns: Option<&TimeSeries>,
        lookback: Option<f64>,
        delta: Option<f64>,
    ) -> TimeSeries {
        self.rolling(&ValueAtRisk::new(self.delta(delta)), returns, lookback)
    }

    /// Returns the mean of returns at or below the VaR cutoff.
    #[must_use]
    pub fn conditional_value_at_risk(
        &self,
        returns: Option<&TimeSeries>,
        delta: Option<f64>,
    ) -> f64 {
        self.point(&ConditionalValueAtRisk::new(self.delta(delta)), returns)
    }

    /// Returns the CVaR over each trailing window of `lookback` years.
    #[must_use]
    pub fn conditional_value_at_risk_rolling(
        &self,
        returns: Option<&TimeSeries>,
        lookback: Option<f64>,
        delta: Option<f64>,
    ) -> TimeSeries {
        self.rolling(
            &ConditionalValueAtRisk::new(self.delta(delta)),
            returns,
            lookback,
        )
    }

    /// Returns the VaR ratio, `-mean(r) / VaR`.
    #[must_use]
    pub fn var_ratio(&self, returns: Option<&TimeSeries>, delta: Option<f64>) -> f64 {
        self.point(&VarRatio::new(self.delta(delta)), returns)
    }

    /// Returns the VaR ratio over each trailing window of `lookback` years.
    #[must_use]
    pub fn var_ratio_rolling(
        &self,
        returns: Option<&TimeSeries>,
        lookback: Option<f64>,
        delta: Option<f64>,
    ) -> TimeSeries {
        self.rolling(&VarRatio::new(self.delta(delta)), returns, lookback)
    }

    /// Returns the CVaR ratio, `-mean(r) / CVaR`.
    #[must_use]
    pub fn cvar_ratio(&self, returns: Option<&TimeSeries>, delta: Option<f64>) -> f64 {
        self.point(&CvarRatio::new(self.delta(delta)), returns)
    }

    /// Returns the CVaR ratio over each trailing window, with CVaR recomputed per window.
    #[must_use]
    pub fn cvar_ratio_rolling(
        &self,
        returns: Option<&TimeSeries>,
        lookback: Option<f64>,
        delta: Option<f64>,
    ) -> TimeSeries {
        self.rolling(&CvarRatio::new(self.delta(delta)), returns, lookback)
    }

    /// Returns the share of positive returns among non-zero returns.
    #[must_use]
    pub fn hit_ratio(&self, returns: Option<&TimeSeries>) -> f64 {
        self.point(&HitRatio::default(), returns)
    }

    /// Returns the hit ratio over each trailing window of `lookback` years.
    #[must_use]
    pub fn hit_ratio_rolling(&self, returns: Option<&TimeSeries>, lookback: Option<f64>) -> TimeSeries {
        self.rolling(&HitRatio::default(), returns, lookback)
    }

    /// Returns the gain-to-pain ratio, `mean(gains) / -mean(losses)`.
    #[must_use]
    pub fn gain_to_pain_ratio(&self, returns: Option<&TimeSeries>) -> f64 {
        self.point(&GainToPain::default(), returns)
    }

    /// Returns the gain-to-pain ratio over each trailing window of `lookback` years.
    #[must_use]
    pub fn gain_to_pain_ratio_rolling(
        &self,
        returns: Option<&TimeSeries>,
        lookback: Option<f64>,
    ) -> TimeSeries {
        self.rolling(&GainToPain::default(), returns, lookback)
    }

    /// Returns the skewness of the stored returns.
    #[must_use]
    pub fn skewness(&self) -> f64 {
        math::skewness(self.returns.values())
    }

    /// Returns the excess kurtosis of the stored returns.
    #[must_use]
    pub fn kurtosis(&self) -> f64 {
        math::kurtosis(self.returns.values())
    }

    /// Returns the drawdown series.
    #[must_use]
    pub fn drawdown(&self, returns: Option<&TimeSeries>) -> TimeSeries {
        drawdown::drawdown(&self.resolve(returns))
    }

    /// Returns the maximum drawdown.
    #[must_use]
    pub fn max_drawdown(&self, returns: Option<&TimeSeries>) -> f64 {
        drawdown::max_drawdown(&self.resolve(returns))
    }

    /// Returns the drawdown duration series in calendar days.
    #[must_use]
    pub fn drawdown_duration(&self, returns: Option<&TimeSeries>) -> TimeSeries<i64> {
        drawdown::drawdown_duration(&self.resolve(returns))
    }

    /// Returns the longest drawdown duration in calendar days.
    #[must_use]
    pub fn max_drawdown_duration(&self, returns: Option<&TimeSeries>) -> i64 {
        drawdown::max_drawdown_duration(&self.resolve(returns))
    }

    /// Returns the total growth factor `Π(1 + r)`.
    #[must_use]
    pub fn total_return(&self, returns: Option<&TimeSeries>) -> f64 {
        self.point(&TotalReturn::default(), returns)
    }

    /// Evaluates every point statistic with default ratio parameters.
    #[must_use]
    pub fn report(&self, returns: Option<&TimeSeries>, delta: Option<f64>) -> PerformanceReport {
        PerformanceReport {
            annualized_return: self.annualized_return(returns),
            annualized_volatility: self.annualized_volatility(returns),
            skewness: self.skewness(),
            kurtosis: self.kurtosis(),
            max_drawdown: self.max_drawdown(returns),
            max_drawdown_duration: self.max_drawdown_duration(returns),
            sharpe_ratio: self.sharpe_ratio(returns, None),
            sortino_ratio: self.sortino_ratio(returns, None),
            calmar_ratio: self.calmar_ratio(returns),
            value_at_risk: self.value_at_risk(returns, delta),
            var_ratio: self.var_ratio(returns, delta),
            conditional_value_at_risk: self.conditional_value_at_risk(returns, delta),
            cvar_ratio: self.cvar_ratio(returns, delta),
            hit_ratio: self.hit_ratio(returns),
            gain_to_pain_ratio: self.gain_to_pain_ratio(returns),
        }
    }

    /// Logs every line of [`Metrics::report`] at info level.
    pub fn print_report(&self, returns: Option<&TimeSeries>, delta: Option<f64>) {
        for line in self.report(returns, delta).formatted() {
            log::info!("{line}");
        }
    }

    /// Evaluates every ratio statistic in rolling mode over `lookback` years.
    #[must_use]
    pub fn rolling_report(
        &self,
        returns: Option<&TimeSeries>,
        lookback: Option<f64>,
        delta: Option<f64>,
    ) -> RollingReport {
        let len = self.resolve(returns).len();
        let window = self.lookback_periods(lookback);
        if !window_fits(len, window) {
            log::warn!(
                "Rolling window of {window} periods does not fit {len} observations, rolling ratios are all 0"
            );
        }

        RollingReport {
            drawdown: self.drawdown(returns),
            drawdown_duration: self.drawdown_duration(returns),
            sharpe_ratio: self.sharpe_ratio_rolling(returns, lookback, None),
            sortino_ratio: self.sortino_ratio_rolling(returns, lookback, None),
            calmar_ratio: self.calmar_ratio_rolling(returns, lookback, None),
            value_at_risk: self.value_at_risk_rolling(returns, lookback, delta),
            var_ratio: self.var_ratio_rolling(returns, lookback, delta),
            conditional_value_at_risk: self.conditional_value_at_risk_rolling(
                returns, lookback, delta,
            ),
            cvar_ratio: self.cvar_ratio_rolling(returns, lookback, delta),
            hit_ratio: self.hit_ratio_rolling(returns, lookback),
            gain_to_pain_ratio: self.gain_to_pain_ratio_rolling(returns, lookback),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
