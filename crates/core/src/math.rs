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

//! Descriptive statistics over samples of returns.
//!
//! All functions operate on plain slices and follow sample-statistics conventions: the standard
//! deviation uses one degree of freedom, skewness and kurtosis are bias-corrected, and
//! quantiles interpolate linearly between the closest ranks. Undefined results are reported
//! as `f64::NAN` rather than errors.

// Central moments below this magnitude are treated as zero variance
const FP_NOISE: f64 = 1e-14;

/// Macro for approximate floating-point equality comparison.
///
/// This macro compares two floating-point values with a specified epsilon tolerance,
/// providing a safe alternative to exact equality checks which can fail due to
/// floating-point precision issues.
///
/// # Usage
///
/// ```rust
/// use portmetrics_core::approx_eq;
///
/// let a = 0.1 + 0.2;
/// let b = 0.3;
/// assert!(approx_eq!(f64, a, b, epsilon = 1e-10));
/// ```
#[macro_export]
macro_rules! approx_eq {
    ($type:ty, $left:expr, $right:expr, epsilon = $epsilon:expr) => {{
        let left_val: $type = $left;
        let right_val: $type = $right;
        (left_val - right_val).abs() < $epsilon
    }};
}

/// Returns the arithmetic mean of `values`, or NaN when empty.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Returns the sample standard deviation of `values` (one degree of freedom).
///
/// Returns NaN when fewer than two values are given.
#[must_use]
pub fn std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Returns the adjusted Fisher-Pearson skewness of `values`.
///
/// Returns NaN when fewer than three values are given, and 0 when the sample has no variance.
#[must_use]
pub fn skewness(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if values.len() < 3 {
        return f64::NAN;
    }

    let m = mean(values);
    let (m2, m3) = values.iter().fold((0.0, 0.0), |(m2, m3), x| {
        let d = x - m;
        (d.mul_add(d, m2), (d * d).mul_add(d, m3))
    });

    if m2.abs() < FP_NOISE {
        return 0.0;
    }

    (n * (n - 1.0).sqrt() / (n - 2.0)) * (m3 / m2.powf(1.5))
}

/// Returns the bias-corrected excess kurtosis of `values`.
///
/// Returns NaN when fewer than four values are given, and 0 when the sample has no variance.
#[must_use]
pub fn kurtosis(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if values.len() < 4 {
        return f64::NAN;
    }

    let m = mean(values);
    let (m2, m4) = values.iter().fold((0.0, 0.0), |(m2, m4), x| {
        let d2 = (x - m).powi(2);
        (m2 + d2, d2.mul_add(d2, m4))
    });

    if m2.abs() < FP_NOISE {
        return 0.0;
    }

    let denominator = (n - 2.0) * (n - 3.0) * m2 * m2;

    let numerator = n * (n + 1.0) * (n - 1.0) * m4;
    let adjustment = 3.0 * (n - 1.0).powi(2) / ((n - 2.0) * (n - 3.0));
    numerator / denominator - adjustment
}

/// Returns the `q`-quantile of `values`, interpolating linearly between the closest ranks.
///
/// Returns NaN when `values` is empty.
#[must_use]
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    weight.mul_add(sorted[upper] - sorted[lower], sorted[lower])
}

/// Returns the compounded growth `Π(1 + r)` of `returns` (1 when empty).
#[must_use]
pub fn compounded_growth(returns: &[f64]) -> f64 {
    returns.iter().fold(1.0, |acc, r| acc * (1.0 + r))
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_mean_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[rstest]
    fn test_std_single_value_is_nan() {
        assert!(std(&[0.5]).is_nan());
    }

    #[rstest]
    fn test_std_sample() {
        // Sample variance of [1, 2, 3, 4] = 1.666..
        assert!(approx_eq!(
            f64,
            std(&[1.0, 2.0, 3.0, 4.0]),
            1.666_666_666_666_666_7_f64.sqrt(),
            epsilon = 1e-12
        ));
    }

    #[rstest]
    fn test_skewness_symmetric_is_zero() {
        assert!(approx_eq!(
            f64,
            skewness(&[-2.0, -1.0, 0.0, 1.0, 2.0]),
            0.0,
            epsilon = 1e-12
        ));
    }

    #[rstest]
    fn test_skewness_right_tail() {
        // Adjusted Fisher-Pearson coefficient for [1, 2, 3, 10]
        assert!(approx_eq!(
            f64,
            skewness(&[1.0, 2.0, 3.0, 10.0]),
            1.763_632_614_803_888,
            epsilon = 1e-9
        ));
    }

    #[rstest]
    fn test_skewness_constant_is_zero() {
        assert_eq!(skewness(&[0.1, 0.1, 0.1]), 0.0);
        assert_eq!(kurtosis(&[0.1, 0.1, 0.1, 0.1]), 0.0);
    }

    #[rstest]
    fn test_kurtosis_requires_four_values() {
        assert!(kurtosis(&[1.0, 2.0, 3.0]).is_nan());
    }

    #[rstest]
    fn test_kurtosis_uniform_steps() {
        // Excess kurtosis of [1, 2, 3, 4, 5] = -1.2
        assert!(approx_eq!(
            f64,
            kurtosis(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            -1.2,
            epsilon = 1e-12
        ));
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(0.5, 2.5)]
    #[case(1.0, 4.0)]
    #[case(0.25, 1.75)]
    fn test_quantile_linear(#[case] q: f64, #[case] expected: f64) {
        assert!(approx_eq!(
            f64,
            quantile(&[4.0, 1.0, 3.0, 2.0], q),
            expected,
            epsilon = 1e-12
        ));
    }

    #[rstest]
    fn test_quantile_empty_is_nan() {
        assert!(quantile(&[], 0.01).is_nan());
    }

    #[rstest]
    fn test_compounded_growth() {
        assert!(approx_eq!(
            f64,
            compounded_growth(&[0.1, -0.1]),
            0.99,
            epsilon = 1e-12
        ));
        assert_eq!(compounded_growth(&[]), 1.0);
    }
}
