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

//! Trailing-window helpers shared by the rolling statistics.

/// Returns whether a trailing window of `window` periods fits `len` observations.
pub(crate) const fn window_fits(len: usize, window: usize) -> bool {
    window > 0 && window <= len
}

/// Applies `f` to every full trailing window of `window` values.
///
/// The output has the length of `values`. Entries whose window is not yet full, and
/// entries where `f` is NaN, are 0. A zero window or one longer than `values` yields
/// all zeros.
pub(crate) fn rolling_apply(values: &[f64], window: usize, f: impl Fn(&[f64]) -> f64) -> Vec<f64> {
    let mut out = vec![0.0; values.len()];
    if !window_fits(values.len(), window) {
        log::debug!(
            "Rolling window of {window} periods does not fit {} observations",
            values.len()
        );
        return out;
    }

    for end in window..=values.len() {
        out[end - 1] = fill_nan(f(&values[end - window..end]));
    }
    out
}

/// Returns the trailing-window minimum of `values`, NaN where the window is not full.
pub(crate) fn rolling_min(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if !window_fits(values.len(), window) {
        return out;
    }

    for end in window..=values.len() {
        out[end - 1] = values[end - window..end]
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
    }
    out
}

/// Replaces NaN with 0, leaving infinities untouched.
pub(crate) fn fill_nan(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(4, 0, false)]
    #[case(4, 1, true)]
    #[case(4, 4, true)]
    #[case(4, 5, false)]
    #[case(0, 1, false)]
    fn test_window_fits(#[case] len: usize, #[case] window: usize, #[case] expected: bool) {
        assert_eq!(window_fits(len, window), expected);
    }

    #[rstest]
    fn test_rolling_apply_masks_leading_entries() {
        let out = rolling_apply(&[1.0, 2.0, 3.0, 4.0], 2, |w| w.iter().sum());
        assert_eq!(out, vec![0.0, 3.0, 5.0, 7.0]);
    }

    #[rstest]
    fn test_rolling_apply_fills_nan() {
        let out = rolling_apply(&[1.0, 2.0, 3.0], 1, |w| if w[0] > 1.5 { f64::NAN } else { w[0] });
        assert_eq!(out, vec![1.0, 0.0, 0.0]);
    }

    #[rstest]
    fn test_rolling_apply_keeps_infinity() {
        let out = rolling_apply(&[1.0, 0.0], 1, |w| 1.0 / w[0]);
        assert_eq!(out, vec![1.0, f64::INFINITY]);
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    fn test_rolling_apply_window_out_of_range(#[case] window: usize) {
        let out = rolling_apply(&[1.0, 2.0, 3.0], window, |w| w.iter().sum());
        assert_eq!(out, vec![0.0, 0.0, 0.0]);
    }

    #[rstest]
    fn test_rolling_min() {
        let out = rolling_min(&[0.0, -0.2, -0.1, 0.0], 2);
        assert!(out[0].is_nan());
        assert_eq!(&out[1..], &[-0.2, -0.2, -0.1]);
    }
}
