//! Property tests for the median and mode computations.
//!
//! Checks hold for arbitrary samples: order insensitivity, exact middle values
//! for odd lengths, the mode frequency contract against a brute-force count,
//! and repeatability.

use std::collections::HashMap;

use poc_stats::stats::{median, mode};
use proptest::prelude::*;

/// Narrow value range so samples contain plenty of repeated values.
fn repetitive_sample() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-20i64..20, 0..64)
}

fn wide_sample() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..64)
}

fn counts(sample: &[i64]) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for &value in sample {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

mod median_properties {
    use super::*;

    proptest! {
        #[test]
        fn ignores_permutation(
            (sample, shuffled) in wide_sample()
                .prop_flat_map(|sample| (Just(sample.clone()), Just(sample).prop_shuffle()))
        ) {
            prop_assert_eq!(median(&sample).unwrap(), median(&shuffled).unwrap());
        }

        #[test]
        fn ignores_reversal(sample in wide_sample()) {
            let mut reversed = sample.clone();
            reversed.reverse();
            prop_assert_eq!(median(&sample).unwrap(), median(&reversed).unwrap());
        }

        #[test]
        fn odd_length_is_middle_value(
            sample in prop::collection::vec(-1_000_000i64..1_000_000, 0..32)
                .prop_map(|mut sample| {
                    if sample.len() % 2 == 0 {
                        sample.push(0);
                    }
                    sample
                })
        ) {
            let mut sorted = sample.clone();
            sorted.sort();
            let value = median(&sample).unwrap();

            prop_assert_eq!(value, sorted[sorted.len() / 2] as f64);
            prop_assert_eq!(value.fract(), 0.0);
        }

        #[test]
        fn within_sample_bounds(sample in wide_sample()) {
            let value = median(&sample).unwrap();
            match (sample.iter().min(), sample.iter().max()) {
                (Some(&min), Some(&max)) => {
                    prop_assert!(min as f64 <= value && value <= max as f64);
                }
                _ => {
                    prop_assert_eq!(value, 0.0);
                }
            }
        }

        #[test]
        fn repeatable_and_leaves_sample_alone(sample in wide_sample()) {
            let before = sample.clone();
            let first = median(&sample).unwrap();
            let second = median(&sample).unwrap();

            prop_assert_eq!(first, second);
            prop_assert_eq!(sample, before);
        }
    }
}

mod mode_properties {
    use super::*;

    proptest! {
        #[test]
        fn matches_brute_force_count(sample in repetitive_sample()) {
            let result = mode(&sample).unwrap();
            let counts = counts(&sample);
            let max = counts.values().copied().max().unwrap_or(0);

            let mut expected = counts
                .iter()
                .filter(|&(_, &count)| count == max)
                .map(|(&value, _)| value)
                .collect::<Vec<_>>();
            expected.sort();

            prop_assert_eq!(result.frequency, max);
            prop_assert_eq!(&result.values, &expected);
            for value in &result.values {
                prop_assert_eq!(counts[value], result.frequency);
            }
            for count in counts.values() {
                prop_assert!(*count <= result.frequency);
            }
        }

        #[test]
        fn empty_only_for_empty_sample(sample in wide_sample()) {
            let result = mode(&sample).unwrap();

            prop_assert_eq!(result.is_empty(), sample.is_empty());
            prop_assert_eq!(result.frequency == 0, sample.is_empty());
        }

        #[test]
        fn values_ascending_and_distinct(sample in repetitive_sample()) {
            let result = mode(&sample).unwrap();
            prop_assert!(result.values.windows(2).all(|pair| pair[0] < pair[1]));
        }

        #[test]
        fn ignores_permutation(
            (sample, shuffled) in repetitive_sample()
                .prop_flat_map(|sample| (Just(sample.clone()), Just(sample).prop_shuffle()))
        ) {
            prop_assert_eq!(mode(&sample).unwrap(), mode(&shuffled).unwrap());
        }

        #[test]
        fn repeatable_and_leaves_sample_alone(sample in wide_sample()) {
            let before = sample.clone();
            let first = mode(&sample).unwrap();
            let second = mode(&sample).unwrap();

            prop_assert_eq!(first, second);
            prop_assert_eq!(sample, before);
        }
    }
}
