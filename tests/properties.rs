//! Property-based tests for the sorting contract.
//!
//! Every algorithm must produce a permutation of its input, ordered under the
//! comparator, leave everything outside the requested range alone, and (for the stable
//! ones) keep equal elements in their original order.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sortkit::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Algorithms cheap enough for arbitrary inputs of a few dozen elements.
fn practical_algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(
        Algorithm::ALL
            .into_iter()
            .filter(|a| !a.is_impractical())
            .collect::<Vec<_>>(),
    )
}

fn stable_algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(
        Algorithm::ALL
            .into_iter()
            .filter(|a| a.is_stable())
            .collect::<Vec<_>>(),
    )
}

fn run(algorithm: Algorithm, data: &mut Vec<i16>, lo: usize, hi: usize) {
    let mut rng = StdRng::seed_from_u64(0);
    algorithm
        .sort_by(data, lo..hi, i16::cmp, &mut rng)
        .unwrap();
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// The output is the input, sorted.
    #[test]
    fn proptest_permutation_and_order(
        algorithm in practical_algorithm(),
        values in prop::collection::vec(any::<i16>(), 0..48),
    ) {
        let mut data = values.clone();
        let len = data.len();
        run(algorithm, &mut data, 0, len);

        let mut expected = values;
        expected.sort();
        prop_assert_eq!(data, expected);
    }

    /// Elements outside the range keep their positions.
    #[test]
    fn proptest_sub_range_isolation(
        algorithm in practical_algorithm(),
        values in prop::collection::vec(any::<i16>(), 1..48),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let (lo, hi) = {
            let (x, y) = (a.index(values.len() + 1), b.index(values.len() + 1));
            (x.min(y), x.max(y))
        };

        let mut data = values.clone();
        run(algorithm, &mut data, lo, hi);

        prop_assert_eq!(&data[..lo], &values[..lo]);
        prop_assert_eq!(&data[hi..], &values[hi..]);
        let mut expected = values[lo..hi].to_vec();
        expected.sort();
        prop_assert_eq!(&data[lo..hi], &expected[..]);
    }

    /// Equal keys keep their original relative order.
    #[test]
    fn proptest_stability(
        algorithm in stable_algorithm(),
        keys in prop::collection::vec(0u8..6, 0..64),
    ) {
        let tagged: Vec<(u8, usize)> = keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect();
        let mut data = tagged.clone();
        let mut rng = StdRng::seed_from_u64(0);
        algorithm
            .sort_by(&mut data, .., |x: &(u8, usize), y: &(u8, usize)| x.0.cmp(&y.0), &mut rng)
            .unwrap();

        let mut expected = tagged;
        expected.sort_by_key(|item| item.0);
        prop_assert_eq!(data, expected);
    }

    /// Sorting a sorted sequence changes nothing.
    #[test]
    fn proptest_idempotence(
        algorithm in practical_algorithm(),
        values in prop::collection::vec(any::<i16>(), 0..48),
    ) {
        let mut sorted = values;
        sorted.sort();
        let mut data = sorted.clone();
        let len = data.len();
        run(algorithm, &mut data, 0, len);
        prop_assert_eq!(data, sorted);
    }

    /// Bogo and slow sort still honour the contract on tiny inputs.
    #[test]
    fn proptest_impractical_small(
        values in prop::collection::vec(0i16..4, 0..6),
        seed in any::<u64>(),
    ) {
        let mut expected = values.clone();
        expected.sort();

        for algorithm in [Algorithm::Bogo, Algorithm::Slow] {
            let mut data = values.clone();
            let mut rng = StdRng::seed_from_u64(seed);
            algorithm.sort_by(&mut data, .., i16::cmp, &mut rng).unwrap();
            prop_assert_eq!(&data, &expected);
        }
    }

    /// Shuffles only permute, and only inside the range.
    #[test]
    fn proptest_shuffle_permutes(
        values in prop::collection::vec(any::<i16>(), 0..64),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut data = values.clone();
        shuffle(&mut data, .., &mut rng).unwrap();
        fisher_yates(&mut data, .., &mut rng).unwrap();

        let mut expected = values;
        expected.sort();
        data.sort();
        prop_assert_eq!(data, expected);
    }

    /// Top-K agrees with sorting and truncating.
    #[test]
    fn proptest_top_k(
        values in prop::collection::vec(any::<i16>(), 1..64),
        count in any::<prop::sample::Index>(),
    ) {
        let count = count.index(values.len()) + 1;
        let mut sorted = values.clone();
        sorted.sort();

        let lowest = least(values.iter().copied(), count, i16::cmp).unwrap();
        prop_assert_eq!(&lowest[..], &sorted[..count]);

        let highest = greatest(values.iter().copied(), count, i16::cmp).unwrap();
        let mut top: Vec<i16> = sorted.iter().rev().take(count).copied().collect();
        prop_assert_eq!(&highest, &top);
        top.reverse();
        prop_assert!(top.windows(2).all(|w| w[0] <= w[1]));
    }
}
