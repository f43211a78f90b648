use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortkit::prelude::*;
use std::time::Instant;

fn random_input(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random()).collect()
}

fn assert_sorted(data: &[u64]) {
    for i in 0..data.len().saturating_sub(1) {
        assert!(data[i] <= data[i + 1], "Sort failed at index {}", i);
    }
}

#[test]
fn test_sort_100k_log_linear() {
    let count = 100_000;
    let input = random_input(count, 7);
    let mut rng = StdRng::seed_from_u64(7);

    for algorithm in [Algorithm::Heap, Algorithm::Quick, Algorithm::Merge, Algorithm::Shell, Algorithm::Comb] {
        let mut data = input.clone();
        let start = Instant::now();
        algorithm.sort_by(&mut data, .., u64::cmp, &mut rng).unwrap();
        println!("{algorithm} sorted {count} elements in {:?}", start.elapsed());

        assert_eq!(data.len(), count);
        assert_sorted(&data);
    }
}

#[test]
fn test_presorted_100k() {
    // Quick sort's first-element pivot is quadratic on presorted input, so it is left out.
    let mut rng = StdRng::seed_from_u64(1);
    let ascending: Vec<u64> = (0..100_000).collect();

    for algorithm in [Algorithm::Heap, Algorithm::Merge, Algorithm::Shell] {
        let mut data: Vec<u64> = ascending.iter().rev().copied().collect();
        algorithm.sort_by(&mut data, .., u64::cmp, &mut rng).unwrap();
        assert_eq!(data, ascending, "{algorithm}");
    }
}

#[test]
fn test_quick_many_duplicates_1m() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut data: Vec<u64> = (0..1_000_000).map(|_| rng.random_range(0..3)).collect();

    let start = Instant::now();
    quick_sort(&mut data, .., u64::cmp).unwrap();
    println!("Sorted 1M three-valued elements in {:?}", start.elapsed());
    assert_sorted(&data);
}

#[test]
#[ignore]
fn test_sort_10m() {
    // WARNING: heap and merge sort over 10M elements take a while in debug builds.
    let count = 10_000_000;
    println!("Generating {} random elements...", count);
    let input = random_input(count, 11);
    let mut rng = StdRng::seed_from_u64(11);

    for algorithm in [Algorithm::Heap, Algorithm::Quick, Algorithm::Merge] {
        let mut data = input.clone();
        let start = Instant::now();
        algorithm.sort_by(&mut data, .., u64::cmp, &mut rng).unwrap();
        println!("{algorithm} sorted {count} elements in {:?}", start.elapsed());
        assert_sorted(&data);
    }
}
