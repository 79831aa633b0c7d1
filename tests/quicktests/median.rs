use classic_collections::median::{running_medians, RunningMedianTracker};
use quickcheck::{Arbitrary, Gen};

/// The reference algorithm: sort every prefix and read off its middle.
fn naive_medians(values: &[i32]) -> Vec<f64> {
    let mut seen = Vec::with_capacity(values.len());
    let mut medians = Vec::with_capacity(values.len());
    for (i, &value) in values.iter().enumerate() {
        seen.push(value);
        seen.sort_unstable();
        if i % 2 == 0 {
            medians.push(f64::from(seen[i / 2]));
        } else {
            medians.push((f64::from(seen[i / 2]) + f64::from(seen[i / 2 + 1])) / 2.0);
        }
    }
    medians
}

#[quickcheck]
fn matches_naive(xs: Vec<i16>) -> bool {
    let xs: Vec<i32> = xs.into_iter().map(i32::from).collect();
    running_medians(xs.iter().copied()) == naive_medians(&xs)
}

#[quickcheck]
fn one_median_per_value(xs: Vec<u8>) -> bool {
    let mut tracker = RunningMedianTracker::new();
    let observed: Vec<f64> = xs.iter().map(|&x| tracker.observe(x)).collect();

    observed.len() == xs.len() && tracker.median() == observed.last().copied()
}

#[test]
fn matches_naive_on_long_random_stream() {
    crate::init_tracing();
    let mut g = Gen::new(10_000);
    let values: Vec<i32> = (0..2_000)
        .map(|_| i32::arbitrary(&mut g) % 10_000)
        .collect();

    assert_eq!(running_medians(values.iter().copied()), naive_medians(&values));
}

#[test]
fn middle_and_final_medians_of_large_stream() {
    let mut g = Gen::new(100_000);
    let values: Vec<i32> = (0..20_001)
        .map(|_| (i32::arbitrary(&mut g) % 100_000).abs())
        .collect();
    let medians = running_medians(values.iter().copied());

    let mut prefix = values[..10_001].to_vec();
    prefix.sort_unstable();
    assert_eq!(medians[10_000], f64::from(prefix[5_000]));

    let mut all = values.clone();
    all.sort_unstable();
    assert_eq!(medians[20_000], f64::from(all[10_000]));
}
