use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;

/// Number of samples drawn for every expected value.
const SAMPLES_PER_VALUE: usize = 1000;

/// Check that `sampler` only returns values from `expected`, and that each of them is returned about equally often.
pub fn test_sampler_uniform<T: Eq + Hash + Debug + Copy>(expected: &[T], print: bool, mut sampler: impl FnMut() -> Option<T>) {
    assert!(
        expected.iter().all_unique(),
        "Got duplicate value in expected: {:?}",
        expected
    );

    if expected.is_empty() {
        for _ in 0..100 {
            assert_eq!(None, sampler());
        }
        return;
    }

    let total_samples = SAMPLES_PER_VALUE * expected.len();
    if print {
        println!("Sampling {} values {} times each", expected.len(), SAMPLES_PER_VALUE);
    }

    let mut counts: HashMap<T, usize> = expected.iter().map(|&value| (value, 0)).collect();
    for _ in 0..total_samples {
        let sample = sampler().expect("There are expected values, so sampler must return one");
        match counts.get_mut(&sample) {
            None => panic!("Non-expected value {:?} was sampled", sample),
            Some(count) => *count += 1,
        }
    }

    // report the values in the order they were given
    let relative = expected
        .iter()
        .map(|value| (value, counts[value] as f32 / SAMPLES_PER_VALUE as f32))
        .collect_vec();

    if print {
        for (value, r) in &relative {
            println!("  {:?} ~ {}", value, r);
        }
    }

    for (value, r) in &relative {
        assert!(*r > 0.0, "Never sampled expected value {:?}", value);
    }
    for (value, r) in relative {
        assert!((0.8..1.2).contains(&r), "Value {:?} was over/under sampled ~ {}", value, r);
    }
}
