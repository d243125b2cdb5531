use std::collections::HashSet;

use combinations::{Combinations, Error, count::choose};
use itertools::Itertools;
use num_bigint::BigUint;
use proptest::prelude::*;

// (n, k) with 1 <= k <= n, small enough to enumerate
fn sizes() -> impl Strategy<Value = (usize, usize)> {
    (1..12usize).prop_flat_map(|n| (Just(n), 1..=n))
}

fn indices_of(mut combinations: Combinations<usize>) -> Vec<Vec<usize>> {
    let mut all = Vec::new();
    while combinations.has_next() {
        combinations.try_next().unwrap();
        all.push(combinations.last_indices().unwrap().to_vec());
    }
    all
}

proptest! {
    #[test]
    fn choose_satisfies_pascal((n, k) in (2..150usize).prop_flat_map(|n| (Just(n), 1..n))) {
        prop_assert_eq!(choose(n, k), choose(n - 1, k - 1) + choose(n - 1, k));
    }

    #[test]
    fn produces_total_count((n, k) in sizes()) {
        let combinations = Combinations::from_vec((0..n).collect(), k).unwrap();
        let total = combinations.total_combination_count().clone();
        prop_assert_eq!(BigUint::from(combinations.count()), total);
    }

    #[test]
    fn matches_itertools_order((n, k) in sizes()) {
        let ours: Vec<_> = Combinations::from_vec((0..n).collect(), k).unwrap().collect();
        let reference: Vec<_> = (0..n).combinations(k).collect();
        prop_assert_eq!(ours, reference);
    }

    #[test]
    fn indices_ascend_and_are_distinct((n, k) in sizes()) {
        let all = indices_of(Combinations::from_vec((0..n).collect(), k).unwrap());

        for indices in &all {
            prop_assert_eq!(indices.len(), k);
            prop_assert!(indices.iter().tuple_windows().all(|(a, b)| a < b));
            prop_assert!(indices.iter().all(|&index| index < n));
        }
        prop_assert!(all.iter().tuple_windows().all(|(a, b)| a < b));
        prop_assert_eq!(all.iter().collect::<HashSet<_>>().len(), all.len());
    }

    #[test]
    fn has_next_does_not_advance((n, k) in sizes(), polls in 1..5usize) {
        let mut polled = Combinations::from_vec((0..n).collect(), k).unwrap();
        let plain: Vec<_> = Combinations::from_vec((0..n).collect(), k).unwrap().collect();

        let mut produced = Vec::new();
        loop {
            let has_next = polled.has_next();
            for _ in 0..polls {
                prop_assert_eq!(polled.has_next(), has_next);
            }
            if !has_next {
                break;
            }
            produced.push(polled.try_next().unwrap());
        }
        prop_assert_eq!(produced, plain);
    }

    #[test]
    fn exhausted_after_total((n, k) in sizes()) {
        let mut combinations = Combinations::from_vec((0..n).collect(), k).unwrap();
        combinations.by_ref().for_each(drop);
        let total = choose(n, k);
        prop_assert_eq!(combinations.current_combination_number(), &total);
        prop_assert_eq!(combinations.try_next(), Err(Error::ExhaustedIterator { total }));
    }

    #[test]
    fn rejects_out_of_range_choice(n in 0..20usize, extra in 1..5usize) {
        let items: Vec<_> = (0..n).collect();
        prop_assert_eq!(
            Combinations::new(&items, 0).unwrap_err(),
            Error::InvalidChoiceSize { k: 0, n }
        );
        prop_assert_eq!(
            Combinations::new(&items, n + extra).unwrap_err(),
            Error::InvalidChoiceSize { k: n + extra, n }
        );
    }
}
