use num_bigint::BigUint;
use num_traits::One;

/// `n!`, with `0! == 1! == 1`
#[must_use]
pub fn factorial(n: usize) -> BigUint {
    let mut product = BigUint::one();
    for factor in (2..=n).rev() {
        product *= factor;
    }
    product
}

/// Number of ways to pick `k` out of `n` items, `n! / (k! * (n - k)!)`
/// # Panics
/// - If `k > n`
#[must_use]
pub fn choose(n: usize, k: usize) -> BigUint {
    assert!(k <= n, "cannot choose {k} out of {n}");

    let denominator = factorial(k) * factorial(n - k);
    // Always exact, the numerator is a multiple of the denominator
    factorial(n) / denominator
}
