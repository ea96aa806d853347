#[cfg(test)]
mod test {
    use nthprime_sieve::{bound, nth_prime};
    use pretty_assertions::assert_eq;
    use test_log::test;

    const FIRST_100_PRIMES: [u64; 100] = [
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
        97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181,
        191, 193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281,
        283, 293, 307, 311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397,
        401, 409, 419, 421, 431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503,
        509, 521, 523, 541,
    ];

    /// Upper end of the index range checked by the slower properties.
    const MAX_INDEX: u64 = 300;

    fn is_prime_by_trial_division(candidate: u64) -> bool {
        candidate >= 2
            && (2..)
                .take_while(|d| d * d <= candidate)
                .all(|d| candidate % d != 0)
    }

    #[test]
    fn matches_reference_table() {
        let computed = (1..=100)
            .map(|n| nth_prime(n).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(computed, FIRST_100_PRIMES.to_vec());
    }

    #[test]
    fn strictly_increasing() {
        let mut previous = nth_prime(1).unwrap();
        for n in 2..=MAX_INDEX {
            let current = nth_prime(n).unwrap();
            assert!(current > previous, "prime no {n} = {current} <= {previous}");
            previous = current;
        }
    }

    #[test]
    fn results_are_prime() {
        for n in 1..=MAX_INDEX {
            let p = nth_prime(n).unwrap();
            assert!(is_prime_by_trial_division(p), "prime no {n} = {p} has a divisor");
        }
    }

    #[test]
    fn count_matches_index() {
        for n in 1..=MAX_INDEX {
            let p = nth_prime(n).unwrap();
            let count = (2..=p).filter(|&i| is_prime_by_trial_division(i)).count();
            assert_eq!(count as u64, n, "primes in [2, {p}]");
        }
    }

    #[test]
    fn bound_covers_result() {
        for n in 1..=MAX_INDEX {
            let p = nth_prime(n).unwrap();
            assert!(bound(n) >= p, "bound({n}) = {} < {p}", bound(n));
        }
    }

    #[test]
    fn bound_covers_larger_results() {
        for n in [500, 1_000, 5_000, 20_000] {
            let p = nth_prime(n).unwrap();
            assert!(bound(n) >= p, "bound({n}) = {} < {p}", bound(n));
        }
    }

    #[test]
    fn end_to_end_values() {
        let cases = [
            (1, 2),
            (6, 13),
            (10, 29),
            (25, 97),
            (100, 541),
            (1_000, 7_919),
        ];
        for (n, p) in cases {
            assert_eq!(nth_prime(n).unwrap(), p, "prime no {n}");
        }
    }
}
