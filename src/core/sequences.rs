use crate::domain::model::FizzBuzzLabel;
use crate::utils::error::Result;
use crate::utils::validation::validate_range;
use num_bigint::BigUint;

pub const FIZZBUZZ_MIN: i64 = 1;
pub const FIZZBUZZ_MAX: i64 = 10_000;

/// 無窮的 Fibonacci 迭代器：0, 1, 1, 2, 3, 5, ...
#[derive(Debug, Clone)]
pub struct FibonacciIter {
    current: BigUint,
    next: BigUint,
}

impl FibonacciIter {
    pub fn new() -> Self {
        Self {
            current: BigUint::from(0u32),
            next: BigUint::from(1u32),
        }
    }
}

impl Default for FibonacciIter {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibonacciIter {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        let following = &self.current + &self.next;
        let next = std::mem::replace(&mut self.next, following);
        Some(std::mem::replace(&mut self.current, next))
    }
}

/// 產生前 `n` 個 Fibonacci 數；`n <= 0` 回傳空序列
pub fn generate_fibonacci(n: i64) -> Vec<BigUint> {
    if n <= 0 {
        return Vec::new();
    }

    let count = usize::try_from(n).unwrap_or(usize::MAX);
    FibonacciIter::new().take(count).collect()
}

/// FizzBuzz 標籤，`n` 必須在 [1, 10000]
pub fn fizz_buzz_labels(n: i64) -> Result<Vec<FizzBuzzLabel>> {
    if let Err(e) = validate_range("n", n, FIZZBUZZ_MIN, FIZZBUZZ_MAX) {
        tracing::debug!("fizz_buzz rejected n = {}", n);
        return Err(e);
    }

    // 範圍已檢查，轉型不會截斷
    let upper = n as u32;
    Ok((1..=upper).map(FizzBuzzLabel::for_index).collect())
}

pub fn fizz_buzz(n: i64) -> Result<Vec<String>> {
    Ok(fizz_buzz_labels(n)?
        .into_iter()
        .map(|label| label.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ExerciseError;

    fn fib(n: i64) -> Vec<u64> {
        generate_fibonacci(n)
            .iter()
            .map(|term| term.to_string().parse().unwrap())
            .collect()
    }

    #[test]
    fn test_fibonacci_small_counts() {
        assert!(fib(0).is_empty());
        assert!(fib(-5).is_empty());
        assert_eq!(fib(1), vec![0]);
        assert_eq!(fib(2), vec![0, 1]);
        assert_eq!(fib(7), vec![0, 1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_fibonacci_terms_past_u64() {
        let terms = generate_fibonacci(100);
        assert_eq!(terms.len(), 100);
        assert_eq!(terms[99].to_string(), "218922995834555169026");
    }

    #[test]
    fn test_fibonacci_iter_matches_generator() {
        let from_iter: Vec<BigUint> = FibonacciIter::new().take(20).collect();
        assert_eq!(from_iter, generate_fibonacci(20));
    }

    #[test]
    fn test_fizz_buzz_fifteen() {
        let expected = vec![
            "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz", "13",
            "14", "FizzBuzz",
        ];
        assert_eq!(fizz_buzz(15).unwrap(), expected);
    }

    #[test]
    fn test_fizz_buzz_range_limits() {
        assert_eq!(fizz_buzz(1).unwrap(), vec!["1"]);
        assert_eq!(fizz_buzz(10_000).unwrap().len(), 10_000);
        assert!(matches!(fizz_buzz(0), Err(ExerciseError::OutOfRange { .. })));
        assert!(matches!(
            fizz_buzz(10_001),
            Err(ExerciseError::OutOfRange { value: 10_001, .. })
        ));
        assert!(matches!(fizz_buzz(-3), Err(ExerciseError::OutOfRange { .. })));
    }
}
