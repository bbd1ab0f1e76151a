/// 試除法判斷質數，只除到 floor(sqrt(value))
pub fn is_prime(value: i64) -> bool {
    if value < 2 {
        return false;
    }
    if value % 2 == 0 {
        return value == 2;
    }

    // d <= value / d 等同 d * d <= value，但不會溢位
    let mut d = 3;
    while d <= value / d {
        if value % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// 加總偶數元素 (負偶數也算)
pub fn sum_even_numbers(numbers: &[i64]) -> i128 {
    numbers
        .iter()
        .filter(|&&n| n % 2 == 0)
        .map(|&n| i128::from(n))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small_values() {
        let primes: Vec<i64> = (-10..=30).filter(|&v| is_prime(v)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_is_prime_rejects_squares_of_primes() {
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(7919 * 7919));
    }

    #[test]
    fn test_is_prime_large_values() {
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(i64::MAX));
        assert!(!is_prime(i64::MIN));
    }

    #[test]
    fn test_sum_even_numbers() {
        assert_eq!(sum_even_numbers(&[1, 2, 3, 4, 5, 6]), 12);
        assert_eq!(sum_even_numbers(&[]), 0);
        assert_eq!(sum_even_numbers(&[1, 3, 5]), 0);
        assert_eq!(sum_even_numbers(&[-4, -3, 2]), -2);
    }

    #[test]
    fn test_sum_even_numbers_does_not_overflow() {
        let total = sum_even_numbers(&[i64::MAX - 1, i64::MAX - 1]);
        assert_eq!(total, 2 * i128::from(i64::MAX - 1));
    }
}
