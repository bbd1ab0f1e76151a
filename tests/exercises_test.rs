use logic_exercises::{
    compute_call_cost, fizz_buzz, generate_fibonacci, is_palindrome, is_palindrome_with,
    is_prime, sum_even_numbers, AsciiNormalizer, ExerciseError,
};

#[test]
fn test_fibonacci_demo_values() {
    let terms: Vec<String> = generate_fibonacci(7).iter().map(|t| t.to_string()).collect();
    assert_eq!(terms, vec!["0", "1", "1", "2", "3", "5", "8"]);
    assert!(generate_fibonacci(0).is_empty());
    assert_eq!(generate_fibonacci(1).len(), 1);
}

#[test]
fn test_prime_demo_values() {
    let results: Vec<(i64, bool)> = [1, 2, 3, 4, 17, 18, 19, 20]
        .into_iter()
        .map(|v| (v, is_prime(v)))
        .collect();

    assert_eq!(
        results,
        vec![
            (1, false),
            (2, true),
            (3, true),
            (4, false),
            (17, true),
            (18, false),
            (19, true),
            (20, false),
        ]
    );
}

#[test]
fn test_palindrome_demo_values() {
    assert!(is_palindrome("reconocer"));
    assert!(is_palindrome("Anita lava la tina"));
    assert!(!is_palindrome("No es palindromo"));
    assert!(is_palindrome_with("Anita lava la tina", &AsciiNormalizer));
}

#[test]
fn test_even_sum_demo_values() {
    assert_eq!(sum_even_numbers(&[1, 2, 3, 4, 5, 6]), 12);
}

#[test]
fn test_call_cost_demo_values() {
    assert_eq!(compute_call_cost(12, 25).unwrap().to_string(), "45.00");
    assert_eq!(compute_call_cost(19, 45).unwrap().to_string(), "157.50");
    assert_eq!(compute_call_cost(19, 45).unwrap().cents(), 15_750);

    let unknown = compute_call_cost(99, 10).unwrap_err();
    assert!(matches!(unknown, ExerciseError::UnknownZone { key: 99 }));

    let negative = compute_call_cost(12, -1).unwrap_err();
    assert!(matches!(negative, ExerciseError::InvalidInput { .. }));
}

#[test]
fn test_fizzbuzz_demo_values() {
    assert_eq!(
        fizz_buzz(15).unwrap(),
        vec![
            "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz", "13",
            "14", "FizzBuzz"
        ]
    );
    assert!(matches!(fizz_buzz(0), Err(ExerciseError::OutOfRange { .. })));
    assert!(matches!(fizz_buzz(10_001), Err(ExerciseError::OutOfRange { .. })));
}

#[test]
fn test_every_exercise_is_idempotent() {
    assert_eq!(generate_fibonacci(30), generate_fibonacci(30));
    assert_eq!(is_prime(7919), is_prime(7919));
    assert_eq!(is_palindrome("Oso"), is_palindrome("Oso"));
    assert_eq!(sum_even_numbers(&[2, -4]), sum_even_numbers(&[2, -4]));
    assert_eq!(
        compute_call_cost(29, 12).unwrap(),
        compute_call_cost(29, 12).unwrap()
    );
    assert_eq!(fizz_buzz(100).unwrap(), fizz_buzz(100).unwrap());
}
