//! Example functions demonstrating the scaffold.
//!
//! They give the settings object a consumer and the test layout something
//! to exercise; there is no business logic here.

use crate::config::Config;

/// Greeting message naming the configured working directory.
pub fn greet(config: &Config, name: &str) -> String {
    format!("Hello, {} from {}!", name, config.cwd.display())
}

/// Sum of two integers.
pub fn add_numbers(a: i64, b: i64) -> i64 {
    a + b
}

/// Iterative factorial. Negative inputs are unrepresentable by type;
/// `u128` holds every result up to `34!`.
pub fn factorial(n: u32) -> u128 {
    (2..=u128::from(n)).product()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn greet_names_the_cwd() {
        let cfg = Config::test_default(Path::new("/tmp/appseed"));
        assert_eq!(greet(&cfg, "World"), "Hello, World from /tmp/appseed!");
        assert_eq!(greet(&cfg, ""), "Hello,  from /tmp/appseed!");
    }

    #[test]
    fn add_numbers_sums() {
        assert_eq!(add_numbers(2, 3), 5);
        assert_eq!(add_numbers(0, 0), 0);
        assert_eq!(add_numbers(-1, 1), 0);
        assert_eq!(add_numbers(100, 200), 300);
    }

    #[test]
    fn factorial_values() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(10), 3_628_800);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
    }
}
