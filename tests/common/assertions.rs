//! Test assertion helpers
//!
//! Checks for minified output and size percentages.

/// Characters next to which no whitespace may survive minification
const STRUCTURAL: [char; 5] = ['{', '}', ':', ';', ','];

/// Assert that two floating-point values are approximately equal
#[allow(dead_code)]
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Float values not approximately equal:\n  actual: {}\n  expected: {}\n  diff: {} (epsilon: {})",
        actual, expected, diff, epsilon
    );
}

/// Assert that `output` has nothing left for the minifier to remove
///
/// No comments, no whitespace runs, no whitespace around structural
/// punctuation, no `;}` and no surrounding whitespace.
#[allow(dead_code)]
pub fn assert_fully_minified(output: &str) {
    assert_eq!(output.trim(), output, "output has surrounding whitespace");
    assert!(!output.contains("/*"), "output still has a comment: {}", output);
    assert!(!output.contains(";}"), "output has ';}}': {}", output);

    let chars: Vec<char> = output.chars().collect();
    for (i, window) in chars.windows(2).enumerate() {
        let (a, b) = (window[0], window[1]);
        assert!(
            !(a.is_whitespace() && b.is_whitespace()),
            "whitespace run at char {} in {}",
            i,
            output
        );
        assert!(
            !(a.is_whitespace() && STRUCTURAL.contains(&b))
                && !(STRUCTURAL.contains(&a) && b.is_whitespace()),
            "whitespace next to punctuation at char {} in {}",
            i,
            output
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq_pass() {
        assert_approx_eq(6.7, 6.7, 0.01);
        assert_approx_eq(12.5, 12.45, 0.1);
    }

    #[test]
    #[should_panic(expected = "Float values not approximately equal")]
    fn test_assert_approx_eq_fail() {
        assert_approx_eq(0.75, 0.80, 0.01);
    }

    #[test]
    fn test_assert_fully_minified_pass() {
        assert_fully_minified(".a,.b{margin:0 auto}");
    }

    #[test]
    #[should_panic(expected = "whitespace next to punctuation")]
    fn test_assert_fully_minified_fail() {
        assert_fully_minified(".a { top:0}");
    }
}
