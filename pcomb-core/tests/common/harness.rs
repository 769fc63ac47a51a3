//! Test harness for running fixture cases with stochastic variations

use crate::common::{grammar, Gen, Output, TestCase};

/// Result of running a test
#[derive(Debug)]
pub struct TestResult {
    pub passed: bool,
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub seed: u64,
    pub errors: Vec<String>,
}

/// Run a grammar and render its outcome as `(value, rest)` for comparison
fn outcome(grammar_name: &str, input: &str) -> Option<(Output, String)> {
    grammar(grammar_name)
        .run(input)
        .map(|(value, rest)| (value, rest.as_str().to_string()))
}

fn render(outcome: &Option<(Output, String)>) -> String {
    match outcome {
        Some((value, rest)) => format!("{:?} rest {:?}", value, rest),
        None => "no match".to_string(),
    }
}

fn expected_outcome(case: &TestCase, trailer: &str) -> Option<(Output, String)> {
    if !case.matches {
        return None;
    }
    let value = case
        .value
        .clone()
        .unwrap_or_else(|| panic!("{}: matching case needs a value", case.id));
    let rest = case.rest.clone().unwrap_or_default();
    Some((value, rest + trailer))
}

fn check(case: &TestCase, input: String, trailer: &str, seed: u64) -> TestResult {
    let actual = outcome(&case.grammar, &input);
    let expected = expected_outcome(case, trailer);

    let mut errors = Vec::new();
    match (&expected, &actual) {
        (None, Some(_)) => errors.push("Expected no match, got a match".to_string()),
        (Some(_), None) => errors.push("Expected a match, got no match".to_string()),
        (Some((exp_value, exp_rest)), Some((act_value, act_rest))) => {
            if exp_value != act_value {
                errors.push(format!("Value: expected {:?}, got {:?}", exp_value, act_value));
            }
            if exp_rest != act_rest {
                errors.push(format!("Rest: expected {:?}, got {:?}", exp_rest, act_rest));
            }
        }
        (None, None) => {}
    }

    // Parsers are pure: a second run must agree with the first
    if outcome(&case.grammar, &input) != actual {
        errors.push("Second run disagreed with the first".to_string());
    }

    TestResult {
        passed: errors.is_empty(),
        input,
        expected: render(&expected),
        actual: render(&actual),
        seed,
        errors,
    }
}

/// Run a single test case (canonical, no variations)
pub fn run_test(case: &TestCase) -> TestResult {
    check(case, case.input.clone(), "", 0)
}

/// Run test with a random trailer appended
///
/// The trailer starts with a character no fixture grammar consumes, so a
/// match must produce the same value and leave the trailer in the rest,
/// and a non-match must stay a non-match.
pub fn run_with_variations(case: &TestCase, gen: &mut Gen) -> TestResult {
    let trailer = gen.trailer();
    let input = format!("{}{}", case.input, trailer);
    check(case, input, &trailer, gen.seed)
}

impl TestResult {
    /// Print detailed failure info
    pub fn print_failure(&self, case_id: &str) {
        eprintln!("\n=== FAILED: {} ===", case_id);
        eprintln!("Seed: {} (set PCOMB_TEST_SEED={} to reproduce)", self.seed, self.seed);
        eprintln!("\nInput: {:?}", self.input);
        eprintln!("Expected: {}", self.expected);
        eprintln!("Actual:   {}", self.actual);
        eprintln!("\nErrors:");
        for e in &self.errors {
            eprintln!("  - {}", e);
        }
    }
}
