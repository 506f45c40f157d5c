use pacer::prelude::*;
use pacer_tests::*;

fn pair(users: &str, think: &str) -> Option<(String, String)> {
    Some((users.to_string(), think.to_string()))
}

#[test]
fn think_time_given() {
    let sink = run_once(
        CalculatorConfig::new()
            .target_tps("10")
            .expected_response_ms("200")
            .desired_think_ms("1000")
            .transactions_per_iteration("1"),
    );
    assert_eq!(published(&sink), pair("12", "1000"));
}

#[test]
fn users_given() {
    let sink = run_once(
        CalculatorConfig::new()
            .target_tps("10")
            .expected_response_ms("200")
            .fixed_users("5"),
    );
    assert_eq!(published(&sink), pair("5", "300"));
}

#[test]
fn users_given_exceeding_target() {
    let sink = run_once(
        CalculatorConfig::new()
            .target_tps("100")
            .expected_response_ms("200")
            .fixed_users("5"),
    );
    assert_eq!(published(&sink), pair("5", "0"));
}

#[test]
fn nothing_given() {
    let sink = run_once(
        CalculatorConfig::new()
            .target_tps("10")
            .expected_response_ms("200")
            .transactions_per_iteration("2"),
    );
    assert_eq!(published(&sink), pair("1", "0"));
}

#[tracing_test::traced_test]
#[test]
fn both_given_echoes_inputs() {
    let sink = run_once(
        CalculatorConfig::new()
            .target_tps("1000")
            .expected_response_ms("200")
            .desired_think_ms("300.5")
            .fixed_users("10"),
    );
    assert_eq!(published(&sink), pair("10", "301"));
    // 10 / 0.5005 s, far below the target which is left unreconciled
    assert!(logs_contain("Achievable TPS = 19.98"));
}

#[test]
fn defaults_only() {
    let sink = run_once(CalculatorConfig::default());
    assert_eq!(published(&sink), pair("2", "0"));
}
