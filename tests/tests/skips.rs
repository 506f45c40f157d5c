use pacer::prelude::*;
use pacer_tests::*;
use std::collections::HashMap;
use std::sync::atomic::Ordering;

#[tracing_test::traced_test]
#[test]
fn non_positive_target_publishes_nothing() {
    for tps in ["0", "-10", "0.0"] {
        let sink = run_once(CalculatorConfig::new().target_tps(tps).fixed_users("5"));
        assert!(sink.is_empty(), "published for target {tps}");
    }
    assert!(logs_contain("skipping calculation"));
}

#[test]
fn skip_keeps_previous_values() {
    let sink = MemorySink::new();
    let mut element = CalculatorElement::new(CalculatorConfig::new().fixed_users("5"), sink.clone());

    element.test_started(None);
    let before = sink.snapshot();

    element.config_mut().target_tps = "0".to_string();
    element.test_started(None);

    assert_eq!(sink.snapshot(), before);
    assert_eq!(element.last_published(), None);
}

#[test]
fn malformed_target_matches_its_fallback() {
    let malformed = run_once(CalculatorConfig::new().target_tps("abc"));
    let fallback = run_once(CalculatorConfig::new().target_tps("0"));
    assert_eq!(malformed.snapshot(), fallback.snapshot());
    assert!(malformed.is_empty());
}

#[test]
fn malformed_optional_counts_as_given() {
    // "lots" parses to the fallback 0 users: concurrency zero, think time floors at zero
    let sink = run_once(CalculatorConfig::new().fixed_users("lots"));
    assert_eq!(published(&sink), Some(("0".to_string(), "0".to_string())));
}

#[tracing_test::traced_test]
#[test]
fn out_of_range_results_are_swallowed() {
    let zero_k = run_once(CalculatorConfig::new().transactions_per_iteration("0"));
    assert!(zero_k.is_empty());

    let negative_users = run_once(CalculatorConfig::new().fixed_users("-3"));
    assert!(negative_users.is_empty());

    let negative_think = run_once(CalculatorConfig::new().desired_think_ms("-5000"));
    assert!(negative_think.is_empty());

    assert!(logs_contain("Calculation skipped"));
}

#[tracing_test::traced_test]
#[test]
fn sink_failure_is_swallowed() {
    let sink = UnavailableSink::default();
    let mut element = CalculatorElement::new(CalculatorConfig::default(), &sink);

    element.test_started(Some("agent-7"));

    assert_eq!(sink.attempts.load(Ordering::Relaxed), 1);
    assert_eq!(element.last_published(), None);
    assert!(logs_contain("Publication failed"));
}

#[test]
fn fanout_failure_restores_every_sink() {
    let vars = MemorySink::new();
    let props = MemorySink::new();
    let sink = FanoutSink::new()
        .with(vars.clone())
        .with(UnavailableSink::default())
        .with(props.clone());
    let calculator = ThroughputCalculator::new(sink);

    // Nothing published yet: the keys written to `vars` must disappear again.
    let outputs = calculator.compute_and_publish(&CalculatorInputs::new(10., 200.));
    assert_eq!(outputs, None);
    assert!(vars.is_empty());
    assert!(props.is_empty());

    // A previous run's values survive a failed one untouched.
    vars.publish(&CalculatorOutputs { users: 7, think_ms: 250 }.entries())
        .unwrap();
    let before = vars.snapshot();

    let outputs = calculator.compute_and_publish(&CalculatorInputs::new(10., 200.).fixed_users(5));
    assert_eq!(outputs, None);
    assert_eq!(vars.snapshot(), before);
    assert_eq!(calculator.sink().get(OUT_USERS_KEY).as_deref(), Some("7"));
    assert!(props.is_empty());
}

#[test]
fn property_bag_defaults() {
    let props = HashMap::from([("TPSCalculator.fixedUsers".to_string(), "5".to_string())]);
    let sink = run_once(CalculatorConfig::from_properties(&props));
    assert_eq!(published(&sink), Some(("5".to_string(), "300".to_string())));
}
