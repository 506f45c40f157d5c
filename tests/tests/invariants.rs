use pacer::prelude::*;
use pacer_tests::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_inputs(rng: &mut SmallRng) -> CalculatorInputs {
    let mut inputs = CalculatorInputs::new(rng.gen_range(0.1..5_000.), rng.gen_range(0.0..3_000.))
        .transactions_per_iteration(rng.gen_range(1..10));
    if rng.gen_bool(0.5) {
        inputs = inputs.desired_think_ms(rng.gen_range(0.0..10_000.));
    }
    if rng.gen_bool(0.5) {
        inputs = inputs.fixed_users(rng.gen_range(0..2_000));
    }
    inputs
}

#[test]
fn outputs_never_under_provision() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    for _ in 0..1_000 {
        let inputs = random_inputs(&mut rng);
        let report = compute(&inputs).unwrap();
        let k = inputs.transactions_per_iteration as f64;
        let r = inputs.response_secs();

        match report.mode {
            Mode::SolveUsers => {
                let z = report.raw_think_secs;
                let exact = inputs.target_tps * (r + z) / k;
                assert!(report.outputs.users as f64 >= exact - 1e-9, "{inputs:?}");
                assert!((report.outputs.users as f64) < exact + 1., "{inputs:?}");
            }
            Mode::SolveThinkTime => {
                let exact_ms = report.raw_think_secs.max(0.) * 1000.;
                assert!(report.outputs.think_ms as f64 >= exact_ms - 1e-6, "{inputs:?}");
                assert!((report.outputs.think_ms as f64) < exact_ms + 1., "{inputs:?}");
            }
            Mode::ZeroThinkTime => assert_eq!(report.outputs.think_ms, 0),
            Mode::Fixed => assert!(report.achievable_tps.is_some()),
        }
    }
}

#[test]
fn repeated_runs_publish_identical_values() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..200 {
        let inputs = random_inputs(&mut rng);
        let sink = MemorySink::new();
        let calculator = ThroughputCalculator::new(sink.clone());

        let first = calculator.compute_and_publish(&inputs);
        let snapshot = sink.snapshot();
        let second = calculator.compute_and_publish(&inputs);

        assert_eq!(first, second);
        assert_eq!(sink.snapshot(), snapshot);
        assert_eq!(
            published(&sink),
            first.map(|o| (o.users.to_string(), o.think_ms.to_string()))
        );
    }
}

#[test]
fn config_json_drives_a_run() {
    let config: CalculatorConfig = serde_json::from_str(
        r#"{
            "targetTPS": "10",
            "expectedResponseMs": "200",
            "desiredThinkMs": "1000",
            "fixedUsers": "",
            "transactionsPerIteration": "1"
        }"#,
    )
    .unwrap();

    let sink = run_once(config);
    assert_eq!(published(&sink), Some(("12".to_string(), "1000".to_string())));
}
