//! Behavioural properties of the projection engine across many inputs

use approx::assert_relative_eq;
use chrono::NaiveDate;
use savings_projection::rates::{annual_to_periodic, periodic_to_annual};
use savings_projection::{
    Outcome, PeriodicityUnit, ProjectionEngine, ProjectionInput, ProjectionResult, RateSpec,
    TerminationReason,
};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn project(
    target: f64,
    initial: f64,
    contribution: f64,
    rate: RateSpec,
    unit: PeriodicityUnit,
) -> ProjectionResult {
    let input =
        ProjectionInput::new(target, initial, contribution, rate, unit).with_start_date(start());
    ProjectionEngine::default().project(&input).unwrap()
}

/// A spread of scenarios covering every periodicity, zero and non-zero rates
fn scenarios() -> Vec<ProjectionResult> {
    let mut results = Vec::new();
    for unit in PeriodicityUnit::ALL {
        for &(target, initial, contribution, rate) in &[
            (10_000.0, 0.0, 100.0, 0.0),
            (10_000.0, 500.0, 50.0, 7.5),
            (1_000_000.0, 25_000.0, 0.0, 3.0),
            (5_000.0, 0.0, 0.0, 4.0),
            (2_500.0, 2_400.0, 0.0, 0.1),
        ] {
            results.push(project(target, initial, contribution, RateSpec::annual(rate), unit));
        }
    }
    results
}

#[test]
fn test_closing_balances_never_decrease() {
    for result in scenarios() {
        for pair in result.records().windows(2) {
            assert!(pair[1].closing_balance >= pair[0].closing_balance);
        }
    }
}

#[test]
fn test_rows_chain_and_are_contiguous() {
    for result in scenarios() {
        for (idx, record) in result.records().iter().enumerate() {
            assert_eq!(record.period as usize, idx + 1);
        }
        for pair in result.records().windows(2) {
            assert_eq!(pair[0].closing_balance, pair[1].opening_balance);
            assert!(pair[1].date > pair[0].date);
        }
        if let Some(first) = result.records().first() {
            assert_eq!(first.opening_balance, result.initial_balance());
        }
    }
}

#[test]
fn test_rate_round_trip() {
    for n in [1u32, 2, 3, 4, 6, 12] {
        for r in [0.0, 0.25, 2.0, 5.0, 10.0, 35.0] {
            let back = annual_to_periodic(periodic_to_annual(r, n).unwrap(), n).unwrap();
            assert_relative_eq!(back, r, epsilon = 1e-12, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_always_terminates_within_cap() {
    for result in scenarios() {
        assert!(result.len() as u32 <= result.max_periods());
        match result.termination() {
            TerminationReason::TargetReached => assert!(result.final_balance() >= result.target()),
            TerminationReason::PeriodCapExceeded => {
                assert_eq!(result.len() as u32, result.max_periods());
                assert!(result.final_balance() < result.target());
            }
        }
    }
}

#[test]
fn test_already_met_target() {
    let result = project(1000.0, 1000.0, 0.0, RateSpec::annual(5.0), PeriodicityUnit::Annual);
    assert!(result.is_empty());
    assert_eq!(result.termination(), TerminationReason::TargetReached);
    assert_eq!(result.outcome(), Outcome::AlreadyMet);
}

#[test]
fn test_unreachable_target() {
    let result = project(1_000_000.0, 0.0, 0.0, RateSpec::annual(0.0), PeriodicityUnit::Annual);
    assert_eq!(result.termination(), TerminationReason::PeriodCapExceeded);
    assert_eq!(result.len(), 100);
}

#[test]
fn test_concrete_compounding() {
    let result = project(1100.0, 1000.0, 0.0, RateSpec::annual(10.0), PeriodicityUnit::Annual);
    assert_eq!(result.len(), 1);
    let row = result.get(0).unwrap();
    assert_eq!(row.opening_balance, 1000.0);
    assert_relative_eq!(row.interest, 100.0, max_relative = 1e-12);
    assert_relative_eq!(row.closing_balance, 1100.0, max_relative = 1e-12);
    assert_eq!(result.termination(), TerminationReason::TargetReached);
}

#[test]
fn test_contribution_driven_growth() {
    let result = project(500.0, 0.0, 100.0, RateSpec::annual(0.0), PeriodicityUnit::Monthly);
    let closings: Vec<f64> = result.records().iter().map(|r| r.closing_balance).collect();
    assert_eq!(closings, vec![100.0, 200.0, 300.0, 400.0, 500.0]);
}

#[test]
fn test_totals_reconcile() {
    for result in scenarios() {
        let expected =
            result.initial_balance() + result.total_interest() + result.total_contributions();
        assert_relative_eq!(result.final_balance(), expected, epsilon = 1e-9, max_relative = 1e-6);
    }
}

#[test]
fn test_equivalent_rates_agree_across_cadences() {
    // 6% annual compounded monthly for a year equals 6% annual applied once
    let monthly = ProjectionEngine::new(savings_projection::ProjectionConfig {
        horizon_years: 1,
        ..Default::default()
    })
    .project(
        &ProjectionInput::new(
            f64::MAX,
            1000.0,
            0.0,
            RateSpec::annual(6.0),
            PeriodicityUnit::Monthly,
        )
        .with_start_date(start()),
    )
    .unwrap();
    assert_relative_eq!(monthly.final_balance(), 1060.0, max_relative = 1e-9);
}

#[test]
fn test_concurrent_calls_are_independent() {
    let engine = ProjectionEngine::default();
    let rate = RateSpec::annual(4.0);
    let input = ProjectionInput::new(20_000.0, 100.0, 150.0, rate, PeriodicityUnit::Monthly)
        .with_start_date(start());
    let expected = engine.project(&input).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| engine.project(&input).unwrap())).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
