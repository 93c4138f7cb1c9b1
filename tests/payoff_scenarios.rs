use payoff_planner_rs::{
    due_day, project, project_to_payoff, solve_graduated_plan, Account, DueDateRule, Money,
    OpenEndedProjection, PaymentSchedule, PlannerConfig, PlannerError, Rate,
};
use rust_decimal_macros::dec;

fn reference_card() -> Account {
    Account::new(
        Money::from_major(1_000),
        Money::from_major(1_000),
        Rate::from_percentage(5),
    )
    .unwrap()
}

#[test]
fn minimum_payment_on_reference_card_never_pays_off() {
    let card = reference_card();
    let minimum = card.minimum_payment(&PlannerConfig::default());
    assert_eq!(minimum, Money::from_major(50));

    let result = project_to_payoff(&card, minimum, Money::ZERO);
    assert_eq!(result, OpenEndedProjection::Divergent);
    assert_eq!(result.months(), None);
    assert_eq!(result.total_interest(), None);
}

#[test]
fn seventy_five_a_month_terminates() {
    let card = reference_card();
    let result = project_to_payoff(&card, Money::from_major(75), Money::ZERO);

    let months = result.months().expect("finite months");
    let interest = result.total_interest().expect("finite interest");
    assert!(months > 1 && months < 360);
    assert!(interest.is_positive());
}

#[test]
fn six_month_graduated_plan_clears_balance() {
    let card = reference_card();
    let schedule = solve_graduated_plan(&card, 6).unwrap();

    let result = project(&card, &schedule);
    assert_eq!(result.len(), 6);
    assert!(result.final_balance() <= Money::from_decimal(dec!(0.10)));
}

#[test]
fn graduated_plans_clear_balance_across_horizons() {
    let balances = [dec!(150), dec!(999.99), dec!(4500), dec!(12000.5)];
    let rates = [dec!(0), dec!(0.015), dec!(0.045), dec!(0.08)];

    for balance in balances {
        for rate in rates {
            let card = Account::new(
                Money::from_decimal(balance),
                Money::from_major(5_000),
                Rate::from_decimal(rate),
            )
            .unwrap();

            for periods in [1, 6, 12, 24, 36] {
                let schedule = solve_graduated_plan(&card, periods).unwrap();
                let result = project(&card, &schedule);
                assert!(
                    result.final_balance() <= Money::from_decimal(dec!(0.10)),
                    "balance {} rate {} periods {} left {}",
                    balance,
                    rate,
                    periods,
                    result.final_balance()
                );
            }
        }
    }
}

#[test]
fn graduated_plan_rejects_empty_horizon() {
    let card = reference_card();
    assert_eq!(
        solve_graduated_plan(&card, 0),
        Err(PlannerError::InvalidHorizon { periods: 0 })
    );
}

#[test]
fn fixed_schedule_invariants_hold() {
    let card = reference_card();
    let schedule = PaymentSchedule::new(
        [0, 40, 75, 150, 50, 300, 500, 80]
            .iter()
            .map(|p| Money::from_major(*p))
            .collect(),
    )
    .unwrap();

    let first = project(&card, &schedule);
    let second = project(&card, &schedule);
    assert_eq!(first, second);

    let mut previous_balance = card.balance();
    let mut previous_interest = Money::ZERO;
    for record in first.iter() {
        assert!(record.ending_balance <= previous_balance);
        assert!(record.cumulative_interest >= previous_interest);
        assert!(!record.interest_accrued.is_negative());
        previous_balance = record.ending_balance;
        previous_interest = record.cumulative_interest;
    }

    // the first two periods stall and the schedule ends with a balance left
    assert_eq!(first.stalled_periods(), vec![1, 2]);
    assert!(!first.is_paid_off());

    let net: Money = first
        .iter()
        .map(|r| r.payment_applied - r.interest_accrued + r.unpaid_interest)
        .sum();
    assert!((net - (card.balance() - first.final_balance())).abs() <= Money::CENT);
    assert_eq!(first.total_unpaid_interest(), Money::from_major(60));
}

#[test]
fn payment_below_interest_diverges_for_any_balance() {
    for balance in [600, 1_000, 5_000] {
        let card = Account::new(
            Money::from_major(balance),
            Money::from_major(balance),
            Rate::from_percentage(6),
        )
        .unwrap();
        let minimum = card.minimum_payment(&PlannerConfig::default());
        assert!(minimum < card.monthly_interest());
        assert!(project_to_payoff(&card, minimum, Money::ZERO).is_divergent());
    }
}

#[test]
fn due_dates_are_weekdays() {
    use payoff_planner_rs::chrono::{Datelike, Weekday};

    for cutoff in 1..=28 {
        for grace in 0..=31 {
            let rule = DueDateRule::new(cutoff, grace).unwrap();
            let date = rule.due_date_for_statement(2024, 1).unwrap();

            assert!(!matches!(date.weekday(), Weekday::Sat | Weekday::Sun));
            assert_eq!(due_day(cutoff, grace).unwrap(), date.day());
        }
    }
}
