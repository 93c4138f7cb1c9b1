/// graduated plan - solve a 6 month payoff and export the summary
use payoff_planner_rs::{Account, DueDateRule, GraduatedPlanSolver, Money, PlanSummary, PlannerConfig, Rate};
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new().with_level(log::LevelFilter::Debug).init()?;

    let card = Account::new(
        Money::from_major(2_500),
        Money::from_major(3_000),
        Rate::from_bps(350),
    )?;

    let plan = GraduatedPlanSolver::new(PlannerConfig::default()).solve_detailed(&card, 6)?;
    for (month, payment) in plan.schedule.iter().enumerate() {
        println!("month {}: pay {}", month + 1, payment.to_cents());
    }

    let summary = PlanSummary::builder()
        .account(card)
        .schedule(plan.schedule)
        .due_date_rule(DueDateRule::new(15, 20)?)
        .build()?;

    println!("{}", summary.to_json_pretty()?);

    Ok(())
}
