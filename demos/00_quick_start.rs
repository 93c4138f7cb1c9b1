/// quick start - compare paying the minimum against paying more
use payoff_planner_rs::{project_to_payoff, Account, Money, PlannerConfig, Rate};
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new().with_level(log::LevelFilter::Info).init()?;

    // a maxed out $1,000 card at 5% a month
    let card = Account::new(
        Money::from_major(1_000),
        Money::from_major(1_000),
        Rate::from_percentage(5),
    )?;
    let config = PlannerConfig::default();

    for payment in [card.minimum_payment(&config), card.recommended_payment(&config)] {
        let projection = project_to_payoff(&card, payment, Money::ZERO);
        match (projection.months(), projection.total_interest()) {
            (Some(months), Some(interest)) => {
                println!("paying {} a month: {} months, {} interest", payment, months, interest.to_cents())
            }
            _ => println!("paying {} a month never clears the balance", payment),
        }
    }

    Ok(())
}
