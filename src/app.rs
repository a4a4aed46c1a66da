use clap::Parser;
use potlevel_lib::{level, level::Outcome, Client, Level};

use crate::config;

/// Level a Monzo current account balance against a savings pot
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Name of the savings pot
    #[arg(long)]
    pub pot: String,

    /// Desired account balance, in minor units (pence)
    #[arg(long)]
    pub balance: i64,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub struct App {
    client: Client,
    level: Level,
}

impl App {
    pub fn new(args: Args) -> Result<Self, config::Error> {
        let config = config::load()?;

        let client = Client::new(config.access_token);
        let level = Level::new(args.pot, args.balance, config.account_id);

        Ok(Self { client, level })
    }

    pub async fn run(&self) -> Result<(), level::Error> {
        match self.level.run(&self.client).await? {
            Outcome::AlreadyLevel { balance } => {
                tracing::info!("balance already level at {}", balance);
            }
            Outcome::Deposited { pot, amount } => {
                tracing::info!(
                    "deposited {} into '{}'",
                    format_currency(&pot.currency, i64::from(amount)),
                    pot.name
                );
            }
            Outcome::Withdrew { pot, amount } => {
                tracing::info!(
                    "withdrew {} from '{}'",
                    format_currency(&pot.currency, i64::from(amount)),
                    pot.name
                );
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App").field("level", &self.level).finish()
    }
}

fn format_currency(currency: &str, amount: i64) -> String {
    match rusty_money::iso::find(currency) {
        Some(currency) => rusty_money::Money::from_minor(amount, currency).to_string(),
        None => format!("{} {}", amount, currency),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{format_currency, Args};

    #[test]
    fn parse_args() {
        let args = Args::try_parse_from(["potlevel", "--pot", "Savings", "--balance", "5000"])
            .unwrap();
        assert_eq!(args.pot, "Savings");
        assert_eq!(args.balance, 5000);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn pot_and_balance_are_required() {
        assert!(Args::try_parse_from(["potlevel", "--pot", "Savings"]).is_err());
        assert!(Args::try_parse_from(["potlevel", "--balance", "5000"]).is_err());
    }

    #[test]
    fn formats_known_currencies() {
        assert_eq!(format_currency("GBP", 2000), "£20.00");
    }

    #[test]
    fn falls_back_to_minor_units_for_unknown_currencies() {
        assert_eq!(format_currency("???", 2000), "2000 ???");
    }
}
