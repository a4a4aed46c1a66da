//! The balance-leveling operation

use std::cmp::Ordering;

use crate::{client, Api, Pot};

/// Errors that can occur while running a [`Level`] operation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No account id was configured and the listing returned no accounts
    #[error("no account available")]
    NoAccount,

    /// No pot with the requested name exists on the account
    #[error("no pot found with name '{0}'")]
    NotFound(String),

    /// The difference between current and target balance does not fit in a
    /// movement amount
    #[error("adjustment of {0} minor units is out of range")]
    AmountOutOfRange(i64),

    /// The API client failed
    #[error(transparent)]
    Client(#[from] client::Error),
}

/// The movement needed to bring an account balance to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Adjustment {
    /// Surplus to be parked in the pot
    Deposit(u32),

    /// Shortfall to be drawn back out of the pot
    Withdraw(u32),
}

/// What a completed run did
#[derive(Debug)]
pub enum Outcome {
    /// The balance already matched the target; nothing was moved
    AlreadyLevel {
        /// The balance that matched the target
        balance: i64,
    },

    /// Surplus was deposited into the pot
    Deposited {
        /// The pot after the deposit, as confirmed by the API
        pot: Pot,

        /// The amount moved, in minor units
        amount: u32,
    },

    /// A shortfall was withdrawn from the pot
    Withdrew {
        /// The pot after the withdrawal, as confirmed by the API
        pot: Pot,

        /// The amount moved, in minor units
        amount: u32,
    },
}

/// A [`Level`] operation brings the main account balance to a target by
/// moving the difference into or out of a named pot.
///
/// The pot acts as overflow storage: a balance above the target is swept
/// into the pot, and a balance below the target is topped up from it.
#[derive(Debug)]
pub struct Level {
    pot_name: String,
    target_balance: i64,
    account_id: Option<String>,
}

impl Level {
    /// Create an operation targeting the named pot and balance (minor units)
    #[must_use]
    pub fn new(
        pot_name: impl Into<String>,
        target_balance: i64,
        account_id: Option<String>,
    ) -> Self {
        Self {
            pot_name: pot_name.into(),
            target_balance,
            account_id,
        }
    }

    /// Run the operation to completion.
    ///
    /// The sequence is strictly linear: resolve the account, fetch its
    /// balance, short-circuit on equality, resolve the pot, then issue
    /// exactly one deposit or withdrawal.
    ///
    /// # Errors
    ///
    /// Any API failure aborts the run; there is no retry and no rollback.
    pub async fn run(&self, api: &impl Api) -> Result<Outcome, Error> {
        let account_id = self.resolve_account_id(api).await?;
        tracing::info!(%account_id, "using account");

        let balance = api.balance(&account_id).await?.balance;
        tracing::info!(balance, "fetched current balance");

        let Some(adjustment) = plan(balance, self.target_balance)? else {
            tracing::info!(
                target = self.target_balance,
                "current balance is equal to the target, nothing to do"
            );
            return Ok(Outcome::AlreadyLevel { balance });
        };

        let pot = self.find_pot(api, &account_id).await?;
        tracing::info!(pot = %pot.name, pot_id = %pot.id, "found pot");

        match adjustment {
            Adjustment::Deposit(amount) => {
                tracing::info!(amount, "depositing into pot");
                let pot = api.deposit_into_pot(&pot.id, &account_id, amount).await?;
                Ok(Outcome::Deposited { pot, amount })
            }
            Adjustment::Withdraw(amount) => {
                tracing::info!(amount, "withdrawing from pot");
                let pot = api.withdraw_from_pot(&pot.id, &account_id, amount).await?;
                Ok(Outcome::Withdrew { pot, amount })
            }
        }
    }

    /// Prefer the configured account id; otherwise take the first account
    /// from the listing (and issue no listing call at all when configured).
    async fn resolve_account_id(&self, api: &impl Api) -> Result<String, Error> {
        if let Some(id) = &self.account_id {
            return Ok(id.clone());
        }

        api.accounts()
            .await?
            .into_iter()
            .next()
            .map(|account| account.id)
            .ok_or(Error::NoAccount)
    }

    /// Exact-match pot lookup among the account's non-deleted pots
    async fn find_pot(&self, api: &impl Api, account_id: &str) -> Result<Pot, Error> {
        api.pots(account_id)
            .await?
            .into_iter()
            .filter(|pot| !pot.deleted)
            .find(|pot| pot.name == self.pot_name)
            .ok_or_else(|| Error::NotFound(self.pot_name.clone()))
    }
}

/// Decide which single movement, if any, levels `current` to `target`.
///
/// A surplus is deposited and a shortfall is withdrawn; equality means no
/// movement at all.
fn plan(current: i64, target: i64) -> Result<Option<Adjustment>, Error> {
    let delta = current - target;
    let amount = u32::try_from(delta.unsigned_abs()).map_err(|_| Error::AmountOutOfRange(delta))?;

    match current.cmp(&target) {
        Ordering::Equal => Ok(None),
        Ordering::Greater => Ok(Some(Adjustment::Deposit(amount))),
        Ordering::Less => Ok(Some(Adjustment::Withdraw(amount))),
    }
}
