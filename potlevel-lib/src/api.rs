use crate::{client, Account, Balance, Pot};

/// The API surface the [`Level`](crate::Level) operation runs against.
///
/// [`Client`](crate::Client) is the real implementation; tests substitute a
/// mock so that the sequencing of calls can be asserted without a network.
#[allow(async_fn_in_trait)]
pub trait Api {
    /// List the available accounts
    async fn accounts(&self) -> client::Result<Vec<Account>>;

    /// Retrieve the balance for the given account
    async fn balance(&self, account_id: &str) -> client::Result<Balance>;

    /// Retrieve the pots associated with the given account
    async fn pots(&self, account_id: &str) -> client::Result<Vec<Pot>>;

    /// Deposit money into a pot from the main account
    async fn deposit_into_pot(
        &self,
        pot_id: &str,
        source_account_id: &str,
        amount: u32,
    ) -> client::Result<Pot>;

    /// Withdraw money from a pot back into the main account
    async fn withdraw_from_pot(
        &self,
        pot_id: &str,
        destination_account_id: &str,
        amount: u32,
    ) -> client::Result<Pot>;
}
