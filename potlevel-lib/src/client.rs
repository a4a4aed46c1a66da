use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{instrument, Level};
use uuid::Uuid;

use crate::{Account, Balance, Pot};

/// The base URL of the Monzo API
pub const DEFAULT_BASE_URL: &str = "https://api.monzo.com";

/// The errors that can be returned by the [`Client`]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API answered with a non-200 status
    #[error("API request failed: {status} - {body}")]
    Api {
        /// The HTTP status of the response
        status: StatusCode,

        /// The raw response body
        body: String,
    },

    /// The request could not be sent, or the response body could not be read
    #[error("failed to reach the API")]
    Http(#[from] reqwest::Error),

    /// The API answered 200 but the payload was missing required fields
    #[error("malformed response from '{endpoint}'")]
    MalformedResponse {
        /// The endpoint that produced the payload
        endpoint: String,

        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// An account id parameter was empty
    #[error("account id must not be empty")]
    EmptyAccountId,

    /// A movement amount was not a positive integer
    #[error("amount must be a positive integer")]
    InvalidAmount,
}

/// A convenience alias for client results
pub type Result<T> = std::result::Result<T, Error>;

/// The direction of a money movement between an account and a pot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Money flows from the account into the pot
    Deposit,

    /// Money flows from the pot back into the account
    Withdraw,
}

impl Direction {
    fn endpoint(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }

    /// The form field naming the account on the other side of the movement
    fn counterparty_field(self) -> &'static str {
        match self {
            Self::Deposit => "source_account_id",
            Self::Withdraw => "destination_account_id",
        }
    }
}

#[derive(Debug, Deserialize)]
struct AccountsResponse {
    #[serde(default)]
    accounts: Vec<Account>,
}

#[derive(Debug, Deserialize)]
struct PotsResponse {
    #[serde(default)]
    pots: Vec<Pot>,
}

/// A client to the Monzo API.
///
/// The access token is supplied at construction time and attached to every
/// request as a bearer credential.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl Client {
    /// Create a client against the production API
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_url(access_token, DEFAULT_BASE_URL)
    }

    /// Create a client against an alternative base URL
    #[must_use]
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// List the accounts that the access token can see
    #[instrument(skip(self))]
    pub async fn accounts(&self) -> Result<Vec<Account>> {
        let response: AccountsResponse = self.get("accounts", &[]).await?;
        Ok(response.accounts)
    }

    /// Retrieve the balance for the given account
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAccountId`] without touching the network if
    /// `account_id` is empty.
    #[instrument(skip(self))]
    pub async fn balance(&self, account_id: &str) -> Result<Balance> {
        if account_id.is_empty() {
            return Err(Error::EmptyAccountId);
        }
        self.get("balance", &[("account_id", account_id)]).await
    }

    /// Retrieve the [`Pot`]s associated with the given account
    #[instrument(skip(self))]
    pub async fn pots(&self, account_id: &str) -> Result<Vec<Pot>> {
        if account_id.is_empty() {
            return Err(Error::EmptyAccountId);
        }
        let response: PotsResponse = self
            .get("pots", &[("current_account_id", account_id)])
            .await?;
        Ok(response.pots)
    }

    /// Move money between an account and a pot.
    ///
    /// A dedupe token is generated for the call unless one is supplied; the
    /// API uses it to guarantee at-most-once execution of this specific
    /// transfer. The updated pot is returned as confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAmount`] without touching the network if
    /// `amount` is zero.
    #[instrument(skip(self, dedupe_id))]
    pub async fn move_money(
        &self,
        direction: Direction,
        pot_id: &str,
        account_id: &str,
        amount: u32,
        dedupe_id: Option<&str>,
    ) -> Result<Pot> {
        if account_id.is_empty() {
            return Err(Error::EmptyAccountId);
        }
        if amount == 0 {
            return Err(Error::InvalidAmount);
        }

        let path = format!("pots/{}/{}", pot_id, direction.endpoint());
        let form = movement_form(direction, account_id, amount, dedupe_id);
        let pot = self.put_form(&path, &form).await?;

        tracing::event!(Level::DEBUG, ?direction, amount, "movement confirmed");

        Ok(pot)
    }

    /// Deposit money into a pot from the main account
    pub async fn deposit_into_pot(
        &self,
        pot_id: &str,
        source_account_id: &str,
        amount: u32,
    ) -> Result<Pot> {
        self.move_money(Direction::Deposit, pot_id, source_account_id, amount, None)
            .await
    }

    /// Withdraw money from a pot back into the main account
    pub async fn withdraw_from_pot(
        &self,
        pot_id: &str,
        destination_account_id: &str,
        amount: u32,
    ) -> Result<Pot> {
        self.move_money(
            Direction::Withdraw,
            pot_id,
            destination_account_id,
            amount,
            None,
        )
        .await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let response = self
            .http
            .get(format!("{}/{}", self.base_url, path))
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await?;

        parse(path, response).await
    }

    async fn put_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&'static str, String)],
    ) -> Result<T> {
        let response = self
            .http
            .put(format!("{}/{}", self.base_url, path))
            .bearer_auth(&self.access_token)
            .form(form)
            .send()
            .await?;

        parse(path, response).await
    }
}

/// Build the form body for a deposit or withdrawal.
///
/// The amount is string-encoded and a fresh UUID is used as the dedupe token
/// when the caller doesn't supply one.
fn movement_form(
    direction: Direction,
    account_id: &str,
    amount: u32,
    dedupe_id: Option<&str>,
) -> Vec<(&'static str, String)> {
    let dedupe_id = dedupe_id.map_or_else(|| Uuid::new_v4().to_string(), ToString::to_string);

    vec![
        (direction.counterparty_field(), account_id.to_string()),
        ("amount", amount.to_string()),
        ("dedupe_id", dedupe_id),
    ]
}

async fn parse<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if status != StatusCode::OK {
        return Err(Error::Api { status, body });
    }

    serde_json::from_str(&body).map_err(|source| Error::MalformedResponse {
        endpoint: path.to_string(),
        source,
    })
}

impl crate::Api for Client {
    async fn accounts(&self) -> Result<Vec<Account>> {
        Client::accounts(self).await
    }

    async fn balance(&self, account_id: &str) -> Result<Balance> {
        Client::balance(self, account_id).await
    }

    async fn pots(&self, account_id: &str) -> Result<Vec<Pot>> {
        Client::pots(self, account_id).await
    }

    async fn deposit_into_pot(
        &self,
        pot_id: &str,
        source_account_id: &str,
        amount: u32,
    ) -> Result<Pot> {
        Client::deposit_into_pot(self, pot_id, source_account_id, amount).await
    }

    async fn withdraw_from_pot(
        &self,
        pot_id: &str,
        destination_account_id: &str,
        amount: u32,
    ) -> Result<Pot> {
        Client::withdraw_from_pot(self, pot_id, destination_account_id, amount).await
    }
}
