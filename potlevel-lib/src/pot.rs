use serde::Deserialize;

/// A Monzo pot
#[derive(Debug, Clone, Deserialize)]
pub struct Pot {
    /// The unique ID associated with the pot
    pub id: String,

    /// The name of the pot
    pub name: String,

    /// The pot's own balance, in minor units
    pub balance: i64,

    /// The currency code for this pot
    #[serde(default)]
    pub currency: String,

    /// Whether the pot has been deleted
    #[serde(default)]
    pub deleted: bool,
}
