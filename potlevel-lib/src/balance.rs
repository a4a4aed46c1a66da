use serde::Deserialize;

/// The balance of a Monzo account, in minor currency units
///
/// The balance is fetched fresh on every run and never cached.
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    /// The current account balance, in minor units (pence)
    pub balance: i64,

    /// The account balance including all pots
    #[serde(default)]
    pub total_balance: i64,

    /// ISO 4217 currency code
    #[serde(default)]
    pub currency: String,

    /// Amount spent today, in minor units
    #[serde(default)]
    pub spend_today: i64,
}

#[cfg(test)]
mod tests {
    use super::Balance;

    #[test]
    fn deserialise_json() {
        let raw = r#"{"balance": 5000, "total_balance": 6000, "currency": "GBP", "spend_today": 0}"#;
        let balance: Balance = serde_json::from_str(raw).unwrap();
        assert_eq!(balance.balance, 5000);
        assert_eq!(balance.currency, "GBP");
    }

    #[test]
    fn balance_field_is_required() {
        assert!(serde_json::from_str::<Balance>(r#"{"currency": "GBP"}"#).is_err());
    }
}
