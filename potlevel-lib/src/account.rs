use serde::Deserialize;

/// A Monzo current account
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    /// The unique ID associated with the account
    pub id: String,

    /// A human-readable description of the account
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::Account;

    #[test]
    fn deserialise_json() {
        let raw = r#"{"id": "acc_00009237aqC8c5umZmrRdh", "description": "Peter Pan's Account"}"#;
        let account: Account = serde_json::from_str(raw).unwrap();
        assert_eq!(account.id, "acc_00009237aqC8c5umZmrRdh");
        assert_eq!(account.description, "Peter Pan's Account");
    }

    #[test]
    fn id_is_required() {
        let raw = r#"{"description": "no id"}"#;
        assert!(serde_json::from_str::<Account>(raw).is_err());
    }
}
