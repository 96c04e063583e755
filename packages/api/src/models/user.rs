use serde::Serialize;

/// Body of `POST /v1/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /users`. Never kept after the request completes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_uses_camel_case_keys() {
        let user = NewUser {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            age: 36,
            email: "ada@example.com".into(),
            password: "secret".into(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["age"], 36);
        assert!(json.get("first_name").is_none());
    }
}
