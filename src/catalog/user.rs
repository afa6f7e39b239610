use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    M,
    F,
}

/// Owner of one or more categories.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub sex: Sex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_user_with_lowercase_sex() {
        let s = r#"{ "id": 2, "name": "Anna", "sex": "f" }"#;
        let expected = User {
            id: 2,
            name: "Anna".to_string(),
            sex: Sex::F,
        };
        match serde_json::from_str::<User>(s) {
            Ok(x) => assert_eq!(x, expected),
            Err(_) => assert!(false, "Did not parse json string."),
        }
    }

    #[test]
    fn rejects_unknown_sex() {
        let s = r#"{ "id": 2, "name": "Anna", "sex": "x" }"#;
        assert!(serde_json::from_str::<User>(s).is_err());
    }
}
