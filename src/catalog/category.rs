use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub title: String,
    /// Usually a single emoji, shown in front of the title.
    pub icon: String,
    pub owner_id: u32,
}

impl Category {
    /// The label shown in the category column, e.g. "🍏 - Fruits".
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_owner_id() {
        let s = r#"{ "id": 3, "title": "Fruits", "icon": "🍏", "ownerId": 2 }"#;
        let category: Category = serde_json::from_str(s).unwrap();
        assert_eq!(category.owner_id, 2);
        assert_eq!(category.label(), "🍏 - Fruits");
    }
}
