use serde::{Deserialize, Serialize};

/// Product category of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "제품A")]
    ProductA,
    #[serde(rename = "제품B")]
    ProductB,
    #[serde(rename = "제품C")]
    ProductC,
    #[serde(rename = "제품D")]
    ProductD,
}

impl Category {
    /// Label shown in tables and used as the group-by key
    pub fn label(&self) -> &'static str {
        match self {
            Category::ProductA => "제품A",
            Category::ProductB => "제품B",
            Category::ProductC => "제품C",
            Category::ProductD => "제품D",
        }
    }

    pub fn all() -> [Category; 4] {
        [
            Category::ProductA,
            Category::ProductB,
            Category::ProductC,
            Category::ProductD,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for category in Category::all() {
            let json = format!("\"{}\"", category.label());
            assert_eq!(serde_json::from_str::<Category>(&json).unwrap(), category);
        }
        assert!(serde_json::from_str::<Category>("\"제품Z\"").is_err());
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Category::ProductC).unwrap();
        assert_eq!(json, "\"제품C\"");
    }
}
