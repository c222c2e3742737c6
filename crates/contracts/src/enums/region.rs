use serde::{Deserialize, Serialize};

/// Sales region of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "북부")]
    North,
    #[serde(rename = "남부")]
    South,
    #[serde(rename = "동부")]
    East,
    #[serde(rename = "서부")]
    West,
    #[serde(rename = "중부")]
    Central,
}

impl Region {
    /// Label used as the group-by key and as the coordinate table key
    pub fn label(&self) -> &'static str {
        match self {
            Region::North => "북부",
            Region::South => "남부",
            Region::East => "동부",
            Region::West => "서부",
            Region::Central => "중부",
        }
    }

    pub fn all() -> [Region; 5] {
        [
            Region::North,
            Region::South,
            Region::East,
            Region::West,
            Region::Central,
        ]
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
