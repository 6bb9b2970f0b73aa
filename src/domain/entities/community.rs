use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Community {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Community {
    pub fn new(id: i64, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
        }
    }
}

/// The slice of a community embedded by the joined posts read. Only the
/// name travels with each post row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommunityRef {
    pub name: String,
}
