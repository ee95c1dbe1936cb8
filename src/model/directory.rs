use super::id::ObjectId;
use serde::{Deserialize, Serialize};

/// Application user (the `User` collection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Soft-delete flag
    #[serde(default)]
    pub deleted: bool,
}

/// CRM contact (the `Contact` collection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// CRM lead (the `Lead` collection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub lead_name: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        join_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

impl Contact {
    pub fn full_name(&self) -> String {
        join_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

impl Lead {
    pub fn display_name(&self) -> String {
        self.lead_name.clone().unwrap_or_default()
    }
}

/// Missing parts render as empty strings; the separator is always present
fn join_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or(""), last.unwrap_or(""))
}
