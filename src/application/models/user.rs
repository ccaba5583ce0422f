use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Dashboard user
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// User identifier
    pub id: i64,
    /// Login name
    pub username: String,
    /// Contact e-mail
    #[serde(default)]
    pub email: String,
    /// Given name
    #[serde(default)]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: String,
    /// Display name
    #[serde(default)]
    pub full_name: String,
    /// Role, e.g. `admin`, `operator` or `viewer`
    #[serde(default)]
    pub role: String,
    /// Contact phone
    #[serde(default)]
    pub phone: Option<String>,
    /// Department
    #[serde(default)]
    pub department: Option<String>,
    /// Whether the user is paged for emergencies
    #[serde(default)]
    pub is_emergency_contact: bool,
    /// Whether the account is enabled
    #[serde(default)]
    pub is_active: bool,
    /// Registration time
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
}

impl User {
    /// Full name when known, otherwise the login name
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}
