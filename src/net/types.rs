//! Wire types shared with the SuperTeam REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// User role. The variant order defines the privilege ranking used by the
/// route gate: `Viewer < Editor < Admin`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Viewer,
    Editor,
    Admin,
}

impl Role {
    /// Lowercase wire name, as the server sends and expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Editor => "editor",
            Role::Admin => "admin",
        }
    }

    /// Editors and admins may edit catalog entries.
    pub fn can_edit(self) -> bool {
        self >= Role::Editor
    }
}

impl std::str::FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "viewer" => Ok(Role::Viewer),
            "editor" => Ok(Role::Editor),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

/// The authenticated user record returned by `/auth/me` and login/register.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Successful login/register response: the bearer token plus the user record.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// A hero's six power stats, each 0-100.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Powerstats {
    pub intelligence: u32,
    pub strength: u32,
    pub speed: u32,
    pub durability: u32,
    pub power: u32,
    pub combat: u32,
}

/// Hero biography block. Fields the server may omit default to empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Biography {
    pub full_name: String,
    pub publisher: String,
    pub alignment: String,
}

/// Hero appearance block.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Appearance {
    pub gender: String,
    pub race: String,
}

/// A catalog hero as returned by `/heroes` and `/heroes/:id`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub powerstats: Powerstats,
    #[serde(default)]
    pub biography: Biography,
    #[serde(default)]
    pub appearance: Appearance,
}

/// One page of hero search results.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct HeroPage {
    #[serde(default)]
    pub items: Vec<Hero>,
    #[serde(default)]
    pub total: u64,
}

/// Result of `/teams/compare`. The algorithm is opaque to the client; only
/// the winner label and explanation are rendered.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CompareResult {
    pub winner: Option<String>,
    pub explanation: Option<String>,
}

/// A user row in the admin table.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: String,
}

/// Pagination metadata for `/admin/users`.
#[derive(Clone, Copy, Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

/// One page of the admin user listing.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub users: Vec<AdminUser>,
    #[serde(default)]
    pub pagination: Pagination,
}
