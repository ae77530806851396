use serde::{Deserialize, Serialize};

/// The signed-in user shown on the dashboard greeting and profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub title: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Emma Johnson".into(),
            title: "Plant Enthusiast".into(),
        }
    }
}

impl UserProfile {
    /// First word of the name, used in "Welcome, <first>".
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    /// Uppercased first character, used for the avatar.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .find(|c| !c.is_whitespace())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}
