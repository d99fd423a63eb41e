use serde::{Deserialize, Serialize};
use std::fmt;

/// Home state of an employee. The JSON form is the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    #[serde(rename = "Tamil Nadu")]
    TamilNadu,
    Karnataka,
    Kerala,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::TamilNadu => "Tamil Nadu",
            State::Karnataka => "Karnataka",
            State::Kerala => "Kerala",
        }
    }

    /// Accepts the display name or a short code (TN, KA, KL), any case.
    /// Spaces, dashes and underscores are ignored so "tamil-nadu" works from a shell.
    pub fn from_input(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "tamilnadu" | "tn" => Some(State::TamilNadu),
            "karnataka" | "ka" => Some(State::Karnataka),
            "kerala" | "kl" => Some(State::Kerala),
            _ => None,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
