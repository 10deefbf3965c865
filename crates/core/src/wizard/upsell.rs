use serde::{Deserialize, Serialize};

/// The two follow-up actions offered on the success screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsellChoice {
    /// Upgrade the free listing to the paid tier.
    Upgrade,
    /// Stay on the free plan.
    Decline,
}

impl UpsellChoice {
    /// Final display-only message for this choice.
    pub fn message(self) -> &'static str {
        match self {
            Self::Upgrade => {
                "Great choice! In a real app, you would now be redirected to our secure payment page."
            }
            Self::Decline => {
                "No problem! Your free account is all set. In a real app, you would now be taken to your merchant dashboard."
            }
        }
    }
}
