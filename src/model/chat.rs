//! Chat Assistant
//!
//! Keyword-routed canned replies for the floating assistant. The rules are
//! tested in order and the first hit wins, so a message mentioning both
//! "neighborhood" and "price" gets the pricing answer.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

/// One transcript entry. The window alternates one user entry and one
/// generated bot entry per submitted message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        ChatMessage {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        ChatMessage {
            speaker: Speaker::Bot,
            text: text.into(),
        }
    }
}

/// Opening bot message for a fresh transcript.
pub const GREETING: &str =
    "Hello! I'm your Boston real estate assistant. How can I help you today?";

/// Pick the canned reply for a user message.
///
/// There is no conversation memory: only the latest message is inspected,
/// case-insensitively.
pub fn reply(input: &str) -> &'static str {
    let message = input.to_lowercase();

    if message.contains("price") || message.contains("predict") {
        "I can help you predict house prices! Use our ML prediction tool by entering property features like crime rate, number of rooms, and neighborhood characteristics."
    } else if message.contains("neighborhood") || message.contains("area") {
        "Boston has many great neighborhoods! Popular areas include Back Bay, Beacon Hill, and South End. Each has different characteristics affecting property values."
    } else if message.contains("feature") || message.contains("factor") {
        "Key factors affecting Boston house prices include: number of rooms (RM), crime rate (CRIM), proximity to employment centers (DIS), and neighborhood characteristics."
    } else if message.contains("property") || message.contains("house") {
        "Browse our property listings to find homes across Boston. You can filter by neighborhood, price range, bedrooms, and property type."
    } else if message.contains("help") || message.contains("how") {
        "I can help with property searches, price predictions, neighborhood information, and explaining housing market factors. What would you like to know?"
    } else {
        "That's interesting! I specialize in Boston real estate. Feel free to ask about property prices, neighborhoods, or market trends."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_keyword_routes_to_the_prediction_tool_in_any_case() {
        let expected = reply("price");
        assert!(expected.contains("prediction tool"));
        assert_eq!(reply("What is the PRICE of this?"), expected);
        assert_eq!(reply("can you Predict something"), expected);
    }

    #[test]
    fn unknown_input_gets_the_default_reply() {
        let fallback = reply("zzz");
        assert!(fallback.starts_with("That's interesting!"));
        assert_eq!(reply(""), fallback);
    }

    #[test]
    fn earlier_rules_win_when_several_match() {
        // "price" outranks "neighborhood", which outranks "house".
        assert_eq!(reply("price of a neighborhood house"), reply("price"));
        assert_eq!(reply("neighborhood house"), reply("neighborhood"));
    }

    #[test]
    fn each_rule_is_reachable() {
        let replies = [
            reply("price"),
            reply("area"),
            reply("factor"),
            reply("house"),
            reply("how"),
            reply("zzz"),
        ];
        for (i, a) in replies.iter().enumerate() {
            for b in &replies[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
