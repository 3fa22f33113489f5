use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Buy,
    Sell,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Buy => "BUY",
            Direction::Sell => "SELL",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Direction> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Some(Direction::Buy),
            "SELL" => Some(Direction::Sell),
            _ => None,
        }
    }
}

/// Lifecycle state of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStatus {
    Active,
    Achieved,
    Canceled,
}

impl SignalStatus {
    pub const ALL: [SignalStatus; 3] = [
        SignalStatus::Active,
        SignalStatus::Achieved,
        SignalStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalStatus::Active => "active",
            SignalStatus::Achieved => "achieved",
            SignalStatus::Canceled => "canceled",
        }
    }
}

impl fmt::Display for SignalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visibility classification of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalTag {
    Free,
    Vip,
    Both,
}

impl SignalTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalTag::Free => "free",
            SignalTag::Vip => "vip",
            SignalTag::Both => "both",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<SignalTag> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Some(SignalTag::Free),
            "vip" => Some(SignalTag::Vip),
            "both" => Some(SignalTag::Both),
            _ => None,
        }
    }

    pub fn reaches_free(&self) -> bool {
        matches!(self, SignalTag::Free | SignalTag::Both)
    }

    pub fn reaches_vip(&self) -> bool {
        matches!(self, SignalTag::Vip | SignalTag::Both)
    }
}

impl fmt::Display for SignalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The channel a viewer entered the feed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerTier {
    Free,
    Vip,
}

impl ViewerTier {
    /// Filter preselected when a viewer enters through this channel.
    pub fn default_filter(&self) -> TagFilter {
        match self {
            ViewerTier::Free => TagFilter::Free,
            ViewerTier::Vip => TagFilter::All,
        }
    }
}

/// Feed sub-filter a VIP viewer may toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagFilter {
    All,
    Free,
    Vip,
}

/// Audience a share message is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Channel {
    Vip,
    Free,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Vip => write!(f, "VIP"),
            Channel::Free => write!(f, "FREE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_stored_record() {
        assert_eq!(serde_json::to_string(&Direction::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::to_string(&SignalStatus::Achieved).unwrap(), "\"achieved\"");
        assert_eq!(serde_json::to_string(&SignalTag::Both).unwrap(), "\"both\"");
    }

    #[test]
    fn both_reaches_every_audience() {
        assert!(SignalTag::Both.reaches_free());
        assert!(SignalTag::Both.reaches_vip());
        assert!(!SignalTag::Vip.reaches_free());
        assert!(!SignalTag::Free.reaches_vip());
    }

    #[test]
    fn entry_channel_preselects_filter() {
        assert_eq!(ViewerTier::Vip.default_filter(), TagFilter::All);
        assert_eq!(ViewerTier::Free.default_filter(), TagFilter::Free);
    }

    #[test]
    fn loose_parsing() {
        assert_eq!(Direction::from_str_loose(" sell "), Some(Direction::Sell));
        assert_eq!(SignalTag::from_str_loose("VIP"), Some(SignalTag::Vip));
        assert_eq!(SignalTag::from_str_loose("gold"), None);
    }
}
