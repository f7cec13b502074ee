//! Domain types shared by the screens and the data provider.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Business segments a member or referral can belong to.
pub const SEGMENTS: [&str; 6] = [
    "Tecnologia",
    "Investimentos",
    "Logística",
    "Varejo",
    "Saúde",
    "Educação",
];

/// Membership tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberLevel {
    /// Basic tier
    #[serde(rename = "membro")]
    Member,
    /// Partner tier
    #[serde(rename = "socio")]
    Partner,
    /// Top tier
    Infinity,
}

impl MemberLevel {
    /// Badge label shown next to the member
    pub fn label(&self) -> &'static str {
        match self {
            MemberLevel::Member => "Member",
            MemberLevel::Partner => "Partner",
            MemberLevel::Infinity => "Infinity",
        }
    }
}

/// A directory entry representing a network participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub company: String,
    pub segment: String,
    pub level: MemberLevel,
    /// Avatar URL, display only
    pub photo: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Member {
    /// Social handles that are present, paired with their network name
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        let mut links = Vec::new();
        if let Some(handle) = &self.instagram {
            links.push(("Instagram", handle.as_str()));
        }
        if let Some(handle) = &self.linkedin {
            links.push(("LinkedIn", handle.as_str()));
        }
        if let Some(address) = &self.email {
            links.push(("Email", address.as_str()));
        }
        links
    }
}

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The local user
    Me,
    /// The other participant
    Other,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub timestamp: DateTime<Local>,
    pub sender: Sender,
}

/// Conversation summary shown in the chat list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub member_name: String,
    pub member_photo: String,
    pub last_message: String,
    pub timestamp: DateTime<Local>,
    pub unread: u32,
}

/// Lifecycle of a referral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicationStatus {
    Open,
    InProgress,
    Closed,
}

impl IndicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            IndicationStatus::Open => "Open",
            IndicationStatus::InProgress => "In progress",
            IndicationStatus::Closed => "Closed",
        }
    }
}

/// A posted opportunity ("indication")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indication {
    pub id: String,
    pub title: String,
    pub description: String,
    pub segment: String,
    pub author: String,
    pub author_photo: String,
    pub timestamp: DateTime<Local>,
    /// Reward offered for a successful referral, in whole BRL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    pub status: IndicationStatus,
    pub responses: u32,
}

/// The local user's own profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    pub name: String,
    pub company: String,
    pub birth_year: u32,
    pub location: String,
    pub brands: Vec<String>,
    pub revenue: String,
    pub experience: String,
    pub results: String,
    pub has_children: bool,
    pub hobby: String,
    pub instagram: String,
    pub email: String,
    pub website: String,
    pub linkedin: String,
    pub foment_value: u64,
    pub level: MemberLevel,
}

/// Format an integer with `.` thousands separators (pt-BR style)
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Avatar URL derived from a seed, matching the sample data convention
pub fn avatar_url(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(15000), "15.000");
        assert_eq!(format_thousands(1_250_000), "1.250.000");
    }

    #[test]
    fn test_level_serialization() {
        let json = serde_json::to_string(&MemberLevel::Partner).unwrap();
        assert_eq!(json, "\"socio\"");
        let level: MemberLevel = serde_json::from_str("\"infinity\"").unwrap();
        assert_eq!(level, MemberLevel::Infinity);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(IndicationStatus::Open.label(), "Open");
        assert_eq!(IndicationStatus::InProgress.label(), "In progress");
        assert_eq!(IndicationStatus::Closed.label(), "Closed");
    }
}
