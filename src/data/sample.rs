//! Built-in sample data set.

use super::models::{
    avatar_url, Chat, Indication, IndicationStatus, Member, MemberLevel, Message, ProfileData,
    Sender,
};
use super::DataProvider;
use chrono::{DateTime, Local, TimeZone};

/// Static sample provider used by the app.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleData;

impl SampleData {
    pub fn new() -> Self {
        Self
    }
}

/// Local timestamp for a fixed sample date.
fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .earliest()
        .unwrap_or_else(Local::now)
}

impl DataProvider for SampleData {
    fn list_members(&self) -> Vec<Member> {
        vec![
            Member {
                id: "1".to_string(),
                name: "Carlos Eduardo Silva".to_string(),
                company: "TechVision Corp".to_string(),
                segment: "Tecnologia".to_string(),
                level: MemberLevel::Infinity,
                photo: avatar_url("Carlos"),
                bio: "CEO with 15 years turning startups into unicorns. Specialist in scale-up and disruptive innovation.".to_string(),
                instagram: Some("@carloseduardo".to_string()),
                linkedin: Some("carlos-eduardo-silva".to_string()),
                email: Some("carlos@techvision.com".to_string()),
            },
            Member {
                id: "2".to_string(),
                name: "Marina Santos".to_string(),
                company: "InvestMax Capital".to_string(),
                segment: "Investimentos".to_string(),
                level: MemberLevel::Partner,
                photo: avatar_url("Marina"),
                bio: "Founding partner focused on venture capital. Portfolio of R$ 500M+ in strategic investments.".to_string(),
                instagram: None,
                linkedin: Some("marina-santos-investmax".to_string()),
                email: Some("marina@investmax.com.br".to_string()),
            },
            Member {
                id: "3".to_string(),
                name: "Roberto Fernandes".to_string(),
                company: "Global Logistics".to_string(),
                segment: "Logística".to_string(),
                level: MemberLevel::Member,
                photo: avatar_url("Roberto"),
                bio: "Operations director with international supply chain expertise. Leader in logistics optimization.".to_string(),
                instagram: None,
                linkedin: None,
                email: Some("roberto@globallogistics.com".to_string()),
            },
        ]
    }

    fn list_chats(&self) -> Vec<Chat> {
        vec![
            Chat {
                id: "1".to_string(),
                member_name: "Carlos Eduardo Silva".to_string(),
                member_photo: avatar_url("Carlos"),
                last_message: "Let's talk about the partnership proposal".to_string(),
                timestamp: at(2024, 1, 15, 14, 30),
                unread: 2,
            },
            Chat {
                id: "2".to_string(),
                member_name: "Marina Santos".to_string(),
                member_photo: avatar_url("Marina"),
                last_message: "Thanks for the referral!".to_string(),
                timestamp: at(2024, 1, 15, 9, 15),
                unread: 0,
            },
            Chat {
                id: "3".to_string(),
                member_name: "Roberto Fernandes".to_string(),
                member_photo: avatar_url("Roberto"),
                last_message: "When can we schedule a meeting?".to_string(),
                timestamp: at(2024, 1, 14, 16, 45),
                unread: 1,
            },
        ]
    }

    fn list_messages(&self, chat_id: &str) -> Vec<Message> {
        if chat_id == "1" {
            return vec![
                Message {
                    id: "1".to_string(),
                    text: "Hi! I saw your profile and would like to talk about a business opportunity.".to_string(),
                    timestamp: at(2024, 1, 15, 14, 20),
                    sender: Sender::Other,
                },
                Message {
                    id: "2".to_string(),
                    text: "Hi Carlos! Glad you reached out. Can you tell me more?".to_string(),
                    timestamp: at(2024, 1, 15, 14, 25),
                    sender: Sender::Me,
                },
                Message {
                    id: "3".to_string(),
                    text: "Let's talk about the partnership proposal".to_string(),
                    timestamp: at(2024, 1, 15, 14, 30),
                    sender: Sender::Other,
                },
            ];
        }

        // Other conversations only carry their last message
        self.list_chats()
            .into_iter()
            .filter(|chat| chat.id == chat_id)
            .map(|chat| Message {
                id: "1".to_string(),
                text: chat.last_message,
                timestamp: chat.timestamp,
                sender: Sender::Other,
            })
            .collect()
    }

    fn list_indications(&self) -> Vec<Indication> {
        vec![
            Indication {
                id: "1".to_string(),
                title: "Looking for a CTO for a Fintech".to_string(),
                description: "Growing startup seeks a CTO experienced in blockchain and financial systems. Equity plus competitive salary.".to_string(),
                segment: "Tecnologia".to_string(),
                author: "Marina Santos".to_string(),
                author_photo: avatar_url("Marina"),
                timestamp: at(2024, 1, 15, 10, 30),
                value: Some(15000),
                status: IndicationStatus::Open,
                responses: 3,
            },
            Indication {
                id: "2".to_string(),
                title: "Investor for E-commerce Expansion".to_string(),
                description: "E-commerce with R$ 2M/year revenue seeks an investor for expansion. Projected ROI of 25% a year.".to_string(),
                segment: "Investimentos".to_string(),
                author: "Carlos Eduardo Silva".to_string(),
                author_photo: avatar_url("Carlos"),
                timestamp: at(2024, 1, 15, 8, 15),
                value: Some(25000),
                status: IndicationStatus::InProgress,
                responses: 7,
            },
            Indication {
                id: "3".to_string(),
                title: "Partner for International Logistics".to_string(),
                description: "Logistics company looking for a partner with import/export experience in Latin America.".to_string(),
                segment: "Logística".to_string(),
                author: "Roberto Fernandes".to_string(),
                author_photo: avatar_url("Roberto"),
                timestamp: at(2024, 1, 14, 16, 45),
                value: None,
                status: IndicationStatus::Closed,
                responses: 12,
            },
        ]
    }

    fn current_profile(&self) -> ProfileData {
        ProfileData {
            name: "João Silva".to_string(),
            company: "Silva & Associados".to_string(),
            birth_year: 1985,
            location: "São Paulo, SP".to_string(),
            brands: vec![
                "Silva Corp".to_string(),
                "TechSilva".to_string(),
                "Silva Invest".to_string(),
            ],
            revenue: "R$ 5-10 million".to_string(),
            experience: "15 years".to_string(),
            results: "300% growth in 5 years, international expansion, IPO planned for 2025"
                .to_string(),
            has_children: true,
            hobby: "Golf and investing".to_string(),
            instagram: "@joaosilva_ceo".to_string(),
            email: "joao@silva.com.br".to_string(),
            website: "www.silva.com.br".to_string(),
            linkedin: "joao-silva-ceo".to_string(),
            foment_value: 50000,
            level: MemberLevel::Partner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_ids_are_unique() {
        let members = SampleData.list_members();
        let mut ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), members.len());
    }

    #[test]
    fn test_find_member() {
        let member = SampleData.find_member("2").unwrap();
        assert_eq!(member.name, "Marina Santos");
        assert!(SampleData.find_member("missing").is_none());
    }

    #[test]
    fn test_messages_for_each_chat() {
        let data = SampleData;
        assert_eq!(data.list_messages("1").len(), 3);
        for chat in data.list_chats() {
            assert!(!data.list_messages(&chat.id).is_empty());
        }
        assert!(data.list_messages("unknown").is_empty());
    }

    #[test]
    fn test_member_segments_are_known() {
        for member in SampleData.list_members() {
            assert!(crate::data::SEGMENTS.contains(&member.segment.as_str()));
        }
    }
}
