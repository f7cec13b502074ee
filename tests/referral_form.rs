//! Referral publishing rules.

use disruption::data::{DataProvider, IndicationStatus, SampleData, SEGMENTS};
use disruption::referrals::{FeedTab, ReferralDraft, ReferralFeed, ReferralFormError};
use proptest::prelude::*;

fn sample_feed() -> ReferralFeed {
    ReferralFeed::new(SampleData.list_indications(), SampleData.current_profile().name)
}

fn blank() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

fn filled() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,20}"
}

proptest! {
    #[test]
    fn prop_blank_required_field_is_rejected(
        title in prop_oneof![blank(), filled()],
        description in prop_oneof![blank(), filled()],
        segment in prop_oneof![Just(String::new()), proptest::sample::select(SEGMENTS.to_vec()).prop_map(String::from)],
        value in "[0-9]{0,6}",
    ) {
        let draft = ReferralDraft { title, description, segment, value };
        let any_blank = draft.title.trim().is_empty()
            || draft.description.trim().is_empty()
            || draft.segment.is_empty();

        let mut feed = sample_feed();
        let before = feed.len();
        let result = feed.publish(&draft).map(|i| i.id.clone());

        if any_blank {
            prop_assert!(result.is_err());
            prop_assert_eq!(feed.len(), before);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(feed.len(), before + 1);
        }
    }

    #[test]
    fn prop_non_digit_value_is_rejected(value in "[0-9]{0,3}[a-z.,-][0-9a-z]{0,3}") {
        let draft = ReferralDraft {
            title: "Title".to_string(),
            description: "Description".to_string(),
            segment: "Varejo".to_string(),
            value,
        };
        prop_assert_eq!(draft.validate(), Err(ReferralFormError::InvalidValue));
    }
}

#[test]
fn test_published_referral_tops_feed_and_mine() {
    let mut feed = sample_feed();
    assert!(feed.visible(FeedTab::Mine).is_empty());

    let draft = ReferralDraft {
        title: "Supplier for packaging".to_string(),
        description: "Biodegradable, 10k units per month".to_string(),
        segment: "Varejo".to_string(),
        value: String::new(),
    };
    let published = feed.publish(&draft).unwrap().clone();

    assert_eq!(published.status, IndicationStatus::Open);
    assert_eq!(published.responses, 0);
    assert_eq!(published.value, None);
    assert_eq!(published.author, "João Silva");
    assert_eq!(feed.visible(FeedTab::Feed)[0].id, published.id);
    assert_eq!(feed.visible(FeedTab::Mine).len(), 1);
}

#[test]
fn test_ids_are_unique() {
    let mut feed = sample_feed();
    let draft = ReferralDraft {
        title: "Same".to_string(),
        description: "Same".to_string(),
        segment: "Saúde".to_string(),
        value: "1".to_string(),
    };
    let first = feed.publish(&draft).unwrap().id.clone();
    let second = feed.publish(&draft).unwrap().id.clone();
    assert_ne!(first, second);
}
