// tests/mentor_card_tests.rs - Card content for directory records
//
// Covers the mapping from a record to what its card shows: avatar choice,
// the three text lines, and the question link.

use mentor_directory::fixtures::{mentor, sample_roster};
use mentor_directory::web_app::model::*;

#[test]
fn test_card_text_lines() {
    let record = mentor("Chen Wei", "Tsinghua University", "Economics");
    let card = MentorCardView::from(&record);

    assert_eq!(card.name, "Chen Wei");
    assert_eq!(card.university, "Tsinghua University");
    assert_eq!(card.department, "Economics");
    assert_eq!(card.slug, "chen-wei");
}

#[test]
fn test_question_link_uses_slug() {
    let card = MentorCardView::from(&mentor("Hana Sato", "University of Tokyo", "Medicine"));
    assert_eq!(card.question_href, "/mentors/ask-question/hana-sato/");
    assert!(card.question_href.starts_with(QUESTION_PATH_PREFIX));
    assert!(card.question_href.ends_with('/'));
}

#[test]
fn test_photo_takes_precedence_over_initials() {
    let roster = sample_roster();
    let card = MentorCardView::from(&roster[0]);

    match card.avatar {
        Avatar::Photo { src, alt } => {
            assert_eq!(src, "/media/mentors/profile_photos/amara.jpg");
            assert_eq!(alt, "Amara Okafor");
        }
        other => panic!("expected a photo avatar, got {:?}", other),
    }
}

#[test]
fn test_missing_photo_uses_initials_and_gradient() {
    let record = mentor("Gustav Lind", "KTH Royal Institute of Technology", "Physics");
    let card = MentorCardView::from(&record);

    assert_eq!(
        card.avatar,
        Avatar::Initials {
            initials: "GL".to_string(),
            gradient: record.gradient.clone(),
        }
    );
}

#[test]
fn test_cards_follow_record_order() {
    let directory = MentorDirectory::with_records(sample_roster());
    let ContainerView::Cards(cards) = directory.container() else {
        panic!("expected cards");
    };

    let expected: Vec<String> = sample_roster()
        .iter()
        .take(PAGE_SIZE)
        .map(|m| m.slug.clone())
        .collect();
    assert_eq!(cards.iter().map(|c| c.slug.clone()).collect::<Vec<_>>(), expected);
}
