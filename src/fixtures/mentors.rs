// fixtures/mentors.rs - Mentor record builders

use crate::web_app::model::MentorRecord;

/// Gradients cycled through by the builders
const GRADIENTS: [&str; 4] = [
    "from-purple-400 to-pink-400",
    "from-blue-400 to-indigo-400",
    "from-green-400 to-teal-400",
    "from-yellow-400 to-orange-400",
];

/// Lower-case, dash-separated form of `name`
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Up to two initials taken from the first letters of `name`
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// A mentor without a photo
pub fn mentor(name: &str, university: &str, department: &str) -> MentorRecord {
    MentorRecord {
        name: name.to_string(),
        university: university.to_string(),
        department: department.to_string(),
        slug: slugify(name),
        profile_photo_url: None,
        initials: initials(name),
        gradient: GRADIENTS[name.len() % GRADIENTS.len()].to_string(),
    }
}

/// `count` distinct mentors named "Mentor 1", "Mentor 2", ...
pub fn numbered_mentors(count: usize) -> Vec<MentorRecord> {
    (1..=count)
        .map(|n| MentorRecord {
            gradient: GRADIENTS[n % GRADIENTS.len()].to_string(),
            ..mentor(&format!("Mentor {n}"), "State University", "General Studies")
        })
        .collect()
}

/// A small roster with mixed fields and one photo
pub fn sample_roster() -> Vec<MentorRecord> {
    let mut roster = vec![
        mentor("Amara Okafor", "University of Lagos", "Computer Science"),
        mentor("Bence Kovacs", "ETH Zurich", "Mechanical Engineering"),
        mentor("Chen Wei", "Tsinghua University", "Economics"),
        mentor("Diego Alvarez", "Universidad de Chile", "Biology"),
        mentor("Elif Yilmaz", "Bogazici University", "Computer Engineering"),
        mentor("Farah Haddad", "American University of Beirut", "Architecture"),
        mentor("Gustav Lind", "KTH Royal Institute of Technology", "Physics"),
        mentor("Hana Sato", "University of Tokyo", "Medicine"),
    ];
    roster[0].profile_photo_url = Some("/media/mentors/profile_photos/amara.jpg".to_string());
    roster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Chen Wei"), "chen-wei");
        assert_eq!(slugify("  O'Brien   Jr. "), "obrien-jr");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("amara okafor"), "AO");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("Jean Luc Picard"), "JL");
    }

    #[test]
    fn test_numbered_mentors_are_distinct() {
        let mentors = numbered_mentors(13);
        assert_eq!(mentors.len(), 13);
        assert_eq!(mentors[0].slug, "mentor-1");
        assert_eq!(mentors[12].name, "Mentor 13");
    }
}
