//! The fixed starter set inserted into an empty store.

use crate::entry::NewEntry;

/// Returns the three instruments every fresh catalog starts with, in
/// insertion order.
pub fn seed_entries() -> Vec<NewEntry> {
    vec![
        NewEntry::new(
            "Angklung",
            "Angklung adalah alat musik tradisional Indonesia yang terbuat dari tabung-tabung \
             bambu yang disusun sedemikian rupa sehingga menghasilkan bunyi harmonis ketika \
             digoyangkan.",
            "https://via.placeholder.com/300?text=Angklung",
        ),
        NewEntry::new(
            "Seruling",
            "Seruling adalah alat musik tiup yang biasanya terbuat dari bambu atau logam. Alat \
             musik ini memiliki suara lembut dan sering digunakan dalam berbagai genre musik \
             tradisional maupun modern.",
            "https://via.placeholder.com/300?text=Seruling",
        ),
        NewEntry::new(
            "Gamelan",
            "Gamelan merupakan ansambel musik tradisional yang berasal dari Indonesia. Biasanya \
             terdiri dari berbagai instrumen seperti gong, kendang, dan instrumen logam lainnya.",
            "https://via.placeholder.com/300?text=Gamelan",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_set_order() {
        let names: Vec<_> = seed_entries().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Angklung", "Seruling", "Gamelan"]);
    }

    #[test]
    fn test_seed_set_is_valid_and_unique() {
        let entries = seed_entries();
        let names: HashSet<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names.len(), entries.len());
        for entry in &entries {
            assert!(entry.validate().is_ok(), "{} should validate", entry.name);
        }
    }

    #[test]
    fn test_seed_descriptions_have_no_line_continuation_gaps() {
        for entry in seed_entries() {
            assert!(!entry.description.contains("  "));
            assert!(!entry.description.contains('\n'));
        }
    }
}
