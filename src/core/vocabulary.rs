//! Fixed survey vocabulary
//!
//! Survey answers are free text, but three of the five dimensions only make
//! sense once the answer is translated into the catalog's own terms. These
//! tables are the whole of that translation.

/// Ordinal busyness scale, quietest first
pub static BUSYNESS_SCALE: [(&str, i64); 5] = [
    ("very quiet", 1),
    ("quiet", 2),
    ("moderate", 3),
    ("busy/active", 4),
    ("loud", 5),
];

/// Points awarded per catalog power state (`Y`, `Limited`, `N`)
pub type PowerTable = [(&'static str, u32); 3];

const POWER_PRIORITY: PowerTable = [("Y", 2), ("Limited", 1), ("N", 0)];
const POWER_INDIFFERENT: PowerTable = [("Y", 1), ("Limited", 1), ("N", 1)];

/// Power scoring table selected by the importance the user gave to outlets
pub static POWER_TIERS: [(&str, PowerTable); 3] = [
    ("essential", POWER_PRIORITY),
    ("helpful but not required", POWER_PRIORITY),
    ("not important", POWER_INDIFFERENT),
];

/// Survey lighting answer to the term used in `natural_lighting` descriptions
pub static LIGHTING_TERMS: [(&str, &str); 3] = [
    ("bright natural light", "Well"),
    ("some natural light", "Yes"),
    ("low/no natural light", "No"),
];

fn lookup<T: Copy>(table: &[(&'static str, T)], answer: &str) -> Option<T> {
    let answer = answer.to_lowercase();
    table
        .iter()
        .find(|(key, _)| *key == answer)
        .map(|(_, value)| *value)
}

/// Busyness level for a survey answer, case-insensitive
#[inline]
pub fn busyness_level(answer: &str) -> Option<i64> {
    lookup(&BUSYNESS_SCALE, answer)
}

/// Power table for a survey answer, case-insensitive
#[inline]
pub fn power_table(answer: &str) -> Option<&'static PowerTable> {
    let answer = answer.to_lowercase();
    POWER_TIERS
        .iter()
        .find(|(key, _)| *key == answer)
        .map(|(_, table)| table)
}

/// Points for an exact catalog power state within a table
///
/// States are matched case-sensitively; anything outside the table is worth 0.
#[inline]
pub fn power_points(table: &PowerTable, state: &str) -> u32 {
    table
        .iter()
        .find(|(key, _)| *key == state)
        .map_or(0, |(_, points)| *points)
}

/// Catalog lighting term for a survey answer, case-insensitive
#[inline]
pub fn lighting_term(answer: &str) -> Option<&'static str> {
    lookup(&LIGHTING_TERMS, answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busyness_scale_is_ordinal() {
        assert_eq!(busyness_level("very quiet"), Some(1));
        assert_eq!(busyness_level("Quiet"), Some(2));
        assert_eq!(busyness_level("MODERATE"), Some(3));
        assert_eq!(busyness_level("Busy/Active"), Some(4));
        assert_eq!(busyness_level("loud"), Some(5));
        assert_eq!(busyness_level("moderately busy"), None);
    }

    #[test]
    fn test_power_tiers() {
        let essential = power_table("Essential").unwrap();
        assert_eq!(power_points(essential, "Y"), 2);
        assert_eq!(power_points(essential, "Limited"), 1);
        assert_eq!(power_points(essential, "N"), 0);

        let helpful = power_table("helpful but not required").unwrap();
        assert_eq!(helpful, essential);

        let indifferent = power_table("not important").unwrap();
        for state in ["Y", "Limited", "N"] {
            assert_eq!(power_points(indifferent, state), 1);
        }

        assert!(power_table("sometimes").is_none());
    }

    #[test]
    fn test_power_state_is_case_sensitive() {
        let essential = power_table("essential").unwrap();
        assert_eq!(power_points(essential, "y"), 0);
        assert_eq!(power_points(essential, "limited"), 0);
    }

    #[test]
    fn test_lighting_terms() {
        assert_eq!(lighting_term("Bright natural light"), Some("Well"));
        assert_eq!(lighting_term("some natural light"), Some("Yes"));
        assert_eq!(lighting_term("low/no natural light"), Some("No"));
        assert_eq!(lighting_term("candlelight"), None);
    }
}
