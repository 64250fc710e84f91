/// A resolved competitor record. `name` and `sailno` drive identity
/// resolution; the remaining attributes are optional and may be absent on any
/// given update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sailor {
    /// 1-based, assigned once at first insertion into the registry and never
    /// reused, even across merges. Zero means "not yet registered".
    pub id: usize,
    pub name: String,
    pub sailno: u32,
    pub rank: Option<u32>,
    pub gender: Option<char>,
    pub club: Option<String>,
    pub age: Option<u16>,
}

/// C-style atoi: skip leading whitespace, read a decimal digit prefix,
/// anything else yields 0. Result pages mix plain numbers with cells like
/// "1234 GBR".
fn parse_leading_uint(raw: &str) -> u64 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

impl Sailor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, raw: &str) {
        self.name = raw.trim().to_string();
    }

    pub fn set_sailno(&mut self, raw: &str) {
        self.sailno = parse_leading_uint(raw) as u32;
    }

    pub fn set_rank(&mut self, raw: &str) {
        match parse_leading_uint(raw) as u32 {
            0 => self.rank = None,
            rank => self.rank = Some(rank),
        }
    }

    /// Keeps only the first character of the cell, e.g. "F" from "Female".
    pub fn set_gender(&mut self, raw: &str) {
        self.gender = raw.trim().chars().next();
    }

    pub fn set_age(&mut self, raw: &str) {
        match parse_leading_uint(raw) as u16 {
            0 => self.age = None,
            age => self.age = Some(age),
        }
    }

    pub fn set_club(&mut self, raw: &str) {
        let club = raw.trim();
        if !club.is_empty() {
            self.club = Some(club.to_string());
        }
    }

    /// A candidate matches only when it supplies both identity fields: a
    /// non-empty name equal to ours ignoring case, and a non-zero sailno
    /// equal to ours.
    pub fn matches(&self, candidate: &Sailor) -> bool {
        !candidate.name.is_empty()
            && candidate.sailno != 0
            && self.name.to_lowercase() == candidate.name.to_lowercase()
            && self.sailno == candidate.sailno
    }

    /// Folds a matching candidate's fields into this record: the name is
    /// taken when it differs (case corrections from later documents), club
    /// and gender when the candidate supplies a different non-empty value.
    pub fn merge_from(&mut self, candidate: &Sailor) {
        if !candidate.name.is_empty() && self.name != candidate.name {
            self.name = candidate.name.clone();
        }
        if let Some(club) = &candidate.club {
            if self.club.as_deref() != Some(club.as_str()) {
                self.club = Some(club.clone());
            }
        }
        if let Some(gender) = candidate.gender {
            if self.gender != Some(gender) {
                self.gender = Some(gender);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_leading_uint_takes_digit_prefix() {
        assert_eq!(parse_leading_uint("1234"), 1234);
        assert_eq!(parse_leading_uint("  42"), 42);
        assert_eq!(parse_leading_uint("1234 GBR"), 1234);
        assert_eq!(parse_leading_uint("GBR 1234"), 0);
        assert_eq!(parse_leading_uint(""), 0);
    }

    #[test]
    fn setters_trim_and_parse() {
        let mut sailor = Sailor::new();
        sailor.set_name("  Jane Doe ");
        sailor.set_sailno("1234");
        sailor.set_rank("3rd");
        sailor.set_gender(" Female");
        sailor.set_age("15");
        sailor.set_club(" Harbor Club ");

        assert_eq!(sailor.name, "Jane Doe");
        assert_eq!(sailor.sailno, 1234);
        assert_eq!(sailor.rank, Some(3));
        assert_eq!(sailor.gender, Some('F'));
        assert_eq!(sailor.age, Some(15));
        assert_eq!(sailor.club.as_deref(), Some("Harbor Club"));
    }

    #[test]
    fn unparsable_optional_cells_stay_unset() {
        let mut sailor = Sailor::new();
        sailor.set_rank("DNF");
        sailor.set_age("-");
        sailor.set_club("   ");
        assert_eq!(sailor.rank, None);
        assert_eq!(sailor.age, None);
        assert_eq!(sailor.club, None);
    }

    #[test]
    fn match_is_case_insensitive_on_name() {
        let mut existing = Sailor::new();
        existing.set_name("Jane Doe");
        existing.set_sailno("1234");

        let mut candidate = Sailor::new();
        candidate.set_name("JANE DOE");
        candidate.set_sailno("1234");

        assert!(existing.matches(&candidate));
    }

    #[test]
    fn empty_name_or_zero_sailno_never_match() {
        let mut existing = Sailor::new();
        existing.set_name("Jane Doe");
        existing.set_sailno("1234");

        let mut no_name = Sailor::new();
        no_name.set_sailno("1234");
        assert!(!existing.matches(&no_name));

        let mut no_sailno = Sailor::new();
        no_sailno.set_name("Jane Doe");
        assert!(!existing.matches(&no_sailno));

        let mut wrong_sailno = Sailor::new();
        wrong_sailno.set_name("Jane Doe");
        wrong_sailno.set_sailno("4321");
        assert!(!existing.matches(&wrong_sailno));
    }

    #[test]
    fn merge_updates_differing_optional_attributes() {
        let mut existing = Sailor::new();
        existing.set_name("Jane Doe");
        existing.set_sailno("1234");
        existing.set_club("Harbor Club");

        let mut candidate = Sailor::new();
        candidate.set_name("jane doe");
        candidate.set_sailno("1234");
        candidate.set_club("Lake Club");
        candidate.set_gender("F");

        existing.merge_from(&candidate);
        assert_eq!(existing.name, "jane doe");
        assert_eq!(existing.club.as_deref(), Some("Lake Club"));
        assert_eq!(existing.gender, Some('F'));
    }

    #[test]
    fn merge_keeps_attributes_the_candidate_omits() {
        let mut existing = Sailor::new();
        existing.set_name("Jane Doe");
        existing.set_sailno("1234");
        existing.set_club("Harbor Club");
        existing.set_gender("F");

        let mut candidate = Sailor::new();
        candidate.set_name("Jane Doe");
        candidate.set_sailno("1234");

        existing.merge_from(&candidate);
        assert_eq!(existing.club.as_deref(), Some("Harbor Club"));
        assert_eq!(existing.gender, Some('F'));
    }
}
