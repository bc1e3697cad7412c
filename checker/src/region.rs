//! Two-letter codes for US states, commonwealths, territories and the
//! federal district.

pub const REGION_CODES: [&str; 59] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA", "KS",
    "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY",
    "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV",
    "WI", "WY", "AS", "DC", "FM", "GU", "MH", "MP", "PW", "PR", "VI",
];

/// Strip every whitespace character and upper-case the rest.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Whether an already normalized code is in the table.
pub fn is_known(code: &str) -> bool {
    REGION_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_inner_whitespace() {
        assert_eq!(normalize(" c\ta \n"), "CA");
    }

    #[test]
    fn test_table_has_no_duplicates() {
        let mut codes = REGION_CODES.to_vec();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), REGION_CODES.len());
    }

    #[test]
    fn test_territories_are_known() {
        for code in ["DC", "PR", "GU", "VI", "AS", "MP", "FM", "MH", "PW"] {
            assert!(is_known(code), "{code} should be known");
        }
        assert!(!is_known("ZZ"));
    }
}
