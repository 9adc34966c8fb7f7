//! Sri Lankan provinces and their districts, used by the location filters.

pub const PROVINCES: [&str; 9] = [
    "Central Province",
    "Eastern Province",
    "Northern Province",
    "Southern Province",
    "Western Province",
    "North Western Province",
    "North Central Province",
    "Uva Province",
    "Sabaragamuwa Province",
];

const DISTRICTS_BY_PROVINCE: [(&str, &[&str]); 9] = [
    ("Central Province", &["Kandy", "Matale", "Nuwara Eliya"]),
    ("Eastern Province", &["Ampara", "Batticaloa", "Trincomalee"]),
    (
        "Northern Province",
        &["Jaffna", "Kilinochchi", "Mannar", "Mullaitivu", "Vavuniya"],
    ),
    ("Southern Province", &["Galle", "Hambantota", "Matara"]),
    ("Western Province", &["Colombo", "Gampaha", "Kalutara"]),
    ("North Western Province", &["Kurunegala", "Puttalam"]),
    ("North Central Province", &["Anuradhapura", "Polonnaruwa"]),
    ("Uva Province", &["Badulla", "Monaragala"]),
    ("Sabaragamuwa Province", &["Kegalle", "Ratnapura"]),
];

/// Districts of `province`; empty for an unknown or unset province.
pub fn districts_for(province: &str) -> &'static [&'static str] {
    DISTRICTS_BY_PROVINCE
        .iter()
        .find(|(name, _)| *name == province)
        .map(|(_, districts)| *districts)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_province_has_districts() {
        for province in PROVINCES {
            assert!(!districts_for(province).is_empty(), "{province}");
        }
    }

    #[test]
    fn district_lookup() {
        assert_eq!(
            districts_for("Uva Province"),
            &["Badulla", "Monaragala"][..]
        );
        assert_eq!(districts_for("Northern Province").len(), 5);
        assert!(districts_for("").is_empty());
        assert!(districts_for("Atlantis").is_empty());
    }

    #[test]
    fn twenty_five_districts_in_total() {
        let total: usize = PROVINCES.iter().map(|p| districts_for(p).len()).sum();
        assert_eq!(total, 25);
    }
}
