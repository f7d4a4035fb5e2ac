use std::collections::BTreeSet;

use super::model::EmissionRecord;

// ---------------------------------------------------------------------------
// Exclusion set: countries left out of the top-10 ranking
// ---------------------------------------------------------------------------

/// The 27 EU member states, as spelled in the `Name` column.
pub const EU_MEMBERS: [&str; 27] = [
    "Austria",
    "Belgium",
    "Bulgaria",
    "Croatia",
    "Cyprus",
    "Czech Republic",
    "Denmark",
    "Estonia",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "Hungary",
    "Ireland",
    "Italy",
    "Latvia",
    "Lithuania",
    "Luxembourg",
    "Malta",
    "Netherlands",
    "Poland",
    "Portugal",
    "Romania",
    "Slovakia",
    "Slovenia",
    "Spain",
    "Sweden",
];

/// Set of country names to drop. Matching is exact and case-sensitive.
pub type ExclusionSet = BTreeSet<&'static str>;

/// Build the EU exclusion set.
pub fn eu_exclusion_set() -> ExclusionSet {
    EU_MEMBERS.iter().copied().collect()
}

/// Return indices of records whose country is not excluded.
pub fn included_indices(records: &[EmissionRecord], excluded: &ExclusionSet) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| !excluded.contains(r.country.as_str()))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eu_set_has_27_distinct_names() {
        assert_eq!(eu_exclusion_set().len(), 27);
    }

    #[test]
    fn drops_only_excluded_names() {
        let records = vec![
            EmissionRecord::new("France", 2000, Some(1.0)),
            EmissionRecord::new("Norway", 2000, Some(1.0)),
            EmissionRecord::new("germany", 2000, Some(1.0)),
            EmissionRecord::new("Germany", 2000, Some(1.0)),
        ];
        assert_eq!(included_indices(&records, &eu_exclusion_set()), vec![1, 2]);
    }
}
