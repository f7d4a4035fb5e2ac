use std::collections::BTreeMap;

use super::classify::classify;
use super::filter::{ExclusionSet, included_indices};
use super::model::{CountryAverage, EmissionRecord};

/// How many countries the ranking keeps.
pub const TOP_N: usize = 10;

/// Mean of the available values per country, alphabetical by country.
///
/// Missing values are skipped, not counted as zero. Countries with no
/// available value at all are left out.
pub fn country_means(records: &[EmissionRecord], excluded: &ExclusionSet) -> Vec<(String, f64)> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for idx in included_indices(records, excluded) {
        let rec = &records[idx];
        let entry = sums.entry(rec.country.as_str()).or_insert((0.0, 0));
        if let Some(v) = rec.co2 {
            entry.0 += v;
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .filter(|(_, (_, n))| *n > 0)
        .map(|(country, (sum, n))| (country.to_string(), sum / n as f64))
        .collect()
}

/// The `TOP_N` highest-mean countries, ascending by mean.
///
/// Ties keep alphabetical order (stable sort over the grouped means).
pub fn top_emitters(records: &[EmissionRecord], excluded: &ExclusionSet) -> Vec<CountryAverage> {
    let mut means = country_means(records, excluded);
    means.sort_by(|a, b| a.1.total_cmp(&b.1));

    let skip = means.len().saturating_sub(TOP_N);
    means
        .into_iter()
        .skip(skip)
        .map(|(country, mean_co2)| CountryAverage {
            bucket: classify(Some(mean_co2)),
            country,
            mean_co2,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::classify::Bucket;
    use crate::data::filter::eu_exclusion_set;

    fn rec(country: &str, year: i32, co2: Option<f64>) -> EmissionRecord {
        EmissionRecord::new(country, year, co2)
    }

    #[test]
    fn missing_values_are_skipped_in_the_mean() {
        let records = vec![
            rec("Testland", 2000, Some(50_000.0)),
            rec("Testland", 2001, Some(150_000.0)),
            rec("Testland", 2002, None),
        ];
        let top = top_emitters(&records, &eu_exclusion_set());

        assert_eq!(top.len(), 1);
        assert_eq!(top[0].mean_co2, 100_000.0);
        assert_eq!(top[0].bucket, Bucket::Below200Kt);
        assert_eq!(top[0].bucket.label(), "< 200 kt / an");
    }

    #[test]
    fn excluded_names_never_rank_even_when_largest() {
        let records = vec![
            rec("Germany", 2000, Some(9_000_000.0)),
            rec("Japan", 2000, Some(1_000_000.0)),
            rec("Chile", 2000, Some(80_000.0)),
        ];
        let top = top_emitters(&records, &eu_exclusion_set());
        let names: Vec<&str> = top.iter().map(|c| c.country.as_str()).collect();
        assert_eq!(names, vec!["Chile", "Japan"]);
    }

    #[test]
    fn keeps_ten_largest_ascending() {
        let records: Vec<EmissionRecord> = (0..15)
            .map(|i| rec(&format!("Country{i:02}"), 2000, Some(i as f64 * 1000.0)))
            .collect();
        let top = top_emitters(&records, &ExclusionSet::new());

        assert_eq!(top.len(), TOP_N);
        assert_eq!(top.first().map(|c| c.country.as_str()), Some("Country05"));
        assert_eq!(top.last().map(|c| c.country.as_str()), Some("Country14"));
        assert!(top.windows(2).all(|w| w[0].mean_co2 <= w[1].mean_co2));
    }

    #[test]
    fn ties_keep_alphabetical_order() {
        let records = vec![
            rec("Zambia", 2000, Some(5.0)),
            rec("Angola", 2000, Some(5.0)),
            rec("Mali", 2000, Some(5.0)),
        ];
        let top = top_emitters(&records, &ExclusionSet::new());
        let names: Vec<&str> = top.iter().map(|c| c.country.as_str()).collect();
        assert_eq!(names, vec!["Angola", "Mali", "Zambia"]);
    }

    #[test]
    fn countries_without_any_value_are_not_ranked() {
        let records = vec![rec("Nowhere", 2000, None), rec("Peru", 2000, Some(3.0))];
        let means = country_means(&records, &ExclusionSet::new());
        assert_eq!(means, vec![("Peru".to_string(), 3.0)]);
    }

    #[test]
    fn fewer_than_ten_countries_returns_all() {
        let records = vec![rec("A", 2000, Some(1.0)), rec("B", 2000, Some(2.0))];
        assert_eq!(top_emitters(&records, &ExclusionSet::new()).len(), 2);
    }
}
