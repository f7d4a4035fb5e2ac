use std::collections::BTreeSet;

use super::classify::{Bucket, classify};

// ---------------------------------------------------------------------------
// EmissionRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single (country, year) observation.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionRecord {
    /// Country name as written in the `Name` column.
    pub country: String,
    pub year: i32,
    /// Emissions in kilotons/year; `None` when the cell was empty or NaN.
    pub co2: Option<f64>,
}

impl EmissionRecord {
    pub fn new(country: impl Into<String>, year: i32, co2: Option<f64>) -> Self {
        EmissionRecord {
            country: country.into(),
            year,
            co2: co2.filter(|v| !v.is_nan()),
        }
    }
}

// ---------------------------------------------------------------------------
// ClassifiedRecord – record + bucket
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord {
    pub record: EmissionRecord,
    pub bucket: Bucket,
}

// ---------------------------------------------------------------------------
// CountryAverage – one bar of the top-10 chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CountryAverage {
    pub country: String,
    pub mean_co2: f64,
    pub bucket: Bucket,
}

// ---------------------------------------------------------------------------
// EmissionTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded table, sorted by year, with pre-computed indices.
#[derive(Debug, Clone)]
pub struct EmissionTable {
    /// All rows, ascending by year (stable w.r.t. file order).
    pub records: Vec<EmissionRecord>,
    /// Distinct years, ascending.
    pub years: BTreeSet<i32>,
    /// Distinct country names.
    pub countries: BTreeSet<String>,
}

impl EmissionTable {
    /// Sort the rows by year and build the year/country indices.
    pub fn from_records(mut records: Vec<EmissionRecord>) -> Self {
        records.sort_by_key(|r| r.year);

        let years = records.iter().map(|r| r.year).collect();
        let countries = records.iter().map(|r| r.country.clone()).collect();

        EmissionTable {
            records,
            years,
            countries,
        }
    }

    /// Attach a bucket to every row, preserving order.
    pub fn classify(&self) -> Vec<ClassifiedRecord> {
        self.records
            .iter()
            .map(|r| ClassifiedRecord {
                record: r.clone(),
                bucket: classify(r.co2),
            })
            .collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First and last year, if any rows were loaded.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        Some((*self.years.first()?, *self.years.last()?))
    }
}
