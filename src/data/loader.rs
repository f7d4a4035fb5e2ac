use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use super::model::{EmissionRecord, EmissionTable};

/// Column holding the country name.
pub const NAME_COLUMN: &str = "Name";
/// Column holding the year.
pub const YEAR_COLUMN: &str = "Year";
/// Column holding emissions in kilotons/year.
pub const CO2_COLUMN: &str = "CO2";

/// Cell values read as "no data" in the CO2 column.
const MISSING_MARKERS: [&str; 4] = ["", "NaN", "nan", "NA"];

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("data file {} is unavailable: {source}", path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),
    #[error("CSV row {row}: {reason}")]
    Malformed { row: usize, reason: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the emissions table from a `;`-delimited file.
///
/// A missing or unreadable file yields [`LoadError::DataUnavailable`].
pub fn load_file(path: &Path) -> Result<EmissionTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::DataUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    read_table(file)
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// CSV layout: header row with at least `Name`, `Year` and `CO2`, cells
/// separated by `;`. Other columns are ignored.
pub fn read_table<R: Read>(input: R) -> Result<EmissionTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::Malformed {
            row: 0,
            reason: format!("reading headers: {e}"),
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let name_idx = column(NAME_COLUMN)?;
    let year_idx = column(YEAR_COLUMN)?;
    let co2_idx = column(CO2_COLUMN)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        // Row 1 is the first data row.
        let row = row_no + 1;
        let record = result.map_err(|e| LoadError::Malformed {
            row,
            reason: e.to_string(),
        })?;

        let country = record.get(name_idx).unwrap_or("").to_string();
        let year = parse_year(record.get(year_idx).unwrap_or(""), row)?;
        let co2 = parse_co2(record.get(co2_idx).unwrap_or(""), row)?;

        records.push(EmissionRecord::new(country, year, co2));
    }

    debug!("read {} rows from CSV", records.len());
    Ok(EmissionTable::from_records(records))
}

/// Float years outside this range would saturate when cast.
const YEAR_RANGE: std::ops::RangeInclusive<f64> = i32::MIN as f64..=i32::MAX as f64;

fn parse_year(s: &str, row: usize) -> Result<i32, LoadError> {
    // Exports sometimes write integral years as floats ("1970.0").
    s.parse::<i32>()
        .ok()
        .or_else(|| {
            s.parse::<f64>()
                .ok()
                .filter(|f| f.fract() == 0.0 && YEAR_RANGE.contains(f))
                .map(|f| f as i32)
        })
        .ok_or_else(|| LoadError::Malformed {
            row,
            reason: format!("'{s}' is not a valid {YEAR_COLUMN}"),
        })
}

fn parse_co2(s: &str, row: usize) -> Result<Option<f64>, LoadError> {
    if MISSING_MARKERS.contains(&s) {
        return Ok(None);
    }
    s.parse::<f64>()
        .map(|v| Some(v).filter(|v| !v.is_nan()))
        .map_err(|_| LoadError::Malformed {
            row,
            reason: format!("'{s}' is not a valid {CO2_COLUMN} value"),
        })
}
