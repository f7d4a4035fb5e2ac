//! Writes a synthetic `co2_data_clean.csv` so the dashboard can run without
//! the EDGAR extract. Output is deterministic (fixed seed).

use anyhow::{Context, Result};

const OUTPUT_PATH: &str = "co2_data_clean.csv";
const FIRST_YEAR: i32 = 1970;
const LAST_YEAR: i32 = 2024;
/// Probability that a cell is written as missing.
const MISSING_RATE: f64 = 0.02;

/// (country, emissions in 1970 in kt, yearly growth rate)
const COUNTRIES: [(&str, f64, f64); 24] = [
    ("China", 900_000.0, 0.058),
    ("United States", 4_600_000.0, 0.002),
    ("India", 200_000.0, 0.052),
    ("Russia", 1_900_000.0, -0.001),
    ("Japan", 800_000.0, 0.006),
    ("Iran", 100_000.0, 0.045),
    ("Saudi Arabia", 60_000.0, 0.055),
    ("Indonesia", 40_000.0, 0.055),
    ("Canada", 350_000.0, 0.007),
    ("South Korea", 50_000.0, 0.060),
    ("Mexico", 100_000.0, 0.030),
    ("Brazil", 90_000.0, 0.033),
    ("Australia", 150_000.0, 0.017),
    ("South Africa", 180_000.0, 0.014),
    ("Turkey", 50_000.0, 0.043),
    ("United Kingdom", 650_000.0, -0.011),
    ("Chile", 20_000.0, 0.032),
    ("Peru", 12_000.0, 0.030),
    ("Norway", 30_000.0, 0.005),
    ("Germany", 1_050_000.0, -0.007),
    ("France", 480_000.0, -0.008),
    ("Italy", 300_000.0, 0.001),
    ("Poland", 300_000.0, -0.001),
    ("Spain", 130_000.0, 0.011),
];

const SEED: u64 = 42;

/// Per-country noise stream (splitmix64). Each country is seeded from its
/// own name, so adding or reordering countries leaves the others' series
/// unchanged.
struct Noise {
    state: u64,
}

impl Noise {
    fn for_country(name: &str) -> Self {
        // FNV-1a over the name, mixed with the global seed.
        let hash = name.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |h, b| {
            (h ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3)
        });
        Noise { state: hash ^ SEED }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Relative deviation drawn from N(0, `spread`) (Box-Muller).
    fn jitter(&mut self, spread: f64) -> f64 {
        let u1 = self.unit().max(f64::MIN_POSITIVE);
        let u2 = self.unit();
        spread * (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

fn main() -> Result<()> {
    let mut noise: Vec<Noise> = COUNTRIES
        .iter()
        .map(|&(country, _, _)| Noise::for_country(country))
        .collect();

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;
    writer.write_record(["Name", "Year", "CO2"])?;

    let mut rows = 0usize;
    for year in FIRST_YEAR..=LAST_YEAR {
        let t = f64::from(year - FIRST_YEAR);
        for (&(country, base, growth), rng) in COUNTRIES.iter().zip(&mut noise) {
            let co2 = if rng.unit() < MISSING_RATE {
                String::new()
            } else {
                let trend = base * (1.0 + growth).powf(t);
                let noisy = trend * (1.0 + rng.jitter(0.03));
                format!("{:.1}", noisy.max(0.0))
            };
            writer.write_record([country, year.to_string().as_str(), co2.as_str()])?;
            rows += 1;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {rows} rows ({} countries, {FIRST_YEAR}–{LAST_YEAR}) to {OUTPUT_PATH}",
        COUNTRIES.len()
    );
    Ok(())
}
