use std::path::PathBuf;

use anyhow::{Context, Result};

/// Deterministic SplitMix64 stream driving the synthetic cohort.
struct Cohort {
    seed: u64,
}

impl Cohort {
    fn new(seed: u64) -> Self {
        Cohort { seed }
    }

    fn next_bits(&mut self) -> u64 {
        self.seed = self.seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.seed;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in [0, 1).
    fn unit(&mut self) -> f64 {
        (self.next_bits() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Hours studied, rounded to a tenth, in [0, max_hours).
    fn hours(&mut self, max_hours: f64) -> f64 {
        (self.unit() * max_hours * 10.0).floor() / 10.0
    }

    /// Score for `hours` with Gaussian noise (Box-Muller), clamped to 0..=100.
    fn score(&mut self, hours: f64) -> f64 {
        let u1 = self.unit().max(f64::MIN_POSITIVE);
        let u2 = self.unit();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        (BASE_SCORE + POINTS_PER_HOUR * hours + NOISE * z).clamp(0.0, 100.0)
    }
}

const STUDENTS: usize = 100;
const MAX_HOURS: f64 = 10.0;
const BASE_SCORE: f64 = 40.0;
const POINTS_PER_HOUR: f64 = 6.0;
const NOISE: f64 = 5.0;

/// Rows the extractor is expected to drop.
const MALFORMED_ROWS: [&[&str]; 4] = [&["abc", "xyz"], &["7.5"], &["", "62"], &["inf", "90"]];

fn main() -> Result<()> {
    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_scores.csv"));

    let mut cohort = Cohort::new(42);
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    writer.write_record(["Hours", "Scores"])?;

    for i in 0..STUDENTS {
        let hours = cohort.hours(MAX_HOURS);
        let score = cohort.score(hours);
        writer.write_record([format!("{hours:.1}"), format!("{score:.0}")])?;

        // Sprinkle malformed rows through the file.
        if i % 25 == 12 {
            writer.write_record(MALFORMED_ROWS[i / 25])?;
        }
    }
    writer.flush()?;

    println!(
        "Wrote {STUDENTS} students (+{} malformed rows) to {}",
        MALFORMED_ROWS.len(),
        output_path.display()
    );
    Ok(())
}
