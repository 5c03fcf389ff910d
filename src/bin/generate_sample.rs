use serde::Serialize;

/// One output row, laid out like the published state-level CSV.
#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "States/UTs")]
    region: &'a str,
    #[serde(rename = "District")]
    district: &'a str,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Murder")]
    murder: u64,
    #[serde(rename = "Rape")]
    rape: u64,
    #[serde(rename = "Kidnapping & Abduction")]
    kidnapping: u64,
    #[serde(rename = "Robbery")]
    robbery: u64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Baseline yearly counts per region: murder, rape, kidnapping, robbery.
const REGIONS: [(&str, [f64; 4]); 12] = [
    ("Uttar Pradesh", [4950.0, 1900.0, 7500.0, 380.0]),
    ("Bihar", [3300.0, 950.0, 4300.0, 1250.0]),
    ("Maharashtra", [2700.0, 1700.0, 1200.0, 2200.0]),
    ("Madhya Pradesh", [2300.0, 3400.0, 1000.0, 620.0]),
    ("West Bengal", [2100.0, 2300.0, 3400.0, 690.0]),
    ("Andhra Pradesh", [2600.0, 1400.0, 1500.0, 700.0]),
    ("Rajasthan", [1500.0, 1800.0, 2900.0, 480.0]),
    ("Tamil Nadu", [1800.0, 680.0, 1700.0, 590.0]),
    ("Karnataka", [1800.0, 640.0, 1400.0, 1600.0]),
    ("Kerala", [370.0, 1100.0, 260.0, 1000.0]),
    ("Goa", [40.0, 30.0, 50.0, 60.0]),
    ("A & N Islands", [15.0, 10.0, 8.0, 5.0]),
];

const FIRST_YEAR: i32 = 2008;
const YEARS: i32 = 5;

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "crime_data.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    let mut rows = 0usize;
    for offset in 0..YEARS {
        let year = FIRST_YEAR + offset;
        // Mild upward drift per year plus ±5% noise.
        let drift = 1.0 + 0.03 * offset as f64;
        for &(region, base) in &REGIONS {
            let mut counts = [0u64; 4];
            for (slot, &b) in counts.iter_mut().zip(base.iter()) {
                *slot = (b * drift * rng.gauss(1.0, 0.05)).round().max(0.0) as u64;
            }
            writer.serialize(Row {
                region,
                district: "TOTAL",
                year,
                murder: counts[0],
                rape: counts[1],
                kidnapping: counts[2],
                robbery: counts[3],
            })?;
            rows += 1;
        }
    }
    writer.flush()?;

    println!(
        "Wrote {rows} rows ({} regions x {YEARS} years) to {output_path}",
        REGIONS.len()
    );
    Ok(())
}
