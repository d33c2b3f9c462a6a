use anyhow::{Context, Result};

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

const OUTPUT_PATH: &str = "launch_records.csv";

const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

/// (category, payload mean kg, payload std-dev kg, success probability)
const BOOSTERS: [(&str, f64, f64, f64); 5] = [
    ("v1.0", 1200.0, 600.0, 0.40),
    ("v1.1", 2800.0, 1100.0, 0.60),
    ("FT", 4500.0, 1900.0, 0.85),
    ("B4", 5200.0, 2100.0, 0.90),
    ("B5", 6000.0, 2400.0, 0.95),
];

const LAUNCHES_PER_BOOSTER: usize = 12;

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;
    writer.write_record([
        "Flight Number",
        "Launch Site",
        "Payload Mass (kg)",
        "class",
        "Booster Version Category",
    ])?;

    let mut flight = 1u32;
    for &(booster, mean, std_dev, p_success) in &BOOSTERS {
        for _ in 0..LAUNCHES_PER_BOOSTER {
            let site = SITES[(rng.next_u64() % SITES.len() as u64) as usize];
            let mass = rng.gauss(mean, std_dev).clamp(0.0, 9_600.0);
            let class = u8::from(rng.next_f64() < p_success);

            writer.write_record(&[
                flight.to_string(),
                site.to_string(),
                format!("{mass:.1}"),
                class.to_string(),
                booster.to_string(),
            ])?;
            flight += 1;
        }
    }

    writer
        .flush()
        .with_context(|| format!("writing {OUTPUT_PATH}"))?;
    println!("Wrote {} launch records to {OUTPUT_PATH}", flight - 1);
    Ok(())
}
