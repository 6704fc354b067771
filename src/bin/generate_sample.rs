use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const HEADERS: [&str; 7] = [
    "Year",
    "Month",
    "Followers",
    "Views",
    "Posts",
    "Interactions",
    "Comments",
];

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

/// Baseline and monthly growth per metric for one network.
struct NetworkProfile {
    sheet: &'static str,
    followers: (f64, f64),
    views: (f64, f64),
    posts: (f64, f64),
    interactions: (f64, f64),
    comments: (f64, f64),
}

const PROFILES: [NetworkProfile; 3] = [
    NetworkProfile {
        sheet: "FB Page",
        followers: (12_000.0, 180.0),
        views: (45_000.0, 900.0),
        posts: (22.0, 0.2),
        interactions: (3_100.0, 60.0),
        comments: (420.0, 8.0),
    },
    NetworkProfile {
        sheet: "Instagram",
        followers: (8_500.0, 260.0),
        views: (60_000.0, 1_500.0),
        posts: (30.0, 0.4),
        interactions: (5_400.0, 110.0),
        comments: (610.0, 14.0),
    },
    NetworkProfile {
        sheet: "LinkedIn",
        followers: (3_200.0, 95.0),
        views: (9_800.0, 240.0),
        posts: (12.0, 0.1),
        interactions: (880.0, 25.0),
        comments: (95.0, 3.0),
    },
];

fn sample_value(rng: &mut SimpleRng, (base, growth): (f64, f64), month_index: usize) -> f64 {
    let mean = base + growth * month_index as f64;
    rng.gauss(mean, mean * 0.04).max(0.0).round()
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let mut workbook = Workbook::new();

    let years = [2023u32, 2024];
    let mut total_rows = 0;

    for profile in &PROFILES {
        let sheet = workbook
            .add_worksheet()
            .set_name(profile.sheet)
            .with_context(|| format!("naming sheet {:?}", profile.sheet))?;

        for (col, header) in HEADERS.iter().enumerate() {
            sheet.write(0, col as u16, *header)?;
        }

        let mut row = 1u32;
        let mut month_index = 0usize;
        for year in years {
            for month in MONTHS {
                sheet.write(row, 0, year)?;
                sheet.write(row, 1, month)?;
                sheet.write(row, 2, sample_value(&mut rng, profile.followers, month_index))?;
                sheet.write(row, 3, sample_value(&mut rng, profile.views, month_index))?;
                sheet.write(row, 4, sample_value(&mut rng, profile.posts, month_index))?;
                sheet.write(
                    row,
                    5,
                    sample_value(&mut rng, profile.interactions, month_index),
                )?;
                sheet.write(row, 6, sample_value(&mut rng, profile.comments, month_index))?;
                row += 1;
                month_index += 1;
            }
        }
        total_rows += row - 1;
    }

    let output_path = "SM Analytics.xlsx";
    workbook
        .save(output_path)
        .with_context(|| format!("writing {output_path}"))?;

    println!(
        "Wrote {total_rows} monthly rows across {} sheets to {output_path}",
        PROFILES.len()
    );
    Ok(())
}
