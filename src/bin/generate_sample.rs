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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Install buckets as shown on the store listing.
const INSTALL_BUCKETS: [u64; 7] = [
    100_000,
    500_000,
    1_000_000,
    5_000_000,
    10_000_000,
    50_000_000,
    100_000_000,
];

const CATEGORIES: [&str; 8] = [
    "Action",
    "Arcade",
    "Board",
    "Casual",
    "Puzzle",
    "Racing",
    "Strategy",
    "Word",
];

const ADJECTIVES: [&str; 8] = [
    "Neon", "Pixel", "Cyber", "Turbo", "Hyper", "Shadow", "Galaxy", "Retro",
];
const NOUNS: [&str; 8] = [
    "Runner", "Quest", "Blocks", "Legends", "Drift", "Tactics", "Words", "Heroes",
];

/// `5000000` → `"5,000,000+"`.
fn store_installs(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('+');
    out
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "android-games.csv";

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record([
        "Rank",
        "Title",
        "Category",
        "Rating",
        "Reviews",
        "Installs",
        "Price",
        "Growth (30 days)",
    ])?;

    let n_rows = 120;
    for rank in 1..=n_rows {
        let title = format!("{} {} {rank}", rng.pick(&ADJECTIVES), rng.pick(&NOUNS));
        let installs = *rng.pick(&INSTALL_BUCKETS);
        // Ratings cluster around 4.3 and are quoted to one decimal, so ties are common.
        let rating = (3.5 + rng.next_f64() * 1.5).min(5.0);
        let reviews = (installs as f64 * (0.005 + rng.next_f64() * 0.03)) as u64;
        let price = if rng.next_f64() < 0.8 {
            0.0
        } else {
            0.99 + (rng.next_f64() * 5.0).floor()
        };
        // Roughly one row in ten has no growth figure yet.
        let growth = if rng.next_f64() < 0.1 {
            String::new()
        } else {
            format!("{:.1}", rng.next_f64() * 40.0)
        };

        writer.write_record([
            rank.to_string(),
            title,
            rng.pick(&CATEGORIES).to_string(),
            format!("{rating:.1}"),
            reviews.to_string(),
            store_installs(installs),
            format!("{price:.2}"),
            growth,
        ])?;
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {n_rows} games to {output_path}");
    Ok(())
}
