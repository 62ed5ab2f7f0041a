use anyhow::{Context, Result};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Ben", "Cleo", "Dmitri", "Elena", "Farid", "Grace", "Hugo", "Iris", "Jonas", "Kira",
    "Liam", "Mara", "Noah", "Olga", "Priya", "Quinn", "Rosa", "Sven", "Tara",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Berg", "Cohen", "Dietrich", "Eriksen", "Fischer", "Garcia", "Hansen", "Ivanov",
    "Johansson", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Olsen", "Petrov",
];

const JOB_TITLES: &[&str] = &[
    "CEO",
    "CFO",
    "CTO",
    "Vice President of Sales",
    "VP Marketing",
    "Managing Director",
    "Director of Operations",
    "Senior Software Engineer",
    "Principal Consultant",
    "Marketing Lead",
    "Head of Product",
    "President",
    "Partner",
    "Owner",
    "Founder",
    "Account Manager",
    "HR Director",
    "Human Resources Manager",
    "Software Engineer",
    "Accountant",
    "Sales Representative",
    "Office Administrator",
    "Leadership Coach",
    "Customer Support Agent",
    "",
];

const COMPANIES: &[&str] = &[
    "Initech", "Globex", "Umbrella Corp", "Stark Industries", "Acme Ltd", "Wayne Enterprises",
    "Hooli", "Vandelay Industries", "Wonka Inc", "Tyrell Corp",
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

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Write `sample_contacts.csv`: a deterministic demo contact list with a mix
/// of executive, non-executive, HR, and blank job titles.
fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut writer =
        csv::Writer::from_path("sample_contacts.csv").context("creating sample_contacts.csv")?;
    writer.write_record(["Name", "Job Title", "Company", "Email"])?;

    for _ in 0..200 {
        let first = rng.pick(FIRST_NAMES);
        let last = rng.pick(LAST_NAMES);
        let title = rng.pick(JOB_TITLES);
        let company = rng.pick(COMPANIES);
        let email = format!(
            "{}.{}@{}.example",
            first.to_lowercase(),
            last.to_lowercase(),
            company.to_lowercase().replace(' ', "-")
        );

        writer.write_record([format!("{first} {last}"), title.to_string(), company.to_string(), email])?;
    }

    writer.flush().context("flushing sample_contacts.csv")?;
    println!("Wrote sample_contacts.csv (200 rows)");
    Ok(())
}
