//! Registration id and timestamp generation

use chrono::{DateTime, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Long en-US form, e.g. `October 16, 2026 at 02:05 PM`
pub fn format_registration_date(at: &DateTime<Local>) -> String {
    at.format("%B %-d, %Y at %I:%M %p").to_string()
}

/// Issues `STU<year><4 digits>` ids
#[derive(Debug)]
pub struct RegistrationIdGenerator {
    rng: StdRng,
}

impl RegistrationIdGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for tests
    #[allow(dead_code)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw an id for `year`, never returning `taken`.
    ///
    /// Only the stored registration can collide, so that is the one id
    /// checked against.
    pub fn generate(&mut self, year: i32, taken: Option<&str>) -> String {
        loop {
            let number: u16 = self.rng.gen_range(0..10_000);
            let candidate = format!("STU{year}{number:04}");
            if taken != Some(candidate.as_str()) {
                return candidate;
            }
            tracing::debug!("Registration id {candidate} already stored, drawing again");
        }
    }
}

impl Default for RegistrationIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
