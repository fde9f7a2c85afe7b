//! Quality selection: every generated field value is produced under one of
//! three modes — clean, superficially corrupted, or semantically invalid.

use rand::Rng;

use crate::errors::GenerationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Good,
    Noisy,
    Bad,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Good => "good",
            Quality::Noisy => "noisy",
            Quality::Bad => "bad",
        }
    }
}

/// Validated (good, noisy, bad) probability triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityWeights {
    good: f64,
    noisy: f64,
    bad: f64,
}

impl QualityWeights {
    pub fn new(good: f64, noisy: f64, bad: f64) -> Result<Self, GenerationError> {
        for (name, value) in [("good", good), ("noisy", noisy), ("bad", bad)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GenerationError::Weights(format!(
                    "{name} weight must be in [0, 1], got {value}"
                )));
            }
        }
        let sum = good + noisy + bad;
        if (sum - 1.0).abs() > aerogen_core::config::WEIGHT_SUM_TOLERANCE {
            return Err(GenerationError::Weights(format!(
                "weights must sum to 1, got {sum}"
            )));
        }
        Ok(Self { good, noisy, bad })
    }

    pub fn good_only() -> Self {
        Self {
            good: 1.0,
            noisy: 0.0,
            bad: 0.0,
        }
    }

    pub fn good(&self) -> f64 {
        self.good
    }

    /// Weighted categorical draw of one quality label.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Quality {
        let draw: f64 = rng.random();
        if draw < self.good {
            Quality::Good
        } else if draw < self.good + self.noisy {
            Quality::Noisy
        } else {
            Quality::Bad
        }
    }
}

/// Per-field value strategies for the three quality modes.
///
/// A good value is mandatory. A missing noisy strategy falls back to
/// generic string corruption of the good value; a missing bad strategy
/// collapses to the good value, which is how enum-like fields stay inside
/// their datatype.
#[derive(Debug, Clone)]
pub struct FieldValues {
    pub good: String,
    pub noisy: Option<String>,
    pub bad: Option<String>,
}

impl FieldValues {
    pub fn clean(good: impl Into<String>) -> Self {
        Self {
            good: good.into(),
            noisy: None,
            bad: None,
        }
    }

    pub fn with_bad(good: impl Into<String>, bad: impl Into<String>) -> Self {
        Self {
            good: good.into(),
            noisy: None,
            bad: Some(bad.into()),
        }
    }

    pub fn resolve<R: Rng + ?Sized>(self, quality: Quality, rng: &mut R) -> String {
        match quality {
            Quality::Good => self.good,
            Quality::Noisy => self
                .noisy
                .unwrap_or_else(|| make_noisy(&self.good, rng, 1)),
            Quality::Bad => self.bad.unwrap_or(self.good),
        }
    }
}

/// Corrupt a string without changing its semantic value: random
/// per-character case flips plus injected leading/trailing whitespace.
pub fn make_noisy<R: Rng + ?Sized>(value: &str, rng: &mut R, max_whitespace: usize) -> String {
    let altered: String = value
        .chars()
        .map(|c| {
            if rng.random_bool(0.5) {
                c.to_uppercase().to_string()
            } else {
                c.to_lowercase().to_string()
            }
        })
        .collect();

    let leading = " ".repeat(rng.random_range(0..=max_whitespace));
    let trailing = " ".repeat(rng.random_range(0..=max_whitespace));

    format!("{leading}{altered}{trailing}")
}
