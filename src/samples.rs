use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::from_str;
use std::error::Error;
use tracing::debug;

static TEXT_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/texts");

/// Sample difficulty. `Display` gives the capitalized label shown to the user.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Default,
    ValueEnum,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Cycles easy -> medium -> hard -> easy
    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    fn file_name(&self) -> String {
        format!("{}.json", self.to_string().to_lowercase())
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct SampleSet {
    pub name: String,
    pub size: u32,
    pub texts: Vec<String>,
}

impl SampleSet {
    pub fn load(difficulty: Difficulty) -> Result<Self, Box<dyn Error>> {
        read_samples_from_file(&difficulty.file_name())
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.texts.choose(rng).map(String::as_str)
    }
}

fn read_samples_from_file(file_name: &str) -> Result<SampleSet, Box<dyn Error>> {
    let file = TEXT_DIR
        .get_file(file_name)
        .ok_or_else(|| format!("sample file not found: {file_name}"))?;

    let file_as_str = file
        .contents_utf8()
        .ok_or_else(|| format!("sample file is not utf-8: {file_name}"))?;

    let set: SampleSet = from_str(file_as_str)?;
    debug!(file_name, texts = set.texts.len(), "loaded samples");

    Ok(set)
}

/// A random sentence of the given difficulty
pub fn random_sample(difficulty: Difficulty) -> Result<String, Box<dyn Error>> {
    let set = SampleSet::load(difficulty)?;
    let rng = &mut rand::thread_rng();

    set.pick(rng)
        .map(str::to_string)
        .ok_or_else(|| format!("no samples for {difficulty}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_difficulty_has_samples() {
        for difficulty in Difficulty::ALL {
            let set = SampleSet::load(difficulty).unwrap();

            assert_eq!(set.name, difficulty.to_string().to_lowercase());
            assert!(!set.texts.is_empty());
            assert_eq!(set.size as usize, set.texts.len());
        }
    }

    #[test]
    fn test_labels_are_capitalized() {
        assert_eq!(Difficulty::Easy.label(), "Easy");
        assert_eq!(Difficulty::Medium.label(), "Medium");
        assert_eq!(Difficulty::Hard.label(), "Hard");
    }

    #[test]
    fn test_next_cycles() {
        assert_eq!(Difficulty::Easy.next(), Difficulty::Medium);
        assert_eq!(Difficulty::Medium.next(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    }

    #[test]
    fn test_pick_comes_from_set() {
        let set = SampleSet::load(Difficulty::Hard).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            let text = set.pick(&mut rng).unwrap();
            assert!(set.texts.iter().any(|t| t == text));
        }
    }

    #[test]
    fn test_pick_from_empty_set() {
        let set = SampleSet {
            name: "empty".into(),
            size: 0,
            texts: vec![],
        };
        assert!(set.pick(&mut rand::thread_rng()).is_none());
    }

    #[test]
    fn test_random_sample() {
        let text = random_sample(Difficulty::Medium).unwrap();
        assert!(!text.trim().is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(read_samples_from_file("nonexistent.json").is_err());
    }

    #[test]
    fn test_difficulty_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
        let d: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(d, Difficulty::Medium);
    }
}
