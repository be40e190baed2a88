/// Configuration options for the engine
use anyhow::{bail, Context, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicType {
    Positional,
    Random,
}

impl FromStr for HeuristicType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positional" => Ok(HeuristicType::Positional),
            "random" => Ok(HeuristicType::Random),
            _ => bail!("Unknown heuristic type: {}", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Abort on the first command error instead of reporting it
    pub strict_mode: bool,
    /// The heuristic the machine searches with
    pub heuristic: HeuristicType,
}

impl EngineOptions {
    pub fn new(strict_mode: bool, heuristic: HeuristicType) -> Self {
        Self {
            strict_mode,
            heuristic,
        }
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name.to_ascii_lowercase().as_str() {
            "strictmode" => self.strict_mode = value.parse()
                .with_context(|| format!("invalid strictmode value {}", value))?,
            "heuristic" => self.heuristic = value.parse()?,
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            strict_mode: false,
            heuristic: HeuristicType::Positional,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_option() {
        let mut options = EngineOptions::default();

        options.set_option("heuristic", "random").unwrap();
        assert_eq!(options.heuristic, HeuristicType::Random);

        options.set_option("StrictMode", "true").unwrap();
        assert!(options.strict_mode);

        assert!(options.set_option("strictmode", "maybe").is_err());
        assert!(options.set_option("heuristic", "neural").is_err());
        assert!(options.set_option("depth", "3").is_err());
    }
}
