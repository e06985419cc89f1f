use std::path::PathBuf;

/// Where the session's random seed comes from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Seed from the wall clock at start-up.
    #[default]
    Clock,
    /// Fixed seed, for reproducible sessions.
    Fixed(u64),
}

impl From<Option<u64>> for SeedPolicy {
    fn from(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => SeedPolicy::Fixed(seed),
            None => SeedPolicy::Clock,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed: SeedPolicy,
    /// Show the reel before each result.
    pub animation: bool,
    /// ANSI colors and screen clearing.
    pub color: bool,
    /// Names to load into mode A at start-up.
    pub roster: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: SeedPolicy::Clock,
            animation: true,
            color: true,
            roster: None,
        }
    }
}

impl Settings {
    /// Settings for scripted sessions: fixed seed, no animation, no ANSI output.
    pub fn scripted(seed: u64) -> Self {
        Self {
            seed: SeedPolicy::Fixed(seed),
            animation: false,
            color: false,
            roster: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_policy_from_option() {
        assert_eq!(SeedPolicy::from(Some(9)), SeedPolicy::Fixed(9));
        assert_eq!(SeedPolicy::from(None), SeedPolicy::Clock);
    }

    #[test]
    fn test_scripted_settings() {
        let settings = Settings::scripted(3);
        assert_eq!(settings.seed, SeedPolicy::Fixed(3));
        assert!(!settings.animation);
        assert!(!settings.color);
    }
}
