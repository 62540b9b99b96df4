use crate::engine::EngineError;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Side length of the square grid.
    pub size: usize,
    /// Seed for the default RNG stream.
    pub seed: u64,
}

impl GameConfig {
    pub const MIN_SIZE: usize = 1;
    pub const MAX_SIZE: usize = 16;

    pub const DEFAULT_SIZE: usize = 4;
    pub const DEFAULT_SEED: u64 = 0;

    pub fn new() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            seed: Self::DEFAULT_SEED,
        }
    }

    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// # Errors
    ///
    /// Returns `EngineError::InvalidSize` if `size` is outside
    /// `MIN_SIZE..=MAX_SIZE`.
    pub fn validate(&self) -> Result<(), EngineError> {
        Self::validate_size(self.size)
    }

    pub(crate) fn validate_size(size: usize) -> Result<(), EngineError> {
        if (Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            Ok(())
        } else {
            Err(EngineError::InvalidSize { size })
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
