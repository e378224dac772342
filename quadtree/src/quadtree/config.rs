use common::Rectangle;

/// Granularity used by the world when nothing else is configured.
pub const DEFAULT_DIVISIONS: u32 = 6;

#[derive(Debug, Clone)]
pub struct Config {
    /// Controls the minimum node size: `(width + height) / (2 * divisions)`
    /// of the root.
    pub divisions: u32,
    /// Report each pair once per pass even when both entities share
    /// several leaves.
    pub dedupe_pairs: bool,
}

impl Config {
    pub fn with_divisions(divisions: u32) -> Self {
        Config {
            divisions,
            ..Config::default()
        }
    }

    pub fn min_size_for(&self, bounds: &Rectangle) -> f32 {
        (bounds.width + bounds.height) / (2.0 * self.divisions as f32)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            divisions: DEFAULT_DIVISIONS,
            dedupe_pairs: false,
        }
    }
}
