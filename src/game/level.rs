//! Level Layout
//!
//! Where ground, crates, collectibles and clouds go. Repeated pieces are
//! described as rows (`start..stop` every `step` units at a fixed height) so
//! the classic level stays a handful of numbers.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::game::collectible::CollectibleKind;

/// Evenly spaced placements along one horizontal line.
///
/// X values follow half-open `start..stop` stepping, so `stop` itself is
/// never produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowPattern {
    /// First X coordinate
    pub start: i32,
    /// Exclusive upper bound on X
    pub stop: i32,
    /// Distance between placements (must be > 0)
    pub step: i32,
    /// Y coordinate of every placement
    pub y: i32,
}

impl RowPattern {
    /// Create a row pattern.
    pub const fn new(start: i32, stop: i32, step: i32, y: i32) -> Self {
        Self { start, stop, step, y }
    }

    /// Placement centres in increasing X order.
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        let step = self.step.max(1) as usize;
        (self.start..self.stop)
            .step_by(step)
            .map(move |x| Vec2::new(x as f32, self.y as f32))
    }

    /// Number of placements in the row.
    pub fn len(&self) -> usize {
        self.positions().count()
    }

    /// True if the row places nothing.
    pub fn is_empty(&self) -> bool {
        self.start >= self.stop
    }
}

/// The full placement list for a level.
///
/// Fields missing from a layout file are empty, not classic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    /// Ground tile rows
    #[serde(default)]
    pub ground_rows: Vec<RowPattern>,
    /// Individual crate centres
    #[serde(default)]
    pub crates: Vec<Vec2>,
    /// Coin rows
    #[serde(default)]
    pub coin_rows: Vec<RowPattern>,
    /// Individual coin centres
    #[serde(default)]
    pub coins: Vec<Vec2>,
    /// Gem rows
    #[serde(default)]
    pub gem_rows: Vec<RowPattern>,
    /// Individual gem centres
    #[serde(default)]
    pub gems: Vec<Vec2>,
    /// Decorative cloud centres
    #[serde(default)]
    pub clouds: Vec<Vec2>,
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self::classic()
    }
}

const CLASSIC_CRATES: [(f32, f32); 8] = [
    (320.0, 96.0),
    (512.0, 96.0),
    (704.0, 96.0),
    (768.0, 96.0),
    (768.0, 150.0),
    (967.0, 96.0),
    (1260.0, 96.0),
    (1520.0, 96.0),
];

const CLASSIC_CLOUDS: [(f32, f32); 18] = [
    (-20.0, 490.0),
    (120.0, 550.0),
    (210.0, 510.0),
    (370.0, 450.0),
    (512.0, 590.0),
    (628.0, 570.0),
    (767.0, 606.0),
    (830.0, 589.0),
    (950.0, 530.0),
    (1120.0, 560.0),
    (1285.0, 490.0),
    (1430.0, 520.0),
    (1487.0, 560.0),
    (1680.0, 550.0),
    (1810.0, 520.0),
    (1940.0, 567.0),
    (2055.0, 530.0),
    (2200.0, 549.0),
];

fn points(list: &[(f32, f32)]) -> Vec<Vec2> {
    list.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

impl LevelLayout {
    /// The classic tutorial level: 36 ground tiles, 8 crates, 12 coins,
    /// 4 gems and 18 clouds.
    pub fn classic() -> Self {
        Self {
            ground_rows: vec![RowPattern::new(0, 2250, 64, 32)],
            crates: points(&CLASSIC_CRATES),
            coin_rows: vec![
                RowPattern::new(128, 2250, 256, 96),
                RowPattern::new(550, 2250, 650, 225),
            ],
            coins: Vec::new(),
            gem_rows: vec![RowPattern::new(200, 2250, 530, 215)],
            gems: Vec::new(),
            clouds: points(&CLASSIC_CLOUDS),
        }
    }

    /// A level with nothing in it.
    pub fn empty() -> Self {
        Self {
            ground_rows: Vec::new(),
            crates: Vec::new(),
            coin_rows: Vec::new(),
            coins: Vec::new(),
            gem_rows: Vec::new(),
            gems: Vec::new(),
            clouds: Vec::new(),
        }
    }

    /// Load and validate a layout file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let layout: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reject rows that would never terminate or coordinates that are not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut rows = self
            .ground_rows
            .iter()
            .chain(&self.coin_rows)
            .chain(&self.gem_rows);
        if rows.any(|row| row.step <= 0) {
            return Err(ConfigError::Invalid {
                field: "layout.rows.step",
                reason: "must be greater than zero",
            });
        }

        let mut singles = self
            .crates
            .iter()
            .chain(&self.coins)
            .chain(&self.gems)
            .chain(&self.clouds);
        if singles.any(|p| !p.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "layout.positions",
                reason: "must be finite",
            });
        }

        Ok(())
    }

    /// Ground tile centres.
    pub fn ground_positions(&self) -> Vec<Vec2> {
        self.ground_rows.iter().flat_map(RowPattern::positions).collect()
    }

    /// Coin centres: rows first, then individual placements.
    pub fn coin_positions(&self) -> Vec<Vec2> {
        self.coin_rows
            .iter()
            .flat_map(RowPattern::positions)
            .chain(self.coins.iter().copied())
            .collect()
    }

    /// Gem centres: rows first, then individual placements.
    pub fn gem_positions(&self) -> Vec<Vec2> {
        self.gem_rows
            .iter()
            .flat_map(RowPattern::positions)
            .chain(self.gems.iter().copied())
            .collect()
    }

    /// Sum of the point values of every collectible in the layout.
    pub fn total_value(&self) -> i32 {
        let coins = self.coin_positions().len() as i32;
        let gems = self.gem_positions().len() as i32;
        coins * CollectibleKind::Coin.value() + gems * CollectibleKind::Gem.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_matches_half_open_range() {
        let row = RowPattern::new(0, 2250, 64, 32);
        let xs: Vec<f32> = row.positions().map(|p| p.x).collect();
        assert_eq!(xs.len(), 36);
        assert_eq!(xs[0], 0.0);
        assert_eq!(*xs.last().unwrap(), 2240.0);

        assert_eq!(RowPattern::new(550, 2250, 650, 225).len(), 3);
        assert!(RowPattern::new(10, 10, 5, 0).is_empty());
    }

    #[test]
    fn test_classic_counts() {
        let layout = LevelLayout::classic();
        assert_eq!(layout.ground_positions().len(), 36);
        assert_eq!(layout.crates.len(), 8);
        assert_eq!(layout.coin_positions().len(), 12);
        assert_eq!(layout.gem_positions().len(), 4);
        assert_eq!(layout.clouds.len(), 18);
    }

    #[test]
    fn test_classic_total_value_is_24() {
        assert_eq!(LevelLayout::classic().total_value(), 24);
    }

    #[test]
    fn test_gem_row_positions() {
        let xs: Vec<f32> = LevelLayout::classic()
            .gem_positions()
            .iter()
            .map(|p| p.x)
            .collect();
        assert_eq!(xs, vec![200.0, 730.0, 1260.0, 1790.0]);
    }

    #[test]
    fn test_zero_step_rejected() {
        let mut layout = LevelLayout::empty();
        layout.coin_rows.push(RowPattern::new(0, 100, 0, 10));
        assert!(layout.validate().is_err());
        assert!(LevelLayout::classic().validate().is_ok());
    }

    #[test]
    fn test_layout_json_missing_fields_empty() {
        let layout: LevelLayout = serde_json::from_str(r#"{ "coins": [[64.0, 109.0]] }"#).unwrap();
        assert_eq!(layout.coin_positions(), vec![Vec2::new(64.0, 109.0)]);
        assert!(layout.crates.is_empty());
        assert!(layout.ground_rows.is_empty());
    }
}
