//! Numbered tiles and their star values.
//!
//! ## Tile Pool
//!
//! The game has sixteen tiles numbered 21 through 36. At any moment each
//! tile is in exactly one place:
//! - available in the shared pool,
//! - owned by one player (somewhere in their stack), or
//! - removed from the game.
//!
//! Availability is never stored directly; it is derived from the other two
//! sets by `rules::available_tiles`.

use im::OrdSet;
use serde::{Deserialize, Serialize};

/// A tile value in `21..=36`.
///
/// The inner value is private so a `Tile` can never hold a number outside
/// the pool. Use `Tile::new` to convert from a raw value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tile(u8);

impl Tile {
    /// Lowest tile in the pool.
    pub const MIN: Tile = Tile(21);

    /// Highest tile in the pool.
    pub const MAX: Tile = Tile(36);

    /// Number of tiles in the pool.
    pub const COUNT: usize = 16;

    /// Create a tile, returning `None` for values outside `21..=36`.
    ///
    /// ```
    /// use stars_engine::core::Tile;
    ///
    /// assert_eq!(Tile::new(21).map(Tile::value), Some(21));
    /// assert!(Tile::new(20).is_none());
    /// assert!(Tile::new(37).is_none());
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Convert a dice sum into a tile, if the sum names one.
    #[must_use]
    pub fn from_sum(sum: u32) -> Option<Self> {
        u8::try_from(sum).ok().and_then(Self::new)
    }

    /// Raw tile number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Star points this tile is worth.
    ///
    /// 21-24 are worth 1, 25-28 worth 2, 29-32 worth 3, 33-36 worth 4.
    #[must_use]
    pub const fn stars(self) -> u32 {
        match self.0 {
            21..=24 => 1,
            25..=28 => 2,
            29..=32 => 3,
            _ => 4,
        }
    }

    /// Iterate over every tile in ascending order.
    pub fn all() -> impl Iterator<Item = Tile> {
        (Self::MIN.0..=Self::MAX.0).map(Tile)
    }

    /// The full pool as an ordered set.
    #[must_use]
    pub fn full_pool() -> OrdSet<Tile> {
        Self::all().collect()
    }
}

impl TryFrom<u8> for Tile {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tile::new(value).ok_or_else(|| format!("tile {value} is outside 21..=36"))
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.0
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Total star points for a sequence of tiles.
pub fn score_of<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> u32 {
    tiles.into_iter().map(|t| t.stars()).sum()
}
