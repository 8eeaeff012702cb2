//! Player colors and per-color data storage.
//!
//! ## Color
//!
//! The two sides of a match. BLUE is the conventional first mover.
//!
//! ## ColorMap
//!
//! Fixed two-entry storage indexed by `Color`, used wherever the match
//! keeps one value per side (players, names).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of sides in a match.
pub const COLOR_COUNT: usize = 2;

/// One side of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Green,
}

impl Color {
    /// Both colors in index order.
    pub const ALL: [Color; COLOR_COUNT] = [Color::Blue, Color::Green];

    /// Get the raw color index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Blue => Color::Green,
            Color::Green => Color::Blue,
        }
    }

    /// Lower-case name (`"blue"`, `"green"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
        }
    }

    /// Both colors, starting with `first`.
    #[must_use]
    pub const fn starting_with(first: Color) -> [Color; COLOR_COUNT] {
        [first, first.opponent()]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use star_morris::core::{Color, ColorMap};
///
/// let mut names = ColorMap::new(|c| c.name().to_uppercase());
/// assert_eq!(names[Color::Blue], "BLUE");
///
/// names[Color::Green] = "Alice".to_string();
/// assert_eq!(names[Color::Green], "Alice");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; COLOR_COUNT],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: Color::ALL.map(factory),
        }
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Color, &mut T) pairs in index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Color, &mut T)> {
        Color::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for ColorMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_basics() {
        assert_eq!(Color::Blue.index(), 0);
        assert_eq!(Color::Green.index(), 1);
        assert_eq!(Color::Blue.opponent(), Color::Green);
        assert_eq!(Color::Green.opponent(), Color::Blue);
        assert_eq!(format!("{}", Color::Green), "green");
    }

    #[test]
    fn test_starting_with() {
        assert_eq!(Color::starting_with(Color::Green), [Color::Green, Color::Blue]);
        assert_eq!(Color::starting_with(Color::Blue), [Color::Blue, Color::Green]);
    }

    #[test]
    fn test_color_map_new() {
        let map = ColorMap::new(|c| c.index() * 10);
        assert_eq!(map[Color::Blue], 0);
        assert_eq!(map[Color::Green], 10);
    }

    #[test]
    fn test_color_map_mutation() {
        let mut map = ColorMap::new(|_| 0);
        map[Color::Green] = 7;
        assert_eq!(map[Color::Blue], 0);
        assert_eq!(map[Color::Green], 7);
    }

    #[test]
    fn test_color_map_iter() {
        let map: ColorMap<i32> = ColorMap::default();
        let colors: Vec<_> = map.iter().map(|(c, _)| c).collect();
        assert_eq!(colors, vec![Color::Blue, Color::Green]);
    }

    #[test]
    fn test_color_serialization() {
        let json = serde_json::to_string(&Color::Blue).unwrap();
        assert_eq!(json, "\"blue\"");
        let map = ColorMap::new(|c| c.name().to_string());
        let json = serde_json::to_string(&map).unwrap();
        let back: ColorMap<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
