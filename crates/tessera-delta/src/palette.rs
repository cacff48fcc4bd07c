//! De-duplicating working palette.
//!
//! A [`Palette`] is a bounded list of colors kept in insertion order. A
//! color that is equal or [similar](Rgba::is_similar) to one already
//! present is rejected; when full, the oldest entry makes room.
//!
//! ```rust
//! use tessera_core::Rgba;
//! use tessera_delta::{DeltaEFormula, Palette};
//!
//! let mut palette = Palette::with_capacity(3);
//! assert!(palette.add(Rgba::from_rgba8(255, 0, 0, 255)));
//! assert!(!palette.add(Rgba::from_rgba8(250, 5, 0, 255))); // too close
//! assert!(palette.add(Rgba::from_rgba8(0, 0, 255, 255)));
//!
//! let target = Rgba::from_rgba8(20, 20, 230, 255);
//! let (index, _) = palette.nearest(target, DeltaEFormula::Cie76).unwrap();
//! assert_eq!(index, 1);
//! ```
//!
//! # Text format
//!
//! [`Palette::from_reader`] reads one color per line in any form
//! [`Rgba`] parses. Blank lines are skipped, as are comments: a lone `#`
//! or a line starting with `# `.

use crate::{ColorDifference, DeltaEFormula, color_difference};
use std::collections::VecDeque;
use std::io::BufRead;
use tessera_core::{Error, Result, Rgba};
use tracing::{debug, trace};

/// Default number of entries a palette holds.
pub const DEFAULT_CAPACITY: usize = 11;

/// Bounded, de-duplicated color list.
///
/// Deserializing goes through [`Palette::with_capacity`] and
/// [`Palette::add`], so a stored palette that is over-full or holds
/// similar colors comes back with the same guarantees as a built one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Palette {
    colors: VecDeque<Rgba>,
    capacity: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Palette {
    /// Empty palette with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty palette holding at most `capacity` colors (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            colors: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// `true` when the palette has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entry at `index`, oldest first.
    pub fn get(&self, index: usize) -> Option<Rgba> {
        self.colors.get(index).copied()
    }

    /// Iterates entries oldest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Rgba> + '_ {
        self.colors.iter().copied()
    }

    /// Returns `true` if `color` or a similar color is already present.
    pub fn contains_similar(&self, color: &Rgba) -> bool {
        self.colors.iter().any(|c| c == color || c.is_similar(color))
    }

    /// Adds `color` unless a similar color is present.
    ///
    /// Evicts the oldest entry first when the palette is full. Returns
    /// whether the color was added.
    pub fn add(&mut self, color: Rgba) -> bool {
        if self.contains_similar(&color) {
            trace!(color = %color.to_hex(), "palette: skipping similar color");
            return false;
        }
        if self.colors.len() >= self.capacity {
            if let Some(evicted) = self.colors.pop_front() {
                debug!(evicted = %evicted.to_hex(), "palette: full, evicting oldest");
            }
        }
        debug!(color = %color.to_hex(), len = self.colors.len() + 1, "palette: added");
        self.colors.push_back(color);
        true
    }

    /// Removes and returns the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Rgba> {
        let len = self.colors.len();
        let color = self
            .colors
            .remove(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))?;
        debug!(index, color = %color.to_hex(), "palette: removed");
        Ok(color)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// Closest entry to `target` under `formula`, with `target` as the
    /// reference color. Ties resolve to the oldest entry.
    pub fn nearest(&self, target: Rgba, formula: DeltaEFormula) -> Option<(usize, ColorDifference)> {
        self.ranked(target, formula).into_iter().next()
    }

    /// All entries with their distance to `target`, closest first.
    ///
    /// The sort is stable, so equal distances keep insertion order.
    pub fn ranked(&self, target: Rgba, formula: DeltaEFormula) -> Vec<(usize, ColorDifference)> {
        let mut ranked: Vec<_> = self
            .colors
            .iter()
            .enumerate()
            .map(|(i, c)| (i, color_difference(target.rgb(), c.rgb(), formula)))
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked
    }

    /// Reads a palette of [`DEFAULT_CAPACITY`] from line-oriented text.
    ///
    /// Lines go through [`add`](Self::add), so similar colors collapse and
    /// only the last `capacity` distinct colors remain.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with_capacity(reader, DEFAULT_CAPACITY)
    }

    /// Like [`from_reader`](Self::from_reader) with an explicit capacity.
    pub fn from_reader_with_capacity<R: BufRead>(reader: R, capacity: usize) -> Result<Self> {
        let mut palette = Self::with_capacity(capacity);
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let text = line.trim();
            if is_skipped(text) {
                continue;
            }
            let color: Rgba = text
                .parse()
                .map_err(|e| Error::parse(text, format!("line {}: {}", number + 1, e)))?;
            palette.add(color);
        }
        debug!(len = palette.len(), "palette: loaded");
        Ok(palette)
    }
}

fn is_skipped(line: &str) -> bool {
    line.is_empty() || line == "#" || line.starts_with("# ")
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Palette {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Stored {
            colors: Vec<Rgba>,
            capacity: usize,
        }

        let stored = Stored::deserialize(deserializer)?;
        let mut palette = Self::with_capacity(stored.capacity);
        palette.extend(stored.colors);
        Ok(palette)
    }
}

impl FromIterator<Rgba> for Palette {
    fn from_iter<I: IntoIterator<Item = Rgba>>(iter: I) -> Self {
        let mut palette = Self::default();
        palette.extend(iter);
        palette
    }
}

impl Extend<Rgba> for Palette {
    fn extend<I: IntoIterator<Item = Rgba>>(&mut self, iter: I) {
        for color in iter {
            self.add(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Rgb;

    fn rgb8(r: u8, g: u8, b: u8) -> Rgba {
        Rgba::from_rgba8(r, g, b, 255)
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(Palette::new().capacity(), 11);
        assert_eq!(Palette::with_capacity(0).capacity(), 1);
    }

    #[test]
    fn test_rejects_duplicates_and_similar() {
        let mut p = Palette::new();
        assert!(p.add(rgb8(10, 20, 30)));
        assert!(!p.add(rgb8(10, 20, 30)));
        assert!(!p.add(rgb8(12, 22, 28)));
        assert!(p.add(rgb8(200, 20, 30)));
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_alpha_counts_towards_similarity() {
        let mut p = Palette::new();
        assert!(p.add(rgb8(10, 20, 30)));
        assert!(p.add(Rgba::from_rgba8(10, 20, 30, 0)));
    }

    #[test]
    fn test_evicts_oldest() {
        let mut p = Palette::with_capacity(2);
        p.add(rgb8(255, 0, 0));
        p.add(rgb8(0, 255, 0));
        p.add(rgb8(0, 0, 255));
        let hex: Vec<String> = p.iter().map(|c| c.to_hex()).collect();
        assert_eq!(hex, ["#00ff00", "#0000ff"]);
    }

    #[test]
    fn test_rejected_color_does_not_evict() {
        let mut p = Palette::with_capacity(2);
        p.add(rgb8(255, 0, 0));
        p.add(rgb8(0, 255, 0));
        assert!(!p.add(rgb8(0, 255, 0)));
        assert_eq!(p.get(0), Some(rgb8(255, 0, 0)));
    }

    #[test]
    fn test_remove() {
        let mut p: Palette = [rgb8(255, 0, 0), rgb8(0, 0, 255)].into_iter().collect();
        assert_eq!(p.remove(0).unwrap(), rgb8(255, 0, 0));
        assert_eq!(p.len(), 1);

        let err = p.remove(5).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 5, len: 1 }));
    }

    #[test]
    fn test_nearest_and_ranked() {
        let p: Palette = [rgb8(255, 0, 0), rgb8(0, 255, 0), rgb8(0, 0, 255)]
            .into_iter()
            .collect();
        let target = rgb8(30, 220, 40);

        let (index, diff) = p.nearest(target, DeltaEFormula::Cie76).unwrap();
        assert_eq!(index, 1);
        assert!(diff.value() > 0.0);

        let ranked = p.ranked(target, DeltaEFormula::Euclidean);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].0, 1);
        assert!(ranked.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn test_nearest_identical() {
        let p: Palette = [rgb8(255, 0, 0), rgb8(0, 0, 255)].into_iter().collect();
        let (index, diff) = p.nearest(rgb8(0, 0, 255), DeltaEFormula::Ciede2000).unwrap();
        assert_eq!(index, 1);
        assert!(diff.is_identical());
    }

    #[test]
    fn test_nearest_empty() {
        assert!(Palette::new().nearest(Rgb::WHITE.into(), DeltaEFormula::default()).is_none());
    }

    #[test]
    fn test_ranked_ties_keep_order() {
        // Mirror images around gray are equidistant in RGB
        let p: Palette = [rgb8(138, 128, 128), rgb8(118, 128, 128)].into_iter().collect();
        let ranked = p.ranked(rgb8(128, 128, 128), DeltaEFormula::Euclidean);
        assert_eq!(ranked[0].1, ranked[1].1);
        assert_eq!([ranked[0].0, ranked[1].0], [0, 1]);
    }

    #[test]
    fn test_from_reader() {
        let text = "# primaries\n#ff0000\n\n  0,255,0  \n#\n#0000ff80\n#ff0101\n";
        let p = Palette::from_reader(text.as_bytes()).unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.get(2).unwrap().to_hex(), "#0000ff80");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_restores_capacity_bound() {
        let json = r##"{"colors":[
            {"rgb":{"r":1.0,"g":0.0,"b":0.0},"alpha":1.0},
            {"rgb":{"r":0.0,"g":1.0,"b":0.0},"alpha":1.0},
            {"rgb":{"r":0.0,"g":0.0,"b":1.0},"alpha":1.0}
        ],"capacity":0}"##;
        let mut p: Palette = serde_json::from_str(json).unwrap();
        assert_eq!(p.capacity(), 1);
        assert_eq!(p.len(), 1);
        assert_eq!(p.get(0).unwrap().to_hex(), "#0000ff");

        assert!(p.add(rgb8(128, 128, 128)));
        assert_eq!(p.len(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_drops_similar() {
        let p: Palette = [rgb8(255, 0, 0), rgb8(0, 0, 255)].into_iter().collect();
        let mut value = serde_json::to_value(&p).unwrap();
        value["colors"][1] = value["colors"][0].clone();

        let restored: Palette = serde_json::from_value(value).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.capacity(), DEFAULT_CAPACITY);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let p: Palette = [rgb8(255, 0, 0), Rgba::from_rgba8(0, 0, 255, 0)].into_iter().collect();
        let restored: Palette = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
        assert_eq!(restored, p);
    }

    #[test]
    fn test_from_reader_reports_line() {
        let err = Palette::from_reader("#ff0000\nnot-a-color\n".as_bytes()).unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("line 2"));
    }
}
