//! Colors and the letters they own
//!
//! A color is created once from an HSV triple. Its RGB form is derived at
//! creation and never changes. Letters are assigned once, then revealed one
//! way as tiles are flipped.

use super::LetterSet;
use super::letters::letter_index;
use std::fmt;

/// HSV coordinates, each component in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

/// 8-bit RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Hsv {
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Convert to 8-bit RGB
    ///
    /// The hue is a unit angle; each channel is truncated after scaling to 255.
    ///
    /// # Examples
    /// ```
    /// use color_tiles::core::{Hsv, Rgb};
    ///
    /// assert_eq!(Hsv::new(0.0, 1.0, 1.0).to_rgb(), Rgb { r: 255, g: 0, b: 0 });
    /// assert_eq!(Hsv::new(0.5, 1.0, 0.5).to_rgb(), Rgb { r: 0, g: 127, b: 127 });
    /// ```
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let Self {
            hue,
            saturation: s,
            value: v,
        } = self;

        let h6 = hue.rem_euclid(1.0) * 6.0;
        let sector = h6.floor();
        let frac = h6 - sector;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * frac);
        let t = v * (1.0 - s * (1.0 - frac));

        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }
}

#[inline]
fn channel(component: f64) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0) as u8
}

impl From<Hsv> for Rgb {
    fn from(value: Hsv) -> Self {
        value.to_rgb()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A generated color with its assigned and revealed letters
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    hsv: Hsv,
    rgb: Rgb,
    assigned: LetterSet,
    revealed: LetterSet,
}

impl Color {
    /// Create a color with no letters
    #[must_use]
    pub fn new(hsv: Hsv) -> Self {
        Self {
            hsv,
            rgb: hsv.to_rgb(),
            assigned: LetterSet::EMPTY,
            revealed: LetterSet::EMPTY,
        }
    }

    #[inline]
    #[must_use]
    pub const fn hsv(&self) -> Hsv {
        self.hsv
    }

    #[inline]
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hsv.hue
    }

    #[inline]
    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Letters owned by this color
    #[inline]
    #[must_use]
    pub const fn assigned(&self) -> LetterSet {
        self.assigned
    }

    /// Owned letters already shown to the player
    #[inline]
    #[must_use]
    pub const fn revealed(&self) -> LetterSet {
        self.revealed
    }

    /// Check whether this color owns `letter`, ignoring case
    #[inline]
    #[must_use]
    pub const fn owns(&self, letter: char) -> bool {
        self.assigned.contains(letter)
    }

    /// Number of owned letters not yet revealed
    #[inline]
    #[must_use]
    pub const fn hidden_count(&self) -> usize {
        self.assigned.len() - self.revealed.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_fully_revealed(&self) -> bool {
        self.hidden_count() == 0
    }

    /// Give this color a letter during allocation
    ///
    /// Returns `false` for non-letters and letters already owned.
    pub(crate) fn assign_letter(&mut self, letter: char) -> bool {
        letter_index(letter).is_some() && self.assigned.insert(letter)
    }

    pub(crate) fn clear_letters(&mut self) {
        self.assigned = LetterSet::EMPTY;
        self.revealed = LetterSet::EMPTY;
    }

    /// Reveal every letter of `text` that this color owns
    ///
    /// Case is ignored, as are letters owned by other colors and anything that is
    /// not a letter. Revealed letters are never hidden again.
    pub fn reveal_letters(&mut self, text: &str) {
        let owned = LetterSet::from_text(text).intersection(self.assigned);
        self.revealed = self.revealed.union(owned);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.rgb, self.assigned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_owning(letters: &str) -> Color {
        let mut color = Color::new(Hsv::new(0.3, 0.95, 0.7));
        for letter in letters.chars() {
            assert!(color.assign_letter(letter));
        }
        color
    }

    #[test]
    fn primary_hues_convert() {
        assert_eq!(Hsv::new(0.0, 1.0, 1.0).to_rgb(), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(
            Hsv::new(1.0 / 3.0, 1.0, 1.0).to_rgb(),
            Rgb { r: 0, g: 255, b: 0 }
        );
        assert_eq!(
            Hsv::new(2.0 / 3.0, 1.0, 1.0).to_rgb(),
            Rgb { r: 0, g: 0, b: 255 }
        );
    }

    #[test]
    fn zero_saturation_is_gray() {
        let rgb = Hsv::new(0.7, 0.0, 0.5).to_rgb();
        assert_eq!(rgb, Rgb { r: 127, g: 127, b: 127 });
    }

    #[test]
    fn rgb_is_fixed_at_creation() {
        let color = Color::new(Hsv::new(0.5, 1.0, 0.5));
        assert_eq!(color.rgb(), Rgb { r: 0, g: 127, b: 127 });
        assert_eq!(color.rgb().to_string(), "#007f7f");
    }

    #[test]
    fn reveal_owned_letters_only() {
        let mut color = color_owning("nu");
        color.reveal_letters("Nuke");
        assert_eq!(color.revealed().to_string(), "nu");
        assert!(color.is_fully_revealed());
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut color = color_owning("nu");
        color.reveal_letters("Nuke");
        let first = color.revealed();
        color.reveal_letters("Nuke");
        assert_eq!(color.revealed(), first);
    }

    #[test]
    fn reveal_foreign_letters_is_noop() {
        let mut color = color_owning("abc");
        color.reveal_letters("XYZ");
        assert!(color.revealed().is_empty());
        assert_eq!(color.hidden_count(), 3);
    }

    #[test]
    fn reveal_ignores_punctuation_and_digits() {
        let mut color = color_owning("d");
        color.reveal_letters("Dust II 2!");
        assert_eq!(color.revealed().to_string(), "d");
    }

    #[test]
    fn reveal_never_shrinks() {
        let mut color = color_owning("aeiou");
        let mut previous = 0;
        for text in ["train", "", "overpass", "zzz", "anubis", "vertigo"] {
            color.reveal_letters(text);
            assert!(color.revealed().len() >= previous);
            assert!(color.revealed().is_subset(color.assigned()));
            previous = color.revealed().len();
        }
    }

    #[test]
    fn assign_rejects_duplicates_and_non_letters() {
        let mut color = color_owning("a");
        assert!(!color.assign_letter('a'));
        assert!(!color.assign_letter('A'));
        assert!(!color.assign_letter('3'));
        assert_eq!(color.assigned().len(), 1);
    }

    #[test]
    fn empty_color_has_nothing_hidden() {
        let color = Color::new(Hsv::new(0.1, 0.9, 0.6));
        assert!(color.assigned().is_empty());
        assert!(color.is_fully_revealed());
    }
}
