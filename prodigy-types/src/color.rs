use core::{fmt, ops::*, str::FromStr};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(i: usize) -> Color {
        if i < Color::COUNT {
            return Color::ALL[i];
        }

        panic!("Color::index(): Index out of bounds");
    }

    #[inline]
    pub const fn try_index(i: usize) -> Option<Color> {
        if i < Color::COUNT {
            return Some(Color::ALL[i]);
        }

        None
    }

    /*----------------------------------------------------------------*/

    pub const COUNT: usize = 2;
    pub const ALL: [Color; Self::COUNT] = [Color::White, Color::Black];

    const CHARS: [char; Self::COUNT] = ['w', 'b'];
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Self::Output {
        Color::index(self as usize ^ 1)
    }
}

impl<T> Index<Color> for [T; Color::COUNT] {
    type Output = T;

    #[inline]
    fn index(&self, color: Color) -> &Self::Output {
        &self.as_slice()[color as usize]
    }
}

impl<T> IndexMut<Color> for [T; Color::COUNT] {
    #[inline]
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.as_mut_slice()[color as usize]
    }
}

/*----------------------------------------------------------------*/

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
#[error("invalid color, expected 'w' or 'b'")]
pub struct ColorParseError;

impl From<Color> for char {
    #[inline]
    fn from(color: Color) -> char {
        Color::CHARS[color]
    }
}

impl TryFrom<char> for Color {
    type Error = ColorParseError;

    #[inline]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Color::CHARS
            .iter()
            .position(|&color| color == c)
            .map(Color::index)
            .ok_or(ColorParseError)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Color, ColorParseError> {
        crate::sole_char(s).ok_or(ColorParseError)?.try_into()
    }
}

impl fmt::Display for Color {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/*----------------------------------------------------------------*/

#[test]
fn validate_color() {
    assert_eq!(!Color::White, Color::Black);
    assert_eq!(!Color::Black, Color::White);
    assert_eq!(Color::try_index(2), None);
    assert_eq!("w".parse::<Color>(), Ok(Color::White));
    assert_eq!("b".parse::<Color>(), Ok(Color::Black));
    assert!("W".parse::<Color>().is_err());
    assert!("wb".parse::<Color>().is_err());
    assert!("".parse::<Color>().is_err());
    assert_eq!(Color::Black.to_string(), "b");

    let mut counts = [0; Color::COUNT];
    counts[Color::Black] += 1;
    assert_eq!(counts, [0, 1]);
}
