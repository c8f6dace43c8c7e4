use core::{fmt, str::FromStr};
use core::ops::{Index, IndexMut};
use thiserror::Error;
use crate::Bitboard;

/*----------------------------------------------------------------*/

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    #[inline]
    pub const fn index(i: usize) -> File {
        if i < File::COUNT {
            return File::ALL[i];
        }

        panic!("File::index(): Index out of bounds");
    }

    #[inline]
    pub const fn try_index(i: usize) -> Option<File> {
        if i < File::COUNT {
            return Some(File::ALL[i]);
        }

        None
    }

    /*----------------------------------------------------------------*/

    #[inline]
    pub const fn try_offset(self, dx: i8) -> Option<File> {
        let i = self as i8 + dx;

        if i < 0 || i >= File::COUNT as i8 {
            return None;
        }

        File::try_index(i as usize)
    }

    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard(0x101010101010101 << self as u8)
    }

    /*----------------------------------------------------------------*/

    pub const COUNT: usize = 8;
    pub const ALL: [File; Self::COUNT] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H
    ];
}

impl<T> Index<File> for [T; File::COUNT] {
    type Output = T;

    #[inline]
    fn index(&self, file: File) -> &Self::Output {
        &self.as_slice()[file as usize]
    }
}

impl<T> IndexMut<File> for [T; File::COUNT] {
    #[inline]
    fn index_mut(&mut self, file: File) -> &mut Self::Output {
        &mut self.as_mut_slice()[file as usize]
    }
}

/*----------------------------------------------------------------*/

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
#[error("invalid file, expected one of a-h")]
pub struct FileParseError;

impl From<File> for char {
    #[inline]
    fn from(f: File) -> char {
        (b'a' + f as u8) as char
    }
}

impl TryFrom<char> for File {
    type Error = FileParseError;

    #[inline]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'a'..='h' => Ok(File::index(c as usize - 'a' as usize)),
            _ => Err(FileParseError),
        }
    }
}

impl FromStr for File {
    type Err = FileParseError;

    #[inline]
    fn from_str(s: &str) -> Result<File, FileParseError> {
        crate::sole_char(s).ok_or(FileParseError)?.try_into()
    }
}

impl fmt::Display for File {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/*----------------------------------------------------------------*/

#[test]
fn validate_file() {
    assert_eq!(File::index(0), File::A);
    assert_eq!(File::try_index(8), None);
    assert_eq!(File::A.bitboard(), Bitboard(0x101010101010101));
    assert_eq!(File::H.bitboard(), Bitboard(0x8080808080808080));
    assert_eq!(File::A.try_offset(-1), None);
    assert_eq!(File::G.try_offset(1), Some(File::H));
    assert_eq!(File::try_from('e'), Ok(File::E));
    assert_eq!(File::try_from('E'), Err(FileParseError));
    assert_eq!("c".parse::<File>(), Ok(File::C));
    assert!("cd".parse::<File>().is_err());
    assert_eq!(File::F.to_string(), "f");
}
