//! Prostration (sajda) positions.
//!
//! Classification follows the majority scholarly opinion; scholars differ on
//! some positions.

use serde::Serialize;

use super::VersePosition;

use self::ProstrationKind::{Obligatory, Recommended};

/// Total number of prostration positions.
pub const TOTAL_PROSTRATIONS: usize = 15;

/// Whether prostration at the position is obligatory or recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProstrationKind {
    Obligatory,
    Recommended,
}

/// A verse carrying a prostration marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProstrationVerse {
    /// Sequence number (1-15).
    pub number: u16,
    pub position: VersePosition,
    pub kind: ProstrationKind,
}

impl std::fmt::Display for ProstrationVerse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Prostration {}: [{}] ({:?})", self.number, self.position, self.kind)
    }
}

const fn prostration(number: u16, chapter: u16, verse: u16, kind: ProstrationKind) -> ProstrationVerse {
    ProstrationVerse {
        number,
        position: VersePosition::new(chapter, verse),
        kind,
    }
}

pub static PROSTRATIONS: [ProstrationVerse; TOTAL_PROSTRATIONS] = [
    prostration(1, 7, 206, Recommended),
    prostration(2, 13, 15, Recommended),
    prostration(3, 16, 50, Recommended),
    prostration(4, 17, 109, Recommended),
    prostration(5, 19, 58, Recommended),
    prostration(6, 22, 18, Recommended),
    prostration(7, 22, 77, Recommended),
    prostration(8, 25, 60, Recommended),
    prostration(9, 27, 26, Recommended),
    prostration(10, 32, 15, Obligatory),
    prostration(11, 38, 24, Recommended),
    prostration(12, 41, 38, Recommended),
    prostration(13, 53, 62, Recommended),
    prostration(14, 84, 21, Recommended),
    prostration(15, 96, 19, Recommended),
];

/// The prostration entry at the verse, if any.
pub fn at(position: VersePosition) -> Option<&'static ProstrationVerse> {
    PROSTRATIONS.iter().find(|p| p.position == position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_obligatory() {
        let obligatory: Vec<_> = PROSTRATIONS
            .iter()
            .filter(|p| p.kind == Obligatory)
            .collect();
        assert_eq!(obligatory.len(), 1);
        assert_eq!(obligatory[0].position, VersePosition::new(32, 15));
    }

    #[test]
    fn test_positions_sorted_and_unique() {
        assert!(PROSTRATIONS.windows(2).all(|w| w[0].position < w[1].position));
    }

    #[test]
    fn test_at() {
        assert_eq!(at(VersePosition::new(96, 19)).unwrap().number, 15);
        assert!(at(VersePosition::new(96, 18)).is_none());
    }
}
