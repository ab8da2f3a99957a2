//! Manzil boundaries: the seven divisions for a weekly recitation.

use serde::Serialize;

use super::VersePosition;

/// Total number of manzils.
pub const TOTAL_MANZILS: u16 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Manzil {
    /// Manzil number (1-7).
    pub number: u16,
    pub start: VersePosition,
    /// Inclusive.
    pub end: VersePosition,
}

impl Manzil {
    /// Whether the verse lies inside this manzil.
    pub fn contains(&self, position: VersePosition) -> bool {
        self.start <= position && position <= self.end
    }
}

impl std::fmt::Display for Manzil {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Manzil {}: ({} - {})", self.number, self.start, self.end)
    }
}

const fn manzil(number: u16, start: (u16, u16), end: (u16, u16)) -> Manzil {
    Manzil {
        number,
        start: VersePosition::new(start.0, start.1),
        end: VersePosition::new(end.0, end.1),
    }
}

pub static MANZILS: [Manzil; TOTAL_MANZILS as usize] = [
    manzil(1, (1, 1), (4, 126)),
    manzil(2, (4, 127), (9, 92)),
    manzil(3, (9, 93), (16, 128)),
    manzil(4, (17, 1), (25, 20)),
    manzil(5, (25, 21), (36, 27)),
    manzil(6, (36, 28), (48, 29)),
    manzil(7, (49, 1), (114, 6)),
];

/// Manzil by number, or `None` outside 1-7.
pub fn by_number(number: u16) -> Option<&'static Manzil> {
    number
        .checked_sub(1)
        .and_then(|index| MANZILS.get(index as usize))
}

/// The manzil containing the verse.
pub fn containing(position: VersePosition) -> Option<&'static Manzil> {
    MANZILS.iter().find(|manzil| manzil.contains(position))
}
