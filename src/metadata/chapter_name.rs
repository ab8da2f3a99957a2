//! Chapters by name.

use serde::{Deserialize, Serialize};

use crate::error::{MushafError, Result};

use super::chapter::{CHAPTERS, Chapter};
use ChapterName::*;

/// Every chapter as a named constant. The discriminant is the chapter number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u16)]
pub enum ChapterName {
    /// The Opening
    AlFatiha = 1,
    /// The Cow
    AlBaqarah = 2,
    /// Family of Imran
    AliImran = 3,
    /// The Women
    AnNisa = 4,
    /// The Table Spread
    AlMaidah = 5,
    /// The Cattle
    AlAnam = 6,
    /// The Heights
    AlAraf = 7,
    /// The Spoils of War
    AlAnfal = 8,
    /// The Repentance
    AtTawbah = 9,
    /// Jonah
    Yunus = 10,
    /// Hud
    Hud = 11,
    /// Joseph
    Yusuf = 12,
    /// The Thunder
    ArRad = 13,
    /// Abraham
    Ibrahim = 14,
    /// The Rocky Tract
    AlHijr = 15,
    /// The Bee
    AnNahl = 16,
    /// The Night Journey
    AlIsra = 17,
    /// The Cave
    AlKahf = 18,
    /// Mary
    Maryam = 19,
    /// Ta-Ha
    Taha = 20,
    /// The Prophets
    AlAnbiya = 21,
    /// The Pilgrimage
    AlHajj = 22,
    /// The Believers
    AlMuminun = 23,
    /// The Light
    AnNur = 24,
    /// The Criterion
    AlFurqan = 25,
    /// The Poets
    AshShuara = 26,
    /// The Ant
    AnNaml = 27,
    /// The Stories
    AlQasas = 28,
    /// The Spider
    AlAnkabut = 29,
    /// The Romans
    ArRum = 30,
    /// Luqman
    Luqman = 31,
    /// The Prostration
    AsSajdah = 32,
    /// The Combined Forces
    AlAhzab = 33,
    /// Sheba
    Saba = 34,
    /// Originator
    Fatir = 35,
    /// Ya-Sin
    YaSin = 36,
    /// Those Who Set the Ranks
    AsSaffat = 37,
    /// The Letter Sad
    Sad = 38,
    /// The Troops
    AzZumar = 39,
    /// The Forgiver
    Ghafir = 40,
    /// Explained in Detail
    Fussilat = 41,
    /// The Consultation
    AshShura = 42,
    /// The Ornaments of Gold
    AzZukhruf = 43,
    /// The Smoke
    AdDukhan = 44,
    /// The Crouching
    AlJathiyah = 45,
    /// The Wind-Curved Sandhills
    AlAhqaf = 46,
    /// Muhammad
    Muhammad = 47,
    /// The Victory
    AlFath = 48,
    /// The Rooms
    AlHujurat = 49,
    /// The Letter Qaf
    Qaf = 50,
    /// The Winnowing Winds
    AdhDhariyat = 51,
    /// The Mount
    AtTur = 52,
    /// The Star
    AnNajm = 53,
    /// The Moon
    AlQamar = 54,
    /// The Beneficent
    ArRahman = 55,
    /// The Inevitable
    AlWaqiah = 56,
    /// The Iron
    AlHadid = 57,
    /// The Pleading Woman
    AlMujadila = 58,
    /// The Exile
    AlHashr = 59,
    /// She That Is to Be Examined
    AlMumtahanah = 60,
    /// The Ranks
    AsSaff = 61,
    /// The Congregation, Friday
    AlJumuah = 62,
    /// The Hypocrites
    AlMunafiqun = 63,
    /// The Mutual Disillusion
    AtTaghabun = 64,
    /// The Divorce
    AtTalaq = 65,
    /// The Prohibition
    AtTahrim = 66,
    /// The Sovereignty
    AlMulk = 67,
    /// The Pen
    AlQalam = 68,
    /// The Reality
    AlHaqqah = 69,
    /// The Ascending Stairways
    AlMaarij = 70,
    /// Noah
    Nuh = 71,
    /// The Jinn
    AlJinn = 72,
    /// The Enshrouded One
    AlMuzzammil = 73,
    /// The Cloaked One
    AlMuddaththir = 74,
    /// The Resurrection
    AlQiyamah = 75,
    /// The Human
    AlInsan = 76,
    /// The Emissaries
    AlMursalat = 77,
    /// The Tidings
    AnNaba = 78,
    /// Those Who Drag Forth
    AnNaziat = 79,
    /// He Frowned
    Abasa = 80,
    /// The Overthrowing
    AtTakwir = 81,
    /// The Cleaving
    AlInfitar = 82,
    /// The Defrauding
    AlMutaffifin = 83,
    /// The Sundering
    AlInshiqaq = 84,
    /// The Mansions of the Stars
    AlBuruj = 85,
    /// The Morning Star
    AtTariq = 86,
    /// The Most High
    AlAla = 87,
    /// The Overwhelming
    AlGhashiyah = 88,
    /// The Dawn
    AlFajr = 89,
    /// The City
    AlBalad = 90,
    /// The Sun
    AshShams = 91,
    /// The Night
    AlLayl = 92,
    /// The Morning Hours
    AdDuha = 93,
    /// The Relief
    AshSharh = 94,
    /// The Fig
    AtTin = 95,
    /// The Clot
    AlAlaq = 96,
    /// The Power
    AlQadr = 97,
    /// The Clear Proof
    AlBayyinah = 98,
    /// The Earthquake
    AzZalzalah = 99,
    /// The Coursers
    AlAdiyat = 100,
    /// The Calamity
    AlQariah = 101,
    /// The Rivalry in World Increase
    AtTakathur = 102,
    /// The Declining Day
    AlAsr = 103,
    /// The Traducer
    AlHumazah = 104,
    /// The Elephant
    AlFil = 105,
    /// Quraysh
    Quraysh = 106,
    /// The Small Kindnesses
    AlMaun = 107,
    /// The Abundance
    AlKawthar = 108,
    /// The Disbelievers
    AlKafirun = 109,
    /// The Divine Support
    AnNasr = 110,
    /// The Palm Fiber
    AlMasad = 111,
    /// The Sincerity
    AlIkhlas = 112,
    /// The Daybreak
    AlFalaq = 113,
    /// Mankind
    AnNas = 114,
}

impl ChapterName {
    /// All chapters, in order.
    pub const ALL: [ChapterName; 114] = [
        AlFatiha,
        AlBaqarah,
        AliImran,
        AnNisa,
        AlMaidah,
        AlAnam,
        AlAraf,
        AlAnfal,
        AtTawbah,
        Yunus,
        Hud,
        Yusuf,
        ArRad,
        Ibrahim,
        AlHijr,
        AnNahl,
        AlIsra,
        AlKahf,
        Maryam,
        Taha,
        AlAnbiya,
        AlHajj,
        AlMuminun,
        AnNur,
        AlFurqan,
        AshShuara,
        AnNaml,
        AlQasas,
        AlAnkabut,
        ArRum,
        Luqman,
        AsSajdah,
        AlAhzab,
        Saba,
        Fatir,
        YaSin,
        AsSaffat,
        Sad,
        AzZumar,
        Ghafir,
        Fussilat,
        AshShura,
        AzZukhruf,
        AdDukhan,
        AlJathiyah,
        AlAhqaf,
        Muhammad,
        AlFath,
        AlHujurat,
        Qaf,
        AdhDhariyat,
        AtTur,
        AnNajm,
        AlQamar,
        ArRahman,
        AlWaqiah,
        AlHadid,
        AlMujadila,
        AlHashr,
        AlMumtahanah,
        AsSaff,
        AlJumuah,
        AlMunafiqun,
        AtTaghabun,
        AtTalaq,
        AtTahrim,
        AlMulk,
        AlQalam,
        AlHaqqah,
        AlMaarij,
        Nuh,
        AlJinn,
        AlMuzzammil,
        AlMuddaththir,
        AlQiyamah,
        AlInsan,
        AlMursalat,
        AnNaba,
        AnNaziat,
        Abasa,
        AtTakwir,
        AlInfitar,
        AlMutaffifin,
        AlInshiqaq,
        AlBuruj,
        AtTariq,
        AlAla,
        AlGhashiyah,
        AlFajr,
        AlBalad,
        AshShams,
        AlLayl,
        AdDuha,
        AshSharh,
        AtTin,
        AlAlaq,
        AlQadr,
        AlBayyinah,
        AzZalzalah,
        AlAdiyat,
        AlQariah,
        AtTakathur,
        AlAsr,
        AlHumazah,
        AlFil,
        Quraysh,
        AlMaun,
        AlKawthar,
        AlKafirun,
        AnNasr,
        AlMasad,
        AlIkhlas,
        AlFalaq,
        AnNas,
    ];

    pub const fn number(self) -> u16 {
        self as u16
    }

    /// The chapter's metadata record.
    pub fn chapter(self) -> &'static Chapter {
        &CHAPTERS[self.index()]
    }

    fn index(self) -> usize {
        usize::from(self.number()) - 1
    }
}

impl From<ChapterName> for u16 {
    fn from(name: ChapterName) -> Self {
        name.number()
    }
}

impl TryFrom<u16> for ChapterName {
    type Error = MushafError;

    fn try_from(number: u16) -> Result<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
            .ok_or_else(|| MushafError::chapter_not_found(number))
    }
}

impl std::fmt::Display for ChapterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chapter().english_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminants_match_table() {
        for (index, name) in ChapterName::ALL.iter().enumerate() {
            assert_eq!(usize::from(name.number()), index + 1);
            assert_eq!(name.chapter().number, name.number());
        }
    }

    #[test]
    fn test_conversions() {
        assert_eq!(u16::from(ChapterName::AlBaqarah), 2);
        assert_eq!(ChapterName::try_from(112).unwrap(), ChapterName::AlIkhlas);
        assert_eq!(ChapterName::AnNas.chapter().verse_count, 6);
        assert!(matches!(
            ChapterName::try_from(0),
            Err(MushafError::ChapterNotFound { number: 0 })
        ));
        assert!(ChapterName::try_from(115).is_err());
    }

    #[test]
    fn test_display_uses_transliterated_name() {
        assert_eq!(ChapterName::AlFatiha.to_string(), "Al-Fatiha");
        assert_eq!(ChapterName::AliImran.to_string(), "Ali 'Imran");
    }
}
