//! Chapter (surah) metadata.

use serde::Serialize;

use self::RevelationType::{Meccan, Medinan};

/// Total number of chapters.
pub const TOTAL_CHAPTERS: u16 = 114;

/// Total number of verses across all chapters.
pub const TOTAL_VERSES: u16 = 6236;

/// Place of revelation of a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RevelationType {
    /// Revealed in Mecca, before the migration.
    Meccan,
    /// Revealed in Medina, after the migration.
    Medinan,
}

/// Fixed metadata for one chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chapter {
    /// Chapter number (1-114).
    pub number: u16,
    /// Arabic name, e.g. "الفاتحة".
    pub arabic_name: &'static str,
    /// Transliterated name, e.g. "Al-Fatiha". Used as the display label.
    pub english_name: &'static str,
    /// English meaning of the name.
    pub english_meaning: &'static str,
    /// Number of verses.
    pub verse_count: u16,
    pub revelation_type: RevelationType,
    /// Chronological position in the order of revelation (1-114).
    pub revelation_order: u16,
    /// Number of sections (ruku).
    pub section_count: u16,
    /// First part (juz) the chapter appears in.
    pub part_start: u16,
    /// Last part (juz) the chapter appears in.
    pub part_end: u16,
    /// Page of the standard Madani print where the chapter begins.
    pub page_start: u16,
    /// Whether the chapter opens with the opening formula. Only chapter 9 does not.
    pub has_opening_formula: bool,
}

impl Chapter {
    /// Whether the chapter spans the given part.
    pub fn spans_part(&self, part: u16) -> bool {
        self.part_start <= part && part <= self.part_end
    }
}

impl std::fmt::Display for Chapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}. {} ({}) - {} verses",
            self.number, self.english_name, self.arabic_name, self.verse_count
        )
    }
}

#[allow(clippy::too_many_arguments)]
const fn chapter(
    number: u16,
    arabic_name: &'static str,
    english_name: &'static str,
    english_meaning: &'static str,
    verse_count: u16,
    revelation_type: RevelationType,
    revelation_order: u16,
    section_count: u16,
    part_start: u16,
    part_end: u16,
    page_start: u16,
    has_opening_formula: bool,
) -> Chapter {
    Chapter {
        number,
        arabic_name,
        english_name,
        english_meaning,
        verse_count,
        revelation_type,
        revelation_order,
        section_count,
        part_start,
        part_end,
        page_start,
        has_opening_formula,
    }
}

/// All chapters, in mushaf order. `CHAPTERS[n - 1]` is chapter `n`.
pub static CHAPTERS: [Chapter; TOTAL_CHAPTERS as usize] = [
    chapter(1, "الفاتحة", "Al-Fatiha", "The Opening", 7, Meccan, 5, 1, 1, 1, 1, true),
    chapter(2, "البقرة", "Al-Baqarah", "The Cow", 286, Medinan, 87, 40, 1, 3, 2, true),
    chapter(3, "آل عمران", "Ali 'Imran", "Family of Imran", 200, Medinan, 89, 20, 3, 4, 50, true),
    chapter(4, "النساء", "An-Nisa", "The Women", 176, Medinan, 92, 24, 4, 6, 77, true),
    chapter(5, "المائدة", "Al-Ma'idah", "The Table Spread", 120, Medinan, 112, 16, 6, 7, 106, true),
    chapter(6, "الأنعام", "Al-An'am", "The Cattle", 165, Meccan, 55, 20, 7, 8, 128, true),
    chapter(7, "الأعراف", "Al-A'raf", "The Heights", 206, Meccan, 39, 24, 8, 9, 151, true),
    chapter(8, "الأنفال", "Al-Anfal", "The Spoils of War", 75, Medinan, 88, 10, 9, 10, 177, true),
    chapter(9, "التوبة", "At-Tawbah", "The Repentance", 129, Medinan, 113, 16, 10, 11, 187, false),
    chapter(10, "يونس", "Yunus", "Jonah", 109, Meccan, 51, 11, 11, 11, 208, true),
    chapter(11, "هود", "Hud", "Hud", 123, Meccan, 52, 10, 11, 12, 221, true),
    chapter(12, "يوسف", "Yusuf", "Joseph", 111, Meccan, 53, 12, 12, 13, 235, true),
    chapter(13, "الرعد", "Ar-Ra'd", "The Thunder", 43, Medinan, 96, 6, 13, 13, 249, true),
    chapter(14, "إبراهيم", "Ibrahim", "Abraham", 52, Meccan, 72, 7, 13, 13, 255, true),
    chapter(15, "الحجر", "Al-Hijr", "The Rocky Tract", 99, Meccan, 54, 6, 14, 14, 262, true),
    chapter(16, "النحل", "An-Nahl", "The Bee", 128, Meccan, 70, 16, 14, 14, 267, true),
    chapter(17, "الإسراء", "Al-Isra", "The Night Journey", 111, Meccan, 50, 12, 15, 15, 282, true),
    chapter(18, "الكهف", "Al-Kahf", "The Cave", 110, Meccan, 69, 12, 15, 16, 293, true),
    chapter(19, "مريم", "Maryam", "Mary", 98, Meccan, 44, 6, 16, 16, 305, true),
    chapter(20, "طه", "Taha", "Ta-Ha", 135, Meccan, 45, 8, 16, 16, 312, true),
    chapter(21, "الأنبياء", "Al-Anbiya", "The Prophets", 112, Meccan, 73, 7, 17, 17, 322, true),
    chapter(22, "الحج", "Al-Hajj", "The Pilgrimage", 78, Medinan, 103, 10, 17, 17, 332, true),
    chapter(23, "المؤمنون", "Al-Mu'minun", "The Believers", 118, Meccan, 74, 6, 18, 18, 342, true),
    chapter(24, "النور", "An-Nur", "The Light", 64, Medinan, 102, 9, 18, 18, 350, true),
    chapter(25, "الفرقان", "Al-Furqan", "The Criterion", 77, Meccan, 42, 6, 18, 19, 359, true),
    chapter(26, "الشعراء", "Ash-Shu'ara", "The Poets", 227, Meccan, 47, 11, 19, 19, 367, true),
    chapter(27, "النمل", "An-Naml", "The Ant", 93, Meccan, 48, 7, 19, 20, 377, true),
    chapter(28, "القصص", "Al-Qasas", "The Stories", 88, Meccan, 49, 9, 20, 20, 385, true),
    chapter(29, "العنكبوت", "Al-'Ankabut", "The Spider", 69, Meccan, 85, 7, 20, 21, 396, true),
    chapter(30, "الروم", "Ar-Rum", "The Romans", 60, Meccan, 84, 6, 21, 21, 404, true),
    chapter(31, "لقمان", "Luqman", "Luqman", 34, Meccan, 57, 4, 21, 21, 411, true),
    chapter(32, "السجدة", "As-Sajdah", "The Prostration", 30, Meccan, 75, 3, 21, 21, 415, true),
    chapter(33, "الأحزاب", "Al-Ahzab", "The Combined Forces", 73, Medinan, 90, 9, 21, 22, 418, true),
    chapter(34, "سبأ", "Saba", "Sheba", 54, Meccan, 58, 6, 22, 22, 428, true),
    chapter(35, "فاطر", "Fatir", "Originator", 45, Meccan, 43, 5, 22, 22, 434, true),
    chapter(36, "يس", "Ya-Sin", "Ya-Sin", 83, Meccan, 41, 5, 22, 23, 440, true),
    chapter(37, "الصافات", "As-Saffat", "Those Who Set the Ranks", 182, Meccan, 56, 5, 23, 23, 446, true),
    chapter(38, "ص", "Sad", "The Letter Sad", 88, Meccan, 38, 5, 23, 23, 453, true),
    chapter(39, "الزمر", "Az-Zumar", "The Troops", 75, Meccan, 59, 8, 23, 24, 458, true),
    chapter(40, "غافر", "Ghafir", "The Forgiver", 85, Meccan, 60, 9, 24, 24, 467, true),
    chapter(41, "فصلت", "Fussilat", "Explained in Detail", 54, Meccan, 61, 6, 24, 25, 477, true),
    chapter(42, "الشورى", "Ash-Shura", "The Consultation", 53, Meccan, 62, 5, 25, 25, 483, true),
    chapter(43, "الزخرف", "Az-Zukhruf", "The Ornaments of Gold", 89, Meccan, 63, 7, 25, 25, 489, true),
    chapter(44, "الدخان", "Ad-Dukhan", "The Smoke", 59, Meccan, 64, 3, 25, 25, 496, true),
    chapter(45, "الجاثية", "Al-Jathiyah", "The Crouching", 37, Meccan, 65, 4, 25, 25, 499, true),
    chapter(46, "الأحقاف", "Al-Ahqaf", "The Wind-Curved Sandhills", 35, Meccan, 66, 4, 26, 26, 502, true),
    chapter(47, "محمد", "Muhammad", "Muhammad", 38, Medinan, 95, 4, 26, 26, 507, true),
    chapter(48, "الفتح", "Al-Fath", "The Victory", 29, Medinan, 111, 4, 26, 26, 511, true),
    chapter(49, "الحجرات", "Al-Hujurat", "The Rooms", 18, Medinan, 106, 2, 26, 26, 515, true),
    chapter(50, "ق", "Qaf", "The Letter Qaf", 45, Meccan, 34, 3, 26, 26, 518, true),
    chapter(51, "الذاريات", "Adh-Dhariyat", "The Winnowing Winds", 60, Meccan, 67, 3, 26, 27, 520, true),
    chapter(52, "الطور", "At-Tur", "The Mount", 49, Meccan, 76, 2, 27, 27, 523, true),
    chapter(53, "النجم", "An-Najm", "The Star", 62, Meccan, 23, 3, 27, 27, 526, true),
    chapter(54, "القمر", "Al-Qamar", "The Moon", 55, Meccan, 37, 3, 27, 27, 528, true),
    chapter(55, "الرحمن", "Ar-Rahman", "The Beneficent", 78, Medinan, 97, 3, 27, 27, 531, true),
    chapter(56, "الواقعة", "Al-Waqi'ah", "The Inevitable", 96, Meccan, 46, 3, 27, 27, 534, true),
    chapter(57, "الحديد", "Al-Hadid", "The Iron", 29, Medinan, 94, 4, 27, 27, 537, true),
    chapter(58, "المجادلة", "Al-Mujadila", "The Pleading Woman", 22, Medinan, 105, 3, 28, 28, 542, true),
    chapter(59, "الحشر", "Al-Hashr", "The Exile", 24, Medinan, 101, 3, 28, 28, 545, true),
    chapter(60, "الممتحنة", "Al-Mumtahanah", "She That Is to Be Examined", 13, Medinan, 91, 2, 28, 28, 549, true),
    chapter(61, "الصف", "As-Saff", "The Ranks", 14, Medinan, 109, 2, 28, 28, 551, true),
    chapter(62, "الجمعة", "Al-Jumu'ah", "The Congregation, Friday", 11, Medinan, 110, 2, 28, 28, 553, true),
    chapter(63, "المنافقون", "Al-Munafiqun", "The Hypocrites", 11, Medinan, 104, 2, 28, 28, 554, true),
    chapter(64, "التغابن", "At-Taghabun", "The Mutual Disillusion", 18, Medinan, 108, 2, 28, 28, 556, true),
    chapter(65, "الطلاق", "At-Talaq", "The Divorce", 12, Medinan, 99, 2, 28, 28, 558, true),
    chapter(66, "التحريم", "At-Tahrim", "The Prohibition", 12, Medinan, 107, 2, 28, 28, 560, true),
    chapter(67, "الملك", "Al-Mulk", "The Sovereignty", 30, Meccan, 77, 2, 29, 29, 562, true),
    chapter(68, "القلم", "Al-Qalam", "The Pen", 52, Meccan, 2, 2, 29, 29, 564, true),
    chapter(69, "الحاقة", "Al-Haqqah", "The Reality", 52, Meccan, 78, 2, 29, 29, 566, true),
    chapter(70, "المعارج", "Al-Ma'arij", "The Ascending Stairways", 44, Meccan, 79, 2, 29, 29, 568, true),
    chapter(71, "نوح", "Nuh", "Noah", 28, Meccan, 71, 2, 29, 29, 570, true),
    chapter(72, "الجن", "Al-Jinn", "The Jinn", 28, Meccan, 40, 2, 29, 29, 572, true),
    chapter(73, "المزمل", "Al-Muzzammil", "The Enshrouded One", 20, Meccan, 3, 2, 29, 29, 574, true),
    chapter(74, "المدثر", "Al-Muddaththir", "The Cloaked One", 56, Meccan, 4, 2, 29, 29, 575, true),
    chapter(75, "القيامة", "Al-Qiyamah", "The Resurrection", 40, Meccan, 31, 2, 29, 29, 577, true),
    chapter(76, "الإنسان", "Al-Insan", "The Human", 31, Medinan, 98, 2, 29, 29, 578, true),
    chapter(77, "المرسلات", "Al-Mursalat", "The Emissaries", 50, Meccan, 33, 2, 29, 29, 580, true),
    chapter(78, "النبأ", "An-Naba", "The Tidings", 40, Meccan, 80, 2, 30, 30, 582, true),
    chapter(79, "النازعات", "An-Nazi'at", "Those Who Drag Forth", 46, Meccan, 81, 2, 30, 30, 583, true),
    chapter(80, "عبس", "Abasa", "He Frowned", 42, Meccan, 24, 1, 30, 30, 585, true),
    chapter(81, "التكوير", "At-Takwir", "The Overthrowing", 29, Meccan, 7, 1, 30, 30, 586, true),
    chapter(82, "الانفطار", "Al-Infitar", "The Cleaving", 19, Meccan, 82, 1, 30, 30, 587, true),
    chapter(83, "المطففين", "Al-Mutaffifin", "The Defrauding", 36, Meccan, 86, 1, 30, 30, 587, true),
    chapter(84, "الانشقاق", "Al-Inshiqaq", "The Sundering", 25, Meccan, 83, 1, 30, 30, 589, true),
    chapter(85, "البروج", "Al-Buruj", "The Mansions of the Stars", 22, Meccan, 27, 1, 30, 30, 590, true),
    chapter(86, "الطارق", "At-Tariq", "The Morning Star", 17, Meccan, 36, 1, 30, 30, 591, true),
    chapter(87, "الأعلى", "Al-A'la", "The Most High", 19, Meccan, 8, 1, 30, 30, 591, true),
    chapter(88, "الغاشية", "Al-Ghashiyah", "The Overwhelming", 26, Meccan, 68, 1, 30, 30, 592, true),
    chapter(89, "الفجر", "Al-Fajr", "The Dawn", 30, Meccan, 10, 1, 30, 30, 593, true),
    chapter(90, "البلد", "Al-Balad", "The City", 20, Meccan, 35, 1, 30, 30, 594, true),
    chapter(91, "الشمس", "Ash-Shams", "The Sun", 15, Meccan, 26, 1, 30, 30, 595, true),
    chapter(92, "الليل", "Al-Layl", "The Night", 21, Meccan, 9, 1, 30, 30, 595, true),
    chapter(93, "الضحى", "Ad-Duha", "The Morning Hours", 11, Meccan, 11, 1, 30, 30, 596, true),
    chapter(94, "الشرح", "Ash-Sharh", "The Relief", 8, Meccan, 12, 1, 30, 30, 596, true),
    chapter(95, "التين", "At-Tin", "The Fig", 8, Meccan, 28, 1, 30, 30, 597, true),
    chapter(96, "العلق", "Al-'Alaq", "The Clot", 19, Meccan, 1, 1, 30, 30, 597, true),
    chapter(97, "القدر", "Al-Qadr", "The Power", 5, Meccan, 25, 1, 30, 30, 598, true),
    chapter(98, "البينة", "Al-Bayyinah", "The Clear Proof", 8, Medinan, 100, 1, 30, 30, 598, true),
    chapter(99, "الزلزلة", "Az-Zalzalah", "The Earthquake", 8, Medinan, 93, 1, 30, 30, 599, true),
    chapter(100, "العاديات", "Al-'Adiyat", "The Coursers", 11, Meccan, 14, 1, 30, 30, 599, true),
    chapter(101, "القارعة", "Al-Qari'ah", "The Calamity", 11, Meccan, 30, 1, 30, 30, 600, true),
    chapter(102, "التكاثر", "At-Takathur", "The Rivalry in World Increase", 8, Meccan, 16, 1, 30, 30, 600, true),
    chapter(103, "العصر", "Al-'Asr", "The Declining Day", 3, Meccan, 13, 1, 30, 30, 601, true),
    chapter(104, "الهمزة", "Al-Humazah", "The Traducer", 9, Meccan, 32, 1, 30, 30, 601, true),
    chapter(105, "الفيل", "Al-Fil", "The Elephant", 5, Meccan, 19, 1, 30, 30, 601, true),
    chapter(106, "قريش", "Quraysh", "Quraysh", 4, Meccan, 29, 1, 30, 30, 602, true),
    chapter(107, "الماعون", "Al-Ma'un", "The Small Kindnesses", 7, Meccan, 17, 1, 30, 30, 602, true),
    chapter(108, "الكوثر", "Al-Kawthar", "The Abundance", 3, Meccan, 15, 1, 30, 30, 602, true),
    chapter(109, "الكافرون", "Al-Kafirun", "The Disbelievers", 6, Meccan, 18, 1, 30, 30, 603, true),
    chapter(110, "النصر", "An-Nasr", "The Divine Support", 3, Medinan, 114, 1, 30, 30, 603, true),
    chapter(111, "المسد", "Al-Masad", "The Palm Fiber", 5, Meccan, 6, 1, 30, 30, 603, true),
    chapter(112, "الإخلاص", "Al-Ikhlas", "The Sincerity", 4, Meccan, 22, 1, 30, 30, 604, true),
    chapter(113, "الفلق", "Al-Falaq", "The Daybreak", 5, Meccan, 20, 1, 30, 30, 604, true),
    chapter(114, "الناس", "An-Nas", "Mankind", 6, Meccan, 21, 1, 30, 30, 604, true),
];

/// Chapter by number, or `None` outside 1-114.
pub fn by_number(number: u16) -> Option<&'static Chapter> {
    number
        .checked_sub(1)
        .and_then(|index| CHAPTERS.get(index as usize))
}

/// Chapter by transliterated name, ignoring case and surrounding whitespace.
pub fn by_english_name(name: &str) -> Option<&'static Chapter> {
    let name = name.trim();
    CHAPTERS
        .iter()
        .find(|chapter| chapter.english_name.eq_ignore_ascii_case(name))
}

/// Chapter by exact Arabic name (surrounding whitespace ignored).
pub fn by_arabic_name(name: &str) -> Option<&'static Chapter> {
    let name = name.trim();
    CHAPTERS.iter().find(|chapter| chapter.arabic_name == name)
}
