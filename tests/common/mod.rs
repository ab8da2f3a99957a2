//! Shared fixtures: a small data directory with Al-Fatiha, As-Sajdah 15
//! and Al-Ikhlas in both scripts plus one English translation.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use mushaf::Mushaf;
use mushaf::corpus::MushafConfig;
use serde_json::{Value, json};
use tempfile::TempDir;

pub const FATIHA_SIMPLE: [&str; 7] = [
    "بسم الله الرحمن الرحيم",
    "الحمد لله رب العالمين",
    "الرحمن الرحيم",
    "مالك يوم الدين",
    "إياك نعبد وإياك نستعين",
    "اهدنا الصراط المستقيم",
    "صراط الذين أنعمت عليهم غير المغضوب عليهم ولا الضالين",
];

pub const FATIHA_UTHMANI: [&str; 7] = [
    "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ",
    "ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَٰلَمِينَ",
    "ٱلرَّحْمَٰنِ ٱلرَّحِيمِ",
    "مَٰلِكِ يَوْمِ ٱلدِّينِ",
    "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ",
    "ٱهْدِنَا ٱلصِّرَٰطَ ٱلْمُسْتَقِيمَ",
    "صِرَٰطَ ٱلَّذِينَ أَنْعَمْتَ عَلَيْهِمْ غَيْرِ ٱلْمَغْضُوبِ عَلَيْهِمْ وَلَا ٱلضَّآلِّينَ",
];

pub const IKHLAS_SIMPLE: [&str; 4] = [
    "قل هو الله أحد",
    "الله الصمد",
    "لم يلد ولم يولد",
    "ولم يكن له كفوا أحد",
];

pub const IKHLAS_UTHMANI: [&str; 4] = [
    "قُلْ هُوَ ٱللَّهُ أَحَدٌ",
    "ٱللَّهُ ٱلصَّمَدُ",
    "لَمْ يَلِدْ وَلَمْ يُولَدْ",
    "وَلَمْ يَكُن لَّهُۥ كُفُوًا أَحَدٌۢ",
];

pub const SAJDAH_15_SIMPLE: &str =
    "إنما يؤمن بآياتنا الذين إذا ذكروا بها خروا سجدا وسبحوا بحمد ربهم وهم لا يستكبرون";

pub const SAJDAH_15_UTHMANI: &str =
    "إِنَّمَا يُؤْمِنُ بِـَٔايَٰتِنَا ٱلَّذِينَ إِذَا ذُكِّرُوا۟ بِهَا خَرُّوا۟ سُجَّدًا وَسَبَّحُوا۟ بِحَمْدِ رَبِّهِمْ وَهُمْ لَا يَسْتَكْبِرُونَ ۩";

pub const SAHIH_FATIHA: [&str; 7] = [
    "In the name of Allah, the Entirely Merciful, the Especially Merciful.",
    "[All] praise is [due] to Allah, Lord of the worlds -",
    "The Entirely Merciful, the Especially Merciful,",
    "Sovereign of the Day of Recompense.",
    "It is You we worship and You we ask for help.",
    "Guide us to the straight path -",
    "The path of those upon whom You have bestowed favor, not of those who have evoked [Your] anger or of those who are astray.",
];

fn verse_records(fatiha: &[&str], sajdah: &str, ikhlas: &[&str]) -> Value {
    let mut records = Vec::new();
    for (index, text) in fatiha.iter().enumerate() {
        records.push(json!({
            "surah": 1, "ayah": index + 1, "text": text,
            "juz": 1, "page": 1, "hizbQuarter": 1
        }));
    }
    // PascalCase keys, as some published files use
    records.push(json!({
        "Surah": 32, "Ayah": 15, "Text": sajdah,
        "Juz": 21, "Page": 416, "HizbQuarter": 167
    }));
    // out of order on purpose
    for (index, text) in ikhlas.iter().enumerate().rev() {
        records.push(json!({
            "surah": 112, "ayah": index + 1, "text": text,
            "juz": 30, "page": 604, "hizbQuarter": 240
        }));
    }
    Value::Array(records)
}

fn write_json(dir: &Path, name: &str, value: &Value) {
    fs::write(dir.join(name), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

/// A temporary data directory with both scripts and `en_sahih.json`.
pub fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();

    write_json(
        dir.path(),
        "quran_simple.json",
        &verse_records(&FATIHA_SIMPLE, SAJDAH_15_SIMPLE, &IKHLAS_SIMPLE),
    );
    write_json(
        dir.path(),
        "quran_uthmani.json",
        &verse_records(&FATIHA_UTHMANI, SAJDAH_15_UTHMANI, &IKHLAS_UTHMANI),
    );

    let translation: Vec<Value> = SAHIH_FATIHA
        .iter()
        .enumerate()
        .map(|(index, text)| json!({"surah": 1, "ayah": index + 1, "text": text}))
        .collect();
    write_json(dir.path(), "en_sahih.json", &Value::Array(translation));

    dir
}

/// A `Mushaf` over a fresh fixture directory. Keep the `TempDir` alive.
pub fn mushaf() -> (TempDir, Mushaf) {
    init_logger();
    let dir = data_dir();
    let mushaf = Mushaf::new(MushafConfig::new().data_dir(dir.path()));
    (dir, mushaf)
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
