//! Hebrew code points used by the collation tables
//!
//! Only the characters that take part in collation get a name here. Anything
//! else in the Hebrew block (cantillation accents, meteg, rafe, paseq, ...)
//! is dropped during canonicalization.

/// Word separator
pub const SPACE: char = ' ';
/// HEBREW PUNCTUATION MAQAF, the word-joining hyphen
pub const MAQAF: char = '\u{05BE}';

pub const ALEF: char = '\u{05D0}';
pub const BET: char = '\u{05D1}';
pub const GIMEL: char = '\u{05D2}';
pub const DALET: char = '\u{05D3}';
pub const HE: char = '\u{05D4}';
pub const VAV: char = '\u{05D5}';
pub const ZAYIN: char = '\u{05D6}';
pub const HET: char = '\u{05D7}';
pub const TET: char = '\u{05D8}';
pub const YOD: char = '\u{05D9}';
pub const FINAL_KAF: char = '\u{05DA}';
pub const KAF: char = '\u{05DB}';
pub const LAMED: char = '\u{05DC}';
pub const FINAL_MEM: char = '\u{05DD}';
pub const MEM: char = '\u{05DE}';
pub const FINAL_NUN: char = '\u{05DF}';
pub const NUN: char = '\u{05E0}';
pub const SAMEKH: char = '\u{05E1}';
pub const AYIN: char = '\u{05E2}';
pub const FINAL_PE: char = '\u{05E3}';
pub const PE: char = '\u{05E4}';
pub const FINAL_TSADI: char = '\u{05E5}';
pub const TSADI: char = '\u{05E6}';
pub const QOF: char = '\u{05E7}';
pub const RESH: char = '\u{05E8}';
/// The undotted base letter shared by Sin and Shin
pub const SHIN_BASE: char = '\u{05E9}';
pub const TAV: char = '\u{05EA}';

/// HEBREW LETTER SHIN WITH SIN DOT (presentation form)
pub const SIN: char = '\u{FB2B}';
/// HEBREW LETTER SHIN WITH SHIN DOT (presentation form)
pub const SHIN: char = '\u{FB2A}';

pub const SHEVA: char = '\u{05B0}';
pub const HATAF_SEGOL: char = '\u{05B1}';
pub const HATAF_PATAH: char = '\u{05B2}';
pub const HATAF_QAMETS: char = '\u{05B3}';
pub const HIRIQ: char = '\u{05B4}';
pub const TSERE: char = '\u{05B5}';
pub const SEGOL: char = '\u{05B6}';
pub const PATAH: char = '\u{05B7}';
pub const QAMETS: char = '\u{05B8}';
pub const HOLEM: char = '\u{05B9}';
/// HEBREW POINT HOLAM HASER FOR VAV
pub const HOLEM_HASER: char = '\u{05BA}';
pub const QIBBUTS: char = '\u{05BB}';
/// HEBREW LETTER VAV WITH HOLAM (presentation form)
pub const HOLEM_VAV: char = '\u{FB4B}';
/// HEBREW LETTER VAV WITH DAGESH (presentation form)
pub const SHUREQ: char = '\u{FB35}';

/// HEBREW POINT DAGESH OR MAPIQ
pub const DAGESH: char = '\u{05BC}';
pub const SHIN_DOT: char = '\u{05C1}';
pub const SIN_DOT: char = '\u{05C2}';

/// Consonants in collation order. Sin sorts as its own letter, before Shin.
pub const CONSONANTS: [char; 28] = [
    ALEF,
    BET,
    GIMEL,
    DALET,
    HE,
    VAV,
    ZAYIN,
    HET,
    TET,
    YOD,
    FINAL_KAF,
    KAF,
    LAMED,
    FINAL_MEM,
    MEM,
    FINAL_NUN,
    NUN,
    SAMEKH,
    AYIN,
    FINAL_PE,
    PE,
    FINAL_TSADI,
    TSADI,
    QOF,
    RESH,
    SIN,
    SHIN,
    TAV,
];

/// Vowels in collation order, horizontal before vertical.
///
/// Holam haser for vav has no slot of its own in the usual thirteen-vowel
/// scheme; it is ranked right after Holem so it stays next to its siblings.
pub const VOWELS: [char; 14] = [
    SHEVA,
    HATAF_SEGOL,
    HATAF_PATAH,
    HATAF_QAMETS,
    HIRIQ,
    TSERE,
    SEGOL,
    PATAH,
    QAMETS,
    HOLEM,
    HOLEM_HASER,
    HOLEM_VAV,
    QIBBUTS,
    SHUREQ,
];

/// Characters that stand for a word boundary. Both rank as the lowest symbol.
pub const SEPARATORS: [char; 2] = [SPACE, MAQAF];
