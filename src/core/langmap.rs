// src/core/langmap.rs
// Transliteration applied before slugging. Multi-char outputs are allowed.

pub static CHAR_MAP: &[(char, &str)] = &[
    // latin diacritics
    ('à', "a"), ('á', "a"), ('â', "a"), ('ã', "a"), ('ä', "a"), ('å', "a"), ('ā', "a"),
    ('æ', "ae"), ('ç', "c"), ('č', "c"),
    ('è', "e"), ('é', "e"), ('ê', "e"), ('ë', "e"), ('ē', "e"),
    ('ì', "i"), ('í', "i"), ('î', "i"), ('ï', "i"), ('ī', "i"),
    ('ñ', "n"),
    ('ò', "o"), ('ó', "o"), ('ô', "o"), ('õ', "o"), ('ö', "o"), ('ø', "o"), ('ō', "o"), ('œ', "oe"),
    ('ù', "u"), ('ú', "u"), ('û', "u"), ('ü', "u"), ('ū', "u"),
    ('ý', "y"), ('ÿ', "y"),
    ('ß', "ss"), ('š', "s"), ('ž', "z"), ('ł', "l"), ('đ', "d"), ('þ', "th"),
    // typography that should read as a word boundary or vanish
    ('×', "x"), ('½', "1-2"), ('&', "and"), ('@', "at"),
    ('☆', " "), ('★', " "), ('♪', " "), ('♡', " "), ('♥', " "), ('・', " "), ('〜', " "),
    ('–', " "), ('—', " "), ('…', " "),
];
