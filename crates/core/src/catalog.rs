//! Built-in phrase list: five everyday classroom greetings.
//!
//! Demo content for the bundled binaries. Hosts with their own material build
//! [`Phrase`] values directly.

use crate::types::{EngineError, Phrase};

type Entry = (&'static str, &'static str, &'static [(&'static str, &'static str)]);

const CLASSROOM: &[Entry] = &[
    ("おはよう", "ohayou", &[("お", "o"), ("は", "ha"), ("よ", "yo"), ("う", "u")]),
    (
        "こんにちは",
        "konnichiwa",
        &[("こ", "ko"), ("ん", "n"), ("に", "ni"), ("ち", "chi"), ("は", "ha")],
    ),
    (
        "ありがとう",
        "arigatou",
        &[("あ", "a"), ("り", "ri"), ("が", "ga"), ("と", "to"), ("う", "u")],
    ),
    (
        "さようなら",
        "sayounara",
        &[("さ", "sa"), ("よ", "yo"), ("う", "u"), ("な", "na"), ("ら", "ra")],
    ),
    (
        "はじめまして",
        "hajimemashite",
        &[("は", "ha"), ("じ", "ji"), ("め", "me"), ("ま", "ma"), ("し", "shi"), ("て", "te")],
    ),
];

/// The classroom phrases, in play order.
pub fn classroom_phrases() -> Result<Vec<Phrase>, EngineError> {
    CLASSROOM
        .iter()
        .map(|(name, romaji, pairs)| Phrase::from_pairs(name, romaji, pairs))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_phrases_in_order() {
        let phrases = classroom_phrases().unwrap();
        assert_eq!(phrases.len(), 5);
        assert_eq!(phrases[0].romaji(), "ohayou");
        assert_eq!(phrases[0].len(), 4);
        assert_eq!(phrases[4].len(), 6);
        assert_eq!(phrases[4].final_syllable().unwrap().glyph, "て");
    }

    #[test]
    fn syllables_spell_the_phrase() {
        for phrase in classroom_phrases().unwrap() {
            let glyphs: String = phrase.syllables().iter().map(|s| s.glyph.as_str()).collect();
            assert_eq!(glyphs, phrase.name());
        }
    }
}
