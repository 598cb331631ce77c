//! Structural filters for answer candidates
//!
//! Answers should be words a player can reasonably reach. These rules reject
//! shapes that are legal guesses but make poor targets.

use crate::core::Word;

const VOWELS: &[u8] = b"AEIOU";

fn is_vowel(letter: u8) -> bool {
    VOWELS.contains(&letter)
}

/// True when the word has A/E/I/O/U anywhere, or a Y after the first letter
///
/// # Examples
/// ```
/// use wordpop::core::Word;
/// use wordpop::corpus::filters::meets_vowel_requirement;
///
/// assert!(meets_vowel_requirement(&Word::new("crane").unwrap()));
/// assert!(meets_vowel_requirement(&Word::new("nymph").unwrap()));
/// assert!(!meets_vowel_requirement(&Word::new("crwth").unwrap()));
/// ```
#[must_use]
pub fn meets_vowel_requirement(word: &Word) -> bool {
    let letters = word.letters();
    letters.iter().any(|&l| is_vowel(l)) || letters[1..].contains(&b'Y')
}

/// True when the word matches a shape that makes a poor answer
///
/// - two leading vowels
/// - a Q or X not followed by U or O (including at the end of the word)
/// - four leading consonants (Y counts as a consonant here)
/// - two or more of J and Z
#[must_use]
pub fn has_problematic_pattern(word: &Word) -> bool {
    let letters = word.letters();

    let leading_vowels = is_vowel(letters[0]) && is_vowel(letters[1]);

    let bare_q_or_x = letters.iter().enumerate().any(|(i, &l)| {
        (l == b'Q' || l == b'X') && !matches!(letters.get(i + 1), Some(b'U' | b'O'))
    });

    let leading_consonants = letters[..4].iter().all(|&l| !is_vowel(l));

    let rare_pairs = letters.iter().filter(|&&l| l == b'J' || l == b'Z').count() >= 2;

    leading_vowels || bare_q_or_x || leading_consonants || rare_pairs
}
