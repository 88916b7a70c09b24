use log::trace;
use rand::Rng;

use crate::config::Configuration;

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "`~!@#$%^&*()_+";

/// The set of characters a password may be drawn from. Letters are always present.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Alphabet(String);

impl Alphabet {
    pub(crate) fn for_configuration(config: &Configuration) -> Alphabet {
        let mut characters = String::from(LETTERS);
        if config.allow_numbers {
            characters.push_str(DIGITS);
        }
        if config.allow_symbols {
            characters.push_str(SYMBOLS);
        }
        Alphabet(characters)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, c: char) -> bool {
        self.0.contains(c)
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

/// Draws `length` characters from `alphabet`, each uniformly and with replacement.
pub(crate) fn generate_password<R: Rng>(
    alphabet: &Alphabet,
    length: usize,
    rng: &mut R,
) -> String {
    trace!(
        "Generating password of length {length} from {} characters",
        alphabet.len()
    );

    // All alphabet characters are ASCII, so byte indices are character indices
    let characters = alphabet.as_str().as_bytes();
    (0..length)
        .map(|_| characters[rng.random_range(0..characters.len())] as char)
        .collect()
}
