//! Single-step word mutations.
//!
//! Every operator is total: a nonempty word always yields exactly one
//! variant and the empty string is handed back untouched. Positions are
//! counted in characters, so a word that somehow holds non-ASCII text is
//! never split inside a code point.

use rand::Rng;

/// Letters a mutation may introduce.
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// The three ways a word can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Point,
    Deletion,
    Insertion,
}

impl MutationKind {
    pub const ALL: [MutationKind; 3] = [Self::Point, Self::Deletion, Self::Insertion];

    /// Picks one of the three operators with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn apply<R: Rng + ?Sized>(self, word: &str, rng: &mut R) -> String {
        match self {
            Self::Point => point(word, rng),
            Self::Deletion => deletion(word, rng),
            Self::Insertion => insertion(word, rng),
        }
    }
}

/// A random lowercase ASCII letter.
pub fn random_char<R: Rng + ?Sized>(rng: &mut R) -> char {
    ALPHABET[rng.gen_range(0..ALPHABET.len())] as char
}

/// Replaces one character with a random letter, possibly the same one.
pub fn point<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    if word.is_empty() {
        return String::new();
    }
    let mut chars: Vec<char> = word.chars().collect();
    let position = rng.gen_range(0..chars.len());
    chars[position] = random_char(rng);
    chars.into_iter().collect()
}

/// Removes one character.
pub fn deletion<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    if word.is_empty() {
        return String::new();
    }
    let mut chars: Vec<char> = word.chars().collect();
    let position = rng.gen_range(0..chars.len());
    chars.remove(position);
    chars.into_iter().collect()
}

/// Inserts a random letter anywhere, including after the last character.
pub fn insertion<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    if word.is_empty() {
        return String::new();
    }
    let mut chars: Vec<char> = word.chars().collect();
    let position = rng.gen_range(0..=chars.len());
    chars.insert(position, random_char(rng));
    chars.into_iter().collect()
}

/// Applies one uniformly chosen operator.
pub fn randomly<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    MutationKind::random(rng).apply(word, rng)
}

/// Source of offspring for the simulation loop.
pub trait Mutator {
    fn mutate(&mut self, word: &str) -> String;
}

/// The stock mutator: [`randomly`] driven by an owned RNG.
#[derive(Debug, Clone)]
pub struct RandomMutator<R> {
    rng: R,
}

impl<R: Rng> RandomMutator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Mutator for RandomMutator<R> {
    fn mutate(&mut self, word: &str) -> String {
        randomly(word, &mut self.rng)
    }
}

impl<M: Mutator + ?Sized> Mutator for Box<M> {
    fn mutate(&mut self, word: &str) -> String {
        (**self).mutate(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_empty_word_passes_through() {
        let mut rng = rng();
        assert_eq!(point("", &mut rng), "");
        assert_eq!(deletion("", &mut rng), "");
        assert_eq!(insertion("", &mut rng), "");
        assert_eq!(randomly("", &mut rng), "");
    }

    #[test]
    fn test_deletion_of_single_letter_is_empty() {
        let mut rng = rng();
        assert_eq!(deletion("a", &mut rng), "");
    }

    #[test]
    fn test_point_keeps_all_but_one_position() {
        let mut rng = rng();
        for _ in 0..200 {
            let mutated = point("banana", &mut rng);
            let differing = mutated
                .chars()
                .zip("banana".chars())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(mutated.len(), 6);
            assert!(differing <= 1);
            assert!(mutated.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_insertion_reaches_the_end_position() {
        let mut rng = rng();
        let appended = (0..500)
            .map(|_| insertion("ab", &mut rng))
            .any(|w| w.starts_with("ab") && w.len() == 3 && !w.ends_with('b'));
        assert!(appended, "insertion never placed a letter after the last one");
    }

    #[test]
    fn test_random_kind_covers_all_operators() {
        let mut rng = rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(MutationKind::random(&mut rng));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_random_mutator_is_reproducible() {
        let mut a = RandomMutator::new(ChaCha8Rng::seed_from_u64(99));
        let mut b = RandomMutator::new(ChaCha8Rng::seed_from_u64(99));
        for word in ["a", "cat", "horse"] {
            assert_eq!(a.mutate(word), b.mutate(word));
        }
    }
}
