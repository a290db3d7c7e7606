//! Character bigram shingles.
//!
//! A word is wrapped in [`BOUNDARY`] sentinels and cut into overlapping
//! two-character shingles, so `"apple"` yields
//! `$a ap pp pl le e$`. The sentinels let the first and last letters take part
//! in matching. A word of `L` characters always yields `L + 1` shingles.

/// Sentinel marking the start and end of a word.
pub const BOUNDARY: char = '$';

/// A two-character shingle.
pub type Bigram = (char, char);

/// All shingles of `word` in order, repeats included.
pub fn bigrams(word: &str) -> Vec<Bigram> {
    let extended: Vec<char> = std::iter::once(BOUNDARY)
        .chain(word.chars())
        .chain(std::iter::once(BOUNDARY))
        .collect();

    extended.windows(2).map(|pair| (pair[0], pair[1])).collect()
}

/// The distinct shingles of `word`, sorted.
pub fn bigram_set(word: &str) -> Vec<Bigram> {
    let mut set = bigrams(word);
    set.sort_unstable();
    set.dedup();
    set
}

/// Render a shingle as a two-character string.
pub fn bigram_to_string(bigram: &Bigram) -> String {
    [bigram.0, bigram.1].iter().collect()
}
