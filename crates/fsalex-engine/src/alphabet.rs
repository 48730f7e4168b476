// Alphabet classification: maps an input symbol to a transition table column.

use hashbrown::HashMap;

/// Ordered partition of the input alphabet into symbol classes.
///
/// Class `i` is column `i` of the transition table. A symbol declared in
/// several classes belongs to the earliest one. A symbol in no class
/// classifies as [`class_count`](Self::class_count), which callers treat as
/// out of alphabet.
#[derive(Debug, Clone)]
pub struct AlphabetClassifier {
    /// Class members in declaration order.
    classes: Vec<Vec<char>>,
    /// First class each symbol appears in.
    class_of: HashMap<char, usize>,
}

impl AlphabetClassifier {
    pub fn new(classes: Vec<Vec<char>>) -> Self {
        let mut class_of = HashMap::new();
        for (index, members) in classes.iter().enumerate() {
            for &symbol in members {
                class_of.entry(symbol).or_insert(index);
            }
        }
        Self { classes, class_of }
    }

    /// Column index for `symbol`, or `class_count()` if it is out of alphabet.
    #[inline]
    pub fn classify(&self, symbol: char) -> usize {
        self.class_of
            .get(&symbol)
            .copied()
            .unwrap_or(self.classes.len())
    }

    /// Number of declared classes.
    #[inline]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_out_of_alphabet(&self, class: usize) -> bool {
        class >= self.classes.len()
    }

    /// Symbols declared for `class`, in declaration order.
    pub fn members(&self, class: usize) -> Option<&[char]> {
        self.classes.get(class).map(Vec::as_slice)
    }

    pub fn classes(&self) -> &[Vec<char>] {
        &self.classes
    }
}
