use std::collections::HashMap;

/// Wildcard character accepted by [`PatternTrie::wildcard_search`].
pub const WILDCARD: char = '.';

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    fn matches(&self, pattern: &[char]) -> bool {
        match pattern.split_first() {
            None => self.is_word,
            Some((&WILDCARD, rest)) => self.children.values().any(|child| child.matches(rest)),
            Some((c, rest)) => self.child(*c).is_some_and(|child| child.matches(rest)),
        }
    }
}

/// Prefix tree over characters used as a word dictionary.
///
/// Every node owns its children, so dropping the trie frees the whole
/// tree. The empty string is never stored.
#[derive(Debug, Default, Clone)]
pub struct PatternTrie {
    root: TrieNode,
    word_count: usize,
}

impl PatternTrie {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word);
        }
        trie
    }

    /// Record `word`. Inserting the same word twice leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            log::debug!("ignoring empty word");
            return;
        }

        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.children.entry(c).or_default();
        }

        if !current.is_word {
            current.is_word = true;
            self.word_count += 1;
            log::trace!("trie: inserted {word:?} ({} words)", self.word_count);
        }
    }

    /// Exact membership test.
    pub fn search(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(|node| node.is_word)
    }

    /// Membership test where `.` stands for any single character.
    pub fn wildcard_search(&self, pattern: &str) -> bool {
        let pattern: Vec<char> = pattern.chars().collect();
        self.root.matches(&pattern)
    }

    /// Whether any recorded word begins with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        !self.is_empty() && self.find_node(prefix).is_some()
    }

    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    fn find_node(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(&self.root, |node, c| node.child(c))
    }
}
