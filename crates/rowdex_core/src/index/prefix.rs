//! Prefix dictionary implementation.

use std::fmt;
use tracing::debug;

const ALPHABET: usize = 26;

/// Maps ASCII letters (either case) to a child slot; everything else is
/// off the key path.
fn slot_for(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

fn letter_for(slot: usize) -> char {
    (b'a' + slot as u8) as char
}

struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET],
    terminal: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: Default::default(),
            terminal: false,
        }
    }
}

fn collect_words(node: &TrieNode, prefix: &mut String, out: &mut Vec<String>) {
    if node.terminal {
        out.push(prefix.clone());
    }
    // Visiting slots in order yields ascending alphabetical output.
    for (slot, child) in node.children.iter().enumerate() {
        if let Some(child) = child {
            prefix.push(letter_for(slot));
            collect_words(child, prefix, out);
            prefix.pop();
        }
    }
}

/// Case-folded dictionary with membership and prefix-suggestion queries.
///
/// `PrefixIndex` stores a vocabulary of tokens in a 26-way trie. Tokens
/// are case-folded on the way in, and non-letter characters are silently
/// dropped from the key path, so `"Don't"` and `"dont"` are the same
/// entry. The vocabulary is typically loaded once and then queried
/// read-only for the rest of the session.
///
/// # Example
///
/// ```rust
/// use rowdex_core::PrefixIndex;
///
/// let mut dictionary = PrefixIndex::new();
/// dictionary.extend(["government", "governor", "gopher"]);
///
/// assert!(dictionary.contains("Government"));
/// assert_eq!(
///     dictionary.suggest("gover"),
///     vec!["government".to_string(), "governor".to_string()],
/// );
/// ```
pub struct PrefixIndex {
    root: TrieNode,
    /// Distinct complete words.
    words: usize,
    /// Branch nodes allocated below the root.
    nodes: usize,
}

impl PrefixIndex {
    /// Creates a new empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            words: 0,
            nodes: 0,
        }
    }

    /// Inserts a token, creating one node per letter on its key path.
    ///
    /// Re-inserting an existing token has no observable effect. A token
    /// with no letters at all has an empty key path and is ignored.
    pub fn insert(&mut self, token: &str) {
        let mut created = 0usize;
        let mut walked = false;
        let mut node = &mut self.root;
        for c in token.chars() {
            let Some(slot) = slot_for(c) else { continue };
            walked = true;
            node = node.children[slot]
                .get_or_insert_with(|| {
                    created += 1;
                    Box::new(TrieNode::new())
                })
                .as_mut();
        }
        if walked && !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
        self.nodes += created;
    }

    /// Inserts every token from an iterator (dictionary loading).
    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.insert(token.as_ref());
        }
        debug!(words = self.words, nodes = self.nodes, "prefix index extended");
    }

    /// Returns true iff the token's key path exists and ends on a
    /// complete word. Case-insensitive by construction.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        let mut walked = false;
        let mut node = &self.root;
        for c in token.chars() {
            let Some(slot) = slot_for(c) else { continue };
            walked = true;
            match node.children[slot].as_deref() {
                Some(child) => node = child,
                None => return false,
            }
        }
        walked && node.terminal
    }

    /// Returns every complete word starting with `prefix`, in ascending
    /// alphabetical order.
    ///
    /// The prefix is normalized the same way tokens are (case-folded,
    /// non-letters dropped), and the returned words are in that stored
    /// form. A prefix whose path does not exist yields an empty vec; an
    /// empty prefix enumerates the whole vocabulary.
    #[must_use]
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        let mut folded = String::new();
        let mut node = &self.root;
        for c in prefix.chars() {
            let Some(slot) = slot_for(c) else { continue };
            match node.children[slot].as_deref() {
                Some(child) => {
                    folded.push(letter_for(slot));
                    node = child;
                }
                None => return Vec::new(),
            }
        }

        let mut results = Vec::new();
        collect_words(node, &mut folded, &mut results);
        results
    }

    /// Returns the number of distinct complete words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words
    }

    /// Returns true if no words have been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Returns the number of trie nodes allocated below the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PrefixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixIndex")
            .field("words", &self.words)
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}
