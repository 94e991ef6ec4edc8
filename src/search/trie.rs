use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_word: bool,
}

/// Prefix tree over indexed tokens, used for autocomplete.
///
/// Children are kept ordered, so completions come back sorted.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: TrieNode,
    words: usize,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word. Inserting the same word again is a no-op.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.is_word {
            node.is_word = true;
            self.words += 1;
        }
    }

    /// All indexed words starting with `prefix`, in lexicographic order.
    pub fn search_prefix(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        if let Some(node) = self.find_node(prefix) {
            let mut buf = prefix.to_string();
            collect_words(node, &mut buf, &mut results);
        }
        results
    }

    /// Whether `word` was inserted as a whole word.
    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(|n| n.is_word)
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

fn collect_words(node: &TrieNode, buf: &mut String, out: &mut Vec<String>) {
    if node.is_word {
        out.push(buf.clone());
    }
    for (c, child) in &node.children {
        buf.push(*c);
        collect_words(child, buf, out);
        buf.pop();
    }
}
