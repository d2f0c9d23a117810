use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_rules_toml, RulesConfigError};
use super::table::DEFAULT_TOML;
use super::Rule;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

struct Node {
    children: HashMap<u8, Node>,
    /// Rules whose pattern ends at this node, highest priority first.
    rules: Vec<Rule>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            rules: Vec::new(),
        }
    }
}

/// Byte trie over the expanded rule set. Built once, read-only after;
/// safe for unrestricted concurrent lookups.
pub struct RuleTrie {
    root: Node,
}

impl RuleTrie {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RulesConfigError> {
        // Validate eagerly
        parse_rules_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RulesConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RuleTrie {
        static INSTANCE: OnceLock<RuleTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let rules = parse_rules_toml(toml_str).expect("rule TOML must be valid");
            RuleTrie::from_rules(rules)
        })
    }

    /// Build a trie from an explicit rule list.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        let mut trie = RuleTrie { root: Node::new() };
        for rule in rules {
            trie.insert(rule);
        }
        sort_rules(&mut trie.root);
        trie
    }

    fn insert(&mut self, rule: Rule) {
        let mut node = &mut self.root;
        for &b in rule.pattern.as_bytes() {
            node = node.children.entry(b).or_insert_with(Node::new);
        }
        node.rules.push(rule);
    }

    /// Longest pattern matching at `start` whose context predicate holds.
    /// Equal-length candidates resolve by priority (higher wins). Returns
    /// the match length in chars and the winning rule.
    pub fn longest_match<'a>(&'a self, chars: &[char], start: usize) -> Option<(usize, &'a Rule)> {
        let mut node = &self.root;
        let mut path: Vec<&Node> = Vec::new();
        let mut i = start;
        while i < chars.len() {
            let c = chars[i];
            if !c.is_ascii() {
                break;
            }
            match node.children.get(&(c as u8)) {
                Some(child) => {
                    path.push(child);
                    node = child;
                    i += 1;
                }
                None => break,
            }
        }
        for (depth, candidate) in path.iter().enumerate().rev() {
            let end = start + depth + 1;
            for rule in &candidate.rules {
                if rule.context.matches(chars, start, end) {
                    return Some((end - start, rule));
                }
            }
        }
        None
    }
}

fn sort_rules(node: &mut Node) {
    node.rules.sort_by(|a, b| b.priority.cmp(&a.priority));
    for child in node.children.values_mut() {
        sort_rules(child);
    }
}
