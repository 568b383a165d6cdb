//! Plain-text tree rendering for the `versions` action.
//!
//! ```text
//! `- available versions from http://oncotree.mskcc.org/api/versions
//!    |- current/visible versions
//!    |  `- oncotree_latest_stable
//!    |     |- released 2021-11-02
//!    |     `- This is the latest approved version for public use.
//!    `- invisible versions
//! ```

use crate::oncotree::VersionInfo;

/// Values longer than this are wrapped onto continuation lines.
pub const WRAP_WIDTH: usize = 70;

/// A labelled node with ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreeNode {
    pub value: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Add a child (builder pattern).
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Render `root` and its descendants, one output line per entry.
pub fn render_tree(root: &TreeNode) -> Vec<String> {
    let mut lines = Vec::new();
    render_node(root, "", true, &mut lines);
    lines
}

fn render_node(node: &TreeNode, prefix: &str, last: bool, out: &mut Vec<String>) {
    let branch = if last { "`- " } else { "|- " };
    let wrapped = wrap(&node.value, WRAP_WIDTH);
    let indent = " ".repeat(prefix.chars().count() + 3);

    let mut values = wrapped.iter();
    out.push(format!("{}{}{}", prefix, branch, values.next().map_or("", String::as_str)));
    for line in values {
        out.push(format!("{}{}", indent, line));
    }

    let child_prefix = format!("{}{}", prefix, if last { "   " } else { "|  " });
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        render_node(child, &child_prefix, i + 1 == count, out);
    }
}

/// Greedy word wrap.
///
/// Hyphenated words may break after a hyphen. A word longer than `width`
/// fills the rest of the current line and continues on the next.
fn wrap(value: &str, width: usize) -> Vec<String> {
    // Reversed so the next chunk is at the end
    let mut chunks: Vec<String> = Vec::new();
    for (i, word) in value.split_whitespace().enumerate() {
        if i > 0 {
            chunks.push(" ".to_string());
        }
        chunks.extend(hyphen_chunks(word));
    }
    chunks.reverse();

    let mut lines = Vec::new();
    while !chunks.is_empty() {
        if !lines.is_empty() && chunks.last().is_some_and(|c| c == " ") {
            chunks.pop();
        }

        let mut line = String::new();
        let mut line_len = 0;
        while let Some(chunk) = chunks.last() {
            let len = chunk.chars().count();
            if line_len + len > width {
                break;
            }
            line.push_str(chunk);
            line_len += len;
            chunks.pop();
        }

        if let Some(chunk) = chunks.last_mut() {
            if chunk.chars().count() > width {
                let space_left = width.saturating_sub(line_len).max(1);
                let head = split_long_word(chunk, space_left);
                line.push_str(&head);
            }
        }

        if line.ends_with(' ') {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines
}

/// Split `word` after each hyphen that joins two words.
fn hyphen_chunks(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;
    for i in 1..chars.len().saturating_sub(1) {
        if chars[i] == '-' && chars[i - 1].is_alphabetic() && chars[i + 1].is_alphanumeric() {
            chunks.push(chars[start..=i].iter().collect());
            start = i + 1;
        }
    }
    chunks.push(chars[start..].iter().collect());
    chunks
}

/// Take up to `space_left` chars off the front of `chunk`, preferring to
/// end at its last hyphen within that span.
fn split_long_word(chunk: &mut String, space_left: usize) -> String {
    let chars: Vec<char> = chunk.chars().collect();
    let mut end = space_left.min(chars.len());
    if let Some(hyphen) = chars[..end].iter().rposition(|&c| c == '-') {
        if hyphen > 0 && chars[..hyphen].iter().any(|&c| c != '-') {
            end = hyphen + 1;
        }
    }
    let head: String = chars[..end].iter().collect();
    *chunk = chars[end..].iter().collect();
    head
}

/// The release listing as a tree, grouped by visibility. `url` is the API
/// base URL.
pub fn render_version_tree(url: &str, versions: &[VersionInfo]) -> Vec<String> {
    let group = |label: &str, visible: bool| {
        versions
            .iter()
            .filter(|v| v.visible == visible)
            .fold(TreeNode::new(label), |node, v| {
                node.with_child(
                    TreeNode::new(v.api_identifier.as_str())
                        .with_child(TreeNode::new(format!("released {}", v.release_date)))
                        .with_child(TreeNode::new(v.description.clone().unwrap_or_default())),
                )
            })
    };

    let root = TreeNode::new(format!("available versions from {}/versions", url))
        .with_child(group("current/visible versions", true))
        .with_child(group("invisible versions", false));

    render_tree(&root)
}
