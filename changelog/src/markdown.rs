//! Block-level markdown handling: just enough of the dialect to find version
//! headings, section headings, content blocks and the link table.

use crate::types::LinkTable;
use crate::utils::{INLINE_LINK_PATTERN, LINK_DEFINITION_PATTERN, REFERENCE_LINK_PATTERN};

const FENCE: &str = "```";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `## heading`, a version
    H2,
    /// `### heading`, a section within a version
    H3,
    /// Anything else: paragraphs, lists, code, other headings
    Text,
}

/// One block of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lines: Vec<String>,
    /// 1-based line of the block's first line in the source
    pub line_number: usize,
}

impl Token {
    fn new(kind: TokenKind, line: &str, line_number: usize) -> Self {
        Self {
            kind,
            lines: vec![line.to_string()],
            line_number,
        }
    }

    /// The block's lines joined back together
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

fn heading_kind(line: &str) -> Option<TokenKind> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    match hashes {
        2 => Some(TokenKind::H2),
        3 => Some(TokenKind::H3),
        _ => None,
    }
}

/// Splits markdown into blocks and pulls out the `[id]: url` link table.
///
/// Blocks are separated by blank lines. Level 2 and 3 headings always form a
/// block of their own, and fenced code is kept whole.
pub fn tokenize(text: &str) -> (Vec<Token>, LinkTable) {
    let mut tokens = Vec::new();
    let mut links = LinkTable::new();
    let mut block: Option<Token> = None;
    let mut in_fence = false;

    for (idx, line) in text.lines().enumerate() {
        let line_number = idx + 1;

        if in_fence {
            if let Some(current) = block.as_mut() {
                current.lines.push(line.to_string());
            }
            if line.starts_with(FENCE) {
                in_fence = false;
                tokens.extend(block.take());
            }
            continue;
        }

        if line.starts_with(FENCE) {
            tokens.extend(block.take());
            block = Some(Token::new(TokenKind::Text, line, line_number));
            in_fence = true;
        } else if line.trim().is_empty() {
            tokens.extend(block.take());
        } else if let Some(kind) = heading_kind(line) {
            tokens.extend(block.take());
            tokens.push(Token::new(kind, line, line_number));
        } else if let Some(caps) = LINK_DEFINITION_PATTERN.captures(line) {
            tokens.extend(block.take());
            links.insert(caps["id"].to_lowercase(), caps["url"].to_string());
        } else if let Some(current) = block.as_mut() {
            current.lines.push(line.to_string());
        } else {
            block = Some(Token::new(TokenKind::Text, line, line_number));
        }
    }

    tokens.extend(block);
    (tokens, links)
}

/// Joins blocks with exactly one blank line between them and a single
/// trailing newline. Blank segments are skipped.
pub fn join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = segments
        .into_iter()
        .map(|segment| segment.as_ref().trim_end().to_string())
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| segment.trim_start_matches(['\n', '\r']).to_string())
        .collect();

    let mut text = parts.join("\n\n").trim().to_string();
    text.push('\n');
    text
}

/// Splits a markdown link into its display text, URL and reference id.
///
/// `[text](url)` yields the URL, `[text][id]` yields the lowercase id, and
/// anything else comes back unchanged with neither.
pub fn strip_link(token: &str) -> (String, Option<String>, Option<String>) {
    if let Some(caps) = INLINE_LINK_PATTERN.captures(token) {
        return (caps["text"].to_string(), Some(caps["url"].to_string()), None);
    }

    if let Some(caps) = REFERENCE_LINK_PATTERN.captures(token) {
        return (
            caps["text"].to_string(),
            None,
            Some(caps["id"].to_lowercase()),
        );
    }

    (token.to_string(), None, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_blocks() {
        let text = "# Changelog\n\nIntro text\nsecond line\n\n## 1.0.0\n\n### Added\n\n- one\n- two\n";
        let (tokens, links) = tokenize(text);

        assert!(links.is_empty());
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Text,
                TokenKind::Text,
                TokenKind::H2,
                TokenKind::H3,
                TokenKind::Text
            ]
        );
        assert_eq!(tokens[1].text(), "Intro text\nsecond line");
        assert_eq!(tokens[1].line_number, 3);
        assert_eq!(tokens[2].line_number, 6);
        assert_eq!(tokens[4].lines, vec!["- one", "- two"]);
    }

    #[test]
    fn test_headings_split_without_blank_lines() {
        let (tokens, _) = tokenize("## 1.0.0\n### Fixed\n- a bug\n## 0.9.0\n- older");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::H2,
                TokenKind::H3,
                TokenKind::Text,
                TokenKind::H2,
                TokenKind::Text
            ]
        );
        assert_eq!(tokens[3].line_number, 4);
    }

    #[test]
    fn test_other_heading_levels_are_content() {
        let (tokens, _) = tokenize("# Title\n#### Deep\n##### Deeper");
        assert_eq!(kinds(&tokens), vec![TokenKind::Text]);
        assert_eq!(tokens[0].lines.len(), 3);
    }

    #[test]
    fn test_link_table_extracted() {
        let text = "## [1.0.0]\n\n- change\n\n[1.0.0]: https://x.test/1\n[Unreleased]: https://x.test/u\n[1.0.0]: https://x.test/again\n";
        let (tokens, links) = tokenize(text);

        assert_eq!(tokens.len(), 2);
        assert_eq!(links.len(), 2);
        assert_eq!(links["1.0.0"], "https://x.test/again");
        assert_eq!(links["unreleased"], "https://x.test/u");
    }

    #[test]
    fn test_fenced_code_kept_whole() {
        let text = "```\n## not a version\n\n[x]: https://not.a.link\n```\nafter";
        let (tokens, links) = tokenize(text);

        assert!(links.is_empty());
        assert_eq!(kinds(&tokens), vec![TokenKind::Text, TokenKind::Text]);
        assert_eq!(tokens[0].lines.len(), 5);
        assert_eq!(tokens[1].text(), "after");
    }

    #[test]
    fn test_join_blank_line_rule() {
        assert_eq!(join(["A", "B"]), "A\n\nB\n");
        assert_eq!(join(["\nA\n\n", "", "  ", "B\n"]), "A\n\nB\n");
        assert_eq!(join(Vec::<String>::new()), "\n");
    }

    #[test]
    fn test_strip_link() {
        assert_eq!(
            strip_link("[1.0.0](https://x.test)"),
            ("1.0.0".to_string(), Some("https://x.test".to_string()), None)
        );
        assert_eq!(
            strip_link("[1.0.0][Release-1]"),
            ("1.0.0".to_string(), None, Some("release-1".to_string()))
        );
        assert_eq!(strip_link("[1.0.0]"), ("[1.0.0]".to_string(), None, None));
        assert_eq!(strip_link("1.0.0"), ("1.0.0".to_string(), None, None));
    }
}
