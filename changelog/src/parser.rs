use crate::entry::VersionEntry;
use crate::header::parse_version_header;
use crate::markdown::{Token, TokenKind, join, tokenize};
use crate::types::{LinkTable, VersionLink};
use crate::utils::{BRACKETED_NAME_PATTERN, title_case};

/// A changelog document broken into its three parts
#[derive(Debug, Clone, Default)]
pub struct ParsedChangelog {
    pub header: String,
    pub versions: Vec<VersionEntry>,
    pub links: LinkTable,
}

#[derive(Debug, Clone)]
struct ParserState {
    current_section: String,
    header_segments: Vec<String>,
    versions: Vec<VersionEntry>,
}

impl ParserState {
    fn new() -> Self {
        Self {
            current_section: String::new(),
            header_segments: Vec::new(),
            versions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, content: &str) -> ParsedChangelog {
        let (tokens, links) = tokenize(content);
        let mut state = ParserState::new();

        for token in &tokens {
            self.parse_token(token, &mut state);
        }

        let mut versions = state.versions;
        resolve_links(&mut versions, &links);

        ParsedChangelog {
            header: join(&state.header_segments).trim_end().to_string(),
            versions,
            links,
        }
    }

    fn parse_token(&self, token: &Token, state: &mut ParserState) {
        let text = token.text();

        match token.kind {
            TokenKind::H2 => self.handle_version_header(&text, token.line_number, state),
            _ if state.versions.is_empty() => state.header_segments.push(text),
            TokenKind::H3 => self.handle_section_header(&text, state),
            TokenKind::Text => self.handle_content(text, state),
        }
    }

    fn handle_version_header(&self, text: &str, line_number: usize, state: &mut ParserState) {
        let mut version = parse_version_header(text);
        version.line_number = Some(line_number);
        state.current_section.clear();
        state.versions.push(version);
    }

    fn handle_section_header(&self, text: &str, state: &mut ParserState) {
        let section = title_case(text.trim_matches('#').trim());
        if let Some(version) = state.versions.last_mut() {
            version.sections.entry(section.clone()).or_default();
        }
        state.current_section = section;
    }

    fn handle_content(&self, text: String, state: &mut ParserState) {
        if let Some(version) = state.versions.last_mut() {
            version
                .sections
                .entry(state.current_section.clone())
                .or_default()
                .push(text);
        }
    }
}

/// Attaches link table URLs to versions.
///
/// A name written as `[1.0.0]` whose id is in the table becomes `1.0.0` with
/// that URL; otherwise a `[name][id]` reference is looked up by id. The table
/// itself is left alone, so writing keeps the links where they were.
fn resolve_links(versions: &mut [VersionEntry], links: &LinkTable) {
    for version in versions.iter_mut() {
        if let Some(caps) = BRACKETED_NAME_PATTERN.captures(&version.name) {
            let text = caps["text"].to_string();
            let id = text.to_lowercase();
            if let Some(url) = links.get(&id) {
                version.link = Some(VersionLink::Url(url.clone()));
                version.name = text;
            }
        } else if let Some(id) = version.link_id().map(str::to_lowercase) {
            if let Some(url) = links.get(&id) {
                version.link = Some(VersionLink::Url(url.clone()));
            }
        }
    }
}
