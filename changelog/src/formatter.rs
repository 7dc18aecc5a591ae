use crate::entry::VersionEntry;

// --- Traits ---

pub trait HeaderFormatter: Send + Sync {
    fn format(&self, entry: &VersionEntry) -> String;
}

pub trait SectionFormatter: Send + Sync {
    fn format_title(&self, title: &str) -> String;
}

// Markdown: `## [1.0.0] - 2021-01-01 [YANKED]` and `### Added`
#[derive(Debug, Clone)]
pub struct MarkdownFormatter;

impl HeaderFormatter for MarkdownFormatter {
    fn format(&self, entry: &VersionEntry) -> String {
        let name = match (entry.link_url(), entry.link_id()) {
            (Some(_), _) => format!("[{}]", entry.name),
            (None, Some(id)) => format!("[{}][{}]", entry.name, id),
            (None, None) => entry.name.clone(),
        };
        join_header(Some("##"), name, entry)
    }
}

impl SectionFormatter for MarkdownFormatter {
    fn format_title(&self, title: &str) -> String {
        format!("### {title}")
    }
}

// Plain text, for terminals and tag messages: `1.0.0 - 2021-01-01 [YANKED]` and `ADDED:`
#[derive(Debug, Clone)]
pub struct PlainFormatter;

impl HeaderFormatter for PlainFormatter {
    fn format(&self, entry: &VersionEntry) -> String {
        join_header(None, entry.name.clone(), entry)
    }
}

impl SectionFormatter for PlainFormatter {
    fn format_title(&self, title: &str) -> String {
        format!("{}:", title.to_uppercase())
    }
}

fn join_header(marker: Option<&str>, name: String, entry: &VersionEntry) -> String {
    let mut segments: Vec<String> = Vec::with_capacity(4 + entry.tags.len());
    segments.extend(marker.map(str::to_string));
    segments.push(name);

    if entry.date.is_some() || !entry.tags.is_empty() {
        segments.push("-".to_string());
    }
    if let Some(date) = entry.date {
        segments.push(date.format("%Y-%m-%d").to_string());
    }
    segments.extend(entry.tags.iter().map(|tag| format!("[{}]", tag.to_uppercase())));

    segments.join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangelogFormat {
    #[default]
    Markdown,
    Plain,
}

impl ChangelogFormat {
    #[must_use]
    pub const fn from_markdown(markdown: bool) -> Self {
        if markdown { Self::Markdown } else { Self::Plain }
    }
}

pub fn create_header_formatter(format: ChangelogFormat) -> Box<dyn HeaderFormatter> {
    match format {
        ChangelogFormat::Markdown => Box::new(MarkdownFormatter),
        ChangelogFormat::Plain => Box::new(PlainFormatter),
    }
}

pub fn create_section_formatter(format: ChangelogFormat) -> Box<dyn SectionFormatter> {
    match format {
        ChangelogFormat::Markdown => Box::new(MarkdownFormatter),
        ChangelogFormat::Plain => Box::new(PlainFormatter),
    }
}
