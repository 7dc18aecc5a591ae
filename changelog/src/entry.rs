use chrono::NaiveDate;
use std::fmt;

use crate::config::DEFAULT_UNRELEASED_NAME;
use crate::error::ChangelogError;
use crate::formatter::{ChangelogFormat, create_header_formatter, create_section_formatter};
use crate::markdown::join;
use crate::types::{Result, Sections, VersionLink};
use crate::utils::title_case;

/// A single version in a changelog: its heading and its categorized entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub link: Option<VersionLink>,
    /// Line of the heading in the file it was read from. Not kept up to date
    /// when the changelog is modified and never written back.
    pub line_number: Option<usize>,
    pub sections: Sections,
}

impl Default for VersionEntry {
    fn default() -> Self {
        Self::new(DEFAULT_UNRELEASED_NAME)
    }
}

impl VersionEntry {
    pub fn new(name: impl Into<String>) -> Self {
        let mut sections = Sections::new();
        sections.insert(String::new(), Vec::new());

        Self {
            name: name.into(),
            date: None,
            tags: Vec::new(),
            link: None,
            line_number: None,
            sections,
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(VersionLink::Url(url.into()));
        self
    }

    #[must_use]
    pub fn with_link_id(mut self, id: impl Into<String>) -> Self {
        self.link = Some(VersionLink::Reference(id.into().to_lowercase()));
        self
    }

    /// The version's URL, if it has one
    #[must_use]
    pub fn link_url(&self) -> Option<&str> {
        match &self.link {
            Some(VersionLink::Url(url)) => Some(url.as_str()),
            _ => None,
        }
    }

    /// The reference id of a link that has not been resolved to a URL
    #[must_use]
    pub fn link_id(&self) -> Option<&str> {
        match &self.link {
            Some(VersionLink::Reference(id)) => Some(id.as_str()),
            _ => None,
        }
    }

    /// Whether the name is a final release version number
    #[must_use]
    pub fn is_released(&self) -> bool {
        version::is_release(&self.name)
    }

    /// Appends an entry to a section, creating the section if needed.
    /// Section names are title-cased; an empty section means uncategorized.
    pub fn add_entry(&mut self, contents: impl Into<String>, section: &str) {
        self.sections
            .entry(title_case(section))
            .or_default()
            .push(contents.into());
    }

    /// Entries of a section, looked up with the same title-casing as `add_entry`
    #[must_use]
    pub fn entries(&self, section: &str) -> Option<&[String]> {
        self.sections.get(&title_case(section)).map(Vec::as_slice)
    }

    /// Appends a tag. The same tag may be added more than once.
    pub fn add_tag(&mut self, tag: &str) {
        self.tags.push(tag.to_uppercase());
    }

    /// Removes the first occurrence of a tag
    ///
    /// # Errors
    /// Returns `TagNotFound` if the version does not carry the tag
    pub fn remove_tag(&mut self, tag: &str) -> Result<()> {
        let wanted = tag.to_uppercase();
        let pos = self
            .tags
            .iter()
            .position(|t| t.to_uppercase() == wanted)
            .ok_or_else(|| ChangelogError::TagNotFound {
                tag: wanted.clone(),
                version: self.name.clone(),
            })?;
        self.tags.remove(pos);
        Ok(())
    }

    /// The version heading, e.g. `## [1.0.0] - 2021-01-01 [YANKED]`
    #[must_use]
    pub fn header(&self, markdown: bool) -> String {
        create_header_formatter(ChangelogFormat::from_markdown(markdown)).format(self)
    }

    /// The version's entries grouped under their section headings.
    /// Sections without entries are left out entirely.
    #[must_use]
    pub fn body(&self, markdown: bool) -> String {
        let section_formatter = create_section_formatter(ChangelogFormat::from_markdown(markdown));
        let mut segments = Vec::new();

        for (title, entries) in &self.sections {
            if entries.is_empty() {
                continue;
            }
            if !title.is_empty() {
                segments.push(section_formatter.format_title(title));
            }
            segments.extend(entries.iter().cloned());
        }

        if segments.is_empty() {
            return String::new();
        }
        join(segments).trim_end().to_string()
    }

    /// Header and body separated by a blank line
    #[must_use]
    pub fn text(&self, markdown: bool) -> String {
        let mut contents = self.header(markdown);
        let body = self.body(markdown);
        if !body.is_empty() {
            contents.push_str("\n\n");
            contents.push_str(&body);
        }
        contents
    }
}

impl fmt::Display for VersionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header(false))
    }
}
