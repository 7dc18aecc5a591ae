use chrono::NaiveDate;

use crate::entry::VersionEntry;
use crate::markdown::strip_link;
use crate::types::VersionLink;
use crate::utils::{DATE_PATTERN, TAG_PATTERN};

/// The heading text without its `#` markers and trailing separator hyphens
pub fn slug(heading: &str) -> &str {
    heading
        .trim_end_matches('-')
        .trim_matches('#')
        .trim()
}

/// Parses the text of a `##` heading into a version skeleton.
///
/// The shape is `name [- ] [YYYY-MM-DD] [TAG]...`, where `name` may be an
/// inline or reference link. Every token after the name must be a date or a
/// tag; if any is not, nothing is extracted and the whole slug becomes the
/// name.
pub fn parse_version_header(heading: &str) -> VersionEntry {
    let slug = slug(heading);
    let mut words: Vec<&str> = slug.split_whitespace().collect();
    if let Some(pos) = words.iter().position(|&w| w == "-") {
        words.remove(pos);
    }

    let mut entry = VersionEntry::new(slug);

    let Some((first, rest)) = words.split_first() else {
        return entry;
    };

    let mut date = None;
    let mut tags = Vec::new();

    for word in rest {
        if DATE_PATTERN.is_match(word) {
            match NaiveDate::parse_from_str(word, "%Y-%m-%d") {
                Ok(parsed) => date = Some(parsed),
                Err(_) => return entry,
            }
        } else if let Some(caps) = TAG_PATTERN.captures(word) {
            tags.push(caps["tag"].to_string());
        } else {
            return entry;
        }
    }

    let (name, link, link_id) = strip_link(first);
    entry.name = name;
    entry.date = date;
    entry.tags = tags;
    entry.link = match (link, link_id) {
        (Some(url), _) => Some(VersionLink::Url(url)),
        (None, Some(id)) => Some(VersionLink::Reference(id)),
        (None, None) => None,
    };

    entry
}
