//! # Links
//!
//! Navigational links of the resource graph. A [`Link`] points at a target URI (possibly a
//! [`UriTemplate`] with unresolved variables), names its relation, and may carry any number of
//! [`Affordance`]s describing the state transitions available through it.

use crate::model::affordance::Affordance;
use crate::model::template::{TemplateVariable, UriTemplate};
use std::collections::HashMap;
use std::fmt;

/// The named role a link plays relative to the resource that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkRelation(String);

impl LinkRelation {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LinkRelation {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LinkRelation {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for LinkRelation {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LinkRelation {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Registered relation names used throughout the crate.
pub mod iana {
    pub const SELF: &str = "self";
    pub const ITEM: &str = "item";
    pub const ABOUT: &str = "about";
    pub const HELP: &str = "help";
    pub const LICENSE: &str = "license";
    pub const FIRST: &str = "first";
    pub const PREV: &str = "prev";
    pub const NEXT: &str = "next";
    pub const LAST: &str = "last";
}

/// A navigational link.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    rel: LinkRelation,
    template: UriTemplate,
    title: Option<String>,
    media_type: Option<String>,
    name: Option<String>,
    affordances: Vec<Affordance>,
}

impl Link {
    pub fn new(href: impl Into<String>, rel: impl Into<LinkRelation>) -> Self {
        Self {
            rel: rel.into(),
            template: UriTemplate::new(href),
            title: None,
            media_type: None,
            name: None,
            affordances: Vec::new(),
        }
    }

    /// Shorthand for a `self` link.
    pub fn self_link(href: impl Into<String>) -> Self {
        Self::new(href, iana::SELF)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attaches one more affordance to this link.
    pub fn and_affordance(mut self, affordance: Affordance) -> Self {
        self.affordances.push(affordance);
        self
    }

    pub fn rel(&self) -> &LinkRelation {
        &self.rel
    }

    /// The raw target, unexpanded when the link is templated.
    pub fn href(&self) -> &str {
        self.template.as_str()
    }

    pub fn template(&self) -> &UriTemplate {
        &self.template
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn affordances(&self) -> &[Affordance] {
        &self.affordances
    }

    pub fn is_templated(&self) -> bool {
        self.template.has_variables()
    }

    pub fn variables(&self) -> Vec<TemplateVariable> {
        self.template.variables()
    }

    /// Returns a non-templated copy of this link with the given variables expanded.
    /// Title, media type, name and affordances are kept.
    pub fn expand(&self, values: &HashMap<String, String>) -> Self {
        Self {
            template: UriTemplate::new(self.template.expand(values)),
            ..self.clone()
        }
    }

    pub fn has_rel(&self, rel: &str) -> bool {
        self.rel == rel
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>;rel=\"{}\"", self.href(), self.rel)
    }
}

/// An ordered set of links.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Links(Vec<Link>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, link: Link) {
        self.0.push(link);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First link with the given relation.
    pub fn get_link(&self, rel: &str) -> Option<&Link> {
        self.0.iter().find(|link| link.has_rel(rel))
    }

    pub fn has_link(&self, rel: &str) -> bool {
        self.get_link(rel).is_some()
    }

    pub fn as_slice(&self) -> &[Link] {
        &self.0
    }
}

impl FromIterator<Link> for Links {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Links {
    type Item = Link;
    type IntoIter = std::vec::IntoIter<Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Links {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Link>> for Links {
    fn from(links: Vec<Link>) -> Self {
        Self(links)
    }
}

impl Extend<Link> for Links {
    fn extend<I: IntoIterator<Item = Link>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::affordance::HttpMethod;

    #[test]
    fn templated_links_are_detected_from_the_href() {
        assert!(!Link::self_link("/persons").is_templated());
        assert!(Link::new("/persons/{id}", "person").is_templated());
    }

    #[test]
    fn expanding_keeps_metadata_and_affordances() {
        let link = Link::new("/persons/{id}", "person")
            .with_title("A person")
            .and_affordance(Affordance::new("deletePerson", HttpMethod::Delete));

        let values = HashMap::from([("id".to_string(), "7".to_string())]);
        let expanded = link.expand(&values);

        assert_eq!(expanded.href(), "/persons/7");
        assert!(!expanded.is_templated());
        assert_eq!(expanded.title(), Some("A person"));
        assert_eq!(expanded.affordances().len(), 1);
    }

    #[test]
    fn links_are_looked_up_by_relation() {
        let links: Links = vec![
            Link::self_link("/persons/1"),
            Link::new("/persons", "persons"),
        ]
        .into();

        assert!(links.has_link("self"));
        assert_eq!(links.get_link("persons").map(Link::href), Some("/persons"));
        assert!(links.get_link("next").is_none());
    }
}
