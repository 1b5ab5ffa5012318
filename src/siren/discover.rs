//! # Link Discovery
//!
//! Finds links by relation in a raw Siren document without decoding the whole entity.
//! Only the root `links` array is searched; a link matches when any of its relations equals
//! the requested one.

use crate::model::{Link, Links};
use crate::siren::error::SirenError;
use crate::siren::wire::SirenLink;
use serde::Deserialize;
use std::io::Read;

#[derive(Deserialize)]
struct LinksOnly {
    #[serde(default)]
    links: Vec<SirenLink>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SirenLinkDiscoverer;

impl SirenLinkDiscoverer {
    pub fn new() -> Self {
        Self
    }

    pub fn find_link_with_rel(
        &self,
        rel: &str,
        document: &str,
    ) -> Result<Option<Link>, SirenError> {
        Ok(self.find_links_with_rel(rel, document)?.into_iter().next())
    }

    pub fn find_links_with_rel(&self, rel: &str, document: &str) -> Result<Links, SirenError> {
        Ok(matching(rel, serde_json::from_str(document)?))
    }

    pub fn find_link_with_rel_in<R: Read>(
        &self,
        rel: &str,
        reader: R,
    ) -> Result<Option<Link>, SirenError> {
        Ok(self.find_links_with_rel_in(rel, reader)?.into_iter().next())
    }

    pub fn find_links_with_rel_in<R: Read>(
        &self,
        rel: &str,
        reader: R,
    ) -> Result<Links, SirenError> {
        Ok(matching(rel, serde_json::from_reader(reader)?))
    }
}

fn matching(rel: &str, document: LinksOnly) -> Links {
    document
        .links
        .into_iter()
        .filter(|link| link.rels.iter().any(|candidate| candidate == rel))
        .map(|link| {
            let mut found = Link::new(link.href, rel);
            if let Some(title) = link.title {
                found = found.with_title(title);
            }
            if let Some(media_type) = link.media_type {
                found = found.with_media_type(media_type);
            }
            found
        })
        .collect()
}
