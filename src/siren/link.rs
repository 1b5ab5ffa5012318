//! # Link Conversion
//!
//! Turns resource-graph [`Link`]s into Siren links and back. Templated links are governed by
//! [`RenderTemplatedLinks`]: under `AS_LINK` they are emitted with the raw template as href,
//! under `AS_ACTION` they are left out here and rendered by the affordance converter instead.

use crate::model::{Link, Links};
use crate::siren::config::{RenderTemplatedLinks, SirenConfiguration};
use crate::siren::error::SirenError;
use crate::siren::message::{MessageResolver, TitleResolvable};
use crate::siren::wire::{SirenAction, SirenLink};
use std::sync::Arc;

#[derive(Clone)]
pub struct SirenLinkConverter {
    configuration: SirenConfiguration,
    message_resolver: Arc<dyn MessageResolver>,
}

impl SirenLinkConverter {
    pub fn new(
        configuration: SirenConfiguration,
        message_resolver: Arc<dyn MessageResolver>,
    ) -> Self {
        Self {
            configuration,
            message_resolver,
        }
    }

    pub fn configuration(&self) -> &SirenConfiguration {
        &self.configuration
    }

    pub fn to_siren(&self, links: &Links) -> Result<Vec<SirenLink>, SirenError> {
        links
            .iter()
            .filter(|link| self.is_rendered_as_link(link))
            .map(|link| self.convert(link))
            .collect()
    }

    fn is_rendered_as_link(&self, link: &Link) -> bool {
        !link.is_templated()
            || self
                .configuration
                .should_render_templated_links_as(RenderTemplatedLinks::AsLink)
    }

    fn convert(&self, link: &Link) -> Result<SirenLink, SirenError> {
        if link.rel().is_empty() {
            return Err(SirenError::InvalidArgument(format!(
                "link to '{}' has no relation",
                link.href()
            )));
        }

        Ok(SirenLink {
            rels: vec![link.rel().value().to_string()],
            classes: Vec::new(),
            href: link.href().to_string(),
            title: self.title(link),
            media_type: link.media_type().map(str::to_string),
        })
    }

    /// An explicit title always wins over the resolver.
    fn title(&self, link: &Link) -> Option<String> {
        link.title()
            .map(str::to_string)
            .or_else(|| self.message_resolver.resolve(&TitleResolvable::link(link.rel().value())))
    }

    /// Only the first relation of each wire link survives. A blank first relation is an error.
    pub fn from_siren(&self, links: &[SirenLink]) -> Result<Links, SirenError> {
        links
            .iter()
            .map(|link| {
                let rel = link
                    .rels
                    .first()
                    .filter(|rel| !rel.trim().is_empty())
                    .ok_or_else(|| SirenError::MissingRelation(link.href.clone()))?;

                let mut converted = Link::new(link.href.clone(), rel.as_str());
                if let Some(title) = &link.title {
                    converted = converted.with_title(title.clone());
                }
                if let Some(media_type) = &link.media_type {
                    converted = converted.with_media_type(media_type.clone());
                }
                Ok(converted)
            })
            .collect()
    }

    /// Recovers navigable links from actions: the action name becomes the relation.
    /// Method and fields are dropped.
    pub fn from_siren_actions(&self, actions: &[SirenAction]) -> Result<Links, SirenError> {
        actions
            .iter()
            .map(|action| {
                if action.name.trim().is_empty() {
                    return Err(SirenError::MissingRelation(action.href.clone()));
                }

                let mut converted = Link::new(action.href.clone(), action.name.as_str())
                    .with_name(action.name.clone());
                if let Some(title) = &action.title {
                    converted = converted.with_title(title.clone());
                }
                if let Some(media_type) = &action.media_type {
                    converted = converted.with_media_type(media_type.clone());
                }
                Ok(converted)
            })
            .collect()
    }
}
