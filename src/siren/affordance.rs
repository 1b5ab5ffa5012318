//! # Affordance Conversion
//!
//! Renders state transitions as Siren actions, link by link in order:
//!
//! 1. every non-`GET` affordance becomes one action targeting the link's href;
//! 2. a templated link without non-`GET` affordances becomes one `GET` action with a text
//!    field per template variable, but only under [`RenderTemplatedLinks::AsAction`].
//!
//! `GET` affordances never become actions. Actions are not converted back into affordances.

use crate::model::{Affordance, HttpMethod, Link, Links, PropertyMetadata};
use crate::siren::config::{RenderTemplatedLinks, SirenConfiguration};
use crate::siren::error::SirenError;
use crate::siren::message::{MessageResolver, TitleResolvable};
use crate::siren::wire::{FieldType, SirenAction, SirenField};
use std::sync::Arc;

#[derive(Clone)]
pub struct SirenAffordanceConverter {
    configuration: SirenConfiguration,
    message_resolver: Arc<dyn MessageResolver>,
}

impl SirenAffordanceConverter {
    pub fn new(
        configuration: SirenConfiguration,
        message_resolver: Arc<dyn MessageResolver>,
    ) -> Self {
        Self {
            configuration,
            message_resolver,
        }
    }

    pub fn to_siren(&self, links: &Links) -> Result<Vec<SirenAction>, SirenError> {
        let mut actions = Vec::new();
        for link in links {
            let before = actions.len();
            actions.extend(
                link.affordances()
                    .iter()
                    .filter(|affordance| affordance.method() != HttpMethod::Get)
                    .map(|affordance| self.action(link, affordance)),
            );

            let has_transitions = actions.len() > before;
            if link.is_templated()
                && !has_transitions
                && self
                    .configuration
                    .should_render_templated_links_as(RenderTemplatedLinks::AsAction)
            {
                actions.push(self.templated_action(link)?);
            }
        }
        Ok(actions)
    }

    fn action(&self, link: &Link, affordance: &Affordance) -> SirenAction {
        let fields = affordance
            .input()
            .properties
            .iter()
            .map(|property| self.field(property))
            .collect();

        SirenAction {
            name: affordance.name().to_string(),
            classes: Vec::new(),
            method: Some(affordance.method()),
            href: link.href().to_string(),
            title: self.title(TitleResolvable::action(affordance.name())),
            media_type: affordance.input().media_type.clone(),
            fields,
        }
    }

    fn templated_action(&self, link: &Link) -> Result<SirenAction, SirenError> {
        let name = link
            .name()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| link.rel().value());
        if name.trim().is_empty() {
            return Err(SirenError::InvalidArgument(format!(
                "templated link '{}' has neither a name nor a relation",
                link.href()
            )));
        }

        let fields = link
            .variables()
            .iter()
            .map(|variable| SirenField {
                name: variable.name().to_string(),
                field_type: Some(FieldType::Text),
                title: self.title(TitleResolvable::field(variable.name())),
                ..SirenField::default()
            })
            .collect();

        Ok(SirenAction {
            name: name.to_string(),
            classes: Vec::new(),
            method: None,
            href: link.href().to_string(),
            title: self.title(TitleResolvable::action(name)),
            media_type: link.media_type().map(str::to_string),
            fields,
        })
    }

    fn field(&self, property: &PropertyMetadata) -> SirenField {
        let field_type = if property.value_type.is_numeric() {
            FieldType::Number
        } else {
            FieldType::Text
        };

        SirenField {
            name: property.name.clone(),
            field_type: Some(field_type),
            title: self.title(TitleResolvable::field(&property.name)),
            ..SirenField::default()
        }
    }

    fn title(&self, resolvable: TitleResolvable) -> Option<String> {
        self.message_resolver.resolve(&resolvable)
    }
}
