//! # Title Resolution
//!
//! The codec never hardcodes human-readable titles. For every link, entity, action and field
//! it builds an ordered list of lookup codes (most specific first, ending in a `default` code)
//! and asks a [`MessageResolver`] for the first one that resolves.
//!
//! | Element | Codes |
//! |---|---|
//! | link | `_link.<rel>.title`, `_link.default.title` |
//! | entity | `_entity.<qualified type>.title`, `_entity.<simple type>.title`, `_entity.default.title` |
//! | action | `_action.<name>.title`, `_action.default.title` |
//! | field | `_field.<name>.title`, `_field.default.title` |

use crate::model::TypeIdentity;
use std::collections::HashMap;

/// Something a title can be resolved for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleResolvable {
    codes: Vec<String>,
}

impl TitleResolvable {
    fn scoped<'a>(scope: &str, keys: impl IntoIterator<Item = &'a str>) -> Self {
        let codes = keys
            .into_iter()
            .chain(std::iter::once("default"))
            .map(|key| format!("_{scope}.{key}.title"))
            .collect();
        Self { codes }
    }

    pub fn link(rel: &str) -> Self {
        Self::scoped("link", [rel])
    }

    pub fn entity(identity: TypeIdentity) -> Self {
        Self::scoped("entity", [identity.qualified(), identity.simple()])
    }

    pub fn action(name: &str) -> Self {
        Self::scoped("action", [name])
    }

    pub fn field(name: &str) -> Self {
        Self::scoped("field", [name])
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }
}

/// Resolves titles. Implementations return `None` when no code resolves.
pub trait MessageResolver: Send + Sync {
    fn resolve(&self, resolvable: &TitleResolvable) -> Option<String>;
}

impl<F> MessageResolver for F
where
    F: Fn(&[String]) -> Option<String> + Send + Sync,
{
    fn resolve(&self, resolvable: &TitleResolvable) -> Option<String> {
        self(resolvable.codes())
    }
}

/// Never resolves anything, so no titles are emitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultsOnly;

impl MessageResolver for DefaultsOnly {
    fn resolve(&self, _resolvable: &TitleResolvable) -> Option<String> {
        None
    }
}

/// Resolves every code to the same message. Mostly useful in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticMessageResolver {
    message: Option<String>,
}

impl StaticMessageResolver {
    pub fn of(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

impl MessageResolver for StaticMessageResolver {
    fn resolve(&self, _resolvable: &TitleResolvable) -> Option<String> {
        self.message.clone()
    }
}

/// Looks codes up in a message table.
#[derive(Debug, Clone, Default)]
pub struct MapMessageResolver {
    messages: HashMap<String, String>,
}

impl MapMessageResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, code: impl Into<String>, message: impl Into<String>) -> Self {
        self.messages.insert(code.into(), message.into());
        self
    }

    /// Parses `code=message` lines. `#`/`!` comments and blank lines are skipped, `:` is
    /// accepted as separator, and a later entry overrides an earlier one.
    pub fn from_properties(source: &str) -> Self {
        let messages = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
            .filter_map(|line| {
                let split = line.find(['=', ':'])?;
                let (code, message) = (line[..split].trim(), line[split + 1..].trim());
                (!code.is_empty()).then(|| (code.to_string(), message.to_string()))
            })
            .collect();
        Self { messages }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl MessageResolver for MapMessageResolver {
    fn resolve(&self, resolvable: &TitleResolvable) -> Option<String> {
        resolvable
            .codes()
            .iter()
            .filter_map(|code| self.messages.get(code))
            .find(|message| !message.is_empty())
            .cloned()
    }
}
