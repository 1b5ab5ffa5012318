//! # Siren Codec
//!
//! Translates the [`model`](crate::model) resource graph into
//! [Siren](https://github.com/kevinswiber/siren) documents and parses them back.
//!
//! ## Layers
//!
//! 1. **Wire** ([`wire`]) - serde structs for entities, links, actions and fields
//! 2. **Converters** ([`link`], [`affordance`], [`entity`], [`decode`]) - model ↔ wire
//! 3. **Policy** ([`config`], [`message`], [`class`]) - templated-link rendering, titles, class names
//! 4. **Facade** ([`SirenMapper`]) - bundles the policy and reads/writes JSON text
//!
//! Every call is a pure function of the model and the policy bundle; converters hold no
//! mutable state and can be shared across threads.

pub mod affordance;
pub mod class;
pub mod config;
pub mod decode;
pub mod discover;
pub mod entity;
pub mod error;
pub mod link;
pub mod mapper;
pub mod message;
pub mod wire;

pub use affordance::SirenAffordanceConverter;
pub use class::{
    DefaultLinkRelationProvider, EntityClassProvider, LinkRelationProvider,
    LinkRelationProviderBackedEntityClassProvider, SimpleEntityClassProvider,
};
pub use config::{RenderTemplatedLinks, SirenConfiguration};
pub use decode::SirenEntityDecoder;
pub use discover::SirenLinkDiscoverer;
pub use entity::{Embeddable, SirenEntityConverter};
pub use error::SirenError;
pub use link::SirenLinkConverter;
pub use mapper::{SirenMapper, ToSiren};
pub use message::{
    DefaultsOnly, MapMessageResolver, MessageResolver, StaticMessageResolver, TitleResolvable,
};
pub use wire::{FieldType, SirenAction, SirenEntity, SirenField, SirenLink};

/// Media type of Siren documents.
pub const SIREN_JSON: &str = "application/vnd.siren+json";
