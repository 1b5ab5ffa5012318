//! # Siren Mapper
//!
//! The entry point of the codec. A [`SirenMapper`] bundles the rendering policy, the title
//! resolver and the class strategy, and turns models into Siren documents and back.
//!
//! ```rust
//! use hateoas_siren::model::{EntityModel, Link};
//! use hateoas_siren::siren::SirenMapper;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Person { name: String, age: u32 }
//!
//! let mapper = SirenMapper::default();
//! let model = EntityModel::new(Person { name: "Peter".into(), age: 42 })
//!     .add_link(Link::self_link("/persons/1"));
//!
//! let json = mapper.write(&model).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"class":["person"],"properties":{"name":"Peter","age":42},"links":[{"rel":["self"],"href":"/persons/1"}]}"#
//! );
//!
//! let read: EntityModel<Person> = mapper.read_entity(&json).unwrap();
//! assert_eq!(read.content(), model.content());
//! ```

use crate::model::{CollectionModel, EntityModel, PagedModel, RepresentationModel};
use crate::siren::class::{EntityClassProvider, SimpleEntityClassProvider};
use crate::siren::config::SirenConfiguration;
use crate::siren::decode::SirenEntityDecoder;
use crate::siren::entity::{Embeddable, SirenEntityConverter};
use crate::siren::error::SirenError;
use crate::siren::message::{DefaultsOnly, MessageResolver};
use crate::siren::wire::SirenEntity;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;

/// A model that can be encoded as a Siren entity.
pub trait ToSiren {
    fn to_siren(&self, converter: &SirenEntityConverter) -> Result<SirenEntity, SirenError>;
}

impl ToSiren for RepresentationModel {
    fn to_siren(&self, converter: &SirenEntityConverter) -> Result<SirenEntity, SirenError> {
        converter.encode_representation(self)
    }
}

impl<T: Serialize> ToSiren for EntityModel<T> {
    fn to_siren(&self, converter: &SirenEntityConverter) -> Result<SirenEntity, SirenError> {
        converter.encode_entity(self)
    }
}

impl<E: Embeddable> ToSiren for CollectionModel<E> {
    fn to_siren(&self, converter: &SirenEntityConverter) -> Result<SirenEntity, SirenError> {
        converter.encode_collection(self)
    }
}

impl<E: Embeddable> ToSiren for PagedModel<E> {
    fn to_siren(&self, converter: &SirenEntityConverter) -> Result<SirenEntity, SirenError> {
        converter.encode_paged(self)
    }
}

#[derive(Clone)]
pub struct SirenMapper {
    configuration: SirenConfiguration,
    message_resolver: Arc<dyn MessageResolver>,
    class_provider: Arc<dyn EntityClassProvider>,
    converter: SirenEntityConverter,
    decoder: SirenEntityDecoder,
}

impl Default for SirenMapper {
    fn default() -> Self {
        Self::new(SirenConfiguration::default())
    }
}

impl SirenMapper {
    /// A mapper that resolves no titles and uses [`SimpleEntityClassProvider`].
    pub fn new(configuration: SirenConfiguration) -> Self {
        Self::assemble(
            configuration,
            Arc::new(DefaultsOnly),
            Arc::new(SimpleEntityClassProvider),
        )
    }

    fn assemble(
        configuration: SirenConfiguration,
        message_resolver: Arc<dyn MessageResolver>,
        class_provider: Arc<dyn EntityClassProvider>,
    ) -> Self {
        let converter = SirenEntityConverter::new(
            configuration,
            message_resolver.clone(),
            class_provider.clone(),
        );
        let decoder = SirenEntityDecoder::new(converter.link_converter().clone());
        Self {
            configuration,
            message_resolver,
            class_provider,
            converter,
            decoder,
        }
    }

    pub fn with_message_resolver(self, message_resolver: impl MessageResolver + 'static) -> Self {
        Self::assemble(self.configuration, Arc::new(message_resolver), self.class_provider)
    }

    pub fn with_class_provider(self, class_provider: impl EntityClassProvider + 'static) -> Self {
        Self::assemble(self.configuration, self.message_resolver, Arc::new(class_provider))
    }

    pub fn configuration(&self) -> &SirenConfiguration {
        &self.configuration
    }

    pub fn converter(&self) -> &SirenEntityConverter {
        &self.converter
    }

    pub fn decoder(&self) -> &SirenEntityDecoder {
        &self.decoder
    }

    pub fn encode<M: ToSiren + ?Sized>(&self, model: &M) -> Result<SirenEntity, SirenError> {
        model.to_siren(&self.converter)
    }

    pub fn write<M: ToSiren + ?Sized>(&self, model: &M) -> Result<String, SirenError> {
        Ok(serde_json::to_string(&self.encode(model)?)?)
    }

    pub fn write_pretty<M: ToSiren + ?Sized>(&self, model: &M) -> Result<String, SirenError> {
        Ok(serde_json::to_string_pretty(&self.encode(model)?)?)
    }

    pub fn write_to<W: Write, M: ToSiren + ?Sized>(
        &self,
        writer: W,
        model: &M,
    ) -> Result<(), SirenError> {
        Ok(serde_json::to_writer(writer, &self.encode(model)?)?)
    }

    pub fn read(&self, json: &str) -> Result<SirenEntity, SirenError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn read_representation(&self, json: &str) -> Result<RepresentationModel, SirenError> {
        self.decoder.decode_representation(&self.read(json)?)
    }

    pub fn read_entity<T: DeserializeOwned>(
        &self,
        json: &str,
    ) -> Result<EntityModel<T>, SirenError> {
        self.decoder.decode_entity(&self.read(json)?)
    }

    pub fn read_collection<T: DeserializeOwned>(
        &self,
        json: &str,
    ) -> Result<CollectionModel<EntityModel<T>>, SirenError> {
        self.decoder.decode_collection(&self.read(json)?)
    }

    pub fn read_paged<T: DeserializeOwned>(
        &self,
        json: &str,
    ) -> Result<PagedModel<EntityModel<T>>, SirenError> {
        self.decoder.decode_paged(&self.read(json)?)
    }
}
