use crate::model::Representation;
use crate::person::{
    self, PageRequest, PersonError, PersonInput, PersonModelAssembler, PersonService,
};
use crate::siren::{MapMessageResolver, SirenConfiguration, SirenMapper};
use tracing::{debug, error, info};

/// Titles shipped with the sample, in `code=message` form.
pub const DEFAULT_TITLES: &str = "\
_entity.Person.title=Person
_entity.CollectionModel.title=Persons
_entity.PagedModel.title=Persons
_link.self.title=Self
_link.persons.title=Persons
_action.insert.title=Insert person
_action.update.title=Update person
_action.delete.title=Delete person
_field.name.title=Name
_field.age.title=Age
";

/// Wires the person store, service, assembler and Siren mapper together.
///
/// The store runs in its own task from [`PersonSystem::new`] until [`PersonSystem::shutdown`].
/// The `render_*` methods play the part of HTTP handlers: they fetch, assemble and return the
/// Siren document, with `None` standing in for a 404.
///
/// ```ignore
/// let system = PersonSystem::new()?;
/// system.seed().await?;
/// println!("{}", system.render_all().await?);
/// system.shutdown().await?;
/// ```
pub struct PersonSystem {
    pub service: PersonService,
    pub assembler: PersonModelAssembler,
    pub mapper: SirenMapper,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PersonSystem {
    /// Starts the store and reads the rendering policy from the environment.
    pub fn new() -> Result<Self, PersonError> {
        let configuration = SirenConfiguration::from_env();
        let mapper = SirenMapper::new(configuration)
            .with_message_resolver(MapMessageResolver::from_properties(DEFAULT_TITLES));
        Self::with_mapper(mapper)
    }

    pub fn with_mapper(mapper: SirenMapper) -> Result<Self, PersonError> {
        let assembler = PersonModelAssembler::new()?;
        let (store, service) = person::new();
        let handle = tokio::spawn(store.run());
        info!(
            render_templated_links = %mapper.configuration().render_templated_links,
            "Person system started"
        );

        Ok(Self {
            service,
            assembler,
            mapper,
            handles: vec![handle],
        })
    }

    /// Inserts the sample persons.
    pub async fn seed(&self) -> Result<(), PersonError> {
        for input in [
            PersonInput::new("Ingo", 44),
            PersonInput::new("Marcel", 33),
            PersonInput::new("Sophia", 21),
        ] {
            let person = self.service.insert(input).await?;
            debug!(?person, "Inserted person");
        }
        Ok(())
    }

    pub fn render_root(&self) -> Result<String, PersonError> {
        Ok(self.mapper.write_pretty(&self.assembler.root())?)
    }

    pub async fn render_all(&self) -> Result<String, PersonError> {
        let model = self
            .assembler
            .to_collection_model(self.service.find_all().await?);
        debug!(links = model.links().len(), "Rendering persons");
        Ok(self.mapper.write_pretty(&model)?)
    }

    pub async fn render_one(&self, id: u64) -> Result<Option<String>, PersonError> {
        match self.service.find_one(id).await? {
            Some(person) => Ok(Some(self.mapper.write_pretty(&self.assembler.to_model(person))?)),
            None => Ok(None),
        }
    }

    pub async fn render_page(&self, request: PageRequest) -> Result<String, PersonError> {
        let page = self.service.find_page(request).await?;
        Ok(self.mapper.write_pretty(&self.assembler.to_paged_model(page))?)
    }

    /// Inserts a person from a Siren-style JSON body and renders the result.
    pub async fn insert_json(&self, body: &str) -> Result<String, PersonError> {
        let input: PersonInput = serde_json::from_str(body)
            .map_err(|e| PersonError::ValidationError(e.to_string()))?;
        let person = self.service.insert(input).await?;
        Ok(self.mapper.write_pretty(&self.assembler.to_model(person))?)
    }

    /// Drops the service so the store sees its channel close, then waits for it.
    pub async fn shutdown(self) -> Result<(), PersonError> {
        info!("Shutting down system...");
        drop(self.service);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(PersonError::Shutdown(format!("{e:?}")));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
