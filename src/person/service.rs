//! # Person Service
//!
//! Domain operations on persons, backed by a [`StoreClient<Person>`]. A missing person is a
//! normal outcome here (`None`/`false`), not an error.

use crate::person::error::PersonError;
use crate::person::model::{Page, PageRequest, Person, PersonInput};
use crate::store::{StoreClient, StoreError};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct PersonService {
    client: StoreClient<Person>,
}

impl PersonService {
    pub fn new(client: StoreClient<Person>) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Person>, PersonError> {
        let persons = self.client.list().await?;
        debug!(count = persons.len(), "Found persons");
        Ok(persons)
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: u64) -> Result<Option<Person>, PersonError> {
        Ok(self.client.get(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn insert(&self, input: PersonInput) -> Result<Person, PersonError> {
        let person = self.client.create(input).await?;
        debug!(id = person.id, "Inserted person");
        Ok(person)
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: u64, input: PersonInput) -> Result<Option<Person>, PersonError> {
        match self.client.update(id, input).await {
            Ok(person) => Ok(Some(person)),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: u64) -> Result<bool, PersonError> {
        match self.client.delete(id).await {
            Ok(()) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Persons in id order, sliced to the requested page. A page past the end is empty.
    #[instrument(skip(self))]
    pub async fn find_page(&self, request: PageRequest) -> Result<Page<Person>, PersonError> {
        if request.size == 0 {
            return Err(PersonError::ValidationError("page size must be positive".into()));
        }

        let persons = self.client.list().await?;
        let total_elements = persons.len() as u64;
        let offset = request.number.saturating_mul(request.size);
        let content = persons
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(request.size).unwrap_or(usize::MAX))
            .collect();

        Ok(Page {
            content,
            request,
            total_elements,
        })
    }
}
