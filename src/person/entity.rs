//! [`StoredEntity`] implementation for [`Person`].

use crate::person::error::PersonError;
use crate::person::model::{Person, PersonInput};
use crate::store::StoredEntity;
use async_trait::async_trait;

fn validate(input: &PersonInput) -> Result<(), PersonError> {
    if input.name.trim().is_empty() {
        return Err(PersonError::ValidationError("name must not be blank".into()));
    }
    Ok(())
}

#[async_trait]
impl StoredEntity for Person {
    type Id = u64;
    type Create = PersonInput;
    type Update = PersonInput;
    type Error = PersonError;

    fn from_create_params(id: u64, params: PersonInput) -> Result<Self, PersonError> {
        validate(&params)?;
        Ok(Self {
            id,
            name: params.name,
            age: params.age,
        })
    }

    /// Replaces name and age; the id never changes.
    async fn on_update(&mut self, update: PersonInput) -> Result<(), PersonError> {
        validate(&update)?;
        self.name = update.name;
        self.age = update.age;
        Ok(())
    }
}
