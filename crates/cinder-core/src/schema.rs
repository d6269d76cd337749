pub mod app;

mod builder;
pub use builder::Builder;

mod name;
pub use name::Name;

use crate::Result;
use app::{Model, ModelId};

use indexmap::IndexMap;

/// The frozen set of models known to a database handle.
///
/// Models are declared through [`app::ModelBuilder`] and assembled here by
/// [`Builder`]. Once a `Schema` exists it is never mutated, so the query
/// namespaces it holds can be shared across threads freely.
#[derive(Debug)]
pub struct Schema {
    models: IndexMap<ModelId, Model>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn from_models(models: Vec<Model>) -> Result<Schema> {
        let mut by_id = IndexMap::with_capacity(models.len());

        for model in models {
            for other in by_id.values() {
                verify_distinct(other, &model)?;
            }

            by_id.insert(model.id, model);
        }

        Ok(Schema { models: by_id })
    }

    #[track_caller]
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        let id = id.into();
        self.models
            .get(&id)
            .unwrap_or_else(|| panic!("no model with {id:?} in schema"))
    }

    pub fn get_model(&self, id: impl Into<ModelId>) -> Option<&Model> {
        self.models.get(&id.into())
    }

    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        self.models
            .values()
            .find(|model| model.name.upper_camel_case() == name)
    }

    pub fn models(&self) -> impl ExactSizeIterator<Item = &Model> {
        self.models.values()
    }
}

fn verify_distinct(existing: &Model, model: &Model) -> Result<()> {
    if existing.id == model.id || existing.name == model.name {
        return Err(crate::Error::invalid_schema(format!(
            "model `{}` registered twice",
            model.name.upper_camel_case()
        )));
    }

    if existing.table_name == model.table_name {
        return Err(crate::Error::invalid_schema(format!(
            "models `{}` and `{}` map to the same table `{}`",
            existing.name.upper_camel_case(),
            model.name.upper_camel_case(),
            model.table_name
        )));
    }

    Ok(())
}
