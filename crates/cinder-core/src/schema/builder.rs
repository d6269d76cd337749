use super::{app, Schema};
use crate::Result;

use tracing::debug;

/// Assembles declared models into a [`Schema`].
#[derive(Debug, Default)]
pub struct Builder {
    models: Vec<app::Model>,

    /// Prepended to every table name
    table_name_prefix: Option<String>,
}

impl Builder {
    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn model(&mut self, model: app::Model) -> &mut Self {
        self.models.push(model);
        self
    }

    pub fn build(&mut self) -> Result<Schema> {
        let mut models = std::mem::take(&mut self.models);

        if let Some(prefix) = &self.table_name_prefix {
            for model in &mut models {
                model.table_name = format!("{prefix}{}", model.table_name);
            }
        }

        for model in &models {
            debug!(
                model = %model.name.upper_camel_case(),
                table = %model.table_name,
                indexed = model.indexed.len(),
                accessors = model.accessors.len(),
                "registered model"
            );
        }

        Schema::from_models(models)
    }
}
