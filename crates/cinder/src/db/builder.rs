use super::{connect, Db};
use crate::{engine::Engine, Model, Result};

use cinder_core::{
    driver::Driver,
    schema::{self, app},
};

use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    /// Registered models, declared when the database is built
    models: Vec<Registration>,

    /// Schema builder
    core: schema::Builder,
}

struct Registration {
    name: &'static str,
    schema: fn() -> Result<app::Model>,
}

impl Builder {
    pub fn register<T: Model>(&mut self) -> &mut Self {
        self.models.push(Registration {
            name: std::any::type_name::<T>(),
            schema: T::schema,
        });
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.core.table_name_prefix(prefix);
        self
    }

    /// Declare every registered model and assemble the schema.
    pub fn build_schema(&mut self) -> Result<schema::Schema> {
        for registration in &self.models {
            let model = (registration.schema)().map_err(|err| {
                err.context(cinder_core::err!("failed to register `{}`", registration.name))
            })?;
            self.core.model(model);
        }

        self.core.build()
    }

    /// Build a database handle backed by the driver named by `url`.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        let driver = connect::driver_for(url)?;
        self.build_boxed(driver).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        self.build_boxed(Box::new(driver)).await
    }

    async fn build_boxed(&mut self, mut driver: Box<dyn Driver>) -> Result<Db> {
        let schema = self.build_schema()?;

        driver.register_schema(&schema).await?;

        Ok(Db {
            engine: Engine::new(Arc::new(schema), Arc::from(driver)),
        })
    }
}
