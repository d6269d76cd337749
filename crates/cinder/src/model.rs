use crate::{stmt::Primitive, Error, Result};
use cinder_core::{
    schema::app::{self, ColumnType, ModelId},
    stmt,
};

/// Generate a unique model ID at runtime.
///
/// This function uses a global atomic counter to ensure each call returns
/// a unique ModelId. IDs start at 0 and increment with each call.
/// This is thread-safe and can be called concurrently.
pub fn generate_unique_id() -> ModelId {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT_MODEL_ID: AtomicUsize = AtomicUsize::new(0);

    let id = NEXT_MODEL_ID.fetch_add(1, Ordering::Relaxed);
    ModelId(id)
}

pub trait Model: Sized + Send + 'static {
    /// Unique identifier for this model.
    ///
    /// Identifiers are stable for the lifetime of the process.
    fn id() -> ModelId;

    /// Declare the model's columns.
    ///
    /// Every column is declared through [`app::ModelBuilder::column`], so
    /// indexed columns get their query accessors bound as they are declared.
    fn schema() -> Result<app::Model>;

    /// Load an instance of the model, populating fields using the given row.
    fn load(row: stmt::ValueRecord) -> Result<Self>;

    /// The row representation of this instance, one value per field in
    /// declaration order.
    fn store(&self) -> stmt::ValueRecord;
}

/// Resolve the column type for a field of Rust type `T`.
///
/// Without an explicit declaration the column type follows from `T`. An
/// explicit column type must hold values of `T`.
#[doc(hidden)]
pub fn column_type<T: Primitive>(column: &str, declared: Option<ColumnType>) -> Result<ColumnType> {
    let Some(declared) = declared else {
        return Ok(ColumnType::default_for(T::TYPE));
    };

    if declared.ty() != T::TYPE {
        return Err(Error::invalid_schema(format!(
            "column `{column}` is declared as {declared} but holds {:?} values",
            T::TYPE
        )));
    }

    Ok(declared)
}

/// Take the value at `index` out of `row` and load it as a `T`.
#[doc(hidden)]
pub fn load_field<T: Primitive>(
    row: &mut stmt::ValueRecord,
    index: usize,
    column: &str,
) -> Result<T> {
    let value = match row.get_mut(index) {
        Some(value) => value.take(),
        None => {
            return Err(cinder_core::err!(
                "row has {} values; expected a value for column `{column}` at {index}",
                row.len()
            ))
        }
    };

    T::load(value).map_err(|err| err.context(cinder_core::err!("loading column `{column}`")))
}
