use crate::Result;
use cinder_core::{
    schema::app::{Field, Model},
    stmt::{Query, Value, ValueRecord},
    Error,
};

/// Check that the store can serve `query`.
///
/// A query may restrict either one secondary-indexed column or every key
/// column, never both. Restricting the same column twice, restricting a
/// column that is neither keyed nor indexed, or restricting to null are
/// unsupported.
pub(super) fn query(model: &Model, query: &Query) -> Result<()> {
    let mut indexed: Option<&Field> = None;
    let mut keys = 0;

    for (i, restriction) in query.restrictions.iter().enumerate() {
        let Some(field) = model.get_field(restriction.field) else {
            return Err(Error::unsupported_query(format!(
                "{:?} is not a column of `{}`",
                restriction.field,
                model.name.upper_camel_case()
            )));
        };
        let column = &field.name.app_name;

        if query.restrictions[..i]
            .iter()
            .any(|prev| prev.field == restriction.field)
        {
            return Err(Error::unsupported_query(format!(
                "column `{column}` is restricted more than once"
            )));
        }

        restriction_value(field, &restriction.value)?;

        if model.is_key(field.id) {
            keys += 1;
        } else if model.is_indexed(field.id) {
            if let Some(prev) = indexed {
                return Err(Error::unsupported_query(format!(
                    "cannot combine restrictions on secondary indexes `{}` and `{column}`",
                    prev.name.app_name
                )));
            }

            indexed = Some(field);
        } else {
            return Err(Error::unsupported_query(format!(
                "column `{column}` is neither a key column nor secondary indexed"
            )));
        }
    }

    match indexed {
        Some(field) if keys > 0 => Err(Error::unsupported_query(format!(
            "cannot combine a restriction on secondary index `{}` with key restrictions",
            field.name.app_name
        ))),
        None if keys > 0 && keys < model.primary_key.len() => {
            Err(Error::unsupported_query(format!(
                "key restrictions must cover every key column of `{}`; found {keys} of {}",
                model.name.upper_camel_case(),
                model.primary_key.len()
            )))
        }
        _ => Ok(()),
    }
}

/// Check that `row` can be stored as a row of `model`.
pub(super) fn row(model: &Model, row: &ValueRecord) -> Result<()> {
    if row.len() != model.fields.len() {
        cinder_core::bail!(
            "`{}` rows have {} columns; got {}",
            model.name.upper_camel_case(),
            model.fields.len(),
            row.len()
        );
    }

    for (field, value) in model.fields.iter().zip(row.iter()) {
        if value.is_null() {
            if field.primary_key || !field.nullable() {
                cinder_core::bail!("column `{}` cannot be null", field.name.app_name);
            }
        } else if !value.is_a(&field.ty()) {
            return Err(Error::type_conversion(value.clone(), field.ty().name())
                .context(cinder_core::err!("column `{}`", field.name.app_name)));
        }
    }

    Ok(())
}

fn restriction_value(field: &Field, value: &Value) -> Result<()> {
    if value.is_null() {
        return Err(Error::unsupported_query(format!(
            "cannot restrict column `{}` to null",
            field.name.app_name
        )));
    }

    if !value.is_a(&field.ty()) {
        return Err(Error::type_conversion(value.clone(), field.ty().name())
            .context(cinder_core::err!("restriction on `{}`", field.name.app_name)));
    }

    Ok(())
}
