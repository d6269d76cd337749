use cinder_core::{
    driver::{operation, Operation},
    schema::app::Model,
    stmt::{Query, ValueRecord},
};

/// Translate a verified query into the driver operation that serves it.
pub(super) fn query(model: &Model, query: &Query) -> Operation {
    if query.is_unrestricted() {
        return operation::Scan {
            model: model.id,
            limit: query.limit,
        }
        .into();
    }

    if let Some(restriction) = query
        .restrictions
        .iter()
        .find(|restriction| model.is_indexed(restriction.field))
    {
        return operation::FindByIndex {
            model: model.id,
            field: restriction.field,
            value: restriction.value.clone(),
            limit: query.limit,
        }
        .into();
    }

    let key = model
        .primary_key
        .fields
        .iter()
        .map(|field| {
            query
                .restriction(*field)
                .map(|restriction| restriction.value.clone())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>();

    operation::QueryPk {
        model: model.id,
        key: ValueRecord::from_vec(key),
    }
    .into()
}
