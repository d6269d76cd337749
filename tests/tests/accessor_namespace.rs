use tests::{assert_unique, models, tests, DbTest};

use cinder::{
    generate_unique_id,
    schema::app::{self, AccessorKind, ColumnOptions, ColumnType, ModelBuilder, ModelId},
    stmt::{Primitive, ValueRecord},
    Found, Model,
};
use pretty_assertions::assert_eq;
use std::sync::OnceLock;

#[derive(Debug, Model)]
struct Post {
    #[key]
    id: i64,

    #[index]
    author_id: String,

    #[index]
    category: Option<String>,

    title: String,
}

/// Declared by hand, re-opening `label` the way a model definition that is
/// loaded more than once would.
#[derive(Debug, PartialEq)]
struct Tag {
    id: i64,
    label: String,
}

impl Model for Tag {
    fn id() -> ModelId {
        static ID: OnceLock<ModelId> = OnceLock::new();
        *ID.get_or_init(generate_unique_id)
    }

    fn schema() -> cinder::Result<app::Model> {
        let mut builder = ModelBuilder::new(Self::id(), "Tag");
        builder.key("id", ColumnType::BigInt)?;
        builder.column("label", ColumnType::Text, ColumnOptions::default())?;
        builder.column("label", ColumnType::Text, ColumnOptions::indexed())?;
        builder.column("label", ColumnType::Text, ColumnOptions::indexed())?;
        builder.build()
    }

    fn load(mut row: ValueRecord) -> cinder::Result<Self> {
        Ok(Tag {
            id: i64::load(row[0].take())?,
            label: String::load(row[1].take())?,
        })
    }

    fn store(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![self.id.into(), self.label.as_str().into()])
    }
}

/// Re-declares a column with a different type.
#[derive(Debug)]
struct Broken;

impl Model for Broken {
    fn id() -> ModelId {
        static ID: OnceLock<ModelId> = OnceLock::new();
        *ID.get_or_init(generate_unique_id)
    }

    fn schema() -> cinder::Result<app::Model> {
        let mut builder = ModelBuilder::new(Self::id(), "Broken");
        builder.key("id", ColumnType::BigInt)?;
        builder.column("label", ColumnType::Text, ColumnOptions::default())?;
        builder.column("label", ColumnType::Uuid, ColumnOptions::indexed())?;
        builder.build()
    }

    fn load(_row: ValueRecord) -> cinder::Result<Self> {
        Ok(Broken)
    }

    fn store(&self) -> ValueRecord {
        ValueRecord::default()
    }
}

async fn three_accessors_per_indexed_column(test: &mut DbTest) {
    let db = test.setup_db(models!(Post)).await;
    let model = db.schema().model(Post::id());

    let names: Vec<_> = model.accessors.names().collect();
    assert_unique!(names);
    assert_eq!(
        names,
        [
            "with_author_id",
            "find_by_author_id",
            "find_all_by_author_id",
            "with_category",
            "find_by_category",
            "find_all_by_category",
        ]
    );

    let author_id = model.field_by_name("author_id").unwrap().id;
    for kind in AccessorKind::ALL {
        let accessor = model.accessors.for_field(author_id, kind).unwrap();
        assert_eq!(accessor.name, kind.name_for("author_id"));
        assert_eq!(accessor.field, author_id);
    }

    assert_eq!(model.indexed.len(), 2);
}

async fn unindexed_columns_have_no_accessors(test: &mut DbTest) {
    let db = test.setup_db(models!(Post)).await;
    let model = db.schema().model(Post::id());

    for column in ["id", "title"] {
        for kind in AccessorKind::ALL {
            assert!(model.accessor(&kind.name_for(column)).is_none());
        }
    }

    let title = model.field_by_name("title").unwrap();
    assert!(!title.options.index);
    assert!(!model.is_indexed(title.id));
}

async fn redeclared_column_is_synthesized_once(test: &mut DbTest) {
    let db = test.setup_db(models!(Tag)).await;
    let model = db.schema().model(Tag::id());

    assert_eq!(model.fields.len(), 2);
    assert_eq!(model.accessors.len(), 3);
    assert!(model.accessor("find_all_by_label").is_some());

    db.create(&Tag {
        id: 1,
        label: "rust".to_string(),
    })
    .await
    .unwrap();

    let Found::All(tags) = db.call::<Tag>("find_all_by_label", "rust").await.unwrap() else {
        panic!("expected rows")
    };
    assert_eq!(
        tags,
        [Tag {
            id: 1,
            label: "rust".to_string()
        }]
    );
}

async fn conflicting_redeclaration_fails_registration(test: &mut DbTest) {
    let err = test.try_setup_db(models!(Broken)).await.unwrap_err();

    assert!(err.is_invalid_schema());
    assert!(err.to_string().ends_with(
        "invalid schema: column `label` redeclared as uuid; previously declared as text"
    ));
}

tests!(
    three_accessors_per_indexed_column,
    unindexed_columns_have_no_accessors,
    redeclared_column_is_synthesized_once,
    conflicting_redeclaration_fails_registration,
);
