use tests::{assert_err, models, tests, DbTest};

use cinder::{schema::app::FieldId, stmt::Value, Db, Model, Select};
use pretty_assertions::assert_eq;

#[derive(Debug, PartialEq, Model)]
struct Post {
    #[key]
    blog_id: i64,

    #[key]
    id: i64,

    #[index]
    author_id: String,

    #[index]
    category: Option<String>,

    title: String,
}

#[derive(Debug, Model)]
struct Author {
    #[key]
    id: String,
}

fn field(db: &Db, name: &str) -> FieldId {
    db.schema()
        .model(Post::id())
        .field_by_name(name)
        .unwrap()
        .id
}

async fn setup(test: &mut DbTest) -> Db {
    let db = test.setup_db(models!(Post)).await;

    for (id, author_id, category) in [(1, "A", Some("rust")), (2, "A", None), (3, "B", Some("rust"))] {
        db.create(&Post {
            blog_id: 1,
            id,
            author_id: author_id.to_string(),
            category: category.map(str::to_string),
            title: format!("post {id}"),
        })
        .await
        .unwrap();
    }

    test.log().clear();
    db
}

async fn two_secondary_restrictions(test: &mut DbTest) {
    let db = setup(test).await;

    // Building the query is fine; running it is not.
    let query = Post::with_author_id("A").restrict(field(&db, "category"), "rust");
    let err = assert_err!(query.collect::<Vec<_>>(&db).await);

    assert!(err.is_unsupported_query());
    assert_eq!(
        err.to_string(),
        "unsupported query: cannot combine restrictions on secondary indexes `author_id` and `category`"
    );
    assert!(test.log().is_empty());
}

async fn secondary_with_key_restriction(test: &mut DbTest) {
    let db = setup(test).await;

    let query = Post::with_author_id("A")
        .restrict(field(&db, "blog_id"), 1_i64)
        .restrict(field(&db, "id"), 1_i64);
    let err = assert_err!(query.first(&db).await);

    assert!(err.is_unsupported_query());
    assert!(test.log().is_empty());
}

async fn unindexed_column(test: &mut DbTest) {
    let db = setup(test).await;

    let query = Post::all().restrict(field(&db, "title"), "post 1");
    let err = assert_err!(query.first(&db).await);

    assert_eq!(
        err.to_string(),
        "unsupported query: column `title` is neither a key column nor secondary indexed"
    );
}

async fn field_of_another_model(test: &mut DbTest) {
    let db = setup(test).await;

    // Building the query never panics; it fails once it runs.
    let query = Post::all().restrict(Author::id().field(0), "A");
    let err = assert_err!(query.collect::<Vec<_>>(&db).await);

    assert!(err.is_unsupported_query());
    assert!(err.to_string().ends_with("is not a column of `Post`"));
    assert!(test.log().is_empty());
}

async fn partial_key(test: &mut DbTest) {
    let db = setup(test).await;

    let query = Post::all().restrict(field(&db, "blog_id"), 1_i64);
    let err = assert_err!(query.collect::<Vec<_>>(&db).await);

    assert!(err.is_unsupported_query());
}

async fn null_restriction(test: &mut DbTest) {
    let db = setup(test).await;

    let err = assert_err!(Post::find_all_by_category(&db, None::<String>).await);
    assert_eq!(
        err.to_string(),
        "unsupported query: cannot restrict column `category` to null"
    );
}

async fn mistyped_restriction(test: &mut DbTest) {
    let db = setup(test).await;

    let query = Select::<Post>::all().restrict(field(&db, "author_id"), Value::I64(5));
    let err = assert_err!(query.first(&db).await);

    assert!(err.is_type_conversion());
}

async fn full_key_is_served_by_key_lookup(test: &mut DbTest) {
    let db = setup(test).await;

    let post = Post::all()
        .restrict(field(&db, "id"), 3_i64)
        .restrict(field(&db, "blog_id"), 1_i64)
        .get(&db)
        .await
        .unwrap();

    assert_eq!(post.author_id, "B");
    assert!(test.log().has_query_pk());
    assert!(!test.log().has_find_by_index());
}

async fn unrestricted_scan(test: &mut DbTest) {
    let db = setup(test).await;

    let posts: Vec<Post> = Post::all().collect(&db).await.unwrap();
    let ids: Vec<_> = posts.iter().map(|post| post.id).collect();
    assert_eq!(ids, [1, 2, 3]);
    assert!(test.log().has_scan());

    let limited: Vec<Post> = Post::all().limit(2).collect(&db).await.unwrap();
    assert_eq!(limited.len(), 2);
}

async fn nullable_index_skips_missing_values(test: &mut DbTest) {
    let db = setup(test).await;

    let rust = Post::find_all_by_category(&db, "rust").await.unwrap();
    let ids: Vec<_> = rust.iter().map(|post| post.id).collect();
    assert_eq!(ids, [1, 3]);

    let limited = Post::with_category("rust")
        .limit(1)
        .collect::<Vec<_>>(&db)
        .await
        .unwrap();
    assert_eq!(limited.len(), 1);
}

async fn get_without_match(test: &mut DbTest) {
    let db = setup(test).await;

    let err = assert_err!(Post::with_author_id("C").get(&db).await);
    assert!(err.is_record_not_found());
}

tests!(
    two_secondary_restrictions,
    secondary_with_key_restriction,
    unindexed_column,
    field_of_another_model,
    partial_key,
    null_restriction,
    mistyped_restriction,
    full_key_is_served_by_key_lookup,
    unrestricted_scan,
    nullable_index_skips_missing_values,
    get_without_match,
);
