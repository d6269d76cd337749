use tests::{assert_empty, assert_err, models, tests, DbTest};

use cinder::{Db, Found, Model};
use pretty_assertions::assert_eq;

#[derive(Debug, PartialEq, Model)]
struct Post {
    #[key]
    id: i64,

    #[index]
    author_id: String,

    title: String,
}

async fn setup(test: &mut DbTest) -> Db {
    let db = test.setup_db(models!(Post)).await;

    for (id, author_id) in [(1, "A"), (2, "B"), (3, "A")] {
        db.create(&Post {
            id,
            author_id: author_id.to_string(),
            title: format!("post {id}"),
        })
        .await
        .unwrap();
    }

    test.log().clear();
    db
}

async fn call_with_returns_lazy_query(test: &mut DbTest) {
    let db = setup(test).await;

    let found = db.call::<Post>("with_author_id", "A").await.unwrap();
    let select = found.into_select().unwrap();

    // Nothing runs until the query is executed.
    assert!(test.log().is_empty());

    let posts: Vec<Post> = select.collect(&db).await.unwrap();
    let ids: Vec<_> = posts.iter().map(|post| post.id).collect();
    assert_eq!(ids, [1, 3]);
    assert!(test.log().has_find_by_index());
}

async fn call_find_by_returns_first(test: &mut DbTest) {
    let db = setup(test).await;

    let found = db.call::<Post>("find_by_author_id", "B").await.unwrap();
    let post = found.into_first().unwrap().unwrap();
    assert_eq!(post.id, 2);

    let found = db.call::<Post>("find_by_author_id", "C").await.unwrap();
    assert!(matches!(found, Found::First(None)));
}

async fn call_find_all_by_returns_every_match(test: &mut DbTest) {
    let db = setup(test).await;

    let found = db.call::<Post>("find_all_by_author_id", "A").await.unwrap();
    let posts = found.into_all().unwrap();
    assert_eq!(
        posts.iter().map(|post| post.title.as_str()).collect::<Vec<_>>(),
        ["post 1", "post 3"]
    );

    let found = db.call::<Post>("find_all_by_author_id", "C").await.unwrap();
    assert_empty!(found.into_all().unwrap());
}

async fn call_matches_generated_accessors(test: &mut DbTest) {
    let db = setup(test).await;

    let generated = Post::find_all_by_author_id(&db, "A").await.unwrap();
    let dispatched = db
        .call::<Post>("find_all_by_author_id", "A")
        .await
        .unwrap()
        .into_all()
        .unwrap();

    assert_eq!(generated, dispatched);
    assert_eq!(
        Post::with_author_id("A"),
        db.call::<Post>("with_author_id", "A")
            .await
            .unwrap()
            .into_select()
            .unwrap()
    );
}

async fn unknown_accessor(test: &mut DbTest) {
    let db = setup(test).await;

    for name in ["find_by_title", "with_id", "find_all_by_author", "author_id"] {
        let err = assert_err!(db.call::<Post>(name, "A").await);
        assert!(err.is_unknown_accessor(), "{name}: {err}");
    }

    let err = assert_err!(db.call::<Post>("find_by_title", "post 1").await);
    assert_eq!(
        err.to_string(),
        "unknown accessor: `Post` has no accessor named `find_by_title`"
    );
    assert!(test.log().is_empty());
}

async fn wrong_value_type(test: &mut DbTest) {
    let db = setup(test).await;

    let err = assert_err!(db.call::<Post>("find_by_author_id", 7_i64).await);
    assert!(err.is_type_conversion());
    assert!(test.log().is_empty());
}

tests!(
    call_with_returns_lazy_query,
    call_find_by_returns_first,
    call_find_all_by_returns_every_match,
    call_matches_generated_accessors,
    unknown_accessor,
    wrong_value_type,
);
