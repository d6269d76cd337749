use tests::{assert_empty, assert_none, models, tests, DbTest};

use cinder::{Db, Model};
use pretty_assertions::assert_eq;

#[derive(Debug, PartialEq, Model)]
struct Post {
    #[key]
    blog_id: i64,

    #[key]
    id: i64,

    #[index]
    author_id: String,

    title: String,
}

fn post(id: i64, author_id: &str, title: &str) -> Post {
    Post {
        blog_id: 1,
        id,
        author_id: author_id.to_string(),
        title: title.to_string(),
    }
}

async fn seed(db: &Db) {
    for post in [
        post(2, "A", "second"),
        post(1, "A", "first"),
        post(3, "B", "third"),
    ] {
        db.create(&post).await.unwrap();
    }
}

fn ids(posts: &[Post]) -> Vec<i64> {
    posts.iter().map(|post| post.id).collect()
}

async fn find_all_by_returns_every_match(test: &mut DbTest) {
    let db = test.setup_db(models!(Post)).await;
    seed(&db).await;

    let log = test.log();
    log.clear();

    let posts = Post::find_all_by_author_id(&db, "A").await.unwrap();
    assert_eq!(ids(&posts), [1, 2]);
    assert!(posts.iter().all(|post| post.author_id == "A"));

    // Served by the index, never by scanning the table
    assert!(log.has_find_by_index());
    assert!(!log.has_scan());

    let posts = Post::find_all_by_author_id(&db, "B").await.unwrap();
    assert_eq!(posts, [post(3, "B", "third")]);
}

async fn find_by_returns_first_match(test: &mut DbTest) {
    let db = test.setup_db(models!(Post)).await;
    seed(&db).await;

    let found = Post::find_by_author_id(&db, "A").await.unwrap();
    assert_eq!(found, Some(post(1, "A", "first")));

    let first_of_all = Post::find_all_by_author_id(&db, "A")
        .await
        .unwrap()
        .into_iter()
        .next();
    assert_eq!(found, first_of_all);
}

async fn no_match(test: &mut DbTest) {
    let db = test.setup_db(models!(Post)).await;
    seed(&db).await;

    assert_none!(Post::find_by_author_id(&db, "C").await.unwrap());
    assert_empty!(Post::find_all_by_author_id(&db, "C").await.unwrap());
}

async fn with_is_lazy(test: &mut DbTest) {
    let db = test.setup_db(models!(Post)).await;
    seed(&db).await;

    let log = test.log();
    log.clear();

    let query = Post::with_author_id("A");
    assert!(log.is_empty());
    assert_eq!(query.untyped().restrictions.len(), 1);

    let posts: Vec<Post> = query.clone().collect(&db).await.unwrap();
    assert_eq!(ids(&posts), [1, 2]);
    assert_eq!(log.count(|op| op.is_find_by_index()), 1);

    let first = query.first(&db).await.unwrap();
    assert_eq!(first, Post::find_by_author_id(&db, "A").await.unwrap());
}

async fn with_accepts_owned_and_borrowed(test: &mut DbTest) {
    let db = test.setup_db(models!(Post)).await;
    seed(&db).await;

    let author = String::from("A");

    let borrowed = Post::find_all_by_author_id(&db, &author).await.unwrap();
    let owned = Post::find_all_by_author_id(&db, author.clone()).await.unwrap();
    let literal = Post::find_all_by_author_id(&db, "A").await.unwrap();

    assert_eq!(borrowed, owned);
    assert_eq!(owned, literal);
}

async fn replacing_a_row_moves_it_between_index_entries(test: &mut DbTest) {
    let db = test.setup_db(models!(Post)).await;
    seed(&db).await;

    db.create(&post(1, "B", "reassigned")).await.unwrap();

    let a = Post::find_all_by_author_id(&db, "A").await.unwrap();
    assert_eq!(ids(&a), [2]);

    let b = Post::find_all_by_author_id(&db, "B").await.unwrap();
    assert_eq!(ids(&b), [1, 3]);
    assert_eq!(b[0].title, "reassigned");
}

async fn cursor_streams_rows(test: &mut DbTest) {
    let db = test.setup_db(models!(Post)).await;
    seed(&db).await;

    let mut cursor = Post::with_author_id("A").exec(&db).await.unwrap();

    let mut seen = vec![];
    while let Some(post) = cursor.next().await {
        seen.push(post.unwrap().id);
    }
    assert_eq!(seen, [1, 2]);
}

tests!(
    find_all_by_returns_every_match,
    find_by_returns_first_match,
    no_match,
    with_is_lazy,
    with_accepts_owned_and_borrowed,
    replacing_a_row_moves_it_between_index_entries,
    cursor_streams_rows,
);
