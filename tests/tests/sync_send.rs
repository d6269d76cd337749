use cinder::{Db, Model};

#[derive(Debug, Model)]
struct Post {
    #[key]
    id: i64,

    #[index]
    author_id: String,
}

fn assert_send<T: Send>(_: T) {}

fn assert_sync_send<T: Sync + Send>() {}

#[test]
fn db_is_sync_send() {
    assert_sync_send::<Db>();
    assert_sync_send::<cinder::Select<Post>>();
}

#[allow(dead_code)]
fn accessor_futures_are_send(db: &Db) {
    assert_send(Post::find_by_author_id(db, "A"));
    assert_send(Post::find_all_by_author_id(db, "A"));
    assert_send(Post::with_author_id("A").first(db));
    assert_send(db.call::<Post>("find_by_author_id", "A"));
    assert_send(db.all(Post::all()));
}
