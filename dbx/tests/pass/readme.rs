use dbx::{daos, discover, Handle};

daos! {
    impl user_db;

    #[dao]
    pub trait UserDao {
        #[query("SELECT id FROM users ORDER BY id")]
        fn get_user_ids(&self) -> Vec<i32>;

        #[query("SELECT name FROM users WHERE id = ?")]
        fn name_of(&self, id: i64) -> dbx::Result<String>;

        #[query("INSERT INTO users (id, name) VALUES (?, ?)")]
        fn add(&mut self, id: i64, name: &str);
    }
}

fn main() {
    let handle = Handle::open_in_memory().unwrap();
    handle
        .execute_batch("CREATE TABLE users (id INTEGER, name TEXT)")
        .unwrap();

    let resolver = discover![user_db];
    let mut users = resolver.resolve::<dyn user_db::UserDao>(&handle).unwrap();
    users.add(2, "grace");
    users.add(1, "ada");
    assert_eq!(users.get_user_ids(), vec![1, 2]);
    assert_eq!(users.name_of(2).unwrap(), "grace");
    assert!(users.name_of(3).is_err());
}
