use dbx::daos;

daos! {
    impl user_db;

    #[dao]
    pub trait UserDao {
        #[query("SELECT id FROM users ORDER BY id")]
        fn get_user_ids(&self) -> Vec<i32>;
    }
}

pub fn test() {
    let handle = super::super::database(
        "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT);
         INSERT INTO users VALUES (1, 'ada'), (2, 'brian'), (3, 'grace');",
    );

    let dao = dbx::discover![user_db]
        .resolve::<dyn user_db::UserDao>(&handle)
        .unwrap();
    assert_eq!(dao.get_user_ids(), vec![1, 2, 3]);

    let direct = user_db::UserDaoImpl::new(handle.clone());
    assert_eq!(user_db::UserDao::get_user_ids(&direct), vec![1, 2, 3]);
}
