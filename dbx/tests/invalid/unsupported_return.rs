use dbx::daos;

daos! {
    impl users_db;

    #[dao]
    pub trait UserDao {
        #[query("SELECT id FROM users")]
        fn ids(&self) -> Vec<i32>;
    }

    #[dao]
    pub trait AccountDao {
        #[query("SELECT balance FROM accounts")]
        fn balance(&self) -> u64;
    }
}

fn main() {}
