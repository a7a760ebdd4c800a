use dbx::daos;

daos! {
    impl orders_db;

    #[dao]
    pub trait OrderDao {
        #[query("SELECT count(*) FROM orders")]
        fn count(&self) -> i64;

        fn total(&self) -> f64;
    }
}

fn main() {}
