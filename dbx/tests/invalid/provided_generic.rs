use dbx::daos;

daos! {
    impl helpers_db;

    #[dao]
    pub trait HelperDao {
        #[query("SELECT 1")]
        fn one(&self) -> i32;

        fn scaled<T>(&self, by: T) -> i32 {
            self.one()
        }
    }
}

fn main() {}
