use dbx::daos;
use std::collections::{BTreeSet, HashSet, VecDeque};

daos! {
    impl empty_db;

    #[dao]
    pub trait NothingDao {
        #[query("SELECT id FROM empty_rows")]
        fn list(&self) -> Vec<i32>;
        #[query("SELECT id FROM empty_rows")]
        fn deque(&self) -> VecDeque<i16>;
        #[query("SELECT name FROM empty_rows")]
        fn hashed(&self) -> HashSet<String>;
        #[query("SELECT id FROM empty_rows")]
        fn ordered(&self) -> BTreeSet<i64>;
        #[query("SELECT id FROM empty_rows")]
        fn values(&self) -> Vec<dbx::Value>;
    }
}

pub fn test() {
    let handle = super::super::database("CREATE TABLE empty_rows (id INTEGER, name TEXT);");
    let dao = empty_db::NothingDaoImpl::new(handle);
    use empty_db::NothingDao;

    assert!(dao.list().is_empty());
    assert!(dao.deque().is_empty());
    assert!(dao.hashed().is_empty());
    assert!(dao.ordered().is_empty());
    assert!(dao.values().is_empty());
}
