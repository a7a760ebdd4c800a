use dbx::{daos, Dao};

daos! {
    impl counter_db;

    /// Counters, kept in the `counters` table.
    #[dao]
    pub trait CounterDao {
        /// Increment a counter, creating it at 1.
        #[query("INSERT INTO counters VALUES (?, 1) ON CONFLICT(name) DO UPDATE SET value = value + 1")]
        fn bump(&mut self, name: &str);

        #[query("SELECT value FROM counters WHERE name = ?")]
        fn value(&self, name: &str) -> i64;

        fn bump_twice(&mut self, name: &str) -> i64 {
            self.bump(name);
            self.bump(name);
            self.value(name)
        }
    }
}

pub fn test() {
    let handle = super::super::database(
        "CREATE TABLE counters (name TEXT PRIMARY KEY, value INTEGER);",
    );
    let mut counters = counter_db::CounterDaoImpl::new(handle.clone());
    use counter_db::CounterDao;

    counters.bump("visits");
    assert_eq!(counters.value("visits"), 1);
    assert_eq!(counters.bump_twice("visits"), 3);

    let mut resolved = dbx::discover![counter_db]
        .resolve::<dyn CounterDao>(&handle)
        .unwrap();
    assert_eq!(resolved.bump_twice("other"), 2);

    assert_eq!(
        counters
            .handle()
            .query_row("SELECT count(*) FROM counters", [], |row| row.get::<_, i64>(0))
            .unwrap(),
        2
    );
}
