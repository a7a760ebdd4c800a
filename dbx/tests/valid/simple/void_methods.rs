use dbx::{daos, Dao};

daos! {
    impl log_db;

    #[dao]
    pub trait LogDao {
        #[query("CREATE TABLE log (line TEXT)")]
        fn create(&self);

        #[query("INSERT INTO log VALUES (?)")]
        fn write(&self, line: &str) -> ();

        #[query("SELECT line FROM log WHERE line = 'never'")]
        fn select_nothing(&self);

        #[query("SELECT line FROM log")]
        fn select_all_discarded(&self);

        #[query("DELETE FROM log")]
        fn clear(&mut self);
    }
}

pub fn test() {
    let handle = super::super::database("");
    let mut log = log_db::LogDaoImpl::new(handle.clone());
    use log_db::LogDao;

    log.create();
    log.write("first");
    log.write("second");
    log.select_nothing();
    log.select_all_discarded();

    let count = |handle: &dbx::Handle| -> i64 {
        handle
            .query_row("SELECT count(*) FROM log", [], |row| row.get(0))
            .unwrap()
    };
    assert_eq!(count(log.handle()), 2);
    log.clear();
    assert_eq!(count(&handle), 0);
}
