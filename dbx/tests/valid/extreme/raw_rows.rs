use dbx::{daos, ResultSet, ResultSource, Value};

daos! {
    impl report_db;

    #[dao]
    pub trait ReportDao {
        #[query("SELECT region, total, note FROM sales WHERE total > ? ORDER BY total DESC")]
        fn above(&self, total: f64) -> ResultSet;

        #[query("SELECT region FROM sales WHERE region = 'none'")]
        fn none(&self) -> dbx::Result<ResultSet>;
    }
}

pub fn test() {
    let handle = super::super::database(
        "CREATE TABLE sales (region TEXT, total REAL, note TEXT);
         INSERT INTO sales VALUES ('north', 10.5, NULL), ('south', 99.0, 'record'), ('east', 50.0, NULL);",
    );
    let reports = report_db::ReportDaoImpl::new(handle);
    use report_db::ReportDao;

    let mut rows = reports.above(20.0);
    assert_eq!(rows.remaining(), 2);

    assert!(rows.advance().unwrap());
    assert_eq!(rows.get_string(1).unwrap(), "south");
    assert_eq!(rows.get_f64(2).unwrap(), 99.0);
    assert_eq!(rows.get_value(3).unwrap(), Value::Text("record".to_owned()));

    assert!(rows.advance().unwrap());
    assert_eq!(rows.get::<String>(1).unwrap(), "east");
    assert_eq!(rows.get::<Option<String>>(3).unwrap(), None);

    assert!(!rows.advance().unwrap());

    let mut none = reports.none().unwrap();
    assert_eq!(none.remaining(), 0);
    assert!(!none.advance().unwrap());
}
