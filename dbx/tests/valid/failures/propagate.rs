use dbx::{daos, ExecutionError};

#[derive(Debug)]
pub enum InventoryError {
    Database(ExecutionError),
}

impl From<ExecutionError> for InventoryError {
    fn from(err: ExecutionError) -> Self {
        InventoryError::Database(err)
    }
}

daos! {
    impl inventory_db;

    #[dao]
    pub trait InventoryDao {
        #[query("SELECT quantity FROM stock WHERE item = ?")]
        fn quantity(&self, item: &str) -> Result<i32, InventoryError>;

        #[query("SELECT item FROM stock ORDER BY item")]
        fn items(&self) -> dbx::Result<Vec<String>>;

        #[query("UPDATE stock SET quantity = ? WHERE item = ?")]
        fn set_quantity(&mut self, quantity: i32, item: &str) -> dbx::Result<()>;

        #[query("SELECT missing_column FROM stock")]
        fn broken(&self) -> dbx::Result<i32>;

        #[query("SELECT item FROM stock")]
        fn as_numbers(&self) -> dbx::Result<Vec<i64>>;
    }
}

pub fn test() {
    let handle = super::super::database(
        "CREATE TABLE stock (item TEXT, quantity INTEGER);
         INSERT INTO stock VALUES ('bolt', 40), ('nut', 12);",
    );
    let mut inventory = inventory_db::InventoryDaoImpl::new(handle);
    use inventory_db::InventoryDao;

    assert_eq!(inventory.quantity("nut").unwrap(), 12);
    assert_eq!(inventory.items().unwrap(), vec!["bolt", "nut"]);
    inventory.set_quantity(13, "nut").unwrap();
    assert_eq!(inventory.quantity("nut").unwrap(), 13);

    assert!(matches!(
        inventory.quantity("washer"),
        Err(InventoryError::Database(ExecutionError::Sqlite(
            dbx::dependencies::rusqlite::Error::QueryReturnedNoRows
        )))
    ));
    assert!(matches!(inventory.broken(), Err(ExecutionError::Sqlite(_))));
    assert!(matches!(
        inventory.as_numbers(),
        Err(ExecutionError::Extraction { column: 1, .. })
    ));
}
