use dbx::{daos, discover};

daos! {
    impl shop_db { pub = on };

    #[dao]
    pub trait CustomerDao {
        #[query("SELECT name FROM customers ORDER BY id")]
        fn names(&self) -> Vec<String>;
    }

    #[dao]
    pub trait OrderDao {
        #[query("SELECT count(*) FROM orders")]
        fn count(&self) -> i64;
    }
}

pub fn test() {
    let handle = super::super::database(
        "CREATE TABLE customers (id INTEGER, name TEXT);
         CREATE TABLE orders (id INTEGER);
         INSERT INTO customers VALUES (1, 'zed'), (2, 'amy');
         INSERT INTO orders VALUES (1), (2), (3);",
    );
    let resolver = discover![shop_db];

    let customers = resolver
        .resolve::<dyn shop_db::CustomerDao>(&handle)
        .unwrap();
    assert_eq!(customers.names(), vec!["zed", "amy"]);

    let orders = resolver.resolve::<dyn shop_db::OrderDao>(&handle).unwrap();
    assert_eq!(orders.count(), 3);

    let manifest = shop_db::MANIFEST;
    assert_eq!(manifest.name, "shop_db");
    assert_eq!(manifest.registry.name(), "shop_db");
    assert_eq!(manifest.registry.interfaces(), &["CustomerDao", "OrderDao"]);
}
