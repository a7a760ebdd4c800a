use dbx::daos;

daos! {
    impl accounts_db;

    #[dao]
    pub trait AccountDao {
        #[query("INSERT INTO accounts (owner, balance, frozen, tier) VALUES (?, ?, ?, ?)")]
        fn open(&mut self, owner: &str, balance: f64, frozen: bool, tier: i16);

        #[query("SELECT owner FROM accounts WHERE balance >= ? AND frozen = ? ORDER BY owner")]
        fn owners_with(&self, minimum: f64, frozen: bool) -> Vec<String>;

        #[query("SELECT balance FROM accounts WHERE owner = ?")]
        fn balance(&self, owner: String) -> f64;

        /// Positions follow declaration order, not the order names appear in the query.
        #[query("SELECT ?2 - ?1")]
        fn difference(&self, subtract: i64, from: i64) -> i64;
    }
}

pub fn test() {
    let handle = super::super::database(
        "CREATE TABLE accounts (owner TEXT, balance REAL, frozen INTEGER, tier INTEGER);",
    );
    let mut accounts = accounts_db::AccountDaoImpl::new(handle);
    use accounts_db::AccountDao;

    accounts.open("carol", 120.0, false, 1);
    accounts.open("alice", 80.5, false, 2);
    accounts.open("bob", 300.0, true, 1);

    assert_eq!(accounts.owners_with(50.0, false), vec!["alice", "carol"]);
    assert_eq!(accounts.owners_with(50.0, true), vec!["bob"]);
    assert_eq!(accounts.balance("alice".to_owned()), 80.5);
    assert_eq!(accounts.difference(3, 10), 7);
}
