use dbx::{daos, discover, ResolutionError, Resolver};

daos! {
    impl known_db;

    #[dao]
    pub trait A {
        #[query("SELECT 'a'")]
        fn name(&self) -> String;
    }

    #[dao]
    pub trait B {
        #[query("SELECT 'b'")]
        fn name(&self) -> String;
    }
}

pub trait C {
    fn name(&self) -> String;
}

pub fn test() {
    let handle = super::super::database("");
    let resolver = discover![known_db];

    assert_eq!(resolver.resolve::<dyn known_db::A>(&handle).unwrap().name(), "a");
    assert_eq!(resolver.resolve::<dyn known_db::B>(&handle).unwrap().name(), "b");

    match resolver.resolve::<dyn C>(&handle) {
        Err(ResolutionError::NotFound { interface }) => assert!(interface.contains("C")),
        Ok(_) => panic!("C has no generated implementation"),
    }

    let empty = Resolver::default();
    assert!(empty.resolve::<dyn known_db::A>(&handle).is_err());
}
