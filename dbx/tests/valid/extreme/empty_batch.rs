use dbx::daos;

daos! {
    impl nothing_db;
}

daos! {
    impl helpers_db { pub = off };

    pub fn double(x: i32) -> i32 {
        x * 2
    }

    #[derive(Debug, PartialEq)]
    pub struct Point {
        pub x: i32,
        pub y: i32,
    }
}

pub fn test() {
    let handle = super::super::database("");

    assert_eq!(nothing_db::MANIFEST.name, "nothing_db");
    assert!(nothing_db::MANIFEST.registry.interfaces().is_empty());
    assert!(nothing_db::MANIFEST
        .registry
        .get(std::any::TypeId::of::<dyn Fn()>(), &handle)
        .is_none());

    assert_eq!(helpers_db::double(4), 8);
    assert_eq!(helpers_db::Point { x: 1, y: 2 }, helpers_db::Point { x: 1, y: 2 });

    let resolver = dbx::discover![nothing_db, helpers_db];
    assert!(resolver.resolve::<dyn Fn()>(&handle).is_err());
}
