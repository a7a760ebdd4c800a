use dbx::{daos, Resolver};

pub trait Greeting {
    fn greet(&self) -> String;
}

mod english {
    use dbx::daos;

    daos! {
        impl english_db;

        #[dao]
        pub trait Hello {
            #[query("SELECT 'hello'")]
            fn hello(&self) -> String;
        }
    }

    pub use english_db::MANIFEST;
    pub use english_db::Hello;
}

daos! {
    impl french_db;

    #[dao]
    pub trait Bonjour {
        #[query("SELECT 'bonjour'")]
        fn bonjour(&self) -> String;
    }

    #[dao]
    pub trait Hello {
        #[query("SELECT 'salut'")]
        fn hello(&self) -> String;
    }
}

pub fn test() {
    let handle = super::super::database("");
    let resolver = dbx::discover![english, french_db];
    assert_eq!(resolver.manifests().len(), 2);

    assert_eq!(
        resolver
            .resolve::<dyn english::Hello>(&handle)
            .unwrap()
            .hello(),
        "hello"
    );
    assert_eq!(
        resolver
            .resolve::<dyn french_db::Hello>(&handle)
            .unwrap()
            .hello(),
        "salut"
    );
    assert_eq!(
        resolver
            .resolve::<dyn french_db::Bonjour>(&handle)
            .unwrap()
            .bonjour(),
        "bonjour"
    );

    // order of registration does not matter when interfaces are distinct
    let reversed = Resolver::new([french_db::MANIFEST, english::MANIFEST]);
    assert!(reversed.resolve::<dyn english::Hello>(&handle).is_ok());
    assert!(reversed.resolve::<dyn Greeting>(&handle).is_err());
}
