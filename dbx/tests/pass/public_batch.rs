mod storage {
    use dbx::daos;

    daos! {
        impl notes_db { pub = on };

        #[dao]
        pub trait NoteDao {
            #[query("SELECT body FROM notes ORDER BY id")]
            fn bodies(&self) -> std::collections::VecDeque<String>;

            #[query("INSERT INTO notes (body) VALUES (?)")]
            fn add(&self, body: String) -> dbx::Result<()>;
        }
    }
}

use storage::notes_db::{NoteDao, NoteDaoImpl, MANIFEST};

fn main() {
    let handle = dbx::Handle::open_in_memory().unwrap();
    handle
        .execute_batch("CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT)")
        .unwrap();

    let notes = NoteDaoImpl::new(handle.clone());
    notes.add("first".to_owned()).unwrap();

    let resolved = dbx::Resolver::new([MANIFEST])
        .resolve::<dyn NoteDao>(&handle)
        .unwrap();
    resolved.add("second".to_owned()).unwrap();

    assert_eq!(notes.bodies(), ["first", "second"]);
}
