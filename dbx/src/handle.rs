use rusqlite::Connection;
use std::{ops::Deref, rc::Rc};

/// A shared reference to a caller-owned SQLite connection.
/// - Cheap to clone, every generated implementation holds its own clone.
/// - Not `Send`, generated code assumes exclusive use of the connection for
///   the duration of a call.
#[derive(Clone, Debug)]
pub struct Handle(Rc<Connection>);

impl Handle {
    pub fn new(connection: Connection) -> Self {
        Self(Rc::new(connection))
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Connection::open_in_memory().map(Self::new)
    }

    pub fn connection(&self) -> &Connection {
        &self.0
    }
}

impl From<Connection> for Handle {
    fn from(connection: Connection) -> Self {
        Self::new(connection)
    }
}

impl From<Rc<Connection>> for Handle {
    fn from(connection: Rc<Connection>) -> Self {
        Self(connection)
    }
}

impl Deref for Handle {
    type Target = Connection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
