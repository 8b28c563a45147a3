mod mongo_connection;

pub use mongo_connection::MongoConnection;
