pub mod mongo;

pub use mongo::create_client;
