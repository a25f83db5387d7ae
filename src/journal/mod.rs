pub mod store;

pub use store::JournalSnapshot;
