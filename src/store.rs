//! Active locale state and its persistence.

pub mod locale_store;
pub mod storage;

pub use locale_store::LocaleStore;
pub use storage::{
    FileStorage,
    LocaleStorage,
    MemoryStorage,
    StorageError,
};
