//! Level state store with observers and persistence.
//!
//! ## Key Types
//!
//! - `LevelStore`: owns metadata, the live draft and locked history
//! - `StoreEvent` / `StoreListener`: change notification
//! - `BlobStore`: opaque key to string storage, with memory and file
//!   implementations
//! - `PersistOnChange`: listener writing the whole state after each event

pub mod observer;
pub mod persist;
pub mod state;

pub use observer::{StoreEvent, StoreListener, SubscriptionId};
pub use persist::{BlobStore, FileBlobStore, MemoryBlobStore, PersistOnChange};
pub use state::{LevelHistory, LevelStore, StoreState};
