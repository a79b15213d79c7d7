//! In-memory adapters used for demos and tests.

mod work_item;

pub use work_item::InMemoryWorkItemRepository;
