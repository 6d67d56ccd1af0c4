pub mod dump;
pub mod read;
pub mod write;

// Re-export the operation entry points at the operations root so callers
// can use `crate::card::operations::read_block(...)` directly.
pub use dump::{read_card, CardDump, SectorDump};
pub use read::{read_block, read_sector};
pub use write::{change_sector_keys, write_block, write_sector, write_value_block};
