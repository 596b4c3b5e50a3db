//! Files written by the generator.

mod mod_index;
mod table_file;

pub use mod_index::ModIndex;
pub use table_file::TableFile;
