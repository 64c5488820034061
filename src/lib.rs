mod err;
mod helper;
mod node;

pub mod rune_trie;
pub mod traits;

pub use err::TrieErr;
pub use rune_trie::RuneTrie;
pub use traits::Trie;

pub type Result<T> = std::result::Result<T, TrieErr>;
