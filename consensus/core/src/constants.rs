/// Name of the root block. Sorts before every other block name.
pub const GENESIS_NAME: &str = "Genesis";

/// Maximum number of bytes kept from a block name. Longer names are truncated
/// and compared on the truncated prefix only.
pub const MAX_NODE_NAME_LEN: usize = 9;
