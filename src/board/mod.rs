pub mod board;
pub mod collectible;
pub mod node;
pub mod parser;

pub use board::Board;
pub use collectible::{Collectible, CollectibleKind, ConsumptionEvent};
pub use node::Node;
pub use parser::{parse_board, parse_board_from_str};
