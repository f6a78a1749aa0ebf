use crate::direction::Direction;
use crate::utils::{Vec2, INVALID_NODE};

/// Graph waypoint: compact and cache-friendly
#[derive(Clone, Debug)]
pub struct Node {
    pub name_idx: u32,       // index into `names`
    pub cell: (i32, i32),    // grid cell this node sits on
    pub neighbors: [u32; 4], // neighbors keyed by Direction::index(); INVALID_NODE if none
}

impl Node {
    /// Create a new node at the given cell with the given name index
    #[inline]
    pub fn new(name_idx: u32, cell: (i32, i32)) -> Self {
        Self {
            name_idx,
            cell,
            neighbors: [INVALID_NODE; 4],
        }
    }

    /// Set neighbor in a specific direction
    #[inline]
    pub fn set_neighbor(&mut self, direction: Direction, neighbor_id: u32) {
        self.neighbors[direction.index()] = neighbor_id;
    }

    /// Get neighbor in a specific direction; `None` is the normal
    /// "illegal move" signal, not an error
    #[inline]
    pub fn neighbor(&self, direction: Direction) -> Option<u32> {
        let neighbor = self.neighbors[direction.index()];
        if neighbor == INVALID_NODE {
            None
        } else {
            Some(neighbor)
        }
    }

    /// World position of this node (cell center)
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.cell.0 as f32, self.cell.1 as f32)
    }
}
