use crate::board::collectible::{Collectible, CollectibleKind};
use crate::board::node::Node;
use crate::direction::Direction;
use std::collections::HashMap;

/// Final board: names + nodes + collectibles (graph immutable after load)
#[derive(Clone, Debug)]
pub struct Board {
    pub names: Vec<String>,
    pub nodes: Vec<Node>,
    cell_to_node: HashMap<(i32, i32), u32>,
    collectibles: HashMap<(i32, i32), Collectible>,
    score: u32,
}

impl Board {
    /// Create a new board from names, nodes and collectible markers
    pub fn new(names: Vec<String>, nodes: Vec<Node>, collectibles: Vec<Collectible>) -> Self {
        let cell_to_node = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.cell, i as u32))
            .collect();
        let collectibles = collectibles.into_iter().map(|c| (c.cell, c)).collect();
        Self {
            names,
            nodes,
            cell_to_node,
            collectibles,
            score: 0,
        }
    }

    /// Get a node by id
    #[inline]
    pub fn node(&self, idx: u32) -> Option<&Node> {
        self.nodes.get(idx as usize)
    }

    /// Get the node id sitting on a grid cell, if any
    #[inline]
    pub fn node_at(&self, cell: (i32, i32)) -> Option<u32> {
        self.cell_to_node.get(&cell).copied()
    }

    /// Neighbor of `idx` in `direction`; `None` means the move is illegal
    #[inline]
    pub fn neighbor(&self, idx: u32, direction: Direction) -> Option<u32> {
        self.node(idx).and_then(|n| n.neighbor(direction))
    }

    /// Collectible marker at a grid cell, consumed or not
    #[inline]
    pub fn collectible_at(&self, cell: (i32, i32)) -> Option<&Collectible> {
        self.collectibles.get(&cell)
    }

    /// Flip the consumed flag at a cell. Monotonic: already-consumed
    /// markers stay consumed. Returns the kind on the first flip only.
    pub fn mark_consumed(&mut self, cell: (i32, i32)) -> Option<CollectibleKind> {
        match self.collectibles.get_mut(&cell) {
            Some(c) if !c.consumed => {
                c.consumed = true;
                Some(c.kind)
            }
            _ => None,
        }
    }

    /// Score bookkeeping hook for the probe
    #[inline]
    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Current score
    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Count unconsumed markers left on the board
    pub fn remaining_collectibles(&self) -> usize {
        self.collectibles.values().filter(|c| !c.consumed).count()
    }

    /// Get a node name by id
    pub fn node_name(&self, idx: u32) -> &str {
        &self.names[self.nodes[idx as usize].name_idx as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::parser::parse_board_from_str;

    /// Helper function to find a node id by name
    fn id_of(board: &Board, name: &str) -> u32 {
        board
            .names
            .iter()
            .position(|n| n == name)
            .expect("name not found") as u32
    }

    #[test]
    fn test_board_creation() {
        let board = parse_board_from_str("A 0 0 right=B\nB 1 0 left=A\n").unwrap();

        assert_eq!(board.names.len(), 2);
        assert_eq!(board.nodes.len(), 2);
        assert_eq!(board.score(), 0);
    }

    #[test]
    fn test_node_at_cell() {
        let board = parse_board_from_str("A 0 0 right=B\nB 1 0 left=A\n").unwrap();
        let a = id_of(&board, "A");

        assert_eq!(board.node_at((0, 0)), Some(a));
        assert_eq!(board.node_at((5, 5)), None);
    }

    #[test]
    fn test_neighbor_lookup() {
        let board = parse_board_from_str("A 0 0 right=B\nB 1 0 left=A up=C\nC 1 1 down=B\n")
            .unwrap();
        let a = id_of(&board, "A");
        let b = id_of(&board, "B");
        let c = id_of(&board, "C");

        assert_eq!(board.neighbor(a, Direction::Right), Some(b));
        assert_eq!(board.neighbor(a, Direction::Up), None);
        assert_eq!(board.neighbor(b, Direction::Up), Some(c));
        assert_eq!(board.neighbor(b, Direction::Left), Some(a));
    }

    #[test]
    fn test_mark_consumed_is_monotonic() {
        let mut board = parse_board_from_str("A 0 0\npellet 0 0\n").unwrap();

        assert_eq!(board.mark_consumed((0, 0)), Some(CollectibleKind::Pellet));
        assert_eq!(board.mark_consumed((0, 0)), None);
        assert_eq!(board.mark_consumed((9, 9)), None);
        assert_eq!(board.remaining_collectibles(), 0);
    }

    #[test]
    fn test_node_name() {
        let board = parse_board_from_str("Start 0 0 right=End\nEnd 1 0\n").unwrap();
        let start = id_of(&board, "Start");

        assert_eq!(board.node_name(start), "Start");
    }
}
