use crate::board::{Board, ConsumptionEvent};
use crate::utils::Vec2;

/// Discretize the live position and try to consume whatever marker sits
/// on that cell. Off-grid positions (mid-segment float noise, external
/// teleports) simply find nothing; consumption is monotonic, so a second
/// probe of the same cell reports no event.
pub fn consume_at(board: &mut Board, position: Vec2) -> Option<ConsumptionEvent> {
    let cell = position.to_cell();
    let kind = board.mark_consumed(cell)?;
    board.add_score(kind.score());
    Some(ConsumptionEvent { cell, kind })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{parse_board_from_str, CollectibleKind};

    fn pellet_board() -> Board {
        parse_board_from_str("A 0 0 right=B\nB 1 0 left=A\npellet 0 0\nsuper 1 0\n").unwrap()
    }

    #[test]
    fn test_consume_pellet_scores() {
        let mut board = pellet_board();

        let ev = consume_at(&mut board, Vec2::new(0.0, 0.0)).unwrap();
        assert_eq!(ev.kind, CollectibleKind::Pellet);
        assert_eq!(ev.cell, (0, 0));
        assert_eq!(board.score(), 1);
    }

    #[test]
    fn test_consumption_is_idempotent() {
        let mut board = pellet_board();

        assert!(consume_at(&mut board, Vec2::new(0.0, 0.0)).is_some());
        assert!(consume_at(&mut board, Vec2::new(0.0, 0.0)).is_none());
        assert_eq!(board.score(), 1);
    }

    #[test]
    fn test_rounds_to_nearest_cell() {
        let mut board = pellet_board();

        // Partway along the A-B segment, closer to B's super pellet
        let ev = consume_at(&mut board, Vec2::new(0.8, 0.0)).unwrap();
        assert_eq!(ev.kind, CollectibleKind::SuperPellet);
        assert_eq!(board.score(), 5);
    }

    #[test]
    fn test_empty_cell_finds_nothing() {
        let mut board = pellet_board();

        assert!(consume_at(&mut board, Vec2::new(12.3, -4.0)).is_none());
        assert_eq!(board.score(), 0);
    }
}
