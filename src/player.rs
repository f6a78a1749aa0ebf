use crate::board::Board;
use crate::direction::Direction;
use crate::error::{Result, SimError};
use crate::utils::Vec2;

/// Motion state of the player character on the node graph.
///
/// Exactly one of `current` / `target` is set at a time: `current` while
/// stationary at a node, `target` while traveling an edge. `previous` is
/// the anchor node of the active segment and is always valid after init.
#[derive(Clone, Debug)]
pub struct Player {
    position: Vec2,
    current: Option<u32>,
    previous: u32,
    target: Option<u32>,
    direction: Option<Direction>,
    queued: Option<Direction>,
    speed: f32,
}

impl Player {
    /// Place the player on the node at `start`. The one fatal error in
    /// this module: a start cell with no node cannot be simulated.
    pub fn new(board: &Board, start: (i32, i32), speed: f32) -> Result<Self> {
        let node = board
            .node_at(start)
            .ok_or(SimError::NoNodeAtStart(start.0, start.1))?;
        Ok(Self {
            position: Vec2::new(start.0 as f32, start.1 as f32),
            current: Some(node),
            previous: node,
            target: None,
            direction: None,
            queued: None,
            speed,
        })
    }

    /// Record `d` as the queued direction and, when stationary at a node,
    /// attempt to commit it immediately. Illegal directions are silently
    /// ignored; the queue keeps them for the next arrival.
    pub fn request_direction(&mut self, board: &Board, d: Direction) {
        if Some(d) != self.direction {
            self.queued = Some(d);
        }

        if let Some(cur) = self.current {
            if let Some(next) = board.neighbor(cur, d) {
                self.direction = Some(d);
                self.begin_transit(cur, next);
            }
        }
    }

    /// Per-step update: commit the queued direction if stationary, then
    /// integrate along the active segment and resolve arrival by overshoot.
    pub fn advance(&mut self, board: &Board, dt: f32) {
        if let Some(cur) = self.current {
            match self.queued.and_then(|d| board.neighbor(cur, d).map(|n| (d, n))) {
                Some((d, next)) => {
                    self.direction = Some(d);
                    self.begin_transit(cur, next);
                }
                None => self.direction = None,
            }
        }

        let (target, direction) = match (self.target, self.direction) {
            (Some(t), Some(d)) => (t, d),
            _ => return,
        };

        self.position = self.position.add(direction.vector().scaled(self.speed * dt));

        if self.overshot_target(board, target) {
            self.arrive(board, target);
        }
    }

    /// Facing direction for presentation; `None` while halted
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Most recently requested direction still waiting to commit
    #[inline]
    pub fn queued_direction(&self) -> Option<Direction> {
        self.queued
    }

    /// Live continuous position
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Node the player is stationary at, if any
    #[inline]
    pub fn current_node(&self) -> Option<u32> {
        self.current
    }

    /// Node currently being approached, if in transit
    #[inline]
    pub fn target_node(&self) -> Option<u32> {
        self.target
    }

    /// Anchor node of the active segment
    #[inline]
    pub fn previous_node(&self) -> u32 {
        self.previous
    }

    fn begin_transit(&mut self, from: u32, to: u32) {
        self.previous = from;
        self.current = None;
        self.target = Some(to);
    }

    /// Squared-distance overshoot test. Both spans lie on the same ray
    /// from `previous` (direction never changes mid-edge), so comparing
    /// squared magnitudes preserves the "went past" ordering without a sqrt.
    fn overshot_target(&self, board: &Board, target: u32) -> bool {
        let anchor = board.nodes[self.previous as usize].position();
        let span_to_target = board.nodes[target as usize].position().dist_sq(anchor);
        let span_traveled = self.position.dist_sq(anchor);
        span_traveled >= span_to_target
    }

    /// Arrival: snap to the node to kill float drift, then pick the next
    /// edge. The queued direction wins over the active one; if neither is
    /// legal the player halts here until a request succeeds.
    fn arrive(&mut self, board: &Board, target: u32) {
        self.position = board.nodes[target as usize].position();
        self.current = Some(target);
        self.target = None;

        if let Some(d) = self.queued {
            if let Some(next) = board.neighbor(target, d) {
                self.direction = Some(d);
                self.begin_transit(target, next);
                return;
            }
        }
        if let Some(d) = self.direction {
            if let Some(next) = board.neighbor(target, d) {
                self.begin_transit(target, next);
                return;
            }
        }
        self.direction = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::parse_board_from_str;

    fn id_of(board: &Board, name: &str) -> u32 {
        board
            .names
            .iter()
            .position(|n| n == name)
            .expect("name not found") as u32
    }

    /// A(0,0) - B(1,0) - C(1,1) corner, edges both ways on A-B, up from B
    fn corner_board() -> Board {
        parse_board_from_str("A 0 0 right=B\nB 1 0 left=A up=C\nC 1 1 down=B\n").unwrap()
    }

    #[test]
    fn test_missing_start_node_is_fatal() {
        let board = corner_board();
        assert!(Player::new(&board, (7, 7), 4.0).is_err());
    }

    #[test]
    fn test_starts_stationary() {
        let board = corner_board();
        let player = Player::new(&board, (0, 0), 4.0).unwrap();

        assert_eq!(player.current_node(), Some(id_of(&board, "A")));
        assert_eq!(player.target_node(), None);
        assert_eq!(player.direction(), None);
    }

    #[test]
    fn test_illegal_request_stays_queued() {
        let board = corner_board();
        let mut player = Player::new(&board, (0, 0), 4.0).unwrap();

        // No edge up from A: stays stationary but remembers the wish
        player.request_direction(&board, Direction::Up);
        assert_eq!(player.current_node(), Some(id_of(&board, "A")));
        assert_eq!(player.queued_direction(), Some(Direction::Up));
        assert_eq!(player.direction(), None);
    }

    #[test]
    fn test_legal_request_commits_immediately() {
        let board = corner_board();
        let mut player = Player::new(&board, (0, 0), 4.0).unwrap();

        player.request_direction(&board, Direction::Right);
        assert_eq!(player.current_node(), None);
        assert_eq!(player.target_node(), Some(id_of(&board, "B")));
        assert_eq!(player.previous_node(), id_of(&board, "A"));
        assert_eq!(player.direction(), Some(Direction::Right));
    }

    #[test]
    fn test_travel_and_snap_on_arrival() {
        let board = corner_board();
        let mut player = Player::new(&board, (0, 0), 4.0).unwrap();

        player.request_direction(&board, Direction::Right);
        player.advance(&board, 0.1);
        assert_eq!(player.position(), Vec2::new(0.4, 0.0));
        player.advance(&board, 0.1);
        assert_eq!(player.position(), Vec2::new(0.8, 0.0));

        // Third step integrates past x=1 and snaps back to B exactly;
        // Right has no edge from B, so the player halts there
        player.advance(&board, 0.1);
        assert_eq!(player.position(), Vec2::new(1.0, 0.0));
        assert_eq!(player.current_node(), Some(id_of(&board, "B")));
        assert_eq!(player.target_node(), None);
        assert_eq!(player.direction(), None);
    }

    #[test]
    fn test_queued_direction_wins_on_arrival() {
        let board = corner_board();
        let mut player = Player::new(&board, (0, 0), 4.0).unwrap();

        player.request_direction(&board, Direction::Right);
        // Mid-transit wish: turn up at B. Right(B->A) also exists but loses.
        player.request_direction(&board, Direction::Up);
        for _ in 0..3 {
            player.advance(&board, 0.1);
        }

        assert_eq!(player.direction(), Some(Direction::Up));
        assert_eq!(player.target_node(), Some(id_of(&board, "C")));
        assert_eq!(player.previous_node(), id_of(&board, "B"));
    }

    #[test]
    fn test_dead_end_halts() {
        let board = parse_board_from_str("A 0 0 right=B\nB 1 0\n").unwrap();
        let mut player = Player::new(&board, (0, 0), 4.0).unwrap();

        player.request_direction(&board, Direction::Right);
        for _ in 0..5 {
            player.advance(&board, 0.1);
        }

        // B has no edges at all: snap, halt, keep the node
        assert_eq!(player.position(), Vec2::new(1.0, 0.0));
        assert_eq!(player.current_node(), Some(id_of(&board, "B")));
        assert_eq!(player.direction(), None);
    }

    #[test]
    fn test_no_teleport_invariant() {
        let board = corner_board();
        let mut player = Player::new(&board, (0, 0), 4.0).unwrap();

        player.request_direction(&board, Direction::Right);
        player.request_direction(&board, Direction::Up);
        for _ in 0..40 {
            player.advance(&board, 0.033);

            let anchor = board.nodes[player.previous_node() as usize].position();
            match player.target_node() {
                Some(t) => {
                    let span = board.nodes[t as usize].position().dist_sq(anchor);
                    let traveled = player.position().dist_sq(anchor);
                    assert!(traveled <= span + 1e-6);
                }
                None => {
                    let node = player.current_node().expect("stationary without a node");
                    assert_eq!(player.position(), board.nodes[node as usize].position());
                }
            }
        }
    }

    #[test]
    fn test_direction_legality() {
        let board = corner_board();
        let mut player = Player::new(&board, (0, 0), 4.0).unwrap();

        for d in [Direction::Down, Direction::Left, Direction::Up] {
            player.request_direction(&board, d);
            // None of these are legal from A
            assert_eq!(player.current_node(), Some(id_of(&board, "A")));
            assert_eq!(player.direction(), None);
        }
        player.request_direction(&board, Direction::Right);
        assert_eq!(player.direction(), Some(Direction::Right));
    }

    #[test]
    fn test_stationary_retries_queue_on_advance() {
        let board = corner_board();
        let mut player = Player::new(&board, (0, 0), 4.0).unwrap();

        player.request_direction(&board, Direction::Up);
        assert_eq!(player.current_node(), Some(id_of(&board, "A")));

        // The queue holds Up, still illegal from A: advance leaves us parked
        player.advance(&board, 0.1);
        assert_eq!(player.current_node(), Some(id_of(&board, "A")));
        assert_eq!(player.position(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_same_direction_request_keeps_queue() {
        let board = corner_board();
        let mut player = Player::new(&board, (0, 0), 4.0).unwrap();

        player.request_direction(&board, Direction::Right);
        player.request_direction(&board, Direction::Up);
        // Re-pressing the active direction must not clobber the queued turn
        player.request_direction(&board, Direction::Right);
        assert_eq!(player.queued_direction(), Some(Direction::Up));
    }
}
