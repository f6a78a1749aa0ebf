/// What kind of marker sits on a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectibleKind {
    Pellet,
    SuperPellet,
}

impl CollectibleKind {
    /// Score awarded on consumption
    #[inline]
    pub const fn score(self) -> u32 {
        match self {
            CollectibleKind::Pellet => 1,
            CollectibleKind::SuperPellet => 5,
        }
    }
}

/// Collectible marker owned by the board.
/// `consumed` is monotonic: false -> true, never reset during a level.
#[derive(Clone, Debug)]
pub struct Collectible {
    pub cell: (i32, i32),
    pub kind: CollectibleKind,
    pub consumed: bool,
}

impl Collectible {
    pub fn new(cell: (i32, i32), kind: CollectibleKind) -> Self {
        Self {
            cell,
            kind,
            consumed: false,
        }
    }
}

/// Reported once per successful consumption
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsumptionEvent {
    pub cell: (i32, i32),
    pub kind: CollectibleKind,
}
