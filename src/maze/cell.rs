use bitflags::bitflags;

bitflags! {
    /// Per-cell state: the sides that still carry a wall, plus a traversal marker.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WallSide: u8 {
        const UP = 0b0000_0001;
        const DOWN = 0b0000_0010;
        const LEFT = 0b0000_0100;
        const RIGHT = 0b0000_1000;
        /// Not a wall. Set once the generator has reached the cell.
        const VISITED = 0b1000_0000;
    }
}

impl WallSide {
    /// All four directional walls, the state every cell starts in.
    pub const ALL_WALLS: WallSide = WallSide::UP
        .union(WallSide::DOWN)
        .union(WallSide::LEFT)
        .union(WallSide::RIGHT);

    /// The four sides in the order neighbors are discovered.
    pub const SIDES: [WallSide; 4] = [
        WallSide::LEFT,
        WallSide::RIGHT,
        WallSide::UP,
        WallSide::DOWN,
    ];

    const OPPOSITES: [(WallSide, WallSide); 4] = [
        (WallSide::UP, WallSide::DOWN),
        (WallSide::DOWN, WallSide::UP),
        (WallSide::LEFT, WallSide::RIGHT),
        (WallSide::RIGHT, WallSide::LEFT),
    ];

    /// Returns the side facing back across a shared wall.
    ///
    /// Only a single directional side has an opposite. Combined masks, `VISITED`
    /// and the empty set return `None`.
    pub fn opposite(self) -> Option<WallSide> {
        Self::OPPOSITES
            .iter()
            .find(|(side, _)| *side == self)
            .map(|&(_, opposite)| opposite)
    }

    /// Strips the traversal marker, leaving only the wall bits.
    pub fn walls(self) -> WallSide {
        self.intersection(Self::ALL_WALLS)
    }

    pub fn is_visited(self) -> bool {
        self.contains(Self::VISITED)
    }
}
