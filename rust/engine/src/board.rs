use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::pieces::{Piece, PieceId, PieceKind, Side, BACK_RANK};

/// Number of ranks and files.
pub const BOARD_SIZE: u8 = 8;
const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A bounds-checked board coordinate. `x` is the rank (0 is light's back
/// rank), `y` is the file.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    x: u8,
    y: u8,
}

/// Unchecked wire form of a [`Coord`]; deserialization goes through
/// [`Coord::new`].
#[derive(Deserialize)]
struct RawCoord {
    x: i32,
    y: i32,
}

impl TryFrom<RawCoord> for Coord {
    type Error = GameError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.x, raw.y)
    }
}

impl Coord {
    /// Fails with [`GameError::OutOfBounds`] unless both components are in `0..8`.
    pub fn new(x: i32, y: i32) -> Result<Self, GameError> {
        let on_board = |v: i32| (0..BOARD_SIZE as i32).contains(&v);
        if on_board(x) && on_board(y) {
            Ok(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(GameError::OutOfBounds { x, y })
        }
    }

    pub fn x(&self) -> u8 {
        self.x
    }
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Coordinate displaced by `(dx, dy)`, or `None` if that leaves the board.
    pub fn offset(&self, dx: i32, dy: i32) -> Option<Coord> {
        Coord::new(self.x as i32 + dx, self.y as i32 + dy).ok()
    }

    /// Every coordinate, rank by rank.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|x| (0..BOARD_SIZE).map(move |y| Coord { x, y }))
    }

    pub(crate) fn index(&self) -> usize {
        self.x as usize * BOARD_SIZE as usize + self.y as usize
    }
}

/// Read-only view of one square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    coord: Coord,
    occupant: Option<Piece>,
}

impl Cell {
    pub fn coord(&self) -> Coord {
        self.coord
    }
    pub fn occupant(&self) -> Option<&Piece> {
        self.occupant.as_ref()
    }
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
    pub fn side(&self) -> Option<Side> {
        self.occupant.map(|p| p.side())
    }
}

/// The 8x8 grid. Pieces are stored in an arena; each of the 64 slots holds
/// at most one arena index, and an index appears in at most one slot.
#[derive(Debug, Clone)]
pub struct Board {
    pieces: Vec<Piece>,
    slots: [Option<u8>; CELL_COUNT],
    generation: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board in the standard starting layout.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset_layout();
        board
    }

    /// Board with no pieces, for setting up custom positions with [`Board::place`].
    pub fn empty() -> Self {
        Self {
            pieces: Vec::with_capacity(32),
            slots: [None; CELL_COUNT],
            generation: 0,
        }
    }

    /// Restores the starting layout. Handles issued before the reset stop
    /// resolving.
    pub fn reset_layout(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pieces.clear();
        self.slots = [None; CELL_COUNT];
        for side in [Side::Light, Side::Dark] {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                self.put(side.home_rank(), file as u8, kind, side);
            }
            for file in 0..BOARD_SIZE {
                self.put(side.pawn_rank(), file, PieceKind::Pawn, side);
            }
        }
    }

    /// Puts a fresh piece on an empty cell.
    pub fn place(
        &mut self,
        coord: Coord,
        kind: PieceKind,
        side: Side,
    ) -> Result<PieceId, GameError> {
        if self.slots[coord.index()].is_some() {
            return Err(GameError::CellOccupied {
                x: coord.x as i32,
                y: coord.y as i32,
            });
        }
        Ok(self.put(coord.x, coord.y, kind, side))
    }

    fn put(&mut self, x: u8, y: u8, kind: PieceKind, side: Side) -> PieceId {
        let index = self.pieces.len() as u8;
        self.pieces.push(Piece::new(kind, side));
        self.slots[Coord { x, y }.index()] = Some(index);
        self.id(index)
    }

    fn id(&self, index: u8) -> PieceId {
        PieceId {
            generation: self.generation,
            index,
        }
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Fails with [`GameError::OutOfBounds`] outside the grid.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell, GameError> {
        let coord = Coord::new(x, y)?;
        Ok(Cell {
            coord,
            occupant: self.piece_at(coord).copied(),
        })
    }

    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.slots[coord.index()].map(|i| &self.pieces[i as usize])
    }

    pub fn id_at(&self, coord: Coord) -> Option<PieceId> {
        self.slots[coord.index()].map(|i| self.id(i))
    }

    /// Resolves a handle; `None` for handles from an earlier generation.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        if id.generation != self.generation {
            return None;
        }
        self.pieces.get(id.index as usize)
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        if id.generation != self.generation {
            return None;
        }
        self.pieces.get_mut(id.index as usize)
    }

    /// Empties a cell, returning the handle of the piece that was on it.
    pub(crate) fn take(&mut self, coord: Coord) -> Option<PieceId> {
        self.slots[coord.index()].take().map(|i| self.id(i))
    }

    /// Moves whatever sits on `from` onto `to`. `to` must already be empty.
    pub(crate) fn relocate(&mut self, from: Coord, to: Coord) {
        debug_assert!(self.slots[to.index()].is_none());
        self.slots[to.index()] = self.slots[from.index()].take();
    }

    /// True when every cell strictly between two aligned cells is empty.
    /// Cells that share no rank, file or diagonal are never clear.
    pub fn is_path_clear(&self, from: Coord, to: Coord) -> bool {
        let dx = to.x as i32 - from.x as i32;
        let dy = to.y as i32 - from.y as i32;
        if !(dx == 0 || dy == 0 || dx.abs() == dy.abs()) {
            return false;
        }
        let (sx, sy) = (dx.signum(), dy.signum());
        let mut cursor = from;
        loop {
            cursor = match cursor.offset(sx, sy) {
                Some(next) => next,
                None => return false,
            };
            if cursor == to {
                return true;
            }
            if self.slots[cursor.index()].is_some() {
                return false;
            }
        }
    }

    /// Kind and side of each cell's occupant, indexed rank-major.
    pub fn occupancy(&self) -> [Option<(PieceKind, Side)>; CELL_COUNT] {
        let mut map = [None; CELL_COUNT];
        for (slot, entry) in self.slots.iter().zip(map.iter_mut()) {
            *entry = slot.map(|i| {
                let p = &self.pieces[i as usize];
                (p.kind(), p.side())
            });
        }
        map
    }

    /// Occupied cells with their pieces.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, &Piece)> + '_ {
        Coord::all().filter_map(move |c| self.piece_at(c).map(|p| (c, p)))
    }

    /// Pieces of `side` that have been taken off the board by capture.
    pub fn captured(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces
            .iter()
            .filter(move |p| p.is_captured() && p.side() == side)
    }

    pub fn piece_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}
