//! Coordinates, directions, the variant registry, and the `Cell` record.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Integer grid coordinate, also used as a movement delta.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// `self + delta`, or `None` if either axis leaves the `i32` range.
    #[must_use]
    pub fn checked_offset(self, delta: Self) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(delta.x)?,
            self.y.checked_add(delta.y)?,
        ))
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Coord {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Coord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coord {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Discriminant values are the persisted `dir` index — do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Right = 0,
    Down = 1,
    Left = 2,
    Up = 3,
}

impl Direction {
    /// Persisted order: index `i` is `ALL[i]`. Each entry is the clockwise
    /// successor of the previous one.
    pub const ALL: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Unit step in screen space (y grows downward).
    #[must_use]
    pub fn delta(self) -> Coord {
        match self {
            Self::Right => Coord::new(1, 0),
            Self::Down => Coord::new(0, 1),
            Self::Left => Coord::new(-1, 0),
            Self::Up => Coord::new(0, -1),
        }
    }

    #[must_use]
    pub fn from_delta(delta: Coord) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.delta() == delta)
    }

    #[must_use]
    pub fn rotate_cw(self) -> Self {
        Self::ALL[(self as usize + 1) % 4]
    }

    #[must_use]
    pub fn rotate_ccw(self) -> Self {
        Self::ALL[(self as usize + 3) % 4]
    }

    #[must_use]
    pub fn rotate_180(self) -> Self {
        Self::ALL[(self as usize + 2) % 4]
    }

    /// True if `delta` points along this direction or straight against it.
    #[must_use]
    pub fn is_parallel(self, delta: Coord) -> bool {
        delta == self.delta() || delta == self.rotate_180().delta()
    }

    /// Counter-clockwise sprite rotation for this facing.
    #[must_use]
    pub fn angle_degrees(self) -> f32 {
        match self {
            Self::Right => 0.0,
            Self::Up => 90.0,
            Self::Left => 180.0,
            Self::Down => 270.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Right => write!(f, "Right"),
            Self::Down => write!(f, "Down"),
            Self::Left => write!(f, "Left"),
            Self::Up => write!(f, "Up"),
        }
    }
}

/// Discriminant values are the persisted `type` index — do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Variant {
    Wall = 0,
    Mover = 1,
    Generator = 2,
    RotatorCw = 3,
    RotatorCcw = 4,
    Rotator180 = 5,
    Push = 6,
    Slide = 7,
    Enemy = 8,
    Trash = 9,
}

impl Variant {
    /// Registration order. Snapshot `type` indices point into this list.
    pub const ALL: [Self; 10] = [
        Self::Wall,
        Self::Mover,
        Self::Generator,
        Self::RotatorCw,
        Self::RotatorCcw,
        Self::Rotator180,
        Self::Push,
        Self::Slide,
        Self::Enemy,
        Self::Trash,
    ];

    /// Highest value returned by [`Variant::priority`].
    pub const MAX_PRIORITY: u8 = 3;

    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Lower values act first within a tick.
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            Self::Wall | Self::Push | Self::Slide | Self::Enemy | Self::Trash => 0,
            Self::Generator => 1,
            Self::RotatorCw | Self::RotatorCcw | Self::Rotator180 => 2,
            Self::Mover => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Wall => "Wall",
            Self::Mover => "Mover",
            Self::Generator => "Generator",
            Self::RotatorCw => "Rotator (clockwise)",
            Self::RotatorCcw => "Rotator (counter-clockwise)",
            Self::Rotator180 => "Rotator (180)",
            Self::Push => "Push",
            Self::Slide => "Slide",
            Self::Enemy => "Enemy",
            Self::Trash => "Trash",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Wall => "Cannot be moved",
            Self::Mover => "Moves forward over time",
            Self::Generator => "Generates the cell behind it in front of it",
            Self::RotatorCw => "Rotates adjacent cells clockwise 90 degrees",
            Self::RotatorCcw => "Rotates adjacent cells counter-clockwise 90 degrees",
            Self::Rotator180 => "Rotates adjacent cells 180 degrees",
            Self::Push => "Can be pushed by other cells",
            Self::Slide => "Can be pushed only along the indicated axis",
            Self::Enemy => "Destroys any cell that moves into it, along with itself",
            Self::Trash => "Destroys any cell that moves into it",
        }
    }

    /// Opaque sprite key resolved by the presentation layer.
    #[must_use]
    pub fn image_key(self) -> &'static str {
        match self {
            Self::Wall => "cell_wall",
            Self::Mover => "cell_mover",
            Self::Generator => "cell_generator",
            Self::RotatorCw => "cell_rotatorcw",
            Self::RotatorCcw => "cell_rotatorccw",
            Self::Rotator180 => "cell_rotator180",
            Self::Push => "cell_push",
            Self::Slide => "cell_slide",
            Self::Enemy => "cell_enemy",
            Self::Trash => "cell_trash",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Interpolation state for drawing. The core only resets it; advancing `t`
/// over wall-clock time belongs to the renderer.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RenderProgress {
    pub from: (f32, f32),
    pub to: (f32, f32),
    /// 0.0 at the start of a move, 1.0 when idle.
    pub t: f32,
    pub rotation: f32,
    pub target_rotation: f32,
}

impl RenderProgress {
    #[must_use]
    pub fn idle(position: Coord, facing: Direction) -> Self {
        let at = to_point(position);
        Self {
            from: at,
            to: at,
            t: 1.0,
            rotation: facing.angle_degrees(),
            target_rotation: facing.angle_degrees(),
        }
    }

    pub fn reset_source(&mut self, position: Coord) {
        self.from = to_point(position);
    }

    /// Snap an unfinished move to its current interpolated point.
    pub fn settle(&mut self) {
        if self.t < 1.0 {
            self.from = self.point();
        }
        self.to = self.from;
        self.t = 1.0;
    }

    pub fn begin_move(&mut self, from: Coord, to: Coord) {
        if self.from == self.to {
            self.from = to_point(from);
        }
        self.to = to_point(to);
        self.t = 0.0;
    }

    pub fn retarget_rotation(&mut self, facing: Direction) {
        self.target_rotation = facing.angle_degrees();
    }

    /// Interpolated draw position.
    #[must_use]
    pub fn point(&self) -> (f32, f32) {
        (
            self.from.0 + (self.to.0 - self.from.0) * self.t,
            self.from.1 + (self.to.1 - self.from.1) * self.t,
        )
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_point(coord: Coord) -> (f32, f32) {
    (coord.x as f32, coord.y as f32)
}

/// A live entity on the grid.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cell {
    pub variant: Variant,
    pub position: Coord,
    pub facing: Direction,
    /// Set during the act phase, consumed by the move phase.
    pub velocity: Coord,
    pub render: RenderProgress,
}

impl Cell {
    #[must_use]
    pub fn new(variant: Variant, position: Coord, facing: Direction) -> Self {
        Self {
            variant,
            position,
            facing,
            velocity: Coord::ZERO,
            render: RenderProgress::idle(position, facing),
        }
    }

    /// Same variant, facing, position, velocity and render state.
    #[must_use]
    pub fn shallow_copy(&self) -> Self {
        *self
    }

    pub fn rotate(&mut self, facing: Direction) {
        self.facing = facing;
        self.render.retarget_rotation(facing);
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} facing {}", self.variant, self.position, self.facing)
    }
}
