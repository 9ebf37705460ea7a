use std::fmt;

/// Index of a device in the driver's enumeration order.
pub type DeviceIndex = u32;

/// Direction of a hat (d-pad). Each component is one of -1, 0 or 1,
/// `y == 1` points up and `x == 1` points right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HatDirection {
    pub x: i8,
    pub y: i8,
}

impl HatDirection {
    pub const CENTERED: Self = Self { x: 0, y: 0 };

    /// Creates a direction, clamping both components into {-1, 0, 1}.
    pub const fn new(x: i8, y: i8) -> Self {
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
        }
    }

    #[inline]
    pub fn is_centered(&self) -> bool {
        *self == Self::CENTERED
    }
}

const fn clamp_unit(v: i8) -> i8 {
    if v > 0 {
        1
    } else if v < 0 {
        -1
    } else {
        0
    }
}

impl fmt::Display for HatDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i8, i8)> for HatDirection {
    fn from((x, y): (i8, i8)) -> Self {
        Self::new(x, y)
    }
}

/// Input kinds that can be auto-repeated while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepeatKind {
    Axes,
    Hats,
    Buttons,
}

impl RepeatKind {
    pub const ALL: [RepeatKind; 3] = [RepeatKind::Axes, RepeatKind::Hats, RepeatKind::Buttons];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            RepeatKind::Axes => 0,
            RepeatKind::Hats => 1,
            RepeatKind::Buttons => 2,
        }
    }
}

impl fmt::Display for RepeatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RepeatKind::Axes => "axes",
            RepeatKind::Hats => "hats",
            RepeatKind::Buttons => "buttons",
        };
        f.write_str(name)
    }
}
