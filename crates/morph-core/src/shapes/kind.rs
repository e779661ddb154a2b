use glam::Vec3;

/// The fixed shape catalog. Declaration order is the cycle order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ShapeKind {
    Sphere,
    Heart,
    Flower,
    Saturn,
    Spiral,
    Dna,
}

impl ShapeKind {
    pub const COUNT: usize = 6;

    pub const ALL: [ShapeKind; Self::COUNT] = [
        ShapeKind::Sphere,
        ShapeKind::Heart,
        ShapeKind::Flower,
        ShapeKind::Saturn,
        ShapeKind::Spiral,
        ShapeKind::Dna,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Out-of-range indices wrap around the catalog.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Heart => "heart",
            ShapeKind::Flower => "flower",
            ShapeKind::Saturn => "saturn",
            ShapeKind::Spiral => "spiral",
            ShapeKind::Dna => "dna",
        }
    }

    /// Primary and secondary particle colors for this shape.
    pub fn palette(self) -> Palette {
        let (a, b) = match self {
            ShapeKind::Sphere => (0xff0088, 0x00ffff),
            ShapeKind::Heart => (0xff0000, 0xff8800),
            ShapeKind::Flower => (0xff00ff, 0xffffff),
            ShapeKind::Saturn => (0xffa500, 0x888888),
            ShapeKind::Spiral => (0x00ff00, 0x0000ff),
            ShapeKind::Dna => (0x00ff88, 0x0088ff),
        };
        Palette {
            primary: rgb(a),
            secondary: rgb(b),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Palette {
    pub primary: Vec3,
    pub secondary: Vec3,
}

/// `0xRRGGBB` to linear [0, 1] components.
fn rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32,
        ((hex >> 8) & 0xff) as f32,
        (hex & 0xff) as f32,
    ) / 255.0
}
