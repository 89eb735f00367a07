//! Contact classification and deduplication
//!
//! The physics layer reports an overlap pair every step while two bodies
//! remain touching. Gameplay wants the non-ball body, labeled, exactly once
//! per distinct touch. This module turns raw pairs into that.

/// Opaque engine body identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub u64);

/// Semantic role of a physical body.
///
/// Gameplay matches on this enum, never on raw bits. The power-of-two
/// encoding exists only for the physics boundary, which filters collisions by
/// bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderCategory {
    Ball,
    Barrier,
    Brick,
    Paddle,
}

impl ColliderCategory {
    /// Category bitmask value for the physics layer
    pub const fn bits(self) -> u32 {
        match self {
            ColliderCategory::Ball => 0b1,
            ColliderCategory::Barrier => 0b10,
            ColliderCategory::Brick => 0b100,
            ColliderCategory::Paddle => 0b1000,
        }
    }

    /// Decode a physics-layer category bitmask. Unknown bits carry no
    /// gameplay role; engine glue drops those contacts before they reach the
    /// resolver.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0b1 => Some(ColliderCategory::Ball),
            0b10 => Some(ColliderCategory::Barrier),
            0b100 => Some(ColliderCategory::Brick),
            0b1000 => Some(ColliderCategory::Paddle),
            _ => None,
        }
    }

    /// Mask of everything the ball is contact-tested against
    pub const fn ball_contact_mask() -> u32 {
        ColliderCategory::Barrier.bits()
            | ColliderCategory::Brick.bits()
            | ColliderCategory::Paddle.bits()
    }
}

/// One side of a reported contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactBody {
    pub id: BodyId,
    pub category: ColliderCategory,
    /// Engine-assigned node name ("Bottom", "Left", "Right"); unset for
    /// generic bodies such as bricks
    pub name: Option<String>,
}

impl ContactBody {
    pub fn new(id: u64, category: ColliderCategory) -> Self {
        Self {
            id: BodyId(id),
            category,
            name: None,
        }
    }

    pub fn named(id: u64, category: ColliderCategory, name: &str) -> Self {
        Self {
            id: BodyId(id),
            category,
            name: Some(name.to_owned()),
        }
    }
}

/// A physics-step overlap between two bodies.
///
/// Sides are optional because an engine may report a stale contact after a
/// body was removed mid-step; such events are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEvent {
    pub a: Option<ContactBody>,
    pub b: Option<ContactBody>,
}

impl ContactEvent {
    pub fn new(a: ContactBody, b: ContactBody) -> Self {
        Self {
            a: Some(a),
            b: Some(b),
        }
    }
}

/// Pick the non-ball side of a contact.
///
/// Only ball-originated pairs are registered for contact testing (see
/// [`ColliderCategory::ball_contact_mask`]), so one side is always the ball:
/// if side A is the ball the interesting body is B, otherwise it is A.
/// Returns `None` when either side is missing.
pub fn classify(event: &ContactEvent) -> Option<&ContactBody> {
    let a = event.a.as_ref()?;
    let b = event.b.as_ref()?;
    if a.category == ColliderCategory::Ball {
        Some(b)
    } else {
        Some(a)
    }
}

/// Suppresses repeated notifications while a contact persists across steps.
///
/// The physics layer re-reports an overlap every step the two bodies stay
/// touching; gameplay effects must fire once per touch. Memory is a single
/// slot holding the most recently acted-upon body.
#[derive(Debug, Default)]
pub struct ContactDedup {
    last: Option<BodyId>,
}

impl ContactDedup {
    /// Returns true when the body differs from the last acted-upon one,
    /// recording it as the new last contact. Returns false for a repeat.
    pub fn admit(&mut self, body: BodyId) -> bool {
        if self.last == Some(body) {
            return false;
        }
        self.last = Some(body);
        true
    }

    /// The most recently admitted body
    pub fn last(&self) -> Option<BodyId> {
        self.last
    }
}
