//! Static drawing data for the gallows and the hanged figure.
//!
//! Coordinates live in a 200x400 space with the origin at the bottom-left.
//! Each wrong guess reveals one more [`BodyPart`], in [`BODY_PARTS`] order.

use super::state::MAX_WRONG_GUESSES;

pub const CANVAS_WIDTH: f64 = 200.0;
pub const CANVAS_HEIGHT: f64 = 400.0;

pub type Point = (f64, f64);

/// A straight stroke between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub width: u16,
}

const fn seg(from: Point, to: Point, width: u16) -> Segment {
    Segment { from, to, width }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { center: Point, radius: f64 },
    Lines(&'static [Segment]),
}

/// Base, post, beam, and rope.
pub const SCAFFOLD: &[Segment] = &[
    seg((40.0, 55.0), (180.0, 55.0), 10),
    seg((165.0, 60.0), (165.0, 365.0), 10),
    seg((160.0, 360.0), (100.0, 360.0), 10),
    seg((100.0, 365.0), (100.0, 330.0), 10),
    seg((100.0, 330.0), (100.0, 310.0), 1),
];

const HEAD: Shape = Shape::Circle {
    center: (100.0, 290.0),
    radius: 20.0,
};

const TORSO: &[Segment] = &[seg((100.0, 270.0), (100.0, 170.0), 2)];

const LEFT_ARM: &[Segment] = &[
    seg((100.0, 250.0), (80.0, 250.0), 2),
    seg((80.0, 250.0), (60.0, 210.0), 2),
    seg((60.0, 210.0), (60.0, 190.0), 2),
];

const RIGHT_ARM: &[Segment] = &[
    seg((100.0, 250.0), (120.0, 250.0), 2),
    seg((120.0, 250.0), (140.0, 210.0), 2),
    seg((140.0, 210.0), (140.0, 190.0), 2),
];

const LEFT_LEG: &[Segment] = &[
    seg((100.0, 170.0), (80.0, 170.0), 2),
    seg((80.0, 170.0), (70.0, 140.0), 2),
    seg((70.0, 140.0), (70.0, 80.0), 2),
    seg((70.0, 80.0), (60.0, 80.0), 2),
];

const RIGHT_LEG: &[Segment] = &[
    seg((100.0, 170.0), (120.0, 170.0), 2),
    seg((120.0, 170.0), (130.0, 140.0), 2),
    seg((130.0, 140.0), (130.0, 80.0), 2),
    seg((130.0, 80.0), (140.0, 80.0), 2),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

/// Body parts in the order wrong guesses reveal them.
pub const BODY_PARTS: [BodyPart; MAX_WRONG_GUESSES] = [
    BodyPart::Head,
    BodyPart::Torso,
    BodyPart::LeftArm,
    BodyPart::RightArm,
    BodyPart::LeftLeg,
    BodyPart::RightLeg,
];

impl BodyPart {
    pub fn shape(self) -> Shape {
        match self {
            BodyPart::Head => HEAD,
            BodyPart::Torso => Shape::Lines(TORSO),
            BodyPart::LeftArm => Shape::Lines(LEFT_ARM),
            BodyPart::RightArm => Shape::Lines(RIGHT_ARM),
            BodyPart::LeftLeg => Shape::Lines(LEFT_LEG),
            BodyPart::RightLeg => Shape::Lines(RIGHT_LEG),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BodyPart::Head => "head",
            BodyPart::Torso => "torso",
            BodyPart::LeftArm => "left arm",
            BodyPart::RightArm => "right arm",
            BodyPart::LeftLeg => "left leg",
            BodyPart::RightLeg => "right leg",
        }
    }
}

/// Cumulative drawing stage, one step per wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stage(usize);

impl Stage {
    pub const GALLOWS: Stage = Stage(0);
    pub const HANGED: Stage = Stage(MAX_WRONG_GUESSES);

    /// Stage for a wrong-guess count, clamped to the full figure.
    pub fn from_wrong_guesses(count: usize) -> Self {
        Stage(count.min(MAX_WRONG_GUESSES))
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Every body part drawn at this stage, head first.
    pub fn visible_parts(self) -> &'static [BodyPart] {
        &BODY_PARTS[..self.0]
    }

    /// The part added by this stage, `None` for the bare gallows.
    pub fn newest_part(self) -> Option<BodyPart> {
        self.visible_parts().last().copied()
    }
}
