use egui::{Pos2, Vec2};
use std::fmt;

/// Which part of the pointer lifecycle an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Button pressed on an element. Starts a drag.
    Down,
    /// Pointer moved anywhere in the document.
    Move,
    /// Button released anywhere in the document. Ends a drag.
    Up,
}

/// Read access to the coordinates of a pointer event, whatever the host's event type looks like.
pub trait PointerInput {
    /// Pointer position relative to the whole document, including scroll.
    fn page_pos(&self) -> Pos2;

    /// Pointer position relative to the visible viewport.
    fn client_pos(&self) -> Pos2;

    /// Pointer position relative to the top left corner of the event target.
    fn offset(&self) -> Vec2;
}

/// Owned snapshot of a pointer event.
///
/// The controller keeps one of these as the start reference of a drag session,
/// since host events usually don't outlive their handler.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    pub page_pos: Pos2,
    pub client_pos: Pos2,
    pub offset: Vec2,
}

impl PointerEvent {
    pub fn new(page_pos: Pos2, client_pos: Pos2, offset: Vec2) -> Self {
        Self {
            page_pos,
            client_pos,
            offset,
        }
    }

    /// An event for hosts without scrolling, where page and client positions coincide.
    pub fn at(pos: Pos2, offset: Vec2) -> Self {
        Self::new(pos, pos, offset)
    }

    pub fn capture(input: &impl PointerInput) -> Self {
        Self::new(input.page_pos(), input.client_pos(), input.offset())
    }
}

impl PointerInput for PointerEvent {
    fn page_pos(&self) -> Pos2 {
        self.page_pos
    }

    fn client_pos(&self) -> Pos2 {
        self.client_pos
    }

    fn offset(&self) -> Vec2 {
        self.offset
    }
}

/// Direction a card was swiped off the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Classifies a release at `release_x` for a drag that started at `start_x`.
    ///
    /// Returns `None` unless the horizontal distance strictly exceeds `drop_distance`.
    pub fn classify(start_x: f32, release_x: f32, drop_distance: f32) -> Option<Direction> {
        if release_x < start_x - drop_distance {
            Some(Direction::Left)
        } else if release_x > start_x + drop_distance {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
