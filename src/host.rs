use crate::{event::PointerPhase, Result};
use std::{fmt::Debug, hash::Hash};

/// Value of an element's inline `display` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
}

/// Value of an element's inline `position` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Absolute,
}

/// The inline style properties the controller touches. `None` means the property is unset and
/// whatever the host would render by default applies.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InlineStyle {
    pub display: Option<Display>,
    pub position: Option<Position>,
    pub left: Option<f32>,
    pub top: Option<f32>,
}

impl InlineStyle {
    pub fn is_unset(&self) -> bool {
        *self == InlineStyle::default()
    }
}

/// Where a pointer listener is registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListenerTarget<E> {
    /// A single element. Only receives events targeted at it.
    Element(E),
    /// The whole document. Receives events no matter where the pointer is.
    Document,
}

/// The capabilities a [`crate::SwipeController`] needs from the UI tree it runs in.
///
/// Listener registration is bookkeeping only: the host reports pointer events through
/// [`crate::SwipeController::dispatch`], which consults [`SwipeHost::is_subscribed`] to decide
/// whether the event reaches the controller.
pub trait SwipeHost {
    type Element: Clone + Eq + Hash + Debug;

    /// Direct children of the container matching `selector`, in document order.
    fn children(&self, selector: &str) -> Result<Vec<Self::Element>>;

    fn style(&self, element: &Self::Element) -> InlineStyle;

    fn set_style(&mut self, element: &Self::Element, style: InlineStyle);

    /// Registers a listener. Registering the same target and phase twice has no further effect.
    fn subscribe(&mut self, target: ListenerTarget<Self::Element>, phase: PointerPhase);

    fn unsubscribe(&mut self, target: &ListenerTarget<Self::Element>, phase: PointerPhase);

    fn is_subscribed(&self, target: &ListenerTarget<Self::Element>, phase: PointerPhase) -> bool;
}
