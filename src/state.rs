use egui::Vec2;

use crate::{
    event::{Direction, PointerEvent, PointerInput, PointerPhase},
    host::{Display, InlineStyle, ListenerTarget, Position, SwipeHost},
    settings::{SwipeOptions, SwipeSettings},
    utils::next_index,
    Result,
};

/// What a pointer event did to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeResponse {
    /// The event was ignored: nothing is being dragged, or the target isn't armed.
    NoDrag,
    /// The element at `index` started being dragged.
    DragStarted { index: usize },
    /// The dragged element followed the pointer.
    Dragging,
    /// The drag ended past the drop distance and the drop callback ran.
    Dropped(Direction),
    /// The drag ended within the drop distance. The element was reset without a callback.
    Cancelled,
}

/// The element being dragged and the pointer-down that started the drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession<E> {
    pub element: E,
    pub start: PointerEvent,
}

impl<E> DragSession<E> {
    /// Pointer position relative to the origin of the dragged element when dragging began
    pub fn drag_offset(&self) -> Vec2 {
        self.start.offset
    }
}

/// [SwipeController] turns the children of one container into a swipeable stack.
///
/// Exactly one element is armed at a time. Pressing on it starts a drag and immediately arms the
/// next element in the stack, so the card underneath is ready before the dragged one is gone.
/// Releasing the pointer further than [`SwipeSettings::drop_distance`] left or right of where the
/// drag started calls the drop callback with that [Direction]. Either way the dragged element is
/// reset and stays idle until the rotation comes back around to it.
///
/// # Example
/// ```rust
/// use egui::{pos2, vec2};
/// use egui_swipe::{Direction, MemoryHost, PointerEvent, SwipeController, SwipeOptions, SwipeResponse};
///
/// let mut host = MemoryHost::new();
/// let cards = host.add_container(".swipe", 3);
///
/// let mut swipe = SwipeController::init(host, None, SwipeOptions::default()).unwrap();
/// assert_eq!(swipe.armed_element(), Some(&cards[0]));
///
/// swipe.drag_begin(&cards[0], &PointerEvent::at(pos2(300.0, 200.0), vec2(20.0, 20.0)));
/// assert_eq!(swipe.armed_element(), Some(&cards[1]));
///
/// let response = swipe.drag_end(&PointerEvent::at(pos2(150.0, 200.0), vec2(0.0, 0.0)));
/// assert_eq!(response, SwipeResponse::Dropped(Direction::Left));
/// ```
pub struct SwipeController<H: SwipeHost> {
    host: H,
    settings: SwipeSettings,
    swipe_elements: Vec<H::Element>,
    /// Index of the element armed next, always within `swipe_elements` unless it is empty
    top_element: usize,
    session: Option<DragSession<H::Element>>,
}

impl<H: SwipeHost> SwipeController<H> {
    /// Resolves the container through `host` and arms its first child, if there is one.
    ///
    /// `selector` replaces the default `.swipe` selector, and any field set in `options` replaces
    /// the corresponding default (including the selector).
    pub fn init(host: H, selector: Option<&str>, options: SwipeOptions) -> Result<Self> {
        let settings = SwipeSettings::resolve(selector, options)?;
        let swipe_elements = host.children(&settings.selector)?;
        tracing::debug!(
            selector = %settings.selector,
            elements = swipe_elements.len(),
            "initializing swipe stack"
        );

        let mut controller = Self {
            host,
            settings,
            swipe_elements,
            top_element: 0,
            session: None,
        };
        if !controller.swipe_elements.is_empty() {
            controller.arm(0);
        }
        Ok(controller)
    }

    /// Routes a pointer event reported by the host to the matching handler, but only if the
    /// listener for it is registered: pointer-down on the armed element, move and up on the
    /// document. `target` is the element under the pointer, if any.
    pub fn dispatch(
        &mut self,
        phase: PointerPhase,
        target: Option<&H::Element>,
        event: &impl PointerInput,
    ) -> SwipeResponse {
        match phase {
            PointerPhase::Down => {
                let Some(element) = target else {
                    return SwipeResponse::NoDrag;
                };
                let listener = ListenerTarget::Element(element.clone());
                if !self.host.is_subscribed(&listener, phase) {
                    return SwipeResponse::NoDrag;
                }
                self.drag_begin(element, event)
            }
            PointerPhase::Move | PointerPhase::Up => {
                if !self.host.is_subscribed(&ListenerTarget::Document, phase) {
                    return SwipeResponse::NoDrag;
                }
                if phase == PointerPhase::Move {
                    self.drag_move(event)
                } else {
                    self.drag_end(event)
                }
            }
        }
    }

    /// Starts dragging `element` and arms the next one.
    ///
    /// Ignored unless `element` is the armed one, and while another drag is in progress.
    pub fn drag_begin(&mut self, element: &H::Element, event: &impl PointerInput) -> SwipeResponse {
        let Some(index) = self.index_of(element) else {
            return SwipeResponse::NoDrag;
        };
        if let Some(session) = &self.session {
            tracing::warn!(
                active = ?session.element,
                ignored = ?element,
                "drag already in progress, ignoring pointer down"
            );
            return SwipeResponse::NoDrag;
        }
        if self.armed_index() != Some(index) {
            tracing::debug!(index, "element is not armed, ignoring pointer down");
            return SwipeResponse::NoDrag;
        }

        let start = PointerEvent::capture(event);
        tracing::debug!(index, x = start.page_pos.x, y = start.page_pos.y, "drag started");
        self.session = Some(DragSession {
            element: element.clone(),
            start,
        });

        if let Some(next) = next_index(self.top_element, self.swipe_elements.len()) {
            self.top_element = next;
            self.arm(next);
        }

        // anchor the element where it is rendered so the following moves are pure translations
        let mut style = self.host.style(element);
        style.left = Some(start.page_pos.x - start.offset.x);
        style.top = Some(start.page_pos.y - start.offset.y);
        style.position = Some(Position::Absolute);
        self.host.set_style(element, style);

        SwipeResponse::DragStarted { index }
    }

    /// Moves the dragged element along with the pointer. Vertical movement is only followed if
    /// [`SwipeSettings::y_enabled`] is set.
    pub fn drag_move(&mut self, event: &impl PointerInput) -> SwipeResponse {
        let Some(session) = &self.session else {
            return SwipeResponse::NoDrag;
        };

        let offset = session.drag_offset();
        let pos = event.page_pos();
        let mut style = self.host.style(&session.element);
        style.left = Some(pos.x - offset.x);
        if self.settings.y_enabled {
            style.top = Some(pos.y - offset.y);
        }
        tracing::trace!(left = ?style.left, top = ?style.top, "drag moved");
        self.host.set_style(&session.element, style);

        SwipeResponse::Dragging
    }

    /// Ends the drag, calling the drop callback if the pointer travelled far enough sideways.
    pub fn drag_end(&mut self, event: &impl PointerInput) -> SwipeResponse {
        let Some(session) = &self.session else {
            return SwipeResponse::NoDrag;
        };

        let direction = Direction::classify(
            session.start.client_pos.x,
            event.client_pos().x,
            self.settings.drop_distance,
        );
        tracing::debug!(?direction, "drag ended");
        if let Some(direction) = direction {
            (self.settings.drop_callback)(direction);
        }

        self.reset();
        match direction {
            Some(direction) => SwipeResponse::Dropped(direction),
            None => SwipeResponse::Cancelled,
        }
    }

    /// Drops the current session, if any: removes the drag-begin listener from the dragged
    /// element and clears its inline style.
    pub fn reset(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };

        let element = session.element;
        self.host
            .unsubscribe(&ListenerTarget::Element(element.clone()), PointerPhase::Down);
        self.host.set_style(&element, InlineStyle::default());

        // a single element stack rotates back onto itself
        if self.armed_element() == Some(&element) {
            self.arm(self.top_element);
        }
    }

    /// Makes the element at `index` visible and starts listening for drags on it.
    fn arm(&mut self, index: usize) {
        let Some(element) = self.swipe_elements.get(index).cloned() else {
            return;
        };
        tracing::trace!(index, ?element, "arming element");

        let mut style = self.host.style(&element);
        style.display = Some(Display::Block);
        self.host.set_style(&element, style);

        self.host
            .subscribe(ListenerTarget::Element(element), PointerPhase::Down);
        self.host
            .subscribe(ListenerTarget::Document, PointerPhase::Move);
        self.host.subscribe(ListenerTarget::Document, PointerPhase::Up);
    }

    fn index_of(&self, element: &H::Element) -> Option<usize> {
        self.swipe_elements.iter().position(|e| e == element)
    }

    pub fn settings(&self) -> &SwipeSettings {
        &self.settings
    }

    /// The stack in document order.
    pub fn elements(&self) -> &[H::Element] {
        &self.swipe_elements
    }

    /// Index of the element that currently accepts drags. `None` for an empty stack.
    pub fn armed_index(&self) -> Option<usize> {
        (!self.swipe_elements.is_empty()).then_some(self.top_element)
    }

    pub fn armed_element(&self) -> Option<&H::Element> {
        self.armed_index().and_then(|i| self.swipe_elements.get(i))
    }

    /// The element being dragged right now.
    pub fn active_element(&self) -> Option<&H::Element> {
        self.session.as_ref().map(|session| &session.element)
    }

    pub fn session(&self) -> Option<&DragSession<H::Element>> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: SwipeHost + std::fmt::Debug> std::fmt::Debug for SwipeController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeController")
            .field("host", &self.host)
            .field("settings", &self.settings)
            .field("swipe_elements", &self.swipe_elements)
            .field("top_element", &self.top_element)
            .field("session", &self.session)
            .finish()
    }
}
