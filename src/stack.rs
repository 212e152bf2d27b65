use egui::{self, CursorIcon, Id, Order, Pos2, Rect, Sense, Ui, Vec2};
use epaint::Shape;

use crate::{
    event::{PointerEvent, PointerPhase},
    host::{Display, Position, SwipeHost},
    memory::{MemoryHost, NodeId},
    settings::{SwipeOptions, DEFAULT_SELECTOR},
    state::{SwipeController, SwipeResponse},
    Result,
};

/// Where a visible card ends up this frame
struct CardLayout {
    index: usize,
    element: NodeId,
    rect: Rect,
    floating: bool,
}

/// A stack of cards the user can swipe left or right, drawn with egui.
///
/// The armed card sits in a slot allocated in the parent ui. While a card is dragged it floats in
/// a foreground [`egui::Area`] and the next card already shows in the slot underneath.
///
/// # Example
/// ```rust
/// use egui_swipe::{SwipeOptions, SwipeResponse, SwipeStack};
///
/// struct Cards {
///     names: Vec<String>,
///     stack: SwipeStack,
/// }
///
/// impl Cards {
///     fn ui(&mut self, ui: &mut egui::Ui) {
///         let names = &self.names;
///         let response = self.stack.ui(ui, |ui, index| {
///             ui.heading(names[index].as_str());
///         });
///         if let SwipeResponse::Dropped(direction) = response {
///             ui.label(format!("swiped {direction}"));
///         }
///     }
/// }
///
/// let names = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
/// let stack = SwipeStack::new(names.len(), SwipeOptions::default()).unwrap();
/// let _cards = Cards { names, stack };
/// ```
#[derive(Debug)]
pub struct SwipeStack {
    controller: SwipeController<MemoryHost>,
    card_size: Vec2,
    /// Slot allocated for the armed card during the last frame
    slot: Option<Rect>,
}

impl SwipeStack {
    /// A stack of `count` cards. `options` configure the underlying [`SwipeController`].
    pub fn new(count: usize, options: SwipeOptions) -> Result<Self> {
        let selector = options
            .selector
            .clone()
            .unwrap_or_else(|| DEFAULT_SELECTOR.to_owned());
        let mut host = MemoryHost::new();
        host.add_container(selector, count);

        Ok(Self {
            controller: SwipeController::init(host, None, options)?,
            card_size: Vec2::new(240.0, 320.0),
            slot: None,
        })
    }

    pub fn with_card_size(mut self, card_size: Vec2) -> Self {
        self.card_size = card_size;
        self
    }

    pub fn controller(&self) -> &SwipeController<MemoryHost> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SwipeController<MemoryHost> {
        &mut self.controller
    }

    /// Screen rect the resting card occupied during the last frame. Useful for placing other
    /// widgets, like swipe hints, next to the stack.
    pub fn slot(&self) -> Option<Rect> {
        self.slot
    }

    /// Draws the stack and feeds this frame's pointer input to the controller.
    ///
    /// `card_ui` draws the contents of the card at the given index.
    pub fn ui(&mut self, ui: &mut Ui, mut card_ui: impl FnMut(&mut Ui, usize)) -> SwipeResponse {
        let (slot, _) = ui.allocate_exact_size(self.card_size, Sense::hover());
        self.slot = Some(slot);

        let response = self.handle_input(ui, slot);

        for card in self.layout(slot) {
            if card.floating {
                egui::Area::new(Id::new(("egui_swipe_card", card.element)))
                    .order(Order::Foreground)
                    .interactable(false)
                    .fixed_pos(card.rect.min)
                    .show(ui.ctx(), |area_ui| {
                        area_ui.set_min_size(card.rect.size());
                        paint_card(area_ui, card.rect, true);
                        card_ui(area_ui, card.index);
                    });
            } else {
                let mut card_ui_area = ui.child_ui(card.rect, *ui.layout());
                paint_card(&card_ui_area, card.rect, false);
                card_ui(&mut card_ui_area, card.index);
            }
        }

        response
    }

    fn handle_input(&mut self, ui: &Ui, slot: Rect) -> SwipeResponse {
        let (pressed, released, pointer_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos().or(i.pointer.latest_pos()),
            )
        });
        let Some(pos) = pointer_pos else {
            return SwipeResponse::NoDrag;
        };

        // topmost card under the pointer, floating cards are drawn last
        let hit = self
            .layout(slot)
            .into_iter()
            .rev()
            .find(|card| card.rect.contains(pos));
        let target = hit.as_ref().map(|card| card.element);
        let event = PointerEvent::at(pos, hit.as_ref().map_or(Vec2::ZERO, |card| pos - card.rect.min));

        let mut response = SwipeResponse::NoDrag;
        if pressed {
            response = self
                .controller
                .dispatch(PointerPhase::Down, target.as_ref(), &event);
        } else if self.controller.is_dragging() {
            response = self
                .controller
                .dispatch(PointerPhase::Move, target.as_ref(), &event);
        }
        if released {
            response = self
                .controller
                .dispatch(PointerPhase::Up, target.as_ref(), &event);
        }

        if self.controller.is_dragging() {
            ui.output_mut(|o| o.cursor_icon = CursorIcon::Grabbing);
        } else if target.is_some() && target.as_ref() == self.controller.armed_element() {
            ui.output_mut(|o| o.cursor_icon = CursorIcon::Grab);
        }

        response
    }

    /// Visible cards in draw order: the one resting in the slot first, the dragged one on top.
    fn layout(&self, slot: Rect) -> Vec<CardLayout> {
        let host = self.controller.host();
        let mut cards = self
            .controller
            .elements()
            .iter()
            .enumerate()
            .filter_map(|(index, element)| {
                let style = host.style(element);
                if style.display != Some(Display::Block) {
                    return None;
                }

                let floating = style.position == Some(Position::Absolute);
                let rect = if floating {
                    let min = Pos2::new(
                        style.left.unwrap_or(slot.min.x),
                        style.top.unwrap_or(slot.min.y),
                    );
                    Rect::from_min_size(min, slot.size())
                } else {
                    slot
                };

                Some(CardLayout {
                    index,
                    element: *element,
                    rect,
                    floating,
                })
            })
            .collect::<Vec<_>>();
        cards.sort_by_key(|card| card.floating);
        cards
    }
}

fn paint_card(ui: &Ui, rect: Rect, dragged: bool) {
    let style = if dragged {
        ui.visuals().widgets.active
    } else {
        ui.visuals().widgets.inactive
    };

    ui.painter()
        .add(Shape::rect_filled(rect, style.rounding, style.bg_fill));
    ui.painter()
        .add(Shape::rect_stroke(rect, style.rounding, style.bg_stroke));
}
