use eframe::{App, Frame, NativeOptions};
use egui::{vec2, Align2, CentralPanel, Context, FontId};
use egui_swipe::{Direction, SwipeOptions, SwipeResponse, SwipeStack};
use tracing_subscriber::EnvFilter;

const CARDS: [&str; 5] = ["Ferris", "Corro", "Tux", "Gopher", "Duke"];

/// Which card went where, built from the responses of the stack.
#[derive(Debug, Default)]
struct SwipeHistory {
    dragging: Option<usize>,
    swipes: Vec<(usize, Direction)>,
}

impl SwipeHistory {
    fn record(&mut self, response: SwipeResponse) {
        match response {
            SwipeResponse::DragStarted { index } => self.dragging = Some(index),
            SwipeResponse::Dropped(direction) => {
                if let Some(index) = self.dragging.take() {
                    tracing::info!(card = CARDS[index], %direction, "swiped");
                    self.swipes.push((index, direction));
                }
            }
            SwipeResponse::Cancelled => self.dragging = None,
            SwipeResponse::NoDrag | SwipeResponse::Dragging => {}
        }
    }
}

struct SwipeApp {
    stack: SwipeStack,
    history: SwipeHistory,
}

impl SwipeApp {
    fn new() -> egui_swipe::Result<Self> {
        let options = SwipeOptions::default().with_y_enabled(false);
        Ok(Self {
            stack: SwipeStack::new(CARDS.len(), options)?,
            history: SwipeHistory::default(),
        })
    }
}

impl App for SwipeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ui.heading("Swipe left or right");
            ui.add_space(16.0);

            let response = self.stack.ui(ui, |ui, index| {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.heading(CARDS[index]);
                });
            });
            self.history.record(response);

            if let Some(slot) = self.stack.slot() {
                let font = FontId::proportional(24.0);
                let color = ui.visuals().weak_text_color();
                let painter = ui.painter();
                painter.text(
                    slot.left_center() - vec2(12.0, 0.0),
                    Align2::RIGHT_CENTER,
                    "⬅",
                    font.clone(),
                    color,
                );
                painter.text(
                    slot.right_center() + vec2(12.0, 0.0),
                    Align2::LEFT_CENTER,
                    "➡",
                    font,
                    color,
                );
            }

            ui.add_space(16.0);
            ui.label(format!("{} swiped", self.history.swipes.len()));
            for (index, direction) in self.history.swipes.iter().rev().take(5) {
                ui.label(format!("{} went {direction}", CARDS[*index]));
            }
        });
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = SwipeApp::new()?;
    eframe::run_native(
        "Swipe Example",
        NativeOptions::default(),
        Box::new(|_| Box::new(app)),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_drag_does_not_shift_card_names() {
        let mut history = SwipeHistory::default();

        history.record(SwipeResponse::DragStarted { index: 0 });
        history.record(SwipeResponse::Dragging);
        history.record(SwipeResponse::Cancelled);

        history.record(SwipeResponse::DragStarted { index: 1 });
        history.record(SwipeResponse::Dropped(Direction::Left));

        assert_eq!(history.swipes, vec![(1, Direction::Left)]);
        assert_eq!(history.dragging, None);
    }

    #[test]
    fn wraps_around_with_the_stack() {
        let mut history = SwipeHistory::default();
        for index in [3, 4, 0] {
            history.record(SwipeResponse::DragStarted { index });
            history.record(SwipeResponse::Dropped(Direction::Right));
        }

        let indices = history.swipes.iter().map(|(i, _)| *i).collect::<Vec<_>>();
        assert_eq!(indices, vec![3, 4, 0]);
    }
}
