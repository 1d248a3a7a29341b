// ui.rs - egui front end driving the Fibonacci grid

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use fib_grid::{Grid, GridConfig, MIN_DIMENSION, MIN_FIB_LEN};

use crate::highlight::{Highlight, Highlights};

pub struct FibGridApp {
    pub grid: Grid,
    pub width_input: String,
    pub height_input: String,
    pub fib_len_input: String,
    pub status: Option<String>,
    pub highlights: Highlights,
}

impl Default for FibGridApp {
    fn default() -> Self {
        let grid = Grid::default();
        Self {
            width_input: grid.width().to_string(),
            height_input: grid.height().to_string(),
            fib_len_input: grid.fib_len().to_string(),
            status: None,
            highlights: Highlights::default(),
            grid,
        }
    }
}

/// Parse a number typed into one of the shape inputs, raising it to `min`.
fn parse_at_least(input: &str, min: usize) -> Result<usize, std::num::ParseIntError> {
    Ok(input.trim().parse::<usize>()?.max(min))
}

impl FibGridApp {
    fn parsed_config(&self) -> Result<GridConfig, std::num::ParseIntError> {
        Ok(GridConfig::new(
            parse_at_least(&self.width_input, MIN_DIMENSION)?,
            parse_at_least(&self.height_input, MIN_DIMENSION)?,
            parse_at_least(&self.fib_len_input, MIN_FIB_LEN)?,
        ))
    }

    /// Rebuild the grid from the shape inputs.
    pub fn apply_reset(&mut self) {
        let config = match self.parsed_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("could not parse grid shape: {e}");
                self.status = Some("could not parse input".to_owned());
                return;
            }
        };
        match self.grid.reset_with_config(config) {
            Ok(()) => {
                tracing::info!(width = config.width, height = config.height, fib_len = config.fib_len, "grid reset");
                self.width_input = config.width.to_string();
                self.height_input = config.height.to_string();
                self.fib_len_input = config.fib_len.to_string();
                self.highlights.clear();
                self.status = None;
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    /// Toggle the row and column through the clicked cell at column `x`, row `y`.
    pub fn click(&mut self, x: usize, y: usize, now: Instant) {
        match self.grid.toggle(y, x) {
            Ok(toggle) => {
                for cell in &toggle.advanced {
                    self.highlights.set(cell.position(), Highlight::Advanced, now);
                }
                for cell in &toggle.reset {
                    self.highlights.set(cell.position(), Highlight::Reset, now);
                }
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }
}

impl eframe::App for FibGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.highlights.expire(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Fibonacci Grid");

            // Controls
            ui.horizontal(|ui| {
                ui.label("width");
                ui.add(egui::TextEdit::singleline(&mut self.width_input).desired_width(50.0));
                ui.label("height");
                ui.add(egui::TextEdit::singleline(&mut self.height_input).desired_width(50.0));
                ui.label("fibonacci length");
                ui.add(egui::TextEdit::singleline(&mut self.fib_len_input).desired_width(50.0));
                if ui.button("Reset").clicked() {
                    self.apply_reset();
                }
            });

            if let Some(status) = &self.status {
                ui.colored_label(Color32::LIGHT_RED, status.as_str());
            }

            ui.separator();

            // Draw the grid
            let box_size = Vec2::new(40.0, 20.0);
            let spacing = 1.0;
            let (width, height) = (self.grid.width(), self.grid.height());

            egui::ScrollArea::both().show(ui, |ui| {
                let start_pos = ui.cursor().min;
                let total_size = Vec2::new(
                    (box_size.x + spacing) * width as f32 - spacing,
                    (box_size.y + spacing) * height as f32 - spacing,
                );
                let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
                let pointer = if response.clicked() { response.interact_pointer_pos() } else { None };
                let mut clicked = None;

                for cell in self.grid.cells() {
                    let x = start_pos.x + cell.x() as f32 * (box_size.x + spacing);
                    let y = start_pos.y + cell.y() as f32 * (box_size.y + spacing);
                    let rect = Rect::from_min_size(egui::pos2(x, y), box_size);

                    painter.rect_filled(rect, 1.0, self.highlights.color_at(cell.position()));
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.3, Color32::GRAY));
                    if cell.value() > 0 {
                        painter.text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            cell.value().to_string(),
                            egui::FontId::monospace(12.0),
                            Color32::BLACK,
                        );
                    }

                    if pointer.is_some_and(|pos| rect.contains(pos)) {
                        clicked = Some((cell.x(), cell.y()));
                    }
                }

                if let Some((x, y)) = clicked {
                    self.click(x, y, now);
                }
            });
        });

        // Keep repainting until the last highlight has reverted
        if let Some(deadline) = self.highlights.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}
