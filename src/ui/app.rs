//! Main application for the Gobang GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::info;

use super::board_view::BoardView;
use super::presentation::UiPresentation;
use super::theme::*;
use crate::game::{GameConfig, TurnController};
use crate::rules::{winning_window, Outcome};
use crate::Side;

/// Main Gobang application
pub struct GobangApp {
    game: TurnController<UiPresentation>,
    config: GameConfig,
    board_view: BoardView,
    message: Option<String>,
}

impl GobangApp {
    /// Create the app and start the first game
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        let mut game = TurnController::new(config, UiPresentation::default());
        game.start();

        Self {
            game,
            config,
            board_view: BoardView::default(),
            message: None,
        }
    }

    fn new_game(&mut self) {
        self.message = None;
        self.game.start();
    }

    /// Rebuild the session with a different auto mode and start it
    fn set_auto_mode(&mut self, auto_mode: bool) {
        info!(auto_mode, "switching mode");
        self.config = self.config.with_auto_mode(auto_mode);
        self.game = TurnController::new(self.config, UiPresentation::default());
        self.new_game();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    let mut auto_mode = self.config.auto_mode;
                    if ui.checkbox(&mut auto_mode, "Auto mode").changed() {
                        self.set_auto_mode(auto_mode);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = if self.config.auto_mode {
                        "Auto - self play"
                    } else {
                        "You: White"
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_info_card(ui);

                if let Some(outcome) = self.game.presentation().outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOBANG").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("五子棋").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let side = self.game.side_to_move();
            let (stone_char, accent) = match side {
                Side::Black => ("●", egui::Color32::from_rgb(70, 70, 75)),
                Side::White => ("○", egui::Color32::from_rgb(220, 220, 225)),
            };

            ui.horizontal(|ui| {
                let stone_color = match side {
                    Side::Black => TEXT_PRIMARY,
                    Side::White => egui::Color32::from_rgb(30, 30, 35),
                };

                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = side.to_string().to_uppercase();
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.game.is_finished() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if self.game.awaiting_input() {
                        ("Your turn", STATUS_WAITING)
                    } else {
                        ("Waiting", TEXT_MUTED)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_info_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("GAME").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.game.move_count()))
                    .size(14.0)
                    .color(TEXT_PRIMARY),
            );

            if let Some(mv) = self.game.last_move() {
                ui.label(
                    RichText::new(format!("Last: {} at {}", mv.side, mv.pos))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render game over card with the replay prompt
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let (headline, symbol) = match outcome {
            Outcome::WinBy(Side::Black) => ("BLACK WINS!", "●"),
            Outcome::WinBy(Side::White) => ("WHITE WINS!", "○"),
            Outcome::Draw | Outcome::Ongoing => ("DRAW!", "●○"),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(symbol).size(32.0).color(TEXT_PRIMARY));
                    ui.label(RichText::new(headline).size(18.0).strong().color(WIN_HIGHLIGHT));
                    ui.add_space(8.0);
                    ui.label(RichText::new("Play again?").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        if ui.button("Play again").clicked() {
                            self.new_game();
                        }
                        if ui.button("Quit").clicked() {
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0).color(STATUS_WARNING));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board and forward clicks to the controller
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let board = self.game.board();
            let winning_line = self
                .game
                .last_move()
                .and_then(|mv| winning_window(board, mv.pos))
                .map(|(_, line)| line);

            let clicked = self.board_view.show(
                ui,
                board,
                self.game.last_move().map(|mv| mv.pos),
                winning_line,
                self.game.awaiting_input(),
            );

            if let Some(pos) = clicked {
                self.message = self.game.submit_move(pos).err().map(|err| err.to_string());
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.new_game();
        }
    }
}

impl eframe::App for GobangApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
