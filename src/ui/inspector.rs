use egui_macroquad::egui;
use green::stage::actor::Actor;
use green::stage::event_log::Change;
use green::stage::world::{World, WorldView};

use super::UiState;
use crate::demo::{ROCK, SEEKER, WANDERER};

pub fn draw_world_panel(egui_ctx: &egui::Context, state: &mut UiState, world: &World) {
    egui::Window::new("World")
        .default_pos(egui::pos2(10.0, 10.0))
        .resizable(false)
        .show(egui_ctx, |ui| {
            ui.label(format!("Time: {:.1}s", world.time()));
            ui.label(format!(
                "Size: {:.0} x {:.0} ({})",
                world.width(),
                world.height(),
                if world.is_bounded() { "bounded" } else { "unbounded" }
            ));
            ui.separator();

            egui::Grid::new("population").show(ui, |ui| {
                for kind in [WANDERER, SEEKER, ROCK] {
                    ui.label(kind.name());
                    ui.label(world.actors_of(kind).count().to_string());
                    ui.end_row();
                }
            });
            ui.separator();

            ui.checkbox(&mut state.paused, "Paused");
            ui.add(egui::Slider::new(&mut state.speed, 0.0..=4.0).text("Speed"));
            ui.label("Click an actor to inspect it");
        });
}

pub fn draw_actor_panel(
    egui_ctx: &egui::Context,
    state: &mut UiState,
    actor: &Actor,
    world: &World,
) {
    egui::Window::new("Actor")
        .default_pos(egui::pos2(10.0, 260.0))
        .resizable(false)
        .show(egui_ctx, |ui| {
            ui.heading(actor.to_string());
            egui::Grid::new("actor_fields").show(ui, |ui| {
                let rows = [
                    ("Position", format!("({:.1}, {:.1})", actor.x(), actor.y())),
                    ("Z", format!("{:.1}", actor.z())),
                    ("Rotation", format!("{:.1}°", actor.rotation())),
                    ("Size", format!("{:.1} x {:.1}", actor.width(), actor.height())),
                    ("Opacity", format!("{:.0}", actor.opacity())),
                    (
                        "At edge",
                        actor
                            .is_at_edge(world)
                            .map(|edge| edge.to_string())
                            .unwrap_or_else(|e| e.to_string()),
                    ),
                ];
                for (name, value) in rows {
                    ui.label(name);
                    ui.label(value);
                    ui.end_row();
                }
            });

            let touching = actor.intersecting_objects(green::stage::kind::Kind::ANY, world);
            if let Ok(touching) = touching {
                if !touching.is_empty() {
                    ui.separator();
                    ui.label("Touching:");
                    for other in touching {
                        ui.label(other.to_string());
                    }
                }
            }

            if ui.button("Deselect").clicked() {
                state.selected = None;
            }
        });
}

/// Draws a transparent panel showing recent membership changes
pub fn draw_events_panel(egui_ctx: &egui::Context, world: &World) {
    let screen_height = egui_ctx.screen_rect().height();
    let panel_height = 220.0;

    egui::Window::new("Recent Events")
        .fixed_pos(egui::pos2(10.0, screen_height - panel_height - 10.0))
        .fixed_size(egui::vec2(300.0, panel_height))
        .frame(
            egui::Frame::window(&egui_ctx.style())
                .fill(egui::Color32::from_rgba_premultiplied(20, 20, 30, 200)),
        )
        .show(egui_ctx, |ui| {
            let log = world.event_log();
            if log.is_empty() {
                ui.label(egui::RichText::new("No events yet...").color(egui::Color32::GRAY));
                return;
            }
            for event in log.events() {
                let color = match event.change {
                    Change::Added => egui::Color32::from_rgb(100, 255, 100),
                    Change::Removed => egui::Color32::from_rgb(255, 100, 100),
                };
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("[{:.1}s]", event.time))
                            .size(11.0)
                            .monospace(),
                    );
                    ui.label(egui::RichText::new(&event.label).color(color).size(11.0));
                });
            }
        });
}
