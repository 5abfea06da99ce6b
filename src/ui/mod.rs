// UI module - egui overlay for inspecting the running world

mod inspector;

use egui_macroquad::egui;
use green::stage::actor::ActorId;
use green::stage::world::{World, WorldView};

pub struct UiState {
    pub paused: bool,
    pub speed: f32,
    pub selected: Option<ActorId>,
    pub pointer_over_ui: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            paused: false,
            speed: 1.0,
            selected: None,
            pointer_over_ui: false,
        }
    }
}

pub fn draw_ui(state: &mut UiState, world: &World) {
    egui_macroquad::ui(|egui_ctx| {
        egui_ctx.set_visuals(egui::Visuals::dark());

        inspector::draw_world_panel(egui_ctx, state, world);

        if let Some(id) = state.selected {
            match world.actor(id) {
                Some(actor) => inspector::draw_actor_panel(egui_ctx, state, actor, world),
                // Selected actor left the world
                None => state.selected = None,
            }
        }

        inspector::draw_events_panel(egui_ctx, world);

        state.pointer_over_ui = egui_ctx.wants_pointer_input();
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
