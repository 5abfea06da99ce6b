use green::stage::render::MacroquadCanvas;
use green::stage::world::WorldView;
use macroquad::prelude::*;

mod demo;
mod ui;

#[macroquad::main("Green")]
async fn main() {
    env_logger::init();

    let path = std::env::args().nth(1);
    let params = demo::DemoParams::load_or_default(path.as_deref());

    let mut canvas = MacroquadCanvas::new();
    let sprites = demo::Sprites::load(&mut canvas, &params.sprites).await;
    let mut world = demo::populate(&params, &sprites);
    let mut ui_state = ui::UiState::new();

    log::info!(
        "starting with {} actors in a {}x{} world",
        world.len(),
        world.width(),
        world.height()
    );

    loop {
        clear_background(Color::from_rgba(28, 36, 28, 255));

        if !ui_state.paused {
            world.tick(get_frame_time() * ui_state.speed);
        }

        canvas.fit(world.width(), world.height());
        draw_rectangle_lines(
            0.0,
            0.0,
            world.width() * canvas.scale(),
            world.height() * canvas.scale(),
            2.0,
            DARKGRAY,
        );
        world.draw(&mut canvas);

        if is_mouse_button_pressed(MouseButton::Left) && !ui_state.pointer_over_ui {
            let (mouse_x, mouse_y) = mouse_position();
            ui_state.selected = demo::pick(&world, canvas.to_world(mouse_x, mouse_y));
        }

        ui::draw_ui(&mut ui_state, &world);
        ui::process_egui();

        next_frame().await
    }
}
