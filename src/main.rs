//! Retro Snake runner.
//!
//! One cooperative loop: poll input, let the tick gate decide whether the
//! game advances, consume the core's event for sound and logging, draw,
//! present the frame. Window close ends the loop and drops all resources.

use log::{error, info};
use macroquad::audio::play_sound_once;
use macroquad::time::get_time;
use macroquad::window::{next_frame, Conf};

use retro_snake::assets::Assets;
use retro_snake::core::Game;
use retro_snake::input;
use retro_snake::render;
use retro_snake::timing::TickGate;
use retro_snake::types::{GameEvent, GridConfig, TICK_INTERVAL_SECS, WINDOW_TITLE};

fn window_conf() -> Conf {
    let grid = GridConfig::default();
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: grid.canvas_px(),
        window_height: grid.canvas_px(),
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    pretty_env_logger::init();

    let assets = match Assets::load().await {
        Ok(assets) => assets,
        Err(err) => {
            error!("asset setup failed: {err:#}");
            std::process::exit(1);
        }
    };

    let mut rng = rand::thread_rng();
    let mut game = Game::new(GridConfig::default(), &mut rng);
    let mut tick_gate = TickGate::new(TICK_INTERVAL_SECS);

    info!("starting {WINDOW_TITLE}");

    loop {
        if let Some(dir) = input::poll_direction() {
            game.steer(dir);
        }

        if tick_gate.should_tick(get_time()) {
            game.update(&mut rng);
        }

        match game.take_event() {
            Some(GameEvent::Ate) => play_sound_once(&assets.eat),
            Some(GameEvent::Crashed { final_score }) => {
                play_sound_once(&assets.crash);
                info!("round over, final score {final_score}");
            }
            None => {}
        }

        render::draw_scene(&game, &assets);

        next_frame().await;
    }
}
