/*
By: <Draydon Levesque>
Date: 2026-02-10
Program Details: <Pinball physics demo>
*/

use macroquad::miniquad::date;
use macroquad::prelude::*;
use pinball::{BallOptions, KeyAction, PinballWorld, Side, WorldConfig, key_action, load_image};

/// Set up window settings before the app runs
fn window_conf() -> Conf {
    let config = WorldConfig::default();
    Conf {
        window_title: "pinball".to_string(),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        fullscreen: false,
        high_dpi: true,
        window_resizable: false,
        sample_count: 4, // MSAA
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = WorldConfig::default();
    let (screen_w, screen_h) = (config.screen_width, config.screen_height);
    let mut world = PinballWorld::new(config);

    // A missing sprite is fatal; the table has no fallback art.
    let ball_sprite = match load_image("images", "ball.png").await {
        Ok(texture) => texture,
        Err(err) => panic!("failed to load ball sprite: {err:?}"),
    };

    rand::srand(date::now() as u64);

    // Drop ten balls into the top-left corner of the table, each kicked with
    // a velocity equal to its own spawn point.
    for _ in 0..10 {
        let x = screen_w * rand::gen_range(0.0, 0.2);
        let y = screen_h * rand::gen_range(0.0, 0.2);
        world.add_ball(
            ball_sprite.clone(),
            BallOptions {
                x,
                y,
                vel_x: x,
                vel_y: y,
                ..BallOptions::new(30.0)
            },
        );
    }

    // Table edges plus the slanted floor.
    world.add_wall(0.0, 0.0, screen_w, 0.0, 3.0);
    world.add_wall(0.0, 0.0, 0.0, screen_h, 3.0);
    world.add_wall(screen_w, 0.0, screen_w, screen_h, 3.0);
    world.add_wall(0.0, screen_h * 0.8, screen_w, screen_h, 3.0);

    world.add_peg(screen_w / 2.0, screen_h / 2.0, 10.0);
    world.add_peg(screen_w / 1.5, screen_h / 2.5, 20.0);
    world.add_peg(screen_w / 2.5, screen_h / 1.5, 30.0);

    world.add_flipper(300.0, 300.0, Side::Left);

    loop {
        if let Some(key) = get_last_key_pressed() {
            match key_action(key) {
                KeyAction::Exit => break,
                KeyAction::Observe(code) => info!("unmapped key: {code:?}"),
            }
        }

        world.step();

        clear_background(BLACK);
        world.draw();

        next_frame().await;
    }
}
