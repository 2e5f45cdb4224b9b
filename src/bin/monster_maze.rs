use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{debug, info};
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use monster_maze::{
    audio::{AudioSink, LogAudio, NullAudio},
    config::Args,
    engine::Engine,
    renderer::Software,
    sim::{InputCmd, Keys, MatchState, Simulation},
    world::Map,
};

const TITLE: &str = "3D Monster Maze";

fn end_message(state: MatchState) -> Option<&'static str> {
    match state {
        MatchState::Playing => None,
        MatchState::Won => Some("You Win!: You have defeated the monster!"),
        MatchState::Lost => Some("Game Over: You have been caught by the monster!"),
    }
}

fn read_keys(win: &Window) -> Keys {
    let mut keys = Keys::empty();
    keys.set(
        Keys::LEFT,
        win.is_key_down(Key::Left) || win.is_key_down(Key::A),
    );
    keys.set(
        Keys::RIGHT,
        win.is_key_down(Key::Right) || win.is_key_down(Key::D),
    );
    keys.set(
        Keys::FORWARD,
        win.is_key_down(Key::Up) || win.is_key_down(Key::W),
    );
    keys.set(
        Keys::BACK,
        win.is_key_down(Key::Down) || win.is_key_down(Key::S),
    );
    keys.set(Keys::FIRE, win.is_key_pressed(Key::Space, KeyRepeat::No)); // edge-trigger
    keys
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let (w, h) = (args.width as usize, args.height as usize);
    let frame_delay = Duration::from_millis(args.frame_delay_ms);

    let mut sim = Simulation::new(Map::default_maze());
    let mut engine = Engine::new(Software::default(), w, h)?;
    let mut audio: Box<dyn AudioSink> = if args.mute {
        Box::new(NullAudio)
    } else {
        Box::new(LogAudio::new())
    };

    let mut win = Window::new(TITLE, w, h, WindowOptions::default())?;
    let screen = engine.screen();
    info!(
        "window {}x{}, frame delay {} ms",
        screen.w, screen.h, args.frame_delay_ms
    );

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    let start = Instant::now();
    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now();

        /* --------------- one tic per frame -------------------------------- */
        let cmd = InputCmd::from_keys(read_keys(&win));
        let tick = sim.tick(cmd, start.elapsed().as_millis() as u64);
        audio.play_events(&tick.events);

        /* draw */
        engine.render_frame(&sim, |fb, w, h| win.update_with_buffer(fb, w, h))??;
        acc_time += t0.elapsed();
        acc_frames += 1;

        if let Some(msg) = end_message(tick.state) {
            info!("{msg}");
            win.set_title(msg);
            break;
        }

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            debug!("avg frame: {avg_ms:.2} ms ({:.1} FPS)", 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }

        thread::sleep(frame_delay);
    }

    /* --------------- end screen: wait for Enter / Escape / close --------- */
    if sim.state().is_over() {
        while win.is_open() && !win.is_key_down(Key::Escape) && !win.is_key_down(Key::Enter) {
            engine.render_frame(&sim, |fb, w, h| win.update_with_buffer(fb, w, h))??;
            thread::sleep(frame_delay);
        }
    }

    info!("bye");
    Ok(())
}
