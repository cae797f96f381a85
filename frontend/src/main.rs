use clap::Parser;

mod config;
mod input;
mod pattern;
mod session;
mod video;

fn main() {
    env_logger::init();

    let cli = config::Cli::parse();
    let cfg = config::Config::resolve(&cli).unwrap_or_else(|e| {
        eprintln!("dotmatrix: {e}");
        std::process::exit(1);
    });
    log::debug!("resolved config: {cfg:?}");

    let sdl = sdl2::init().expect("failed to initialize SDL");
    let sdl_video = sdl.video().expect("failed to initialize SDL video");
    sdl.mouse().show_cursor(false);

    let mut video = video::Video::new(&sdl_video, &cfg);
    video.set_title("dotmatrix");
    let mut pump = sdl.event_pump().expect("failed to acquire event pump");

    let translator = input::default_translator();
    let mut source = pattern::TestPattern::new();
    let mut joystick = input::NullJoystick;

    if video.indexed() {
        // grayscale ramp so indexed modes show the pattern
        for i in 0..=255u8 {
            video.set_palette_entry(i, i, i, i);
        }
    }

    session::run(
        &mut video,
        &mut pump,
        &mut source,
        &mut joystick,
        &translator,
        &cfg,
    );
}
