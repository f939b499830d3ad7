use enzo_backdrop::config::BackdropConfig;
use enzo_backdrop::window;

fn main() {
    env_logger::init();

    if let Err(e) = window::run(BackdropConfig::default()) {
        log::error!("backdrop exited with error: {}", e);
        std::process::exit(1);
    }
}
