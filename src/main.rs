use glam::Vec3;

use paperpad::core::camera::Camera;
use paperpad::core::window::{Dimensions, InitialWindowInfo};
use paperpad::engine::{EngineInfo, EngineInit};

fn main() -> anyhow::Result<()> {
    // setting up logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let info = EngineInfo {
        window_info: InitialWindowInfo {
            initial_dimensions: Dimensions {
                width: 800,
                height: 600,
            },
            title: "Paper Pad",
        },
        page_texture_path: "resources/book_pages.png",
        brick_texture_path: "resources/brick.png",
    };

    let camera = Camera::builder().position(Vec3::new(0.0, 0.0, 7.0)).build();

    let engine_init = EngineInit::new(info, camera)?;
    engine_init.start()
}
