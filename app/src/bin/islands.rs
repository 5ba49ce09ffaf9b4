use std::time::Duration;

use anyhow::Context;
use eframe::{App, Frame, NativeOptions, egui, run_native};
use egui::{ColorImage, TextureHandle, TextureOptions};
use log::info;
use platesim_app::cli::parse_island_args;
use platesim_app::widgets::{draw_texture, to_color_image};
use platesim_core::config::{ISLAND_BLOCK_SIZE, ISLANDS_FPS, WINDOW_HEIGHT, WINDOW_WIDTH};
use platesim_core::render::height_image;
use platesim_core::{HeightSampler, IslandConfig};

// Heights are computed once at startup and never change
struct IslandsApp {
    image: Option<ColorImage>,
    texture: Option<TextureHandle>,
    grid_size: egui::Vec2,
}

impl App for IslandsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        if let Some(image) = self.image.take() {
            self.texture = Some(ctx.load_texture("islands", image, TextureOptions::NEAREST));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(tex) = &self.texture {
                draw_texture(ui.painter(), tex, self.grid_size);
            }
        });

        ctx.request_repaint_after(Duration::from_secs(1) / ISLANDS_FPS);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let defaults = IslandConfig::default();
    let args = parse_island_args(std::env::args().skip(1), defaults.scale)?;
    let config = IslandConfig {
        scale: args.scale,
        noise: args.noise,
        ..defaults
    };

    let mut sampler = HeightSampler::new(config.clone()).context("invalid island config")?;
    let heights = sampler.generate();
    info!(
        "generated {}x{} height map (scale {}, {:?} noise)",
        config.width, config.height, config.scale, config.noise
    );

    let block = ISLAND_BLOCK_SIZE as f32;
    let app = IslandsApp {
        image: Some(to_color_image(&height_image(&heights))),
        texture: None,
        grid_size: egui::vec2(config.width as f32 * block, config.height as f32 * block),
    };

    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Island Generator")
            .with_inner_size([WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32])
            .with_resizable(false),
        ..Default::default()
    };
    run_native("Island Generator", opts, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
