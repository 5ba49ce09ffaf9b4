use std::time::Instant;

use anyhow::Context;
use eframe::{App, Frame, NativeOptions, egui, run_native};
use egui::{Color32, FontId, TextureHandle, TextureOptions, pos2};
use log::info;
use platesim_core::button::{ButtonAction, ButtonLatch, TriggerMode};
use platesim_core::config::{
    BLOCK_SIZE, BUTTON_COLOR, BUTTON_HOVER_COLOR, PLATES_FPS, TEXT_COLOR, WINDOW_HEIGHT,
    WINDOW_WIDTH,
};
use platesim_core::render::terrain_image;
use platesim_core::{SimConfig, Simulation};
use platesim_app::frame::FrameClock;
use platesim_app::widgets::{color32, draw_button, draw_texture, to_color_image};

struct PlatesApp {
    sim: Simulation,
    clock: FrameClock,
    // one latch per ButtonAction::ALL entry
    latches: [ButtonLatch; 3],
    terrain_texture: Option<TextureHandle>,
}

impl PlatesApp {
    fn new(sim: Simulation, trigger: TriggerMode) -> Self {
        Self {
            sim,
            clock: FrameClock::new(PLATES_FPS),
            latches: std::array::from_fn(|_| ButtonLatch::new(trigger)),
            terrain_texture: None,
        }
    }

    fn run_action(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::RandomizeSpeed => {
                let speed = self.sim.randomize_plate_speed();
                info!("plate speed -> {speed}");
            }
            ButtonAction::RandomizeEarthquakeProbability => {
                let p = self.sim.randomize_earthquake_probability();
                info!("earthquake probability -> {p:.3}");
            }
            ButtonAction::PrintStats => println!("{}", self.sim.stats()),
        }
    }

    // One simulation step plus button handling, at PLATES_FPS
    fn step(&mut self, ctx: &egui::Context) {
        let report = self.sim.tick();
        if let Some(quake) = report.earthquake {
            println!("{quake}");
        }

        let pointer = ctx.input(|i| i.pointer.hover_pos());
        for (i, action) in ButtonAction::ALL.into_iter().enumerate() {
            let rect = action.rect();
            let hovered = pointer.is_some_and(|p| rect.contains(p.x, p.y));
            if self.latches[i].update(hovered) {
                self.run_action(action);
            }
        }

        let image = to_color_image(&terrain_image(self.sim.terrain(), self.sim.plates()));
        match &mut self.terrain_texture {
            Some(tex) => tex.set(image, TextureOptions::NEAREST),
            None => {
                self.terrain_texture =
                    Some(ctx.load_texture("terrain", image, TextureOptions::NEAREST));
            }
        }
    }
}

impl App for PlatesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let now = Instant::now();
        if self.clock.due(now) {
            self.step(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let painter = ui.painter();
            let block = BLOCK_SIZE as f32;
            let terrain = self.sim.terrain();

            if let Some(tex) = &self.terrain_texture {
                let size = egui::vec2(
                    terrain.width() as f32 * block,
                    terrain.height() as f32 * block,
                );
                draw_texture(painter, tex, size);
            }

            for plate in self.sim.plates() {
                let color = color32(plate.color);
                for &(x, y) in &plate.blocks {
                    if terrain.in_bounds(x, y) {
                        let center = pos2(x as f32 * block + block / 2.0, y as f32 * block + block / 2.0);
                        painter.circle_filled(center, block / 2.0, color);
                    }
                }
            }

            let font = FontId::proportional(22.0);
            painter.text(
                pos2(10.0, 10.0),
                egui::Align2::LEFT_TOP,
                format!("Plates: {}", self.sim.plates().len()),
                font.clone(),
                color32(TEXT_COLOR),
            );
            for (i, plate) in self.sim.plates().iter().enumerate() {
                painter.text(
                    pos2(10.0, 40.0 + i as f32 * 30.0),
                    egui::Align2::LEFT_TOP,
                    format!("Plate {}: {} blocks", i, plate.blocks.len()),
                    font.clone(),
                    color32(plate.color),
                );
            }

            let pointer = ctx.input(|i| i.pointer.hover_pos());
            for action in ButtonAction::ALL {
                let rect = action.rect();
                let hovered = pointer.is_some_and(|p| rect.contains(p.x, p.y));
                let fill: Color32 = color32(if hovered { BUTTON_HOVER_COLOR } else { BUTTON_COLOR });
                draw_button(painter, &rect, action.label(), fill);
            }
        });

        ctx.request_repaint_after(self.clock.until_next(Instant::now()));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let sim = Simulation::new(SimConfig::default()).context("invalid simulation config")?;
    info!(
        "starting {}x{} grid with {} plates",
        sim.config().width,
        sim.config().height,
        sim.plates().len()
    );

    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tectonic Plate Simulator")
            .with_inner_size([WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32])
            .with_resizable(false),
        ..Default::default()
    };
    run_native(
        "Tectonic Plate Simulator",
        opts,
        Box::new(move |_cc| Ok(Box::new(PlatesApp::new(sim, TriggerMode::default())))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
