use arboard::Clipboard;
use log::{error, info, LevelFilter};
use macroquad::prelude::*;
use rayfan::config::{VisualConfig, CONFIG_PATH};
use rayfan::logger::{init_logger, parse_level};
use rayfan::{normalize_cursor, raycast, Config, FanController, FrameInput, FrameTimer, RayFan, Rgb, WallSet};

fn window_conf() -> Conf {
    // Runs before main; the full load (with logging) happens there
    let config = Config::load_from(CONFIG_PATH).unwrap_or_default();
    Conf {
        window_title: config.visual.window_title,
        window_width: config.visual.window_width,
        window_height: config.visual.window_height,
        ..Default::default()
    }
}

fn to_color(c: Rgb) -> Color {
    Color::new(c.r, c.g, c.b, 1.0)
}

/// Normalized device coordinates to screen pixels
fn to_screen(p: rayfan::Point) -> (f32, f32) {
    ((p.x + 1.0) * 0.5 * screen_width(), (1.0 - p.y) * 0.5 * screen_height())
}

/// Everything the frame loop carries between frames
struct SceneState {
    fan: RayFan,
    walls: WallSet,
    controller: FanController,
    visual: VisualConfig,
}

impl SceneState {
    fn new(config: Config) -> Result<Self, rayfan::SceneError> {
        let fan = config.build_fan()?;
        let walls = config.build_walls()?;
        let controller = config.build_controller(&fan);

        Ok(SceneState {
            fan,
            walls,
            controller,
            visual: config.visual,
        })
    }

    fn sample_input() -> FrameInput {
        let (mouse_x, mouse_y) = mouse_position();
        FrameInput {
            cursor: normalize_cursor(mouse_x, mouse_y, screen_width(), screen_height()),
            rotate_positive: is_mouse_button_down(MouseButton::Right),
            rotate_negative: is_mouse_button_down(MouseButton::Left),
        }
    }

    fn update(&mut self, input: &FrameInput) {
        self.controller.update(&mut self.fan, input);
        raycast(&mut self.fan, &self.walls);
    }

    fn draw(&self) {
        clear_background(to_color(self.visual.background));

        for wall in &self.walls {
            let color = wall.colors().first().copied().unwrap_or(Rgb::WHITE);
            for edge in wall.segments() {
                let (x1, y1) = to_screen(edge.start);
                let (x2, y2) = to_screen(edge.end);
                draw_line(x1, y1, x2, y2, self.visual.wall_thickness, to_color(color));
            }
        }

        // colors[0] belongs to the origin, ray i ends at point i + 1
        let colors = self.fan.colors();
        for (i, segment) in self.fan.segments().enumerate() {
            let (x1, y1) = to_screen(segment.start);
            let (x2, y2) = to_screen(segment.end);
            draw_line(x1, y1, x2, y2, self.visual.ray_thickness, to_color(colors[i + 1]));
        }

        let origin = self.fan.origin();
        let info = format!(
            "Origin: ({:.3}, {:.3})  Rays: {}  Walls: {}\nLeft release: rotate -  Right release: rotate +  C: copy fan  Esc: close",
            origin.x,
            origin.y,
            self.fan.rays().len(),
            self.walls.len()
        );
        draw_text(&info, 10.0, 20.0, 20.0, WHITE);
    }

    fn copy_to_clipboard(&self) {
        let json = match serde_json::to_string_pretty(&self.fan.snapshot()) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize fan snapshot: {}", e);
                return;
            }
        };

        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(json) {
                    error!("Failed to copy to clipboard: {}", e);
                } else {
                    info!("Fan snapshot copied to clipboard");
                    // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => {
                error!("Failed to access clipboard: {}", e);
            }
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let loaded = Config::load_from(CONFIG_PATH);
    let level = loaded
        .as_ref()
        .map(|config| parse_level(&config.logging.level))
        .unwrap_or(LevelFilter::Info);
    init_logger(level);
    let config = Config::or_default(loaded);
    let report_fps = config.logging.report_fps;

    let mut state = match SceneState::new(config) {
        Ok(state) => state,
        Err(e) => {
            error!("Invalid scene configuration: {}", e);
            return;
        }
    };

    show_mouse(false);
    let mut timer = FrameTimer::new(get_time());

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let input = SceneState::sample_input();
        state.update(&input);

        if is_key_pressed(KeyCode::C) {
            state.copy_to_clipboard();
        }

        state.draw();

        if let Some(stats) = timer.tick(get_time()) {
            if report_fps {
                info!("Frame time: {:.3} ms, FPS: {}", stats.frame_time_ms, stats.fps);
            }
        }

        next_frame().await
    }
}
