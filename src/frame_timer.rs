/// Frame rate over the last one-second window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub fps: f64,
    pub frame_time_ms: f64,
}

/// Counts frames and reports once per second of wall-clock time.
/// The host owns it and feeds it timestamps in seconds.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    window_start: f64,
    frames: u32,
}

impl FrameTimer {
    pub fn new(start_seconds: f64) -> Self {
        FrameTimer {
            window_start: start_seconds,
            frames: 0,
        }
    }

    /// Record a frame at `now_seconds`. Returns stats when a full second has elapsed.
    pub fn tick(&mut self, now_seconds: f64) -> Option<FrameStats> {
        self.frames += 1;
        if now_seconds - self.window_start < 1.0 {
            return None;
        }

        let frames = f64::from(self.frames);
        let stats = FrameStats {
            fps: frames,
            frame_time_ms: 1000.0 / frames,
        };
        self.frames = 0;
        self.window_start += 1.0;
        Some(stats)
    }
}
