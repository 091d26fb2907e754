//! Frame planning for the animated installation view.
//!
//! The path is replayed one point per frame, bracketed by pause frames that
//! hold the first and the final state.

use radiantkit_settings::RenderSettings;
use std::ops::Range;

/// Timing of an animated rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationPlan {
    point_count: usize,
    pause_frames: usize,
    trail_length: usize,
    interval_ms: f64,
}

/// Installation progress shown in a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
    Starting,
    Installed(f64),
    Complete,
}

impl Progress {
    pub fn title(&self) -> String {
        match self {
            Self::Starting => "Radiant Heating Pipe Layout (Starting Installation...)".to_string(),
            Self::Installed(percent) => {
                format!("Radiant Heating Pipe Layout ({:.1}% Installed)", percent)
            }
            Self::Complete => "Radiant Heating Pipe Layout (Installation Complete!)".to_string(),
        }
    }
}

/// What is on screen in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    /// Index of the point under the installation head
    pub head: usize,
    /// Segments drawn so far
    pub installed_segments: usize,
    /// Points highlighted behind the head
    pub trail: Range<usize>,
    pub progress: Progress,
}

impl AnimationPlan {
    pub fn new(point_count: usize, settings: &RenderSettings) -> Self {
        let total_frames = point_count + 2 * settings.pause_frames;
        let raw = settings.target_duration_ms as f64 / total_frames.max(1) as f64;
        let interval_ms = raw.clamp(
            settings.min_interval_ms as f64,
            settings.max_interval_ms as f64,
        );

        Self {
            point_count,
            pause_frames: settings.pause_frames,
            trail_length: settings.trail_length,
            interval_ms,
        }
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn pause_frames(&self) -> usize {
        self.pause_frames
    }

    pub fn total_frames(&self) -> usize {
        self.point_count + 2 * self.pause_frames
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Time from the first to the last frame.
    pub fn duration_secs(&self) -> f64 {
        self.total_frames() as f64 * self.interval_ms / 1000.0
    }

    /// Start time of `frame`.
    pub fn frame_time_ms(&self, frame: usize) -> f64 {
        frame as f64 * self.interval_ms
    }

    /// Path point shown in `frame`; pause frames hold the first and last point.
    pub fn point_index(&self, frame: usize) -> usize {
        if frame < self.pause_frames {
            0
        } else if frame >= self.point_count + self.pause_frames {
            self.point_count.saturating_sub(1)
        } else {
            frame - self.pause_frames
        }
    }

    /// First frame whose head sits on point `index`.
    pub fn first_frame_of(&self, index: usize) -> usize {
        if index == 0 {
            0
        } else {
            self.pause_frames + index
        }
    }

    pub fn frame(&self, frame: usize) -> FrameState {
        let head = self.point_index(frame);
        let last = self.point_count.saturating_sub(1);

        let progress = if head == 0 {
            Progress::Starting
        } else if head >= last {
            Progress::Complete
        } else {
            Progress::Installed(head as f64 / self.point_count as f64 * 100.0)
        };

        FrameState {
            head,
            installed_segments: head.min(last),
            trail: head.saturating_sub(self.trail_length)..head,
            progress,
        }
    }

    pub fn frames(&self) -> impl Iterator<Item = FrameState> + '_ {
        (0..self.total_frames()).map(move |f| self.frame(f))
    }

    pub fn trail_length(&self) -> usize {
        self.trail_length
    }
}
