use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use crate::core::interfaces::adapters::ImageClipboard;
use crate::core::interfaces::ports::{NoiseSource, TextPainter};
use crate::core::models::{CanvasBitmap, EncodedPng};

/// Replays a fixed list of offsets, starting over at the end.
pub struct SequenceNoiseSource {
    offsets: Vec<f32>,
    position: usize,
}

impl SequenceNoiseSource {
    pub fn cycling(offsets: Vec<f32>) -> Self {
        assert!(!offsets.is_empty(), "need at least one offset");
        Self {
            offsets,
            position: 0,
        }
    }
}

impl NoiseSource for SequenceNoiseSource {
    fn next_offset(&mut self) -> f32 {
        let offset = self.offsets[self.position % self.offsets.len()];
        self.position += 1;
        offset
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub line: String,
    pub center_x: f32,
    pub center_y: f32,
}

/// Records draw calls without touching the canvas. Clones share the log.
#[derive(Clone, Default)]
pub struct RecordingTextPainter {
    calls: Arc<Mutex<Vec<DrawCall>>>,
}

impl RecordingTextPainter {
    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl TextPainter for RecordingTextPainter {
    fn fill_text_centered(&self, _canvas: &mut CanvasBitmap, line: &str, center_x: f32, center_y: f32) {
        self.calls.lock().unwrap().push(DrawCall {
            line: line.to_string(),
            center_x,
            center_y,
        });
    }
}

pub struct FakeImageClipboard {
    failure: Option<String>,
    attempts: Mutex<usize>,
    writes: Mutex<Vec<EncodedPng>>,
}

impl FakeImageClipboard {
    pub fn working() -> Self {
        Self {
            failure: None,
            attempts: Mutex::new(0),
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::working()
        }
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    pub fn successful_writes(&self) -> Vec<EncodedPng> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageClipboard for FakeImageClipboard {
    async fn write_png(&self, png: EncodedPng) -> Result<()> {
        *self.attempts.lock().unwrap() += 1;

        if let Some(reason) = &self.failure {
            anyhow::bail!("{}", reason);
        }

        self.writes.lock().unwrap().push(png);
        Ok(())
    }
}
