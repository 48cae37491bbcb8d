use std::sync::Arc;

use iced::{Element, Task};

use crate::adapters::{AbGlyphTextPainter, ArboardImageClipboard, RandomNoiseSource};
use crate::core::interfaces::ports::TextPainter;
use crate::core::models::{CanvasBitmap, UserSettings};
use crate::core::orchestrators::generator_orchestrator::{GeneratorMessage, GeneratorOrchestrator};
use crate::core::services::BlueScreenRenderer;
use crate::global_constants::LOG_TAG_APP;

/// Stand-in painter when no bold serif font could be loaded: the canvas
/// still gets its background and noise, just no glyphs.
struct BlankTextPainter;

impl TextPainter for BlankTextPainter {
    fn fill_text_centered(&self, _canvas: &mut CanvasBitmap, line: &str, _center_x: f32, _center_y: f32) {
        log::debug!("{} No font loaded, skipping line {:?}", LOG_TAG_APP, line);
    }
}

pub struct BlueScreenApp {
    orchestrator: GeneratorOrchestrator,
}

impl BlueScreenApp {
    pub fn build() -> (Self, Task<GeneratorMessage>) {
        log::info!("{} Initializing application", LOG_TAG_APP);

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("{} Failed to load settings: {:#}, using defaults", LOG_TAG_APP, e);
            UserSettings::default()
        });

        let text_painter: Box<dyn TextPainter> =
            match AbGlyphTextPainter::load(settings.font_path.as_deref()) {
                Ok(painter) => {
                    log::info!("{} Text painter initialized successfully", LOG_TAG_APP);
                    Box::new(painter)
                }
                Err(e) => {
                    log::warn!("{} Failed to load font: {:#}, text will not be drawn", LOG_TAG_APP, e);
                    Box::new(BlankTextPainter)
                }
            };

        let renderer = BlueScreenRenderer::build(Box::new(RandomNoiseSource::from_entropy()), text_painter);

        let orchestrator = GeneratorOrchestrator::build(
            renderer,
            Arc::new(ArboardImageClipboard::new()),
            settings,
        );

        (Self { orchestrator }, Task::none())
    }

    pub fn handle_update(&mut self, message: GeneratorMessage) -> Task<GeneratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, GeneratorMessage> {
        self.orchestrator.render_view()
    }

    pub fn handle_subscription(&self) -> iced::Subscription<GeneratorMessage> {
        self.orchestrator.subscription()
    }
}
