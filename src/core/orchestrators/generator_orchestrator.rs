use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use iced::widget::image::Handle as ImageHandle;
use iced::widget::{column, container, image, text, text_editor};
use iced::{Alignment, Background, ContentFit, Element, Font, Length, Task};

use crate::core::interfaces::adapters::ImageClipboard;
use crate::core::models::{CanvasBitmap, Notification, UserSettings};
use crate::core::services::clipboard_exporter;
use crate::core::services::BlueScreenRenderer;
use crate::global_constants::{
    CARD_MAX_WIDTH_PX, COPY_HINT, EDITOR_MAX_HEIGHT_PX, LOG_TAG_ORCHESTRATOR,
};
use crate::ports::{CopyChordEvent, CopyChordListener};
use crate::presentation::{app_theme, render_toast};

pub struct GeneratorOrchestrator {
    renderer: BlueScreenRenderer,
    clipboard: Arc<dyn ImageClipboard>,
    settings: UserSettings,
    editor_content: text_editor::Content,
    text: String,
    current_bitmap: CanvasBitmap,
    image_handle: ImageHandle,
    notification: Option<Notification>,
    notification_generation: u64,
}

#[derive(Clone)]
pub enum GeneratorMessage {
    EditorAction(text_editor::Action),
    CopyChord(CopyChordEvent),
    CopyImageRequested,
    CopyImageFinished(Result<(), String>),
    DismissNotification,
    NotificationExpired(u64),
}

impl std::fmt::Debug for GeneratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorMessage::EditorAction(action) => {
                write!(f, "EditorAction(is_edit={})", action.is_edit())
            }
            GeneratorMessage::CopyChord(event) => write!(f, "CopyChord({:?})", event),
            GeneratorMessage::CopyImageRequested => write!(f, "CopyImageRequested"),
            GeneratorMessage::CopyImageFinished(result) => {
                write!(f, "CopyImageFinished({:?})", result.is_ok())
            }
            GeneratorMessage::DismissNotification => write!(f, "DismissNotification"),
            GeneratorMessage::NotificationExpired(generation) => {
                write!(f, "NotificationExpired({})", generation)
            }
        }
    }
}

impl GeneratorOrchestrator {
    pub fn build(
        mut renderer: BlueScreenRenderer,
        clipboard: Arc<dyn ImageClipboard>,
        settings: UserSettings,
    ) -> Self {
        let text = settings.initial_text.clone();
        let current_bitmap = renderer.render(&text);
        let image_handle = current_bitmap.to_image_handle();

        log::info!(
            "{} Initial render done for {:?}",
            LOG_TAG_ORCHESTRATOR,
            text
        );

        Self {
            renderer,
            clipboard,
            editor_content: text_editor::Content::with_text(&text),
            text,
            current_bitmap,
            image_handle,
            notification: None,
            notification_generation: 0,
            settings,
        }
    }

    pub fn update(&mut self, message: GeneratorMessage) -> Task<GeneratorMessage> {
        log::debug!("{} Received message: {:?}", LOG_TAG_ORCHESTRATOR, message);

        match message {
            GeneratorMessage::EditorAction(action) => {
                self.handle_editor_action(action);
            }
            GeneratorMessage::CopyChord(CopyChordEvent::CopyImagePressed) => {
                return self.update(GeneratorMessage::CopyImageRequested);
            }
            GeneratorMessage::CopyImageRequested => {
                return self.handle_copy_image_requested();
            }
            GeneratorMessage::CopyImageFinished(result) => {
                return self.handle_copy_image_finished(result);
            }
            GeneratorMessage::DismissNotification => {
                log::debug!("{} Notification dismissed", LOG_TAG_ORCHESTRATOR);
                self.notification = None;
            }
            GeneratorMessage::NotificationExpired(generation) => {
                self.handle_notification_expired(generation);
            }
        }

        Task::none()
    }

    pub fn subscription(&self) -> iced::Subscription<GeneratorMessage> {
        CopyChordListener::create_subscription().map(GeneratorMessage::CopyChord)
    }

    fn handle_editor_action(&mut self, action: text_editor::Action) {
        let is_edit = action.is_edit();
        self.editor_content.perform(action);

        if !is_edit {
            return;
        }

        self.text = self.editor_content.text();
        self.rerender();
    }

    fn rerender(&mut self) {
        self.current_bitmap = self.renderer.render(&self.text);
        self.image_handle = self.current_bitmap.to_image_handle();
        log::debug!(
            "{} Re-rendered {} line(s)",
            LOG_TAG_ORCHESTRATOR,
            self.text.split('\n').count()
        );
    }

    fn handle_copy_image_requested(&mut self) -> Task<GeneratorMessage> {
        log::info!("{} Copying current image to clipboard", LOG_TAG_ORCHESTRATOR);

        let copy = self.begin_copy();
        Task::future(async move { GeneratorMessage::CopyImageFinished(copy.await) })
    }

    /// Snapshots the bitmap now; the returned future exports that snapshot
    /// no matter what is rendered before it completes.
    fn begin_copy(&self) -> impl Future<Output = Result<(), String>> + Send + 'static {
        let snapshot = self.current_bitmap.clone();
        let clipboard = Arc::clone(&self.clipboard);
        clipboard_exporter::run_copy_request(snapshot, clipboard)
    }

    fn handle_copy_image_finished(&mut self, result: Result<(), String>) -> Task<GeneratorMessage> {
        if let Err(e) = &result {
            log::debug!("{} Showing copy failure: {}", LOG_TAG_ORCHESTRATOR, e);
        }

        self.notification_generation += 1;
        let generation = self.notification_generation;
        self.notification = Some(Notification::from_copy_result(&result, generation));

        let timeout = Duration::from_millis(self.settings.notification_timeout_ms);
        Task::future(async move {
            tokio::time::sleep(timeout).await;
            GeneratorMessage::NotificationExpired(generation)
        })
    }

    fn handle_notification_expired(&mut self, generation: u64) {
        match &self.notification {
            Some(current) if current.generation == generation => {
                log::debug!("{} Notification {} expired", LOG_TAG_ORCHESTRATOR, generation);
                self.notification = None;
            }
            _ => {
                log::debug!(
                    "{} Ignoring stale expiry for notification {}",
                    LOG_TAG_ORCHESTRATOR,
                    generation
                );
            }
        }
    }

    pub fn render_view(&self) -> Element<'_, GeneratorMessage> {
        let theme = app_theme::get_theme(&self.settings.theme_mode);
        let theme_mode = self.settings.theme_mode.clone();

        let editor = text_editor(&self.editor_content)
            .on_action(GeneratorMessage::EditorAction)
            .key_binding(CopyChordListener::editor_key_binding(
                GeneratorMessage::CopyImageRequested,
            ))
            .font(Font {
                family: iced::font::Family::Serif,
                ..Font::DEFAULT
            })
            .padding(12)
            .max_height(EDITOR_MAX_HEIGHT_PX);

        let bitmap = container(
            image(self.image_handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill),
        )
        .width(Length::Fill)
        .align_x(Alignment::Center);

        let card = container(column![editor, bitmap].spacing(16))
            .padding(24)
            .width(Length::Fill)
            .max_width(CARD_MAX_WIDTH_PX)
            .style(move |_theme| app_theme::card_style(&theme_mode));

        let hint = text(COPY_HINT)
            .size(13)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(app_theme::hint_text_color()),
            });

        let mut content = column![card, hint]
            .spacing(16)
            .padding(24)
            .align_x(Alignment::Center);

        if let Some(notification) = &self.notification {
            content = content.push(render_toast(
                notification,
                GeneratorMessage::DismissNotification,
            ));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn current_bitmap(&self) -> &CanvasBitmap {
        &self.current_bitmap
    }

    #[cfg(test)]
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }
}
