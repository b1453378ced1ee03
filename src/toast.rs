//! Short-lived notifications in the bottom-right corner.

use std::time::Duration;

use egui::{Align2, Context, Frame, RichText, Vec2};
use xsetwacom_core::{Localisation, Message, Notice, NoticeLevel};

use crate::theme::{self, UiScale};

/// Seconds a toast stays on screen.
pub const TOAST_LIFETIME: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    level: NoticeLevel,
    text: String,
    /// `egui` input time the toast was pushed at.
    created: f64,
}

/// Queue of visible toasts, oldest first.
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    /// Add a toast shown from `now` on.
    pub fn push(&mut self, level: NoticeLevel, text: impl Into<String>, now: f64) {
        let text = text.into();
        match level {
            NoticeLevel::Success => tracing::info!("{}", text),
            NoticeLevel::Warning => tracing::warn!("{}", text),
            NoticeLevel::Error => tracing::error!("{}", text),
        }
        self.items.push(Toast {
            level,
            text,
            created: now,
        });
    }

    /// Add a toast for a notice, appending its detail when present.
    pub fn push_notice(&mut self, notice: &Notice, strings: &Localisation, now: f64) {
        let text = match &notice.detail {
            Some(detail) => format!("{}\n{}", strings.get(notice.message), detail),
            None => strings.get(notice.message).to_string(),
        };
        self.push(notice.level, text, now);
    }

    /// Drop toasts older than [`TOAST_LIFETIME`].
    pub fn expire(&mut self, now: f64) {
        self.items.retain(|t| now - t.created < TOAST_LIFETIME);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Expire old toasts and draw the rest, newest at the bottom.
    pub fn show(&mut self, ctx: &Context, strings: &Localisation, scale: UiScale) {
        let now = ctx.input(|i| i.time);
        self.expire(now);
        if self.is_empty() {
            return;
        }

        let margin = scale.px(12.0);
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-margin, -margin))
            .interactable(false)
            .show(ctx, |ui| {
                for toast in &self.items {
                    let (title, color) = match toast.level {
                        NoticeLevel::Success => (Message::ToastSuccess, theme::TOAST_SUCCESS),
                        NoticeLevel::Warning => (Message::ToastWarning, theme::TOAST_WARNING),
                        NoticeLevel::Error => (Message::ToastError, theme::TOAST_ERROR),
                    };
                    Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_max_width(scale.px(320.0));
                        ui.label(RichText::new(strings.get(title)).strong().color(color));
                        ui.label(&toast.text);
                    });
                    ui.add_space(scale.px(4.0));
                }
            });

        // Keep repainting so toasts disappear without input.
        if let Some(oldest) = self.items.first() {
            let remaining = (TOAST_LIFETIME - (now - oldest.created)).max(0.0);
            ctx.request_repaint_after(Duration::from_secs_f64(remaining));
        }
    }
}
