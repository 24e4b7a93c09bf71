//! Notification bridge: application-level "show message" calls become toast
//! calls, translated when a translator is available.

use std::rc::Rc;

use crate::shared::i18n::{Args, Translator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Success => "success",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
        }
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            NoticeKind::Info => "notifications.titles.info",
            NoticeKind::Success => "notifications.titles.success",
            NoticeKind::Warning => "notifications.titles.warning",
            NoticeKind::Error => "notifications.titles.error",
        }
    }

    /// Title used when nothing can be translated
    pub fn fallback_title(&self) -> &'static str {
        match self {
            NoticeKind::Info => "Информация",
            NoticeKind::Success => "Успех",
            NoticeKind::Warning => "Предупреждение",
            NoticeKind::Error => "Ошибка",
        }
    }
}

/// The toast primitive.
pub trait ToastSink {
    fn toast(&self, kind: NoticeKind, title: &str, message: &str);
}

#[derive(Clone)]
pub struct NotificationBridge {
    toasts: Option<Rc<dyn ToastSink>>,
    translator: Option<Rc<dyn Translator>>,
}

impl NotificationBridge {
    pub fn new(toasts: Option<Rc<dyn ToastSink>>, translator: Option<Rc<dyn Translator>>) -> Self {
        Self { toasts, translator }
    }

    pub fn translator(&self) -> Option<&Rc<dyn Translator>> {
        self.translator.as_ref()
    }

    pub fn can_translate(&self) -> bool {
        self.translator.is_some()
    }

    pub fn show(&self, message: &str, kind: NoticeKind, use_translation: bool, args: &Args) {
        let (title, text) = match (&self.translator, use_translation) {
            (Some(t), true) => (
                t.translate(kind.title_key(), args),
                t.translate(message, args),
            ),
            _ => (kind.fallback_title().to_string(), message.to_string()),
        };

        match &self.toasts {
            Some(sink) => sink.toast(kind, &title, &text),
            None => log::warn!("Toast function not found: {}", text),
        }
    }

    pub fn error_key(&self, key: &str) {
        self.show(key, NoticeKind::Error, true, &[]);
    }
}
