use crate::clipboard::{ClipboardHandler, ClipboardSink};
use crate::ui::compose::{ComposeIntent, ComposeSession, ComposeState, GenerationOutcome};
use crate::ui::events::AppEvent;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

/// How long a footer notice stays visible.
const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Focus {
    Tone,
    #[default]
    Content,
    Reply,
}

#[derive(Debug, Clone)]
struct Notice {
    text: String,
    expires_at: Instant,
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Form state and request handling (MVI pattern).
    session: ComposeSession,
    /// Created on first copy, kept alive so the selection survives.
    clipboard: Option<Box<dyn ClipboardSink>>,
    runtime: Handle,
    event_tx: Sender<AppEvent>,
    reply_scroll: u16,
    notice: Option<Notice>,
}

impl App {
    pub fn new(session: ComposeSession, runtime: Handle, event_tx: Sender<AppEvent>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::default(),
            session,
            clipboard: None,
            runtime,
            event_tx,
            reply_scroll: 0,
            notice: None,
        }
    }

    /// Use `clipboard` instead of the system clipboard.
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn compose_state(&self) -> &ComposeState {
        self.session.state()
    }

    pub fn reply_scroll(&self) -> u16 {
        self.reply_scroll
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.text.as_str())
    }

    /// Move focus forward; the reply box is skipped until there is a reply.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Tone => Focus::Content,
            Focus::Content if self.compose_state().has_reply() => Focus::Reply,
            Focus::Content | Focus::Reply => Focus::Tone,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            Focus::Tone if self.compose_state().has_reply() => Focus::Reply,
            Focus::Tone | Focus::Reply => Focus::Content,
            Focus::Content => Focus::Tone,
        };
    }

    pub fn dispatch(&mut self, intent: ComposeIntent) {
        self.session.dispatch(intent);
    }

    pub fn on_paste(&mut self, text: &str) {
        self.focus = Focus::Content;
        self.dispatch(ComposeIntent::Paste(text.to_string()));
    }

    pub fn on_tick(&mut self) {
        if self.compose_state().is_loading() {
            self.dispatch(ComposeIntent::AnimationTick);
        }
        if let Some(notice) = &self.notice {
            if Instant::now() >= notice.expires_at {
                self.notice = None;
            }
        }
    }

    /// Press the generate trigger. Inert when the trigger is disabled.
    pub fn submit(&mut self) -> bool {
        let tx = self.event_tx.clone();
        self.session.start_generation(&self.runtime, move |outcome| {
            // Receiver is gone once the UI has shut down.
            let _ = tx.send(AppEvent::GenerationFinished(outcome));
        })
    }

    pub fn on_generation_finished(&mut self, outcome: GenerationOutcome) {
        let had_reply = self.compose_state().generated_reply.clone();
        self.session.complete(outcome);
        if self.compose_state().generated_reply != had_reply {
            self.reply_scroll = 0;
        }
    }

    pub fn scroll_reply(&mut self, delta: i32) {
        let next = i32::from(self.reply_scroll) + delta;
        self.reply_scroll = next.clamp(0, i32::from(u16::MAX)) as u16;
    }

    /// Copy the reply to the clipboard and report it in the footer.
    pub fn copy_result(&mut self) {
        if !self.compose_state().has_reply() {
            return;
        }

        if self.clipboard.is_none() {
            match ClipboardHandler::new() {
                Ok(handler) => self.clipboard = Some(Box::new(handler)),
                Err(err) => {
                    tracing::warn!(error = %err, "Clipboard unavailable");
                    self.set_notice("Clipboard unavailable");
                    return;
                }
            }
        }

        let copied = match self.clipboard.as_mut() {
            Some(clipboard) => self.session.copy_result(&mut **clipboard),
            None => false,
        };
        if copied {
            self.set_notice("Copied to clipboard");
        } else {
            self.set_notice("Copy failed");
        }
    }

    fn set_notice(&mut self, text: &str) {
        self.notice = Some(Notice {
            text: text.to_string(),
            expires_at: Instant::now() + NOTICE_TTL,
        });
    }
}
