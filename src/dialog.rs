use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

use egui::{Align, Align2, Area, Context, Frame, Id, Layout, Margin, Order, Pos2, RichText, Sense, Vec2};

use crate::{severity::Severity, style, widgets::CloseButton};

/// Runs exactly once, after the dialog leaves the screen.
pub type CloseCallback = Box<dyn FnOnce() + Send>;

struct OpenRequest {
    severity: Severity,
    title: String,
    message: String,
    on_close: Option<CloseCallback>,
}

/// A single reusable dialog. Construct one per app, call [`Modal::show`]
/// every frame, and raise it either directly via [`Modal::open`] or from
/// anywhere that has a [`Context`] via [`DialogExt`].
pub struct Modal {
    visible: bool,
    severity: Severity,
    title: String,
    message: String,
    on_close: Option<CloseCallback>,
    receiver: Receiver<OpenRequest>,
    id: Id,
}

impl Modal {
    pub fn new(ctx: &Context) -> Self {
        let (sender, receiver) = channel();
        ctx.data_mut(|d| d.insert_temp(Id::NULL, DialogSender(sender)));

        Self {
            visible: false,
            severity: Severity::default(),
            title: String::new(),
            message: String::new(),
            on_close: None,
            receiver,
            id: Id::new("__modal"),
        }
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Title and message are rendered verbatim as text, so arbitrary
    /// strings are safe to pass through.
    pub fn open(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        on_close: Option<CloseCallback>,
    ) {
        if self.on_close.take().is_some() {
            log::debug!("dialog reopened, dropping pending close callback");
        }
        self.title = title.into();
        self.message = message.into();
        self.severity = severity;
        self.on_close = on_close;
        self.visible = true;
    }

    fn close(&mut self) {
        // Guard so a repeated close trigger can't fire the callback again.
        if !self.visible {
            return;
        }
        self.visible = false;
        if let Some(callback) = self.on_close.take() {
            callback();
        }
        log::debug!("dialog closed");
    }

    fn drain_requests(&mut self) {
        loop {
            match self.receiver.try_recv() {
                // Later requests overwrite earlier ones, same as `open`.
                Ok(request) => self.open(
                    request.title,
                    request.message,
                    request.severity,
                    request.on_close,
                ),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => panic!("channel disconnected!"),
            }
        }
    }

    pub fn show(&mut self, ctx: &Context) {
        self.drain_requests();

        if !self.visible {
            return;
        }

        let style = style::get(ctx);
        let rect = ctx.screen_rect();
        let mut close_clicked = false;

        // The content area is added after the backdrop in the same order, so
        // it sits on top: a click only reaches the backdrop's interact region
        // when it lands outside the content box.
        let response = Area::new(self.id.with("backdrop"))
            .fixed_pos(Pos2::ZERO)
            .movable(false)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                let response = ui.interact(rect, self.id.with("backdrop response"), Sense::click());
                ui.painter().rect_filled(rect, 0.0, style.backdrop);
                response
            })
            .inner;

        if response.clicked() {
            close_clicked = true;
        }

        Area::new(self.id.with("content"))
            .anchor(Align2::CENTER_CENTER, Vec2::new(0.0, -rect.height() / 8.0))
            .movable(false)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                Frame::popup(&ctx.style())
                    .stroke(style.accent_stroke(self.severity))
                    .inner_margin(Margin::symmetric(24.0, 16.0))
                    .show(ui, |ui| {
                        ui.set_width(style.content_width);

                        ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
                            if ui.add(CloseButton).clicked() {
                                close_clicked = true;
                            }
                        });

                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new(self.severity.icon())
                                    .size(style.icon_size)
                                    .color(self.severity.color()),
                            );
                            ui.add_space(4.0);
                            ui.heading(&self.title);
                            ui.add_space(4.0);
                            ui.label(&self.message);
                        });
                    });
            });

        if close_clicked {
            self.close();
        }
    }
}

pub trait DialogExt {
    fn show_dialog(
        &self,
        severity: Severity,
        title: impl ToString,
        message: impl ToString,
        on_close: Option<CloseCallback>,
    );

    fn dialog_error(&self, title: impl ToString, message: impl ToString) {
        self.show_dialog(Severity::Error, title, message, None);
    }

    fn dialog_success(&self, title: impl ToString, message: impl ToString) {
        self.show_dialog(Severity::Success, title, message, None);
    }

    fn dialog_info(&self, title: impl ToString, message: impl ToString) {
        self.show_dialog(Severity::Info, title, message, None);
    }
}

#[derive(Clone)]
struct DialogSender(Sender<OpenRequest>);

impl DialogExt for Context {
    fn show_dialog(
        &self,
        severity: Severity,
        title: impl ToString,
        message: impl ToString,
        on_close: Option<CloseCallback>,
    ) {
        if let Some(DialogSender(sender)) = self.data(|d| d.get_temp(Id::NULL)) {
            sender
                .send(OpenRequest {
                    severity,
                    title: title.to_string(),
                    message: message.to_string(),
                    on_close,
                })
                .unwrap();
            self.request_repaint();
        }
    }
}
