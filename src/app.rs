use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

use egui::{Grid, TextEdit};

use crate::{
    dialog::{DialogExt, Modal},
    severity::Severity,
};

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct AppStore {
    title: String,
    message: String,
    severity: Severity,
    dismissed: usize,
}

impl Default for AppStore {
    fn default() -> Self {
        AppStore {
            title: "Saved".to_owned(),
            message: "Your changes were saved.".to_owned(),
            severity: Severity::Success,
            dismissed: 0,
        }
    }
}

pub enum Update {
    Dismissed,
}

pub struct App {
    store: AppStore,
    modal: Modal,
    update_sender: Sender<Update>,
    update_receiver: Receiver<Update>,
}

impl App {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous app state (if any).
        // Note that you must enable the `persistence` feature for this to work.
        let store = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            AppStore::default()
        };

        let (update_sender, update_receiver) = channel();

        App {
            store,
            modal: Modal::new(&cc.egui_ctx),
            update_sender,
            update_receiver,
        }
    }
}

impl eframe::App for App {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.store);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        loop {
            match self.update_receiver.try_recv() {
                Ok(Update::Dismissed) => self.store.dismissed += 1,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => panic!("channel disconnected!"),
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        ui.ctx()
                            .dialog_info("About", "A reusable severity-styled dialog.");
                        ui.close_menu();
                    }
                });
            });

            ui.add_space(8.0);
            ui.heading("Dialog demo");
            ui.add_space(8.0);

            Grid::new("dialog_inputs").num_columns(2).show(ui, |ui| {
                ui.label("Title:");
                ui.add(TextEdit::singleline(&mut self.store.title).hint_text("Title"));
                ui.end_row();

                ui.label("Message:");
                ui.add(TextEdit::singleline(&mut self.store.message).hint_text("Message"));
                ui.end_row();

                ui.label("Severity:");
                ui.horizontal(|ui| {
                    for severity in Severity::ALL {
                        ui.radio_value(&mut self.store.severity, severity, severity.name());
                    }
                });
                ui.end_row();
            });

            ui.add_space(8.0);

            if ui.button("Open dialog").clicked() {
                let sender = self.update_sender.clone();
                let ctx = ctx.clone();
                self.modal.open(
                    self.store.title.clone(),
                    self.store.message.clone(),
                    self.store.severity,
                    Some(Box::new(move || {
                        sender.send(Update::Dismissed).unwrap();
                        ctx.request_repaint();
                    })),
                );
            }

            ui.add_space(8.0);
            ui.label(format!("Dismissed {} times.", self.store.dismissed));
        });

        self.modal.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORE_FIXTURE_0: &str = r#"
        {
            "title": "Saved",
            "message": "Your changes were saved.",
            "severity": "info"
        }
    "#;

    #[test]
    fn store_reads_state_without_counter() {
        let actual: AppStore = serde_json::from_str(STORE_FIXTURE_0).unwrap();
        assert_eq!(actual.title, "Saved");
        assert_eq!(actual.message, "Your changes were saved.");
        assert_eq!(actual.severity, Severity::Info);
        assert_eq!(actual.dismissed, 0);
    }

    #[test]
    fn store_roundtrip() {
        let expected = AppStore {
            title: "Oops".to_owned(),
            message: "Something broke.".to_owned(),
            severity: Severity::Error,
            dismissed: 3,
        };
        let string = serde_json::to_string(&expected).unwrap();
        let actual: AppStore = serde_json::from_str(&string).unwrap();
        assert_eq!(expected, actual);
    }
}
