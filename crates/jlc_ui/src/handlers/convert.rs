//! Conversion: validate, run the converter, report, persist.

use std::sync::Arc;

use iced::Task;
use rfd::MessageLevel;

use jlc_core::runner::{run_converter, ConversionError, ConversionReport};

use super::notice;
use crate::app::{App, Message, Phase};

impl App {
    /// Handle the Convert button.
    ///
    /// An incomplete form only produces a warning and stays open.
    pub fn handle_convert(&mut self) -> Task<Message> {
        let cmd = match self.controller.submit() {
            Ok(cmd) => cmd,
            Err(e) => {
                tracing::info!("Form rejected: {}", e);
                return notice::show(
                    MessageLevel::Warning,
                    "Missing input",
                    e.to_string(),
                    Message::WarningClosed,
                );
            }
        };

        tracing::info!("Generated command: {}", cmd);
        let part = self.controller.form().part_number.trim().to_string();
        self.phase = Phase::Converting;
        self.status_text = format!("Converting {}...", part);

        let options = self.controller.run_options();
        Task::perform(
            async move { run_converter(&cmd, &options).await.map_err(Arc::new) },
            Message::ConversionFinished,
        )
    }

    /// Handle the converter result: save settings and show the outcome.
    pub fn handle_conversion_finished(
        &mut self,
        result: Result<ConversionReport, Arc<ConversionError>>,
    ) -> Task<Message> {
        self.phase = Phase::Finished;
        self.persist_settings();

        let part = self.controller.form().part_number.trim().to_string();
        let lines = self.controller.run_options().output_lines;

        match result {
            Ok(report) => {
                self.status_text = format!("{} converted", part);
                let mut description = format!("Component {} processed.", part);
                let summary = report.summary(lines);
                if !summary.is_empty() {
                    description.push_str("\n\n");
                    description.push_str(&summary);
                }
                notice::show(MessageLevel::Info, "Success", description, Message::ResultClosed)
            }
            Err(e) => {
                tracing::error!("Conversion of {} failed: {}", part, e);
                self.status_text = format!("{} failed", part);
                notice::show(
                    MessageLevel::Error,
                    "Error",
                    format!("Processing failed:\n{}", e),
                    Message::ResultClosed,
                )
            }
        }
    }

    /// Fold the form into the settings and write them out.
    fn persist_settings(&mut self) {
        let settings = self.controller.commit().clone();
        self.config.set_settings(settings);
        match self.config.save() {
            Ok(()) => tracing::debug!("Settings saved to {}", self.config.path().display()),
            Err(e) => tracing::warn!("Failed to save settings: {}", e),
        }
    }
}
