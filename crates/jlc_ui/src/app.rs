//! Main application module for JLC2KiCad GUI.
//!
//! One window, one conversion: the form is filled, the converter runs,
//! the result is shown and the application exits.

use std::path::PathBuf;
use std::sync::Arc;

use iced::{Element, Task};

use jlc_core::config::{ConfigManager, Settings};
use jlc_core::controller::DialogController;
use jlc_core::form::{LoggingLevel, ModelFormat};
use jlc_core::runner::{ConversionError, ConversionReport};

use crate::pages;

/// Window title.
pub const TITLE: &str = "JLC2KiCad GUI";

/// Where the dialog is in its single-shot lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Form is editable.
    Editing,
    /// Converter is running; form is locked.
    Converting,
    /// Result notice is open; the app exits when it closes.
    Finished,
}

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    // Part and output directory
    PartNumberChanged(String),
    OutputDirChanged(String),
    BrowseOutputDir,
    OutputDirSelected(Option<PathBuf>),
    Rescan,

    // Symbol
    SymbolLibChanged(String),
    DownloadSymbolsToggled(bool),
    SymbolDirChanged(String),

    // Footprint and 3-D model
    DownloadFootprintToggled(bool),
    FootprintDirChanged(String),
    /// `None` restores the converter default.
    ModelFormatSelected(Option<ModelFormat>),
    ModelDirChanged(String),
    ModelVarChanged(String),

    // Options
    UseLogFileToggled(bool),
    LoggingLevelSelected(LoggingLevel),
    SkipExistingToggled(bool),

    // Dialog buttons
    Convert,
    Cancel,

    // Results
    ConversionFinished(Result<ConversionReport, Arc<ConversionError>>),
    WarningClosed,
    ResultClosed,
}

/// Main application state.
pub struct App {
    pub config: ConfigManager,
    pub controller: DialogController,
    pub phase: Phase,
    pub status_text: String,
}

impl App {
    /// Build the dialog from the loaded settings.
    pub fn new(config_path: PathBuf, settings: Settings) -> Self {
        let mut config = ConfigManager::new(config_path);
        config.set_settings(settings.clone());

        let controller = DialogController::new(settings);
        let status_text = match controller.symbol_libraries().len() {
            0 => "Ready".to_string(),
            n => format!("Ready - {} symbol librar{} found", n, if n == 1 { "y" } else { "ies" }),
        };

        Self {
            config,
            controller,
            phase: Phase::Editing,
            status_text,
        }
    }

    /// Whether the form accepts input.
    pub fn is_editable(&self) -> bool {
        self.phase == Phase::Editing
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        if !self.is_editable() && message.is_edit() {
            return Task::none();
        }

        match message {
            Message::PartNumberChanged(value) => {
                self.controller.form_mut().part_number = value;
                Task::none()
            }
            Message::OutputDirChanged(value) => {
                self.controller.form_mut().output_dir = value;
                Task::none()
            }
            Message::BrowseOutputDir => self.browse_output_dir(),
            Message::OutputDirSelected(path) => {
                self.handle_output_dir_selected(path);
                Task::none()
            }
            Message::Rescan => {
                self.controller.rescan();
                Task::none()
            }

            Message::SymbolLibChanged(value) => {
                self.controller.form_mut().symbol_lib = value;
                Task::none()
            }
            Message::DownloadSymbolsToggled(enabled) => {
                self.controller.form_mut().no_symbol = !enabled;
                Task::none()
            }
            Message::SymbolDirChanged(value) => {
                self.controller.form_mut().symbol_dir = value;
                Task::none()
            }

            Message::DownloadFootprintToggled(enabled) => {
                self.controller.form_mut().no_footprint = !enabled;
                Task::none()
            }
            Message::FootprintDirChanged(value) => {
                self.controller.form_mut().footprint_dir = value;
                Task::none()
            }
            Message::ModelFormatSelected(format) => {
                self.controller.form_mut().model_format = format;
                Task::none()
            }
            Message::ModelDirChanged(value) => {
                self.controller.form_mut().model_dir = value;
                Task::none()
            }
            Message::ModelVarChanged(value) => {
                self.controller.form_mut().model_var = value;
                Task::none()
            }

            Message::UseLogFileToggled(enabled) => {
                self.controller.form_mut().use_log_file = enabled;
                Task::none()
            }
            Message::LoggingLevelSelected(level) => {
                self.controller.form_mut().logging_level = level;
                Task::none()
            }
            Message::SkipExistingToggled(enabled) => {
                self.controller.form_mut().skip_existing = enabled;
                Task::none()
            }

            Message::Convert => self.handle_convert(),
            Message::Cancel => {
                tracing::info!("Dialog cancelled");
                iced::exit()
            }

            Message::ConversionFinished(result) => self.handle_conversion_finished(result),
            Message::WarningClosed => Task::none(),
            Message::ResultClosed => iced::exit(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        pages::main_window::view(self)
    }
}

impl Message {
    /// Messages that change the form and are ignored once it is locked.
    fn is_edit(&self) -> bool {
        !matches!(
            self,
            Message::ConversionFinished(_) | Message::WarningClosed | Message::ResultClosed
        )
    }
}
