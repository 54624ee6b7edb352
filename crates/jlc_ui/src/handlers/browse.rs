//! Output directory browsing.

use std::path::{Path, PathBuf};

use iced::Task;

use jlc_core::config::{documents_dir, ConfigSection};

use crate::app::{App, Message};

impl App {
    /// Open a folder picker starting at the current output directory.
    pub fn browse_output_dir(&self) -> Task<Message> {
        let current = self.controller.form().output_dir.trim().to_string();
        let start = if !current.is_empty() && Path::new(&current).is_dir() {
            PathBuf::from(current)
        } else {
            documents_dir()
        };

        Task::perform(
            async move {
                rfd::AsyncFileDialog::new()
                    .set_title("Select output directory")
                    .set_directory(start)
                    .pick_folder()
                    .await
                    .map(|f| f.path().to_path_buf())
            },
            Message::OutputDirSelected,
        )
    }

    /// Apply a picked directory and remember it right away.
    pub fn handle_output_dir_selected(&mut self, path: Option<PathBuf>) {
        let Some(path) = path else {
            return;
        };

        let dir = path.to_string_lossy().to_string();
        self.controller.set_output_dir(dir.clone());

        self.config.settings_mut().paths.output_dir = dir.clone();
        if let Err(e) = self.config.update_section(ConfigSection::Paths) {
            tracing::warn!("Failed to save output directory: {}", e);
        }

        let libraries = self.controller.symbol_libraries().len();
        self.status_text = if libraries > 0 {
            format!("{} ({} symbol libraries)", dir, libraries)
        } else {
            dir
        };
    }
}
