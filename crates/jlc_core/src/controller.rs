//! Dialog controller: settings in, command line out.
//!
//! The controller owns the `Settings` it was created with and a fresh
//! `FormState` derived from them. It never reads or writes settings behind
//! the caller's back: `commit()` folds the form into the settings and the
//! caller decides when to save them.

use std::path::{Path, PathBuf};

use crate::command::{self, CommandBuilder, CommandLine};
use crate::config::{documents_dir, Settings};
use crate::discovery::{list_symbol_libraries, LibraryLayout};
use crate::form::{FormState, ValidationError};
use crate::runner::RunOptions;

/// State behind the conversion dialog.
#[derive(Debug, Clone)]
pub struct DialogController {
    settings: Settings,
    form: FormState,
    symbol_libraries: Vec<String>,
}

impl DialogController {
    /// Create the controller and pre-fill the form from `settings` and
    /// whatever already exists in the output directory.
    pub fn new(settings: Settings) -> Self {
        let output_dir = initial_output_dir(&settings.paths.output_dir);

        let form = FormState {
            part_number: String::new(),
            output_dir: output_dir.to_string_lossy().into_owned(),
            symbol_lib: String::new(),
            symbol_dir: settings.paths.symbol_dir.clone(),
            no_symbol: !settings.library.download_symbols,
            footprint_dir: settings.paths.footprint_dir.clone(),
            no_footprint: !settings.library.download_footprint,
            model_format: settings.library.model_type,
            model_dir: settings.paths.model_dir.clone(),
            model_var: settings.library.model_var.clone(),
            use_log_file: settings.logging.use_log_file,
            logging_level: settings.logging.logging_level,
            skip_existing: settings.library.skip_existing,
        };

        let mut controller = Self {
            settings,
            form,
            symbol_libraries: Vec::new(),
        };
        controller.rescan();
        controller
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Symbol libraries found in the current symbol folder.
    pub fn symbol_libraries(&self) -> &[String] {
        &self.symbol_libraries
    }

    /// Change the output directory, remember it, and re-detect sub-folders.
    pub fn set_output_dir(&mut self, dir: impl Into<String>) {
        let dir = dir.into();
        tracing::info!("Output directory: {}", dir);
        self.settings.paths.output_dir = dir.clone();
        self.form.output_dir = dir;
        self.rescan();
    }

    /// Re-detect symbol, footprint and model folders in the output directory.
    ///
    /// Each field becomes the detected folder name, else the persisted
    /// value, else empty. The symbol library list is refreshed and the
    /// library name defaults to its first entry.
    pub fn rescan(&mut self) {
        let trimmed = self.form.output_dir.trim();
        let output_dir = PathBuf::from(trimmed);
        let layout = if trimmed.is_empty() {
            LibraryLayout::default()
        } else {
            LibraryLayout::detect(&output_dir)
        };
        if layout.is_empty() {
            tracing::debug!("No library folders in {:?}, keeping saved names", trimmed);
        }
        let persisted = &self.settings.paths;

        self.form.symbol_dir = layout
            .symbol_dir
            .unwrap_or_else(|| persisted.symbol_dir.clone());
        self.form.footprint_dir = layout
            .footprint_dir
            .unwrap_or_else(|| persisted.footprint_dir.clone());
        self.form.model_dir = layout
            .model_dir
            .unwrap_or_else(|| persisted.model_dir.clone());

        self.symbol_libraries = if trimmed.is_empty() || self.form.symbol_dir.is_empty() {
            Vec::new()
        } else {
            list_symbol_libraries(&output_dir.join(&self.form.symbol_dir))
        };

        if let Some(first) = self.symbol_libraries.first() {
            self.form.symbol_lib = first.clone();
        }

        tracing::debug!(
            "Rescanned {}: symbol={:?} footprint={:?} model={:?} libraries={}",
            output_dir.display(),
            self.form.symbol_dir,
            self.form.footprint_dir,
            self.form.model_dir,
            self.symbol_libraries.len()
        );
    }

    /// Command builder for the configured converter program.
    pub fn builder(&self) -> CommandBuilder {
        CommandBuilder::new(self.settings.program())
    }

    /// Validate the form and build the converter command line.
    pub fn submit(&self) -> Result<CommandLine, ValidationError> {
        command::submit(&self.builder(), &self.form)
    }

    /// Options for running the converter.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            output_lines: self.settings.converter.output_lines as usize,
            working_dir: None,
        }
    }

    /// Write the form back into the settings and return them for saving.
    pub fn commit(&mut self) -> &Settings {
        let form = &self.form;
        let settings = &mut self.settings;

        settings.paths.output_dir = form.output_dir.trim().to_string();
        settings.paths.symbol_dir = form.symbol_dir.trim().to_string();
        settings.paths.footprint_dir = form.footprint_dir.trim().to_string();
        settings.paths.model_dir = form.model_dir.trim().to_string();

        settings.library.download_symbols = !form.no_symbol;
        settings.library.download_footprint = !form.no_footprint;
        settings.library.model_type = form.model_format;
        settings.library.model_var = form.model_var.trim().to_string();
        settings.library.skip_existing = form.skip_existing;

        settings.logging.use_log_file = form.use_log_file;
        settings.logging.logging_level = form.logging_level;

        &self.settings
    }

    pub fn into_settings(self) -> Settings {
        self.settings
    }
}

/// Remembered output directory if it still exists, else the Documents folder.
fn initial_output_dir(persisted: &str) -> PathBuf {
    let persisted = persisted.trim();
    if !persisted.is_empty() && Path::new(persisted).is_dir() {
        PathBuf::from(persisted)
    } else {
        documents_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{LoggingLevel, ModelFormat};
    use std::fs;
    use tempfile::tempdir;

    fn settings_for(dir: &Path) -> Settings {
        let mut settings = Settings::default();
        settings.paths.output_dir = dir.display().to_string();
        settings
    }

    #[test]
    fn prefills_from_existing_layout() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("MySymbols")).unwrap();
        fs::write(dir.path().join("MySymbols").join("JLC.kicad_sym"), "").unwrap();
        fs::write(dir.path().join("MySymbols").join("Extra.kicad_sym"), "").unwrap();
        fs::create_dir_all(dir.path().join("footprint").join("3dmodels")).unwrap();

        let controller = DialogController::new(settings_for(dir.path()));
        let form = controller.form();

        assert_eq!(form.output_dir, dir.path().display().to_string());
        assert_eq!(form.symbol_dir, "MySymbols");
        assert_eq!(form.footprint_dir, "footprint");
        assert_eq!(form.model_dir, "3dmodels");
        assert_eq!(controller.symbol_libraries(), ["Extra", "JLC"]);
        assert_eq!(form.symbol_lib, "Extra");
    }

    #[test]
    fn missing_folders_fall_back_to_persisted() {
        let dir = tempdir().unwrap();
        let mut settings = settings_for(dir.path());
        settings.paths.symbol_dir = "sym".to_string();

        let controller = DialogController::new(settings);
        assert_eq!(controller.form().symbol_dir, "sym");
        assert_eq!(controller.form().footprint_dir, "");
        assert_eq!(controller.form().model_dir, "");
    }

    #[test]
    fn nonexistent_output_dir_uses_documents() {
        let dir = tempdir().unwrap();
        let settings = settings_for(&dir.path().join("gone"));

        let controller = DialogController::new(settings);
        assert_eq!(
            controller.form().output_dir,
            documents_dir().to_string_lossy()
        );
    }

    #[test]
    fn set_output_dir_rescans_and_remembers() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        fs::create_dir(second.path().join("symbol")).unwrap();

        let mut controller = DialogController::new(settings_for(first.path()));
        assert_eq!(controller.form().symbol_dir, "");

        let second_dir = second.path().display().to_string();
        controller.set_output_dir(second_dir.clone());
        assert_eq!(controller.form().symbol_dir, "symbol");
        assert_eq!(controller.settings().paths.output_dir, second_dir);
    }

    #[test]
    fn rescan_with_blank_output_dir_skips_scanning() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("symbol")).unwrap();
        fs::write(dir.path().join("symbol").join("Parts.kicad_sym"), "").unwrap();

        let mut settings = settings_for(dir.path());
        settings.paths.symbol_dir = "saved_symbols".to_string();
        let mut controller = DialogController::new(settings);
        assert_eq!(controller.symbol_libraries(), ["Parts"]);

        controller.form_mut().output_dir = "  ".to_string();
        controller.rescan();

        assert!(controller.symbol_libraries().is_empty());
        assert_eq!(controller.form().symbol_dir, "saved_symbols");
        assert_eq!(controller.form().symbol_lib, "Parts");
    }

    #[test]
    fn settings_map_onto_form_flags() {
        let dir = tempdir().unwrap();
        let mut settings = settings_for(dir.path());
        settings.library.download_symbols = false;
        settings.library.model_type = Some(ModelFormat::Wrl);
        settings.logging.use_log_file = true;
        settings.logging.logging_level = LoggingLevel::Critical;

        let controller = DialogController::new(settings);
        let form = controller.form();
        assert!(form.no_symbol);
        assert!(!form.no_footprint);
        assert_eq!(form.model_format, Some(ModelFormat::Wrl));
        assert!(form.use_log_file);
        assert_eq!(form.logging_level, LoggingLevel::Critical);
        assert!(form.part_number.is_empty());
    }

    #[test]
    fn submit_requires_part_number() {
        let dir = tempdir().unwrap();
        let controller = DialogController::new(settings_for(dir.path()));
        assert_eq!(controller.submit(), Err(ValidationError::MissingPartNumber));
    }

    #[test]
    fn submit_uses_configured_program() {
        let dir = tempdir().unwrap();
        let mut settings = settings_for(dir.path());
        settings.converter.program = "/opt/jlc/JLC2KiCadLib".to_string();

        let mut controller = DialogController::new(settings);
        controller.form_mut().part_number = "C2040".to_string();

        let cmd = controller.submit().unwrap();
        assert_eq!(cmd.program(), "/opt/jlc/JLC2KiCadLib");
        assert_eq!(cmd.args()[0], "C2040");
        assert_eq!(cmd.value_of("-dir"), Some(dir.path().display().to_string().as_str()));
    }

    #[test]
    fn commit_writes_form_back() {
        let dir = tempdir().unwrap();
        let mut controller = DialogController::new(settings_for(dir.path()));
        {
            let form = controller.form_mut();
            form.part_number = "C2040".to_string();
            form.no_footprint = true;
            form.model_format = Some(ModelFormat::Step);
            form.model_var = " KICAD_3D ".to_string();
            form.skip_existing = true;
            form.use_log_file = true;
            form.logging_level = LoggingLevel::Debug;
        }

        let settings = controller.commit().clone();
        assert!(!settings.library.download_footprint);
        assert!(settings.library.download_symbols);
        assert_eq!(settings.library.model_type, Some(ModelFormat::Step));
        assert_eq!(settings.library.model_var, "KICAD_3D");
        assert!(settings.library.skip_existing);
        assert!(settings.logging.use_log_file);
        assert_eq!(settings.logging.logging_level, LoggingLevel::Debug);
        assert_eq!(controller.into_settings(), settings);
    }

    #[test]
    fn run_options_follow_settings() {
        let dir = tempdir().unwrap();
        let mut settings = settings_for(dir.path());
        settings.converter.output_lines = 4;

        let controller = DialogController::new(settings);
        assert_eq!(controller.run_options().output_lines, 4);
    }
}
