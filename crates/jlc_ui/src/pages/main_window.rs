//! Main dialog view.
//!
//! Part number and output directory on top, then symbol, footprint and
//! model sections, converter options, and the Cancel / Convert buttons.

use iced::widget::{button, checkbox, column, container, pick_list, radio, row, text, text_input};
use iced::{Alignment, Element, Length};

use jlc_core::form::{LoggingLevel, ModelFormat};

use crate::app::{App, Message, Phase};
use crate::theme::{font, spacing};
use crate::widgets::{label, text_row, text_row_with_button};

/// Build the main window view.
pub fn view(app: &App) -> Element<'_, Message> {
    let content = column![
        input_section(app),
        symbol_section(app),
        footprint_section(app),
        options_section(app),
        button_row(app),
        status_bar(app),
    ]
    .spacing(spacing::LG)
    .padding(spacing::LG);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// `Some(f)` while the form is editable.
fn editable<T>(app: &App, f: T) -> Option<T> {
    app.is_editable().then_some(f)
}

fn section_header(title: &str) -> Element<'_, Message> {
    text(title).size(font::LG).into()
}

fn input_section(app: &App) -> Element<'_, Message> {
    let form = app.controller.form();

    column![
        text_row(
            "Part number:",
            "e.g. C1337258",
            &form.part_number,
            editable(app, Message::PartNumberChanged as fn(String) -> Message),
        ),
        text_row_with_button(
            "Output directory:",
            "Library root folder",
            &form.output_dir,
            editable(app, Message::OutputDirChanged as fn(String) -> Message),
            "Browse",
            editable(app, Message::BrowseOutputDir),
        ),
        row![
            container(
                button(text("Rescan folder").size(font::SM))
                    .on_press_maybe(editable(app, Message::Rescan))
                    .padding([spacing::XS, spacing::SM])
            )
            .align_right(Length::Fill),
        ],
    ]
    .spacing(spacing::SM)
    .into()
}

fn symbol_section(app: &App) -> Element<'_, Message> {
    let form = app.controller.form();
    let symbols_enabled = app.is_editable() && !form.no_symbol;

    let download = checkbox(!form.no_symbol)
        .label("Download symbols")
        .on_toggle_maybe(editable(app, Message::DownloadSymbolsToggled))
        .text_size(font::NORMAL);

    let libraries = app.controller.symbol_libraries();
    let selected = libraries.iter().find(|l| **l == form.symbol_lib).cloned();
    let library_picker = pick_list(libraries, selected, Message::SymbolLibChanged)
    .placeholder(if libraries.is_empty() {
        "No libraries found"
    } else {
        "Existing libraries"
    })
    .text_size(font::NORMAL);

    let mut name_input = text_input("Library name", &form.symbol_lib)
        .size(font::NORMAL)
        .width(Length::Fill);
    if symbols_enabled {
        name_input = name_input.on_input(Message::SymbolLibChanged);
    }

    let library_row = if symbols_enabled && !libraries.is_empty() {
        row![label("Symbol library:"), name_input, library_picker]
    } else {
        row![label("Symbol library:"), name_input]
    };

    column![
        section_header("Symbol"),
        download,
        library_row.spacing(spacing::SM).align_y(Alignment::Center),
        text_row(
            "Symbol folder:",
            "symbol",
            &form.symbol_dir,
            symbols_enabled.then_some(Message::SymbolDirChanged as fn(String) -> Message),
        ),
    ]
    .spacing(spacing::SM)
    .into()
}

fn footprint_section(app: &App) -> Element<'_, Message> {
    let form = app.controller.form();
    let footprint_enabled = app.is_editable() && !form.no_footprint;
    let models_enabled = footprint_enabled
        && form.model_format.is_none_or(|f| f.writes_models());

    let download = checkbox(!form.no_footprint)
        .label("Download footprint")
        .on_toggle_maybe(editable(app, Message::DownloadFootprintToggled))
        .text_size(font::NORMAL);

    let formats = model_choices().fold(
        row![label("3D models:")].spacing(spacing::LG),
        |r, (choice, name)| {
            let option = radio(name, choice, Some(form.model_format), Message::ModelFormatSelected)
                .text_size(font::NORMAL);
            r.push(option)
        },
    );

    column![
        section_header("Footprint & 3D model"),
        download,
        text_row(
            "Footprint folder:",
            "footprint",
            &form.footprint_dir,
            footprint_enabled.then_some(Message::FootprintDirChanged as fn(String) -> Message),
        ),
        formats.align_y(Alignment::Center),
        text_row(
            "Model folder:",
            "packages3d (inside footprint folder)",
            &form.model_dir,
            models_enabled.then_some(Message::ModelDirChanged as fn(String) -> Message),
        ),
        text_row(
            "Model variable:",
            "KiCad path variable, e.g. JLC_3D",
            &form.model_var,
            models_enabled.then_some(Message::ModelVarChanged as fn(String) -> Message),
        ),
    ]
    .spacing(spacing::SM)
    .into()
}

/// Radio entries for the model format; `None` leaves `-models` off.
fn model_choices() -> impl Iterator<Item = (Option<ModelFormat>, &'static str)> {
    std::iter::once((None, "Default"))
        .chain(ModelFormat::ALL.iter().map(|f| (Some(*f), f.as_arg())))
}

fn options_section(app: &App) -> Element<'_, Message> {
    let form = app.controller.form();

    let log_file = checkbox(form.use_log_file)
        .label("Write log file")
        .on_toggle_maybe(editable(app, Message::UseLogFileToggled))
        .text_size(font::NORMAL);

    let level = pick_list(
        LoggingLevel::ALL.to_vec(),
        Some(form.logging_level),
        Message::LoggingLevelSelected,
    )
    .text_size(font::NORMAL);

    let log_row = if form.use_log_file && app.is_editable() {
        row![log_file, level]
    } else {
        row![log_file]
    };

    let skip = checkbox(form.skip_existing)
        .label("Skip existing")
        .on_toggle_maybe(editable(app, Message::SkipExistingToggled))
        .text_size(font::NORMAL);

    column![
        section_header("Options"),
        log_row.spacing(spacing::LG).align_y(Alignment::Center),
        skip,
    ]
    .spacing(spacing::SM)
    .into()
}

fn button_row(app: &App) -> Element<'_, Message> {
    let convert_label = match app.phase {
        Phase::Editing => "Convert",
        Phase::Converting => "Converting...",
        Phase::Finished => "Done",
    };

    let buttons = row![
        button(text("Cancel").size(font::NORMAL))
            .on_press_maybe(editable(app, Message::Cancel))
            .padding([spacing::SM, spacing::LG]),
        button(text(convert_label).size(font::NORMAL))
            .on_press_maybe(editable(app, Message::Convert))
            .padding([spacing::SM, spacing::XL]),
    ]
    .spacing(spacing::SM);

    container(buttons).align_right(Length::Fill).into()
}

fn status_bar(app: &App) -> Element<'_, Message> {
    text(&app.status_text).size(font::SM).into()
}
