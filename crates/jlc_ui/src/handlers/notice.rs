//! Modal notices.

use iced::Task;
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

use crate::app::Message;

/// Show a modal message box and emit `on_close` once it is dismissed.
pub fn show(
    level: MessageLevel,
    title: impl Into<String>,
    description: impl Into<String>,
    on_close: Message,
) -> Task<Message> {
    let title = title.into();
    let description = description.into();

    Task::perform(
        async move {
            AsyncMessageDialog::new()
                .set_level(level)
                .set_title(title)
                .set_description(description)
                .set_buttons(MessageButtons::Ok)
                .show()
                .await;
        },
        move |()| on_close,
    )
}
