// ui/dialogs.rs - Native Dialogs
//
// Thin wrappers over rfd. These block the event loop until dismissed, which
// is what we want for confirmations and error reports.

use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

type Filter = (&'static str, &'static [&'static str]);

const WINDOWS_FILTERS: &[Filter] = &[("Executable files", &["exe"]), ("All files", &["*"])];

/// Filters for the application picker.
///
/// rfd turns every extension into a `*.ext` glob, so an "all files" filter
/// would hide extensionless Unix executables. Outside Windows we add none.
fn application_filters() -> &'static [Filter] {
    if cfg!(windows) {
        WINDOWS_FILTERS
    } else {
        &[]
    }
}

pub fn info(title: &str, description: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn error(title: &str, description: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Yes/No question; anything but "Yes" counts as no
pub fn confirm(title: &str, description: &str) -> bool {
    let answer = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::YesNo)
        .show();
    matches!(answer, MessageDialogResult::Yes)
}

/// File picker for the launcher's "Browse Files" button
pub fn pick_application() -> Option<PathBuf> {
    application_filters()
        .iter()
        .fold(
            FileDialog::new().set_title("Select Application"),
            |dialog, (name, extensions)| dialog.add_filter(*name, *extensions),
        )
        .pick_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn test_no_filters_outside_windows() {
        assert!(application_filters().is_empty());
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_filters_offer_executables_first() {
        let filters = application_filters();
        assert_eq!(filters[0], ("Executable files", &["exe"][..]));
        assert_eq!(filters.len(), 2);
    }
}
