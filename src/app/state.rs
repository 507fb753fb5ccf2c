use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::config::SiteConfig;
use crate::contact::{
    self, ContactError, ContactForm, FormField, MailHandoff, SubmissionStatus, SubmissionTracker,
};
use crate::nav::Menu;

/// Opens the URI in the current browsing context, which for `mailto:` means
/// handing it to the OS mail handler. Whatever happens after that is
/// invisible to the page.
struct LocationHandoff;

impl MailHandoff for LocationHandoff {
    fn hand_off(&self, uri: &str) -> Result<(), ContactError> {
        window()
            .location()
            .set_href(uri)
            .map_err(|e| ContactError::SubmissionHandoffFailed {
                reason: format!("{:?}", e),
            })
    }
}

/// Transient state of one page view.
///
/// Created once by the home page and handed to each section as a prop. The
/// methods below are the only writers of the underlying signals.
#[derive(Clone, Copy)]
pub struct ViewState {
    menu: RwSignal<Menu>,
    scroll_y: Signal<f64>,
    form: RwSignal<ContactForm>,
    tracker: RwSignal<SubmissionTracker>,
    config: StoredValue<SiteConfig>,
}

impl ViewState {
    pub fn new(config: SiteConfig) -> Self {
        // listener is removed when the owning view is disposed
        let (_, scroll_y) = use_window_scroll();
        Self {
            menu: RwSignal::new(Menu::default()),
            scroll_y,
            form: RwSignal::new(ContactForm::default()),
            tracker: RwSignal::new(SubmissionTracker::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu.get().is_open()
    }

    pub fn toggle_menu(&self) {
        self.menu.update(Menu::toggle);
    }

    pub fn close_menu(&self) {
        self.menu.update(Menu::close);
    }

    /// Last observed vertical scroll offset, in CSS pixels.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    pub fn field(&self, field: FormField) -> String {
        self.form.with(|f| f.get(field).to_string())
    }

    pub fn set_field(&self, field: FormField, value: String) {
        self.form.update(|f| f.set(field, value));
    }

    pub fn status(&self) -> SubmissionStatus {
        self.tracker.with(SubmissionTracker::status)
    }

    pub fn asset(&self, path: &str) -> String {
        self.config.with_value(|c| c.asset(path))
    }

    pub fn submit(&self) {
        let mut form = self.form.get_untracked();
        let mut tracker = self.tracker.get_untracked();
        let result = self.config.with_value(|config| {
            contact::submit(&mut form, &mut tracker, config, &LocationHandoff)
        });
        self.form.set(form);
        self.tracker.set(tracker);

        match result {
            Ok(attempt) => {
                let tracker = self.tracker;
                let delay = self.config.with_value(|c| c.success_delay);
                set_timeout(
                    move || {
                        if tracker.try_update(|t| t.settle(attempt)) != Some(true) {
                            log::debug!("dropping stale success for contact attempt {}", attempt);
                        }
                    },
                    delay,
                );
            }
            Err(err) => log::error!("Error sending email: {}", err),
        }
    }
}
