use crate::shared::i18n::I18n;
use crate::shared::navigation::Navigator;
use contracts::domain::a001_client_scope::form::{FormMode, ScopeForm, SubmitOutcome};
use contracts::domain::a001_client_scope::ClientScope;
use leptos::prelude::*;

/// ViewModel for the client scope form
#[derive(Clone, Copy)]
pub struct ScopeFormVm {
    pub form: RwSignal<ScopeForm>,
}

impl ScopeFormVm {
    pub fn new(mode: FormMode, providers: Vec<String>, listing_path: &str) -> Self {
        Self {
            form: RwSignal::new(ScopeForm::new(mode, providers).with_listing_path(listing_path)),
        }
    }

    /// Re-seed from `scope` unless it carries the data already loaded.
    /// Subscribers are only notified when the form was actually re-seeded.
    pub fn initialize(&self, scope: &ClientScope) {
        self.form.maybe_update(|f| f.initialize(scope));
    }

    pub fn shows_protocol(&self) -> bool {
        self.form.with_untracked(|f| f.shows_protocol())
    }

    pub fn text(&self, field: &str) -> String {
        self.form.with(|f| f.state().text(field))
    }

    pub fn flag(&self, field: &str) -> bool {
        self.form.with(|f| f.state().flag(field).unwrap_or(false))
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.form.with(|f| f.errors().contains(field))
    }

    /// Localized message of the field's current error
    pub fn error_message(&self, field: &str, i18n: I18n) -> Option<String> {
        self.form.with(|f| {
            f.errors()
                .get(field)
                .map(|e| i18n.t_with(e.message_key(), &e.message_args()))
        })
    }

    pub fn providers(&self) -> Vec<String> {
        self.form.with(|f| f.providers().to_vec())
    }

    pub fn is_protocol_open(&self) -> bool {
        self.form.with(|f| f.protocol_select().is_open())
    }

    pub fn set_text(&self, field: &str, value: String) {
        self.form.update(|f| f.set_text(field, value));
    }

    pub fn set_flag(&self, field: &str, value: bool) {
        self.form.update(|f| f.set_flag(field, value));
    }

    pub fn toggle_protocol_select(&self) {
        self.form.update(|f| f.toggle_protocol_select());
    }

    pub fn select_protocol(&self, protocol: String) {
        self.form.update(|f| f.select_protocol(protocol));
    }

    /// Validate and hand the assembled scope to `save`.
    ///
    /// `save` runs after the signal update has finished, so it may read the
    /// form again.
    pub fn submit_command(&self, save: Callback<ClientScope>) {
        let mut payload = None;
        self.form.update(|f| {
            if let SubmitOutcome::Blocked(errors) = f.submit(|scope| payload = Some(scope)) {
                log::debug!("client scope not saved, {} invalid field(s)", errors.len());
            }
        });
        if let Some(scope) = payload {
            save.run(scope);
        }
    }

    pub fn cancel_command(&self, navigator: &Navigator) {
        self.form.with_untracked(|f| f.cancel(navigator));
    }
}
