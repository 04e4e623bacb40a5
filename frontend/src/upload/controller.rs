//! Upload page state machine.
//!
//! Inbound commands are the public methods (`select_files`, `drop_files`,
//! `begin_submit`/`finish_submit`, `restart`, ...). Every visible effect goes
//! out through [`UploadView`]. The network call is the only suspension point:
//! [`UploadController::begin_submit`] hands back a [`SubmissionRequest`], the
//! caller sends it however it likes, and reports the outcome with
//! [`UploadController::finish_submit`]. [`UploadController::submit_with`]
//! does all three against a [`Transport`].

use common::model::form::{FormFieldSnapshot, FormFields};
use common::model::upload::{DetailedError, UploadResponse, UploadSuccess};
use log::{debug, error, info, warn};

use super::error::UploadError;
use super::error_presenter::{present, ErrorPayload};
use super::persistence::{FormFieldPersistence, KeyValueStore, LoadDecision};
use super::texts::{file_selected_text, GENERIC_FAILURE, MUST_SELECT_FILE, NO_FILE_SELECTED};
use super::validator::{FileValidator, Validation};

/// Current UI phase; exactly one is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    FileLoaded,
    Submitting,
    ResultShown,
    ErrorShown,
}

/// A file handle the controller can hold and name.
pub trait CandidateFile: Clone {
    fn file_name(&self) -> String;
}

/// Outbound side of the controller: what the page must be able to show.
pub trait UploadView {
    fn set_file_list_text(&mut self, text: &str);
    fn set_drop_highlighted(&mut self, highlighted: bool);
    /// Drop zone styling for "a valid file is loaded".
    fn set_file_loaded(&mut self, loaded: bool);
    /// Resets the underlying file input so a bad file cannot be resubmitted.
    fn clear_file_input(&mut self);
    /// `None` hides the error panel.
    fn render_error(&mut self, error: Option<&ErrorPayload>);
    /// `Some` hides the form and shows the download section; `None` reverts.
    fn render_result(&mut self, result: Option<&UploadSuccess>);
    fn set_form_fields(&mut self, snapshot: &FormFieldSnapshot);
}

/// Sends one submission and returns the structured response.
#[allow(async_fn_in_trait)]
pub trait Transport<F> {
    async fn send(&self, request: &SubmissionRequest<F>) -> Result<UploadResponse, UploadError>;
}

/// A file that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<F> {
    pub name: String,
    pub extension: String,
    pub handle: F,
}

/// Everything needed to perform one submission.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionRequest<F> {
    /// Identifies the submission; completions for other ids are dropped.
    pub id: u64,
    pub file: F,
    pub fields: FormFields,
}

pub struct UploadController<F, V, D, S> {
    phase: UploadPhase,
    file: Option<SelectedFile<F>>,
    error: Option<ErrorPayload>,
    result: Option<UploadSuccess>,
    validator: FileValidator,
    persistence: FormFieldPersistence<D, S>,
    view: V,
    last_submission: u64,
    active_submission: Option<u64>,
    /// Fields sent with the active submission, restored on completion when
    /// the session marker could not be written.
    submitted_fields: Option<FormFieldSnapshot>,
}

impl<F, V, D, S> UploadController<F, V, D, S>
where
    F: CandidateFile,
    V: UploadView,
    D: KeyValueStore,
    S: KeyValueStore,
{
    pub fn new(view: V, persistence: FormFieldPersistence<D, S>) -> Self {
        Self {
            phase: UploadPhase::Idle,
            file: None,
            error: None,
            result: None,
            validator: FileValidator::default(),
            persistence,
            view,
            last_submission: 0,
            active_submission: None,
            submitted_fields: None,
        }
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn selected_file(&self) -> Option<&SelectedFile<F>> {
        self.file.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorPayload> {
        self.error.as_ref()
    }

    pub fn result(&self) -> Option<&UploadSuccess> {
        self.result.as_ref()
    }

    pub fn validator(&self) -> &FileValidator {
        &self.validator
    }

    pub fn persistence(&self) -> &FormFieldPersistence<D, S> {
        &self.persistence
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Direct access for view-local state such as typed field values.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn active_submission(&self) -> Option<u64> {
        self.active_submission
    }

    /// Page load: restores or wipes the persisted fields and shows the blank
    /// form.
    pub fn initialize(&mut self) {
        self.apply_load_decision();
        self.clear_selection();
        self.hide_error();
        self.hide_result();
        self.set_phase(UploadPhase::Idle);
    }

    /// File picked through the dialog. Only the first file counts.
    pub fn select_files<I>(&mut self, files: I)
    where
        I: IntoIterator<Item = F>,
    {
        if !self.form_is_interactive() {
            debug!("ignoring file selection while {:?}", self.phase);
            return;
        }

        let Some(file) = files.into_iter().next() else {
            self.clear_selection();
            self.hide_error();
            self.set_phase(UploadPhase::Idle);
            return;
        };

        let name = file.file_name();
        match self.validator.validate(&name) {
            Validation::Accept {
                file_name,
                extension,
            } => {
                self.view.set_file_list_text(&file_selected_text(&file_name));
                self.view.set_file_loaded(true);
                self.hide_error();
                self.file = Some(SelectedFile {
                    name: file_name,
                    extension,
                    handle: file,
                });
                self.set_phase(UploadPhase::FileLoaded);
            }
            Validation::Reject { reason } => {
                info!("rejected file `{}`", name);
                self.clear_selection();
                self.view.clear_file_input();
                self.show_error(&reason, &[]);
                self.set_phase(UploadPhase::Idle);
            }
        }
    }

    pub fn drag_enter(&mut self) {
        self.view.set_drop_highlighted(true);
    }

    pub fn drag_leave(&mut self) {
        self.view.set_drop_highlighted(false);
    }

    /// Files dropped on the drop zone; same path as [`Self::select_files`].
    pub fn drop_files<I>(&mut self, files: I)
    where
        I: IntoIterator<Item = F>,
    {
        self.view.set_drop_highlighted(false);
        self.select_files(files);
    }

    /// Starts a submission, or returns `None` if none should happen.
    ///
    /// Without a loaded file this only shows an error. While another
    /// submission is outstanding it does nothing at all.
    pub fn begin_submit(&mut self, fields: FormFields) -> Option<SubmissionRequest<F>> {
        if !self.form_is_interactive() {
            warn!("ignoring submit while {:?}", self.phase);
            return None;
        }

        let Some(file) = self.file.as_ref().map(|f| f.handle.clone()) else {
            self.show_error(MUST_SELECT_FILE, &[]);
            return None;
        };

        let snapshot = fields.snapshot();
        if let Err(e) = self.persistence.save(&snapshot) {
            warn!("could not save form values: {}", e);
        }
        if let Err(e) = self.persistence.mark_submitted() {
            warn!("could not mark submission: {}", e);
        }
        self.submitted_fields = Some(snapshot);

        self.last_submission += 1;
        let id = self.last_submission;
        self.active_submission = Some(id);
        self.set_phase(UploadPhase::Submitting);
        info!("submitting `{}` as submission #{}", file.file_name(), id);

        Some(SubmissionRequest { id, file, fields })
    }

    /// Applies the outcome of submission `id`. Returns `false` when the
    /// submission is no longer the active one and the outcome was dropped.
    pub fn finish_submit(
        &mut self,
        id: u64,
        outcome: Result<UploadResponse, UploadError>,
    ) -> bool {
        if self.active_submission != Some(id) {
            debug!("dropping stale outcome of submission #{}", id);
            return false;
        }
        self.active_submission = None;
        let submitted = self.submitted_fields.take();
        if self.persistence.is_marked() {
            self.apply_load_decision();
        } else if let Some(snapshot) = submitted {
            // Unmarked completion is not a fresh load; keep `formValues`.
            warn!("submission #{} completed without a marker", id);
            self.view.set_form_fields(&snapshot);
        }

        match outcome {
            Ok(UploadResponse::Failure(failure)) => {
                info!("submission #{} rejected: {}", id, failure.message);
                self.show_error(&failure.message, &failure.detailed_errors);
                self.set_phase(UploadPhase::ErrorShown);
            }
            Ok(UploadResponse::Success(success)) => {
                info!(
                    "submission #{} processed `{}`",
                    id, success.uploaded_filename
                );
                self.hide_error();
                self.view.render_result(Some(&success));
                self.result = Some(success);
                self.set_phase(UploadPhase::ResultShown);
            }
            Err(e) => {
                error!("submission #{} failed: {}", id, e);
                self.show_error(GENERIC_FAILURE, &[]);
                self.set_phase(UploadPhase::ErrorShown);
            }
        }
        true
    }

    /// [`Self::begin_submit`], send, [`Self::finish_submit`] in one go.
    pub async fn submit_with<T>(&mut self, fields: FormFields, transport: &T) -> bool
    where
        T: Transport<F>,
    {
        let Some(request) = self.begin_submit(fields) else {
            return false;
        };
        let outcome = transport.send(&request).await;
        self.finish_submit(request.id, outcome)
    }

    /// Back to a blank selection from any phase. Persisted fields are kept;
    /// an outstanding submission is abandoned and its outcome will be dropped.
    pub fn restart(&mut self) {
        if self.active_submission.take().is_some() {
            self.persistence.clear_submitted_marker();
        }
        self.submitted_fields = None;
        self.clear_selection();
        self.view.clear_file_input();
        self.view.set_drop_highlighted(false);
        self.hide_error();
        self.hide_result();
        self.set_phase(UploadPhase::Idle);
    }

    fn form_is_interactive(&self) -> bool {
        matches!(
            self.phase,
            UploadPhase::Idle | UploadPhase::FileLoaded | UploadPhase::ErrorShown
        )
    }

    fn apply_load_decision(&mut self) {
        match self.persistence.decide() {
            LoadDecision::Fresh => self.view.set_form_fields(&FormFieldSnapshot::default()),
            LoadDecision::Resubmission(Some(snapshot)) => self.view.set_form_fields(&snapshot),
            LoadDecision::Resubmission(None) => {}
        }
    }

    fn clear_selection(&mut self) {
        self.file = None;
        self.view.set_file_list_text(NO_FILE_SELECTED);
        self.view.set_file_loaded(false);
    }

    fn show_error(&mut self, message: &str, detailed_errors: &[DetailedError]) {
        let payload = present(message, detailed_errors);
        self.view.render_error(Some(&payload));
        self.error = Some(payload);
    }

    fn hide_error(&mut self) {
        self.error = None;
        self.view.render_error(None);
    }

    fn hide_result(&mut self) {
        self.result = None;
        self.view.render_result(None);
    }

    fn set_phase(&mut self, phase: UploadPhase) {
        if self.phase != phase {
            debug!("upload phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::error::StoreError;
    use crate::upload::error_presenter::FRIENDLY_MESSAGES;
    use crate::upload::persistence::MemoryStore;
    use crate::upload::texts::INVALID_FORMAT;
    use common::config::{FORM_SUBMITTED_KEY, FORM_VALUES_KEY};
    use common::model::upload::UploadFailure;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Clone, Debug, PartialEq)]
    struct TestFile(&'static str);

    impl CandidateFile for TestFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    #[derive(Default)]
    struct RecordingView {
        file_list_text: String,
        drop_highlighted: bool,
        file_loaded: bool,
        input_clears: usize,
        error: Option<ErrorPayload>,
        result: Option<UploadSuccess>,
        fields: Option<FormFieldSnapshot>,
    }

    impl UploadView for RecordingView {
        fn set_file_list_text(&mut self, text: &str) {
            self.file_list_text = text.to_string();
        }

        fn set_drop_highlighted(&mut self, highlighted: bool) {
            self.drop_highlighted = highlighted;
        }

        fn set_file_loaded(&mut self, loaded: bool) {
            self.file_loaded = loaded;
        }

        fn clear_file_input(&mut self) {
            self.input_clears += 1;
        }

        fn render_error(&mut self, error: Option<&ErrorPayload>) {
            self.error = error.cloned();
        }

        fn render_result(&mut self, result: Option<&UploadSuccess>) {
            self.result = result.cloned();
        }

        fn set_form_fields(&mut self, snapshot: &FormFieldSnapshot) {
            self.fields = Some(snapshot.clone());
        }
    }

    struct FakeTransport {
        outcome: Result<UploadResponse, UploadError>,
        sent: RefCell<Vec<SubmissionRequest<TestFile>>>,
    }

    impl FakeTransport {
        fn replying(outcome: Result<UploadResponse, UploadError>) -> Self {
            Self {
                outcome,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport<TestFile> for FakeTransport {
        async fn send(
            &self,
            request: &SubmissionRequest<TestFile>,
        ) -> Result<UploadResponse, UploadError> {
            self.sent.borrow_mut().push(request.clone());
            self.outcome.clone()
        }
    }

    /// Session store whose writes always fail, like a full quota.
    #[derive(Default)]
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".into(),
            })
        }

        fn remove(&mut self, key: &str) {
            self.0.remove(key);
        }
    }

    type Controller = UploadController<TestFile, RecordingView, MemoryStore, MemoryStore>;

    fn controller() -> Controller {
        let mut controller = UploadController::new(
            RecordingView::default(),
            FormFieldPersistence::new(MemoryStore::default(), MemoryStore::default()),
        );
        controller.initialize();
        controller
    }

    fn fields() -> FormFields {
        FormFields {
            campo1: "Docente".into(),
            campo2: "K1051".into(),
            campo3: "TP1".into(),
            campo4: "2024".into(),
            campo5: "01/03/2024".into(),
            campo6: "15/07/2024".into(),
        }
    }

    fn success() -> UploadResponse {
        UploadResponse::Success(UploadSuccess {
            uploaded_filename: "notas.xlsx".into(),
            alumnos_url: "/download?file_id=1&file_type=alumnos".into(),
            notas_url: "/download?file_id=1&file_type=notas".into(),
            summary: None,
            records_count: Some(3),
        })
    }

    fn failure() -> UploadResponse {
        UploadResponse::Failure(UploadFailure {
            message: "Se encontraron errores en el archivo".into(),
            detailed_errors: vec![
                DetailedError::Line("line A".into()),
                DetailedError::Row {
                    fila: 3,
                    errores: vec!["bad date".into()],
                },
            ],
        })
    }

    #[test]
    fn fresh_load_starts_blank_and_removes_durable_snapshot() {
        let mut durable = MemoryStore::default();
        durable
            .set(FORM_VALUES_KEY, r#"{"campo1":"viejo"}"#)
            .unwrap();
        let mut c: Controller = UploadController::new(
            RecordingView::default(),
            FormFieldPersistence::new(durable, MemoryStore::default()),
        );
        c.initialize();

        assert_eq!(c.phase(), UploadPhase::Idle);
        assert_eq!(c.view().fields, Some(FormFieldSnapshot::default()));
        assert!(!c.persistence().durable().contains(FORM_VALUES_KEY));
        assert_eq!(c.view().file_list_text, NO_FILE_SELECTED);
    }

    #[test]
    fn reload_during_submission_restores_fields() {
        let mut durable = MemoryStore::default();
        durable
            .set(FORM_VALUES_KEY, r#"{"campo1":"a","campo2":"b","campo3":"c","campo4":"d"}"#)
            .unwrap();
        let mut session = MemoryStore::default();
        session.set(FORM_SUBMITTED_KEY, "true").unwrap();
        let mut c: Controller = UploadController::new(
            RecordingView::default(),
            FormFieldPersistence::new(durable, session),
        );
        c.initialize();

        assert_eq!(c.view().fields.as_ref().map(|f| f.campo4.as_str()), Some("d"));
        assert!(!c.persistence().session().contains(FORM_SUBMITTED_KEY));
    }

    #[test]
    fn valid_selection_loads_file() {
        let mut c = controller();
        c.select_files(vec![TestFile("Notas.XLSX"), TestFile("ignored.pdf")]);

        assert_eq!(c.phase(), UploadPhase::FileLoaded);
        assert_eq!(c.selected_file().map(|f| f.extension.as_str()), Some("xlsx"));
        assert_eq!(c.view().file_list_text, "📄 Archivo seleccionado: Notas.XLSX");
        assert!(c.view().file_loaded);
        assert!(c.view().error.is_none());
    }

    #[test]
    fn invalid_selection_clears_file_and_replaces_error() {
        let mut c = controller();
        c.select_files(vec![TestFile("notas.xlsx")]);
        c.select_files(vec![TestFile("report.pdf")]);

        assert_eq!(c.phase(), UploadPhase::Idle);
        assert!(c.selected_file().is_none());
        assert_eq!(c.view().input_clears, 1);
        assert!(!c.view().file_loaded);
        assert_eq!(c.view().file_list_text, NO_FILE_SELECTED);
        let error = c.view().error.clone().unwrap();
        assert_eq!(error.raw_message, INVALID_FORMAT);
        assert_eq!(error.friendly_message, FRIENDLY_MESSAGES[2].1);

        c.select_files(vec![TestFile("noext")]);
        assert_eq!(c.view().input_clears, 2);
        assert_eq!(c.error(), c.view().error.as_ref());
        assert!(c.view().error.as_ref().unwrap().detail_lines.is_empty());
    }

    #[test]
    fn empty_selection_resets_without_error() {
        let mut c = controller();
        c.select_files(vec![TestFile("report.pdf")]);
        c.select_files(Vec::new());

        assert_eq!(c.phase(), UploadPhase::Idle);
        assert!(c.view().error.is_none());
        assert_eq!(c.view().file_list_text, NO_FILE_SELECTED);
    }

    #[test]
    fn drop_shares_selection_path_and_clears_highlight() {
        let mut c = controller();
        c.drag_enter();
        assert!(c.view().drop_highlighted);

        c.drop_files(vec![TestFile("notas.xls")]);
        assert!(!c.view().drop_highlighted);
        assert_eq!(c.phase(), UploadPhase::FileLoaded);

        c.drag_enter();
        c.drag_leave();
        assert!(!c.view().drop_highlighted);
    }

    #[test]
    fn submit_without_file_never_reaches_network() {
        let mut c = controller();
        let transport = FakeTransport::replying(Ok(success()));

        assert!(!block_on(c.submit_with(fields(), &transport)));
        assert!(transport.sent.borrow().is_empty());
        assert_eq!(c.phase(), UploadPhase::Idle);
        assert_eq!(
            c.view().error.as_ref().map(|e| e.raw_message.as_str()),
            Some(MUST_SELECT_FILE)
        );
        assert!(!c.persistence().session().contains(FORM_SUBMITTED_KEY));
    }

    #[test]
    fn begin_submit_persists_before_sending() {
        let mut c = controller();
        c.select_files(vec![TestFile("notas.xlsx")]);
        let request = c.begin_submit(fields()).unwrap();

        assert_eq!(c.phase(), UploadPhase::Submitting);
        assert_eq!(request.file, TestFile("notas.xlsx"));
        assert_eq!(request.fields, fields());
        assert!(c.persistence().durable().contains(FORM_VALUES_KEY));
        assert_eq!(
            c.persistence().session().get(FORM_SUBMITTED_KEY).as_deref(),
            Some("true")
        );
    }

    #[test]
    fn second_submit_while_submitting_is_ignored() {
        let mut c = controller();
        c.select_files(vec![TestFile("notas.xlsx")]);
        let first = c.begin_submit(fields()).unwrap();

        assert!(c.begin_submit(fields()).is_none());
        assert_eq!(c.active_submission(), Some(first.id));

        c.select_files(vec![TestFile("otra.xlsx")]);
        assert_eq!(c.selected_file().map(|f| f.name.as_str()), Some("notas.xlsx"));
    }

    #[test]
    fn structured_failure_shows_error_and_keeps_snapshot() {
        let mut c = controller();
        c.select_files(vec![TestFile("notas.xlsx")]);
        let transport = FakeTransport::replying(Ok(failure()));

        assert!(block_on(c.submit_with(fields(), &transport)));

        assert_eq!(c.phase(), UploadPhase::ErrorShown);
        let error = c.view().error.clone().unwrap();
        assert_eq!(error.raw_message, "Se encontraron errores en el archivo");
        assert_eq!(error.friendly_message, FRIENDLY_MESSAGES[10].1);
        assert_eq!(error.detail_lines, vec!["line A", "Fila 3: bad date"]);
        assert!(c.persistence().durable().contains(FORM_VALUES_KEY));
        assert!(!c.persistence().session().contains(FORM_SUBMITTED_KEY));
        assert_eq!(c.view().fields, Some(fields().snapshot()));
        // The file stays loaded so the user can retry right away.
        assert!(c.selected_file().is_some());
        assert_eq!(transport.sent.borrow()[0].fields.campo5, "01/03/2024");
    }

    #[test]
    fn structured_success_shows_result() {
        let mut c = controller();
        c.select_files(vec![TestFile("notas.xlsx")]);
        c.select_files(vec![TestFile("bad.csv")]);
        c.select_files(vec![TestFile("notas.xlsx")]);
        let transport = FakeTransport::replying(Ok(success()));

        assert!(block_on(c.submit_with(fields(), &transport)));

        assert_eq!(c.phase(), UploadPhase::ResultShown);
        let result = c.view().result.clone().unwrap();
        assert_eq!(result.alumnos_url, "/download?file_id=1&file_type=alumnos");
        assert_eq!(result.notas_url, "/download?file_id=1&file_type=notas");
        assert_eq!(result.uploaded_filename, "notas.xlsx");
        assert!(c.view().error.is_none());
    }

    #[test]
    fn transport_failure_shows_generic_message_only() {
        let mut c = controller();
        c.select_files(vec![TestFile("notas.xlsx")]);
        let transport =
            FakeTransport::replying(Err(UploadError::Decode("expected value at line 1".into())));

        assert!(block_on(c.submit_with(fields(), &transport)));

        assert_eq!(c.phase(), UploadPhase::ErrorShown);
        let error = c.view().error.clone().unwrap();
        assert_eq!(error.raw_message, GENERIC_FAILURE);
        assert_eq!(error.friendly_message, FRIENDLY_MESSAGES[7].1);
        assert!(error.detail_lines.is_empty());
    }

    #[test]
    fn retry_after_error_is_allowed() {
        let mut c = controller();
        c.select_files(vec![TestFile("notas.xlsx")]);
        block_on(c.submit_with(fields(), &FakeTransport::replying(Ok(failure()))));
        assert_eq!(c.phase(), UploadPhase::ErrorShown);

        assert!(block_on(
            c.submit_with(fields(), &FakeTransport::replying(Ok(success())))
        ));
        assert_eq!(c.phase(), UploadPhase::ResultShown);
    }

    #[test]
    fn restart_after_result_keeps_durable_snapshot() {
        let mut c = controller();
        c.select_files(vec![TestFile("notas.xlsx")]);
        block_on(c.submit_with(fields(), &FakeTransport::replying(Ok(success()))));

        c.restart();

        assert_eq!(c.phase(), UploadPhase::Idle);
        assert!(c.selected_file().is_none());
        assert!(c.view().result.is_none());
        assert!(c.view().error.is_none());
        assert_eq!(c.view().file_list_text, NO_FILE_SELECTED);
        assert!(c.persistence().durable().contains(FORM_VALUES_KEY));
    }

    #[test]
    fn outcome_arriving_after_restart_is_dropped() {
        let mut c = controller();
        c.select_files(vec![TestFile("notas.xlsx")]);
        let request = c.begin_submit(fields()).unwrap();

        c.restart();
        assert!(!c.persistence().session().contains(FORM_SUBMITTED_KEY));

        assert!(!c.finish_submit(request.id, Ok(success())));
        assert_eq!(c.phase(), UploadPhase::Idle);
        assert!(c.view().result.is_none());
    }

    #[test]
    fn outcome_of_superseded_submission_is_dropped() {
        let mut c = controller();
        c.select_files(vec![TestFile("notas.xlsx")]);
        let first = c.begin_submit(fields()).unwrap();
        c.restart();
        c.select_files(vec![TestFile("notas.xlsx")]);
        let second = c.begin_submit(fields()).unwrap();
        assert_ne!(first.id, second.id);

        assert!(!c.finish_submit(first.id, Ok(failure())));
        assert_eq!(c.phase(), UploadPhase::Submitting);
        assert!(c.finish_submit(second.id, Ok(success())));
        assert_eq!(c.phase(), UploadPhase::ResultShown);
    }

    #[test]
    fn failed_marker_write_keeps_fields_after_completion() {
        let mut c: UploadController<TestFile, RecordingView, MemoryStore, ReadOnlyStore> =
            UploadController::new(
                RecordingView::default(),
                FormFieldPersistence::new(MemoryStore::default(), ReadOnlyStore::default()),
            );
        c.initialize();
        c.select_files(vec![TestFile("n.xlsx")]);
        let request = c.begin_submit(fields()).unwrap();
        assert!(!c.persistence().is_marked());

        assert!(c.finish_submit(request.id, Err(UploadError::Malformed)));

        assert_eq!(c.phase(), UploadPhase::ErrorShown);
        assert!(c.persistence().durable().contains(FORM_VALUES_KEY));
        assert_eq!(c.view().fields, Some(fields().snapshot()));
        assert_eq!(
            c.view().fields.as_ref().map(|f| f.campo1.as_str()),
            Some("Docente")
        );
    }
}
