//! Question store: ordered question state and persistence synchronization

use crate::question::{Question, QuestionType};
use crate::storage::StorageBackend;
use tracing::{debug, error, warn};

type ChangeHook = Box<dyn Fn(&[Question])>;

/// Owns the ordered question collection and keeps it synchronized with a
/// storage backend
///
/// All mutation goes through the operations here; the UI layer only reads.
/// Persistence failures never surface: the in-memory sequence stays
/// authoritative for the session and failures are logged.
pub struct QuestionStore {
    questions: Vec<Question>,
    next_id: u64,
    backend: Box<dyn StorageBackend>,
    hooks: Vec<ChangeHook>,
}

impl QuestionStore {
    /// Create a store, loading any state a prior session persisted
    ///
    /// An absent slot, an unavailable backend, or a corrupt payload all fall
    /// back to an empty collection.
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        let questions = load_questions(backend.as_ref());
        // Never reuse a persisted id.
        let next_id = questions.iter().map(|q| q.id).max().map_or(1, |max| max + 1);
        Self {
            questions,
            next_id,
            backend,
            hooks: Vec::new(),
        }
    }

    /// The questions in display order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Look up a question by id
    pub fn question(&self, id: u64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Register a hook invoked after every successful mutation
    pub fn on_change(&mut self, hook: impl Fn(&[Question]) + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Append a new question with a fresh id and placeholder label
    ///
    /// Returns the new question's id.
    pub fn add_question(&mut self, question_type: QuestionType) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.questions.push(Question::new(id, question_type));
        self.sync();
        id
    }

    /// Replace the label of the question with the given id (no-op if absent)
    pub fn update_label(&mut self, id: u64, new_label: impl Into<String>) {
        let Some(question) = self.questions.iter_mut().find(|q| q.id == id) else {
            debug!(id, "update_label on missing id ignored");
            return;
        };
        question.label = new_label.into();
        self.sync();
    }

    /// Replace the type of the question with the given id (no-op if absent)
    pub fn update_question_type(&mut self, id: u64, new_type: QuestionType) {
        let Some(question) = self.questions.iter_mut().find(|q| q.id == id) else {
            debug!(id, "update_question_type on missing id ignored");
            return;
        };
        question.question_type = new_type;
        self.sync();
    }

    /// Remove the question with the given id, preserving the order of the
    /// rest (no-op if absent)
    pub fn remove_question(&mut self, id: u64) {
        let Some(index) = self.questions.iter().position(|q| q.id == id) else {
            debug!(id, "remove_question on missing id ignored");
            return;
        };
        self.questions.remove(index);
        self.sync();
    }

    /// Move the question at `from` to position `to`
    ///
    /// An out-of-range `from` is a no-op; `to` is clamped to the valid range.
    pub fn reorder_questions(&mut self, from: usize, to: usize) {
        if from >= self.questions.len() {
            debug!(from, "reorder_questions from out-of-range index ignored");
            return;
        }
        let to = to.min(self.questions.len() - 1);
        if from == to {
            return;
        }
        let question = self.questions.remove(from);
        self.questions.insert(to, question);
        self.sync();
    }

    /// Drop all questions
    pub fn clear_all(&mut self) {
        if self.questions.is_empty() {
            return;
        }
        self.questions.clear();
        self.sync();
    }

    /// Write-back after a mutation, then notify observers
    ///
    /// The in-memory state is already updated when this runs; a failed write
    /// only costs durability, so observers are notified either way.
    fn sync(&mut self) {
        match serde_json::to_string(&self.questions) {
            Ok(payload) => {
                if let Err(err) = self.backend.set(&payload) {
                    error!("failed to persist questions: {err}");
                }
            }
            Err(err) => error!("failed to serialize questions: {err}"),
        }
        for hook in &self.hooks {
            hook(&self.questions);
        }
    }
}

/// Load the persisted sequence, falling back to empty on any failure
fn load_questions(backend: &dyn StorageBackend) -> Vec<Question> {
    let raw = match backend.get() {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(crate::StorageError::Unavailable) => return Vec::new(),
        Err(err) => {
            warn!("failed to load questions: {err}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Question>>(&raw) {
        Ok(questions) => {
            debug!(count = questions.len(), "loaded persisted questions");
            questions
        }
        Err(err) => {
            warn!("discarding corrupt question payload: {err}");
            Vec::new()
        }
    }
}
