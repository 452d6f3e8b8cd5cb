//! Panel composition: store + selection + roster editor + confirmation gate.
//!
//! `EpisodePanel` owns all panel state and exposes the synchronous
//! transitions the front ends drive. The visible surface (list, detail,
//! not-found fallback) is derived from state on demand rather than stored,
//! so there is no render bookkeeping to fall out of sync. The panel
//! performs no I/O; front ends handle drawing and logging.

use crate::gate::ConfirmationGate;
use crate::models::{Episode, EpisodeDraft};
use crate::roster::{RosterDraft, RosterEditor};
use crate::store::EpisodeStore;
use crate::Result;

/// Actions that must pass the confirmation gate before they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// Open the team roster for editing
    EditTeam,
}

/// What the panel currently shows, derived from selection and store state.
#[derive(Debug)]
pub enum PanelView<'a> {
    /// No selection: the episode overview
    List(&'a [Episode]),
    /// Selection resolved to an episode
    Detail(&'a Episode),
    /// Selection names an id the store doesn't have
    NotFound(&'a str),
}

/// Owned state for the episode-manager panel.
#[derive(Debug, Clone, Default)]
pub struct EpisodePanel {
    store: EpisodeStore,
    selection: Option<String>,
    editor: RosterEditor,
    gate: ConfirmationGate<PanelAction>,
}

impl EpisodePanel {
    /// Panel over a freshly seeded store.
    pub fn new() -> Self {
        Self::with_store(EpisodeStore::with_seed_data())
    }

    /// Panel over a caller-supplied store.
    pub fn with_store(store: EpisodeStore) -> Self {
        Self {
            store,
            selection: None,
            editor: RosterEditor::new(),
            gate: ConfirmationGate::new(),
        }
    }

    pub fn store(&self) -> &EpisodeStore {
        &self.store
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// The episode the current selection resolves to, if any.
    pub fn selected_episode(&self) -> Option<&Episode> {
        self.selection.as_deref().and_then(|id| self.store.get(id))
    }

    /// Derive the current surface from selection and store state.
    pub fn view(&self) -> PanelView<'_> {
        match self.selection.as_deref() {
            None => PanelView::List(self.store.episodes()),
            Some(id) => match self.store.get(id) {
                Some(episode) => PanelView::Detail(episode),
                None => PanelView::NotFound(id),
            },
        }
    }

    /// Select an episode by id. Any edit session or pending confirmation
    /// belongs to the previous detail context and is discarded.
    pub fn select(&mut self, id: impl Into<String>) {
        self.editor.cancel();
        self.gate.dismiss();
        self.selection = Some(id.into());
    }

    /// Return to the overview, discarding detail-context state.
    pub fn clear_selection(&mut self) {
        self.editor.cancel();
        self.gate.dismiss();
        self.selection = None;
    }

    /// Create an episode from a draft and return the stored record.
    pub fn create_episode(&mut self, draft: EpisodeDraft) -> Episode {
        self.store.create(draft)
    }

    /// Ask to edit the selected episode's roster. Arms the confirmation
    /// gate; editing begins only when the gate is approved. Without a
    /// resolvable selection, or mid-edit, this does nothing.
    pub fn request_edit_team(&mut self) {
        if self.editor.is_editing() || self.selected_episode().is_none() {
            return;
        }
        self.gate.request(
            PanelAction::EditTeam,
            "EDIT TEAM",
            "Approve changes to this episode's team roster",
        );
    }

    /// The request the confirmation surface should be showing, if any.
    pub fn gate(&self) -> &ConfirmationGate<PanelAction> {
        &self.gate
    }

    /// Resolve the pending confirmation as approved. Delivers the gated
    /// action exactly once and runs it; returns the action that ran.
    pub fn approve_gate(&mut self) -> Option<PanelAction> {
        let action = self.gate.approve()?;
        match action {
            PanelAction::EditTeam => {
                // Selection can't have changed since arming (selection
                // changes dismiss the gate), but stay defensive about it.
                let committed = self.selected_episode().map(|e| e.team_members.clone())?;
                self.editor.begin(&committed);
            }
        }
        Some(action)
    }

    /// Resolve the pending confirmation as dismissed; nothing runs.
    pub fn dismiss_gate(&mut self) {
        self.gate.dismiss();
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_editing()
    }

    /// Active roster draft, if an edit session is running.
    pub fn editing(&self) -> Option<&RosterDraft> {
        self.editor.draft()
    }

    /// Mutable access to the active roster draft for staging edits.
    pub fn editing_mut(&mut self) -> Option<&mut RosterDraft> {
        self.editor.draft_mut()
    }

    /// Discard the edit session; the committed roster is untouched.
    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
    }

    /// Commit the edit session: replace the selected episode's roster with
    /// the draft in one step. Readers never observe a partial edit. Returns
    /// `Ok(false)` when there was nothing to commit.
    pub fn save_team(&mut self) -> Result<bool> {
        let Some(id) = self.selection.clone() else {
            return Ok(false);
        };
        let Some(members) = self.editor.take_draft() else {
            return Ok(false);
        };
        self.store.replace_team(&id, members)?;
        Ok(true)
    }
}
