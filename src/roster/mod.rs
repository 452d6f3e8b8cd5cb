//! Team-roster edit workflow.
//!
//! `RosterEditor` is a two-state machine: Viewing (no draft) and Editing
//! (a `RosterDraft` holding a deep copy of the committed roster plus one
//! staged new-member input pair). All edits land in the draft; the
//! committed roster changes only when the caller takes the finished draft
//! and replaces the episode's list wholesale. Cancel discards everything.

use crate::models::TeamMember;

/// Which half of a member entry an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    Name,
    Role,
}

/// The in-progress "add member" input pair.
///
/// Both fields must be non-empty before the pair can be appended to the
/// draft. Presence is the only check; whitespace counts as filled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedMember {
    pub name: String,
    pub role: String,
}

/// Working copy of a roster while an edit session is active.
#[derive(Debug, Clone)]
pub struct RosterDraft {
    members: Vec<TeamMember>,
    /// Pending new-member input pair
    pub staged: StagedMember,
}

impl RosterDraft {
    fn new(committed: &[TeamMember]) -> Self {
        Self {
            members: committed.to_vec(),
            staged: StagedMember::default(),
        }
    }

    /// Current draft roster.
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// Overwrite one field of an existing draft entry.
    ///
    /// Panics on an out-of-range index; callers only pass indices they
    /// obtained from `members()`.
    pub fn update_member(&mut self, index: usize, field: MemberField, value: impl Into<String>) {
        let member = &mut self.members[index];
        match field {
            MemberField::Name => member.name = value.into(),
            MemberField::Role => member.role = value.into(),
        }
    }

    /// Remove one draft entry. Panics on an out-of-range index.
    pub fn remove_member(&mut self, index: usize) {
        self.members.remove(index);
    }

    /// Set the staged name input.
    pub fn stage_name(&mut self, name: impl Into<String>) {
        self.staged.name = name.into();
    }

    /// Set the staged role input.
    pub fn stage_role(&mut self, role: impl Into<String>) {
        self.staged.role = role.into();
    }

    /// True when the staged pair is complete enough to add, which is the
    /// enabled state of the add control.
    pub fn can_add_staged(&self) -> bool {
        !self.staged.name.is_empty() && !self.staged.role.is_empty()
    }

    /// Append the staged pair to the draft and clear the input slot.
    /// Does nothing (and returns false) while either field is empty.
    pub fn add_staged(&mut self) -> bool {
        if !self.can_add_staged() {
            return false;
        }
        let staged = std::mem::take(&mut self.staged);
        self.members.push(TeamMember::new(staged.name, staged.role));
        true
    }
}

/// Viewing/Editing state machine for one episode's roster.
#[derive(Debug, Clone, Default)]
pub struct RosterEditor {
    draft: Option<RosterDraft>,
}

impl RosterEditor {
    /// Start in Viewing with no draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while an edit session is active.
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Enter Editing: snapshot the committed roster into a fresh draft and
    /// clear any staged input left over from a previous session.
    pub fn begin(&mut self, committed: &[TeamMember]) {
        self.draft = Some(RosterDraft::new(committed));
    }

    /// Leave Editing, discarding the draft and staged input.
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Take the finished draft roster for commit, returning to Viewing.
    /// Returns `None` when no edit session is active.
    pub fn take_draft(&mut self) -> Option<Vec<TeamMember>> {
        self.draft.take().map(|d| d.members)
    }

    pub fn draft(&self) -> Option<&RosterDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut RosterDraft> {
        self.draft.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn committed() -> Vec<TeamMember> {
        vec![
            TeamMember::new("Alex Chen", "Creative Director"),
            TeamMember::new("Sarah Kim", "Designer"),
        ]
    }

    #[test]
    fn test_begin_snapshots_committed_roster() {
        let mut editor = RosterEditor::new();
        assert!(!editor.is_editing());

        editor.begin(&committed());
        assert!(editor.is_editing());

        let draft = editor.draft().unwrap();
        assert_eq!(draft.members(), committed().as_slice());
        assert_eq!(draft.staged, StagedMember::default());
    }

    #[test]
    fn test_begin_clears_stale_staged_input() {
        let mut editor = RosterEditor::new();
        editor.begin(&committed());
        editor.draft_mut().unwrap().stage_name("Rio");
        editor.cancel();

        editor.begin(&committed());
        assert!(editor.draft().unwrap().staged.name.is_empty());
    }

    #[test]
    fn test_update_member_field() {
        let mut editor = RosterEditor::new();
        editor.begin(&committed());
        let draft = editor.draft_mut().unwrap();

        draft.update_member(0, MemberField::Name, "Alexis Chen");
        draft.update_member(1, MemberField::Role, "Lead Designer");

        assert_eq!(draft.members()[0].name, "Alexis Chen");
        assert_eq!(draft.members()[0].role, "Creative Director");
        assert_eq!(draft.members()[1].role, "Lead Designer");
    }

    #[test]
    #[should_panic]
    fn test_update_member_out_of_range_panics() {
        let mut editor = RosterEditor::new();
        editor.begin(&committed());
        editor
            .draft_mut()
            .unwrap()
            .update_member(5, MemberField::Name, "Nobody");
    }

    #[test]
    fn test_remove_member() {
        let mut editor = RosterEditor::new();
        editor.begin(&committed());
        let draft = editor.draft_mut().unwrap();

        draft.remove_member(0);
        assert_eq!(draft.members().len(), 1);
        assert_eq!(draft.members()[0].name, "Sarah Kim");
    }

    #[test]
    fn test_can_add_requires_both_fields() {
        let mut editor = RosterEditor::new();
        editor.begin(&committed());
        let draft = editor.draft_mut().unwrap();

        assert!(!draft.can_add_staged());

        draft.stage_name("Jo");
        assert!(!draft.can_add_staged());

        draft.stage_role("Lead");
        assert!(draft.can_add_staged());

        draft.stage_name("");
        assert!(!draft.can_add_staged());

        // Presence only: whitespace counts as filled
        draft.stage_name(" ");
        assert!(draft.can_add_staged());
    }

    #[test]
    fn test_add_staged_appends_and_clears() {
        let mut editor = RosterEditor::new();
        editor.begin(&committed());
        let draft = editor.draft_mut().unwrap();

        draft.stage_name("Rio Park");
        draft.stage_role("Producer");
        assert!(draft.add_staged());

        assert_eq!(draft.members().len(), 3);
        assert_eq!(draft.members()[2], TeamMember::new("Rio Park", "Producer"));
        assert_eq!(draft.staged, StagedMember::default());
    }

    #[test]
    fn test_add_staged_disabled_is_noop() {
        let mut editor = RosterEditor::new();
        editor.begin(&committed());
        let draft = editor.draft_mut().unwrap();

        draft.stage_name("Rio Park");
        assert!(!draft.add_staged());
        assert_eq!(draft.members().len(), 2);
        assert_eq!(draft.staged.name, "Rio Park");
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut editor = RosterEditor::new();
        editor.begin(&committed());
        editor.draft_mut().unwrap().remove_member(0);

        editor.cancel();
        assert!(!editor.is_editing());
        assert!(editor.take_draft().is_none());
    }

    #[test]
    fn test_take_draft_returns_final_state() {
        let mut editor = RosterEditor::new();
        editor.begin(&committed());
        {
            let draft = editor.draft_mut().unwrap();
            draft.remove_member(1);
            draft.stage_name("Rio Park");
            draft.stage_role("Producer");
            draft.add_staged();
        }

        let final_roster = editor.take_draft().unwrap();
        assert_eq!(
            final_roster,
            vec![
                TeamMember::new("Alex Chen", "Creative Director"),
                TeamMember::new("Rio Park", "Producer"),
            ]
        );
        assert!(!editor.is_editing());
    }
}
