use strum::{Display, EnumIter, EnumString};

use super::*;

/// The screen the client is currently showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ViewMode {
    #[default]
    Map,
    List,
    Profile,
    Reports,
    Highlights,
}

/// Where the startup fetch currently stands.
///
/// `Degraded` means the deadline passed or the store failed; the
/// application keeps running on whatever data it has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A single transient banner. A new notice replaces the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// The last confirmed store contents, newest first.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub suggestions: Vec<TreeSuggestion>,
    pub reports: Vec<DamageReport>,
    pub highlights: Vec<Highlight>,
    pub users: Vec<User>,
}

/// All state a client renders from.
///
/// The cached collections only ever change through the `commit_*`
/// methods, which the flows call after the store confirmed a write.
/// Nothing in here is speculative.
#[derive(Debug, Clone)]
pub struct AppState {
    view_mode: ViewMode,
    map_center: MapPoint,
    default_center: MapPoint,
    focused_entry: Option<Id>,
    session: Option<User>,
    collections: Collections,
    load_phase: LoadPhase,
    notice: Option<Notice>,
    sign_in_requested: bool,
}

impl AppState {
    pub fn new(default_center: MapPoint) -> Self {
        Self {
            view_mode: ViewMode::default(),
            map_center: default_center,
            default_center,
            focused_entry: None,
            session: None,
            collections: Collections::default(),
            load_phase: LoadPhase::default(),
            notice: None,
            sign_in_requested: false,
        }
    }

    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn switch_view(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub const fn map_center(&self) -> MapPoint {
        self.map_center
    }

    pub const fn default_center(&self) -> MapPoint {
        self.default_center
    }

    /// Center the map on an entry and focus it.
    pub fn navigate_to(&mut self, id: &Id, pos: MapPoint) {
        self.map_center = pos;
        self.focused_entry = Some(id.clone());
        self.view_mode = ViewMode::Map;
    }

    pub const fn focused_entry(&self) -> Option<&Id> {
        self.focused_entry.as_ref()
    }

    pub fn clear_focus(&mut self) {
        self.focused_entry = None;
    }

    pub const fn session(&self) -> Option<&User> {
        self.session.as_ref()
    }

    pub fn set_session(&mut self, user: User) {
        self.sign_in_requested = false;
        self.session = Some(user);
    }

    /// Drop the session and everything derived from it. The cached
    /// collections stay, they are server state, not session state.
    pub fn clear_session(&mut self) {
        self.session = None;
        self.view_mode = ViewMode::default();
        self.focused_entry = None;
        self.sign_in_requested = false;
    }

    pub const fn sign_in_requested(&self) -> bool {
        self.sign_in_requested
    }

    pub fn request_sign_in(&mut self) {
        self.sign_in_requested = true;
    }

    pub fn dismiss_sign_in_prompt(&mut self) {
        self.sign_in_requested = false;
    }

    pub const fn load_phase(&self) -> LoadPhase {
        self.load_phase
    }

    /// Leave the loading phase without data, showing a warning.
    pub fn mark_degraded(&mut self, message: impl Into<String>) {
        self.load_phase = LoadPhase::Degraded;
        self.show_notice(Notice::warning(message));
    }

    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub const fn collections(&self) -> &Collections {
        &self.collections
    }

    pub fn commit_snapshot(
        &mut self,
        suggestions: Vec<TreeSuggestion>,
        reports: Vec<DamageReport>,
        highlights: Vec<Highlight>,
        users: Vec<User>,
    ) {
        self.collections = Collections {
            suggestions,
            reports,
            highlights,
            users,
        };
        self.load_phase = LoadPhase::Ready;
    }

    pub fn commit_suggestion(&mut self, suggestion: TreeSuggestion) {
        let rows = &mut self.collections.suggestions;
        match rows.iter().position(|s| s.id == suggestion.id) {
            Some(i) => rows[i] = suggestion,
            None => rows.insert(0, suggestion),
        }
    }

    pub fn remove_suggestion(&mut self, id: &str) {
        self.collections.suggestions.retain(|s| s.id.as_str() != id);
        self.drop_focus_of(id);
    }

    pub fn commit_report(&mut self, report: DamageReport) {
        let rows = &mut self.collections.reports;
        match rows.iter().position(|r| r.id == report.id) {
            Some(i) => rows[i] = report,
            None => rows.insert(0, report),
        }
    }

    pub fn remove_report(&mut self, id: &str) {
        self.collections.reports.retain(|r| r.id.as_str() != id);
        self.drop_focus_of(id);
    }

    pub fn commit_highlight(&mut self, highlight: Highlight) {
        let rows = &mut self.collections.highlights;
        match rows.iter().position(|h| h.id == highlight.id) {
            Some(i) => rows[i] = highlight,
            None => rows.insert(0, highlight),
        }
    }

    pub fn remove_highlight(&mut self, id: &str) {
        self.collections.highlights.retain(|h| h.id.as_str() != id);
        self.drop_focus_of(id);
    }

    pub fn commit_user(&mut self, user: User) {
        // Keep the signed-in copy in sync.
        if self.session.as_ref().map(|u| &u.id) == Some(&user.id) {
            self.session = Some(user.clone());
        }
        let rows = &mut self.collections.users;
        match rows.iter().position(|u| u.id == user.id) {
            Some(i) => rows[i] = user,
            None => rows.insert(0, user),
        }
    }

    pub fn remove_user(&mut self, id: &str) {
        self.collections.users.retain(|u| u.id.as_str() != id);
    }

    fn drop_focus_of(&mut self, id: &str) {
        if self.focused_entry.as_ref().map(Id::as_str) == Some(id) {
            self.focused_entry = None;
        }
    }
}
