//! Play Session use case
//!
//! Drives a single game: validates the setup, draws prompts from the
//! content bank and enforces the turn protocol.

use crate::config::GameSettings;
use crate::ports::turn_notifier::{NoTurnNotifier, TurnNotifier};
use std::sync::Arc;
use tod_domain::{
    ContentBank, DomainError, Phase, Player, Prompt, PromptKind, Quota, Session, SessionSummary,
    Transition,
};
use tracing::{debug, info};

/// Session engine for one game of Truth or Dare
///
/// Owns the [`Session`] aggregate and the content bank it draws from.
/// A finished engine stays finished; build a new one for the next game.
pub struct SessionEngine<B: ContentBank + ?Sized + 'static> {
    bank: Arc<B>,
    session: Session,
    notifier: Arc<dyn TurnNotifier>,
}

impl<B: ContentBank + ?Sized + 'static> SessionEngine<B> {
    /// Create an engine in the setup phase
    pub fn new(bank: Arc<B>) -> Self {
        Self {
            bank,
            session: Session::new(),
            notifier: Arc::new(NoTurnNotifier),
        }
    }

    /// Set the notifier that receives session events
    pub fn with_notifier(mut self, notifier: Arc<dyn TurnNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Start the session from raw player names
    ///
    /// Does not consult the content bank; an unregistered theme surfaces
    /// on the first [`SessionEngine::choose_kind`].
    pub fn start<S: AsRef<str>>(
        &mut self,
        raw_names: &[S],
        theme: &str,
        quota_per_player: u32,
    ) -> Result<Transition, DomainError> {
        let transition = self.session.start(raw_names, theme, quota_per_player)?;
        if transition == Transition::Ignored {
            debug!("start ignored in {} phase", self.session.phase());
            return Ok(transition);
        }

        info!(
            "Starting session: {} players, theme '{}', {} questions each",
            self.session.roster().len(),
            theme,
            quota_per_player
        );
        self.notifier.on_session_started(
            self.session.roster(),
            self.session.quota(),
            self.session.theme(),
        );
        self.notify_turn_started();
        Ok(transition)
    }

    /// Start the session from collected settings
    pub fn start_with(&mut self, settings: &GameSettings) -> Result<Transition, DomainError> {
        self.start(
            &settings.players,
            &settings.theme,
            settings.questions_per_player,
        )
    }

    /// Pick truth or dare for the current player and draw a prompt
    ///
    /// Ignored unless the session is active and no prompt is pending. A
    /// failed draw leaves the session unchanged.
    pub fn choose_kind(&mut self, kind: PromptKind) -> Result<Transition, DomainError> {
        if !self.session.awaiting_choice() {
            debug!(
                "choose {} ignored (phase {}, pending {:?})",
                kind,
                self.session.phase(),
                self.session.pending_kind()
            );
            return Ok(Transition::Ignored);
        }

        let text = self.bank.prompt(self.session.theme(), kind)?;
        let transition = self.session.reveal(Prompt::new(kind, text));

        if let (Some(player), Some(prompt)) =
            (self.session.current_player(), self.session.current_prompt())
        {
            debug!("{} chose {}", player.name(), kind);
            self.notifier.on_prompt_revealed(player, prompt);
        }
        Ok(transition)
    }

    /// Discard the pending prompt; the same player chooses again
    pub fn pass(&mut self) -> Transition {
        let transition = self.session.pass();
        match (transition, self.session.current_player()) {
            (Transition::Applied, Some(player)) => {
                debug!("{} passed", player.name());
                self.notifier.on_passed(player);
            }
            _ => debug!("pass ignored: no pending prompt"),
        }
        transition
    }

    /// Count the current turn and move to the next player below quota
    pub fn advance_turn(&mut self) -> Transition {
        let Some(index) = self.session.current_index() else {
            debug!("advance ignored: session not started");
            return Transition::Ignored;
        };

        let transition = self.session.advance_turn();
        if transition == Transition::Ignored {
            debug!("advance ignored: no pending prompt");
            return transition;
        }

        let finished = &self.session.roster()[index];
        debug!(
            "{} completed turn {}/{}",
            finished.name(),
            finished.completed(),
            self.session.quota()
        );
        self.notifier.on_turn_completed(finished, self.session.quota());

        if self.session.is_finished() {
            let summary = self.session.summary();
            info!("Session finished after {} turns", summary.turns_completed);
            self.notifier.on_session_finished(&summary);
        } else {
            self.notify_turn_started();
        }
        transition
    }

    fn notify_turn_started(&self) {
        if let Some(player) = self.session.current_player() {
            self.notifier.on_turn_started(player, self.session.quota());
        }
    }

    // ==================== Queries ====================

    /// Read-only view of the underlying session
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.session.current_player()
    }

    pub fn current_prompt(&self) -> Option<&Prompt> {
        self.session.current_prompt()
    }

    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    pub fn progress(&self, player_name: &str) -> Option<u32> {
        self.session.progress(player_name)
    }

    pub fn quota(&self) -> Quota {
        self.session.quota()
    }

    pub fn summary(&self) -> SessionSummary {
        self.session.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // ==================== Test doubles ====================

    /// Bank that returns prompts in a fixed order, cycling per kind
    struct ScriptedBank {
        theme: String,
        truths: Vec<String>,
        dares: Vec<String>,
        cursor: Mutex<HashMap<PromptKind, usize>>,
    }

    impl ScriptedBank {
        fn new(theme: &str, truths: &[&str], dares: &[&str]) -> Self {
            Self {
                theme: theme.to_string(),
                truths: truths.iter().map(|s| s.to_string()).collect(),
                dares: dares.iter().map(|s| s.to_string()).collect(),
                cursor: Mutex::new(HashMap::new()),
            }
        }
    }

    impl ContentBank for ScriptedBank {
        fn prompt(&self, theme: &str, kind: PromptKind) -> Result<String, DomainError> {
            if theme != self.theme {
                return Err(DomainError::UnknownTheme(theme.to_string()));
            }
            let list = match kind {
                PromptKind::Truth => &self.truths,
                PromptKind::Dare => &self.dares,
            };
            let mut cursor = self.cursor.lock().unwrap();
            let next = cursor.entry(kind).or_insert(0);
            let text = list[*next % list.len()].clone();
            *next += 1;
            Ok(text)
        }

        fn has_theme(&self, theme: &str) -> bool {
            theme == self.theme
        }

        fn themes(&self) -> Vec<String> {
            vec![self.theme.clone()]
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        events: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }

        fn push(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl TurnNotifier for RecordingNotifier {
        fn on_session_started(&self, roster: &[Player], quota: Quota, theme: &str) {
            self.push(format!("start:{}:{}:{}", roster.len(), quota, theme));
        }

        fn on_turn_started(&self, player: &Player, _quota: Quota) {
            self.push(format!("turn:{}", player.name()));
        }

        fn on_prompt_revealed(&self, player: &Player, prompt: &Prompt) {
            self.push(format!("reveal:{}:{}", player.name(), prompt.text));
        }

        fn on_passed(&self, player: &Player) {
            self.push(format!("pass:{}", player.name()));
        }

        fn on_turn_completed(&self, player: &Player, quota: Quota) {
            self.push(format!(
                "done:{}:{}/{}",
                player.name(),
                player.completed(),
                quota
            ));
        }

        fn on_session_finished(&self, summary: &SessionSummary) {
            self.push(format!("finished:{}", summary.turns_completed));
        }
    }

    // ==================== Helper ====================

    fn bank() -> Arc<ScriptedBank> {
        Arc::new(ScriptedBank::new("General", &["T1", "T2", "T3"], &["D1", "D2"]))
    }

    fn engine() -> SessionEngine<ScriptedBank> {
        SessionEngine::new(bank())
    }

    // ==================== Tests ====================

    #[test]
    fn test_choose_kind_shows_exact_prompt() {
        let mut engine = engine();
        engine.start(&["Alice", "Bob"], "General", 10).unwrap();

        let result = engine.choose_kind(PromptKind::Dare);
        assert_eq!(result, Ok(Transition::Applied));
        assert_eq!(
            engine.current_prompt(),
            Some(&Prompt::new(PromptKind::Dare, "D1"))
        );
        assert_eq!(engine.progress("Alice"), Some(0));
    }

    #[test]
    fn test_choose_while_pending_does_not_draw() {
        let mut engine = engine();
        engine.start(&["Alice", "Bob"], "General", 10).unwrap();
        engine.choose_kind(PromptKind::Truth).unwrap();

        assert_eq!(
            engine.choose_kind(PromptKind::Truth),
            Ok(Transition::Ignored)
        );
        assert_eq!(engine.current_prompt().unwrap().text, "T1");

        // The ignored call must not have consumed a scripted prompt
        engine.pass();
        engine.choose_kind(PromptKind::Truth).unwrap();
        assert_eq!(engine.current_prompt().unwrap().text, "T2");
    }

    #[test]
    fn test_choose_before_start_is_ignored() {
        let mut engine = engine();
        assert_eq!(
            engine.choose_kind(PromptKind::Truth),
            Ok(Transition::Ignored)
        );
        assert_eq!(engine.phase(), Phase::Setup);
    }

    #[test]
    fn test_unknown_theme_leaves_state_unchanged() {
        let mut engine = engine();
        engine.start(&["Alice", "Bob"], "Space", 10).unwrap();

        let result = engine.choose_kind(PromptKind::Truth);
        assert_eq!(result, Err(DomainError::UnknownTheme("Space".to_string())));
        assert!(engine.current_prompt().is_none());
        assert_eq!(engine.phase(), Phase::Active);
        assert_eq!(engine.advance_turn(), Transition::Ignored);
    }

    #[test]
    fn test_start_failure_keeps_setup() {
        let mut engine = engine();
        let result = engine.start(&["Solo", "   "], "General", 10);
        assert_eq!(result, Err(DomainError::InsufficientPlayers { found: 1 }));
        assert_eq!(engine.phase(), Phase::Setup);
    }

    #[test]
    fn test_start_with_settings() {
        let mut engine = engine();
        let settings = GameSettings::new([" Alice", "", "Bob "]).with_questions_per_player(20);
        assert_eq!(engine.start_with(&settings), Ok(Transition::Applied));
        assert_eq!(engine.quota().get(), 20);
        assert_eq!(engine.current_player().unwrap().name().as_str(), "Alice");
    }

    #[test]
    fn test_pass_then_choose_again() {
        let mut engine = engine();
        engine.start(&["Alice", "Bob"], "General", 10).unwrap();
        engine.choose_kind(PromptKind::Truth).unwrap();
        assert_eq!(engine.pass(), Transition::Applied);
        assert_eq!(
            engine.choose_kind(PromptKind::Dare),
            Ok(Transition::Applied)
        );
        assert_eq!(engine.current_prompt().unwrap().kind, PromptKind::Dare);
        assert_eq!(engine.current_player().unwrap().name().as_str(), "Alice");
        assert_eq!(engine.session().turns_completed(), 0);
    }

    #[test]
    fn test_full_game_event_stream() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut engine = engine().with_notifier(notifier.clone());

        engine.start(&["A", "B"], "General", 1).unwrap();
        engine.choose_kind(PromptKind::Truth).unwrap();
        engine.pass();
        engine.choose_kind(PromptKind::Dare).unwrap();
        engine.advance_turn();
        engine.choose_kind(PromptKind::Truth).unwrap();
        engine.advance_turn();

        assert!(engine.is_finished());
        assert_eq!(
            notifier.events(),
            vec![
                "start:2:1:General",
                "turn:A",
                "reveal:A:T1",
                "pass:A",
                "reveal:A:D1",
                "done:A:1/1",
                "turn:B",
                "reveal:B:T2",
                "done:B:1/1",
                "finished:2",
            ]
        );
    }

    #[test]
    fn test_ignored_calls_emit_no_events() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut engine = engine().with_notifier(notifier.clone());

        engine.advance_turn();
        engine.pass();
        engine.start(&["A", "B"], "General", 1).unwrap();
        engine.advance_turn();
        engine.pass();

        assert_eq!(notifier.events(), vec!["start:2:1:General", "turn:A"]);
    }

    #[test]
    fn test_finishes_after_quota_times_players() {
        let mut engine = engine();
        engine.start(&["A", "B", "C"], "General", 10).unwrap();

        let mut advances = 0;
        while !engine.is_finished() {
            engine.choose_kind(PromptKind::Dare).unwrap();
            assert_eq!(engine.advance_turn(), Transition::Applied);
            advances += 1;
        }
        assert_eq!(advances, 30);
        assert_eq!(engine.summary().turns_completed, 30);
        assert!(engine.current_player().is_none());
    }

    #[test]
    fn test_works_with_trait_object_bank() {
        let bank: Arc<dyn ContentBank> = bank();
        let mut engine = SessionEngine::new(bank);
        engine.start(&["A", "B"], "General", 1).unwrap();
        assert_eq!(
            engine.choose_kind(PromptKind::Truth),
            Ok(Transition::Applied)
        );
    }
}
