//! Application state and core logic

use crate::api::{PredictionApi, PredictionClient};
use crate::config::TuiConfig;
use crate::state::{AppState, SubmissionResult, FIELDS};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App<A: PredictionApi = PredictionClient> {
    /// Current application state
    pub state: AppState,
    /// Client for the prediction endpoint
    api: A,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance against the configured endpoint
    pub fn new(config: &TuiConfig) -> Self {
        let url = config.resolve_api_url();
        tracing::info!(%url, "using prediction endpoint");
        Self::with_api(PredictionClient::new(url))
    }
}

impl<A: PredictionApi> App<A> {
    /// Create an App with a specific API client (used by tests)
    pub fn with_api(api: A) -> Self {
        Self {
            state: AppState::new(),
            api,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_field(),
            KeyCode::Left => self.cycle_choice(-1),
            KeyCode::Right => self.cycle_choice(1),
            KeyCode::Char(' ') if !self.focused_is_numeric() => self.cycle_choice(1),
            KeyCode::Char(c) => self.edit_char(c),
            KeyCode::Backspace => self.edit_backspace(),
            KeyCode::Enter => {
                if self.state.on_last_group() {
                    self.request_submit();
                } else {
                    self.state.advance_group();
                }
            }
            KeyCode::Esc => {
                if self.state.active_group == 0 {
                    self.quit = true;
                } else {
                    self.state.retreat_group();
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn focused_is_numeric(&self) -> bool {
        FIELDS[self.state.active_field_index()].is_numeric()
    }

    fn edit_char(&mut self, c: char) {
        let index = self.state.active_field_index();
        if self.state.form.push_char(index, c) {
            self.state.clear_result();
        }
    }

    fn edit_backspace(&mut self) {
        let index = self.state.active_field_index();
        if self.state.form.pop_char(index) {
            self.state.clear_result();
        }
    }

    fn cycle_choice(&mut self, step: isize) {
        let index = self.state.active_field_index();
        let changed = if step < 0 {
            self.state.form.prev_choice(index)
        } else {
            self.state.form.next_choice(index)
        };
        if changed {
            self.state.clear_result();
        }
    }

    /// Mark a submission as pending
    ///
    /// Gated by the in-flight flag so a second submission cannot start
    /// while one is pending. The network round trip itself runs in
    /// [`submit`](Self::submit), which the event loop calls after
    /// drawing one frame in the in-flight state.
    pub fn request_submit(&mut self) {
        if self.state.in_flight {
            return;
        }
        self.state.in_flight = true;
        self.state.clear_result();
    }

    /// Run the pending submission: derive the payload, post it, map
    /// the outcome into the result state
    ///
    /// The await on the round trip is the only suspension point; there
    /// is no cancellation.
    pub async fn submit(&mut self) {
        let payload = self.state.form.payload();
        tracing::info!(fields = payload.len(), "submitting prediction request");

        let outcome = self.api.predict(payload).await;
        self.state.in_flight = false;

        match outcome {
            Ok(label) => {
                tracing::info!(%label, "prediction received");
                self.state.result = SubmissionResult::Success { label };
            }
            Err(err) => {
                tracing::warn!(error = %err, "prediction failed");
                self.state.result = SubmissionResult::Failure {
                    message: err.to_string(),
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockPredictionApi};
    use crate::state::{is_ckd, GROUP_COUNT};
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_label(label: &str) -> App<MockPredictionApi> {
        let mut mock = MockPredictionApi::new();
        let label = label.to_string();
        mock.expect_predict()
            .returning(move |_| Ok(label.clone()));
        App::with_api(mock)
    }

    /// Drive the two-step submission flow the way the event loop does
    async fn submit_now<A: PredictionApi>(app: &mut App<A>) {
        app.request_submit();
        app.submit().await;
    }

    #[tokio::test]
    async fn test_enter_advances_groups_then_submits() {
        let mut app = app_with_label("notckd");
        for _ in 1..GROUP_COUNT {
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
        }
        assert!(app.state.on_last_group());
        assert!(app.state.result.is_none());

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert!(app.state.in_flight);

        app.submit().await;
        assert_eq!(
            app.state.result,
            SubmissionResult::Success {
                label: "notckd".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_enter_marks_in_flight_before_round_trip() {
        // The event loop draws one frame between the request and the
        // network call, so the flag must be observable with no
        // predict call made yet
        let mut mock = MockPredictionApi::new();
        mock.expect_predict().times(0);
        let mut app = App::with_api(mock);

        for _ in 1..GROUP_COUNT {
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
        }
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert!(app.state.in_flight);
        assert!(app.state.result.is_none());
    }

    #[tokio::test]
    async fn test_esc_retreats_then_quits() {
        let mut app = app_with_label("ckd");
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert_eq!(app.state.active_group, 0);
        assert!(!app.should_quit());

        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_typing_edits_focused_numeric_field() {
        let mut app = app_with_label("ckd");
        app.handle_key(key(KeyCode::Char('4'))).await.unwrap();
        app.handle_key(key(KeyCode::Char('5'))).await.unwrap();
        assert_eq!(app.state.form.value(0), "45");

        app.handle_key(key(KeyCode::Backspace)).await.unwrap();
        assert_eq!(app.state.form.value(0), "4");
    }

    #[tokio::test]
    async fn test_arrows_cycle_choice_field() {
        let mut app = app_with_label("ckd");
        // Field 5 (Red_Blood_Cells) is the first choice field
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
        }
        app.handle_key(key(KeyCode::Right)).await.unwrap();
        assert_eq!(app.state.form.value(5), "abnormal");
        app.handle_key(key(KeyCode::Left)).await.unwrap();
        assert_eq!(app.state.form.value(5), "normal");
    }

    #[tokio::test]
    async fn test_edit_clears_previous_result() {
        let mut app = app_with_label("ckd");
        submit_now(&mut app).await;
        assert!(!app.state.result.is_none());

        app.handle_key(key(KeyCode::Char('7'))).await.unwrap();
        assert!(app.state.result.is_none());
    }

    #[tokio::test]
    async fn test_edit_clears_previous_failure() {
        let mut mock = MockPredictionApi::new();
        mock.expect_predict()
            .returning(|_| Err(ApiError::Application("bad input".to_string())));
        let mut app = App::with_api(mock);

        submit_now(&mut app).await;
        assert_eq!(
            app.state.result,
            SubmissionResult::Failure {
                message: "bad input".to_string()
            }
        );

        app.handle_key(key(KeyCode::Char('1'))).await.unwrap();
        assert!(app.state.result.is_none());
    }

    #[tokio::test]
    async fn test_in_flight_gates_second_request() {
        let mut mock = MockPredictionApi::new();
        mock.expect_predict().times(0);
        let mut app = App::with_api(mock);

        app.state.in_flight = true;
        app.state.result = SubmissionResult::Success {
            label: "ckd".to_string(),
        };
        app.request_submit();

        // The gated request neither cleared the result nor reached
        // the network
        assert!(!app.state.result.is_none());
    }

    #[tokio::test]
    async fn test_submit_sends_derived_payload() {
        let mut mock = MockPredictionApi::new();
        mock.expect_predict()
            .withf(|payload| {
                payload["Age"] == serde_json::json!(45.0)
                    && payload["Hypertension"] == serde_json::json!("yes")
                    && !payload.contains_key("Blood_Pressure")
            })
            .returning(|_| Ok("notckd".to_string()));
        let mut app = App::with_api(mock);

        app.state.form.set_value(0, "45".to_string());
        submit_now(&mut app).await;
        assert!(!app.state.result.is_none());
    }

    #[tokio::test]
    async fn test_result_classification() {
        let mut app = app_with_label("ckd");
        submit_now(&mut app).await;
        if let SubmissionResult::Success { label } = &app.state.result {
            assert!(is_ckd(label));
        } else {
            panic!("expected success");
        }

        let mut app = app_with_label("notckd");
        submit_now(&mut app).await;
        if let SubmissionResult::Success { label } = &app.state.result {
            assert!(!is_ckd(label));
        } else {
            panic!("expected success");
        }
    }

    #[tokio::test]
    async fn test_in_flight_cleared_after_failure() {
        let mut mock = MockPredictionApi::new();
        mock.expect_predict()
            .returning(|_| Err(ApiError::MalformedResponse));
        let mut app = App::with_api(mock);

        submit_now(&mut app).await;
        assert!(!app.state.in_flight);
        assert!(matches!(app.state.result, SubmissionResult::Failure { .. }));
    }
}
