use super::{handlers, ui};
use crate::{
    api::{CategoriesResponse, QuestionBank},
    config::TuiSettings,
    error::Result,
    form::{Field, FormState},
};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    collections::VecDeque,
    io,
    sync::{
        Arc,
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
    },
    thread,
    time::{Duration, Instant},
};

pub const CATEGORY_LOAD_ALERT: &str = "Unable to load categories. Please try your request again";
pub const SUBMIT_ALERT: &str = "Unable to add question. Please try your request again";

const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Editing the form
    Form,
    /// An alert is up; everything but dismissing is ignored
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
}

/// Result of a network call, handed back to the form thread.
#[derive(Debug)]
pub enum Completion {
    Categories(Result<CategoriesResponse>),
    Submitted(Result<Option<u64>>),
}

/// Outcome of the most recent finished submit, for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(Option<u64>),
    Failed,
}

pub struct App {
    bank: Arc<dyn QuestionBank>,
    pub form: FormState,
    pub focus: Field,
    pub input_mode: InputMode,
    pub alerts: VecDeque<String>,
    pub category_request: RequestState,
    pub submits_in_flight: usize,
    pub last_submit: Option<SubmitOutcome>,
    pub show_hints: bool,
    completion_tx: Sender<Completion>,
    completion_rx: Receiver<Completion>,
}

impl App {
    pub fn new(bank: Arc<dyn QuestionBank>, settings: &TuiSettings) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel();
        Self {
            bank,
            form: FormState::new(),
            focus: Field::Question,
            input_mode: InputMode::Form,
            alerts: VecDeque::new(),
            category_request: RequestState::Idle,
            submits_in_flight: 0,
            last_submit: None,
            show_hints: settings.show_hints,
            completion_tx,
            completion_rx,
        }
    }

    /// Start the one category read that belongs to this form.
    pub fn mount(&mut self) {
        tracing::debug!("loading categories");
        self.category_request = RequestState::InFlight;
        self.spawn_request(|bank| Completion::Categories(bank.categories()));
    }

    /// Send the current field values. Repeated submits each send their own request.
    pub fn submit(&mut self) {
        let question = self.form.to_new_question();
        tracing::debug!(
            difficulty = %question.difficulty,
            category = %question.category,
            "submitting question"
        );
        self.submits_in_flight += 1;
        self.spawn_request(move |bank| Completion::Submitted(bank.add_question(&question)));
    }

    fn spawn_request<F>(&self, job: F)
    where
        F: FnOnce(&dyn QuestionBank) -> Completion + Send + 'static,
    {
        let bank = Arc::clone(&self.bank);
        let tx = self.completion_tx.clone();
        thread::spawn(move || {
            let completion = job(&*bank);
            // The form may be gone by now; its answer is dropped with it.
            let _ = tx.send(completion);
        });
    }

    pub fn pending_requests(&self) -> usize {
        let loading = usize::from(self.category_request == RequestState::InFlight);
        loading + self.submits_in_flight
    }

    /// Apply every completion that has arrived, without waiting.
    pub fn poll_completions(&mut self) {
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.apply_completion(completion);
        }
    }

    /// Block until no request is in flight. Returns false if `timeout` ran out first.
    pub fn wait_for_requests(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.pending_requests() > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.completion_rx.recv_timeout(remaining) {
                Ok(completion) => self.apply_completion(completion),
                Err(RecvTimeoutError::Timeout) => return false,
                Err(RecvTimeoutError::Disconnected) => return false,
            }
        }
        true
    }

    pub fn apply_completion(&mut self, completion: Completion) {
        match completion {
            Completion::Categories(result) => {
                self.category_request = RequestState::Idle;
                match result {
                    Ok(CategoriesResponse {
                        categories: Some(categories),
                    }) => {
                        tracing::info!(count = categories.len(), "fetched categories");
                        self.form.set_categories(categories);
                    }
                    Ok(CategoriesResponse { categories: None }) => {
                        tracing::warn!("category response had no categories mapping");
                        self.form.set_categories(Default::default());
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "category fetch failed");
                        self.form.set_categories(Default::default());
                        self.raise_alert(CATEGORY_LOAD_ALERT);
                    }
                }
            }
            Completion::Submitted(result) => {
                self.submits_in_flight = self.submits_in_flight.saturating_sub(1);
                match result {
                    Ok(created) => {
                        self.form.reset_inputs();
                        self.focus = Field::Question;
                        self.last_submit = Some(SubmitOutcome::Added(created));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "question submit failed");
                        self.last_submit = Some(SubmitOutcome::Failed);
                        self.raise_alert(SUBMIT_ALERT);
                    }
                }
            }
        }
    }

    pub fn raise_alert(&mut self, message: &str) {
        self.alerts.push_back(message.to_string());
        self.input_mode = InputMode::Alert;
    }

    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
        if self.alerts.is_empty() {
            self.input_mode = InputMode::Form;
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Feed a new value for the focused field through the change handler.
    pub fn change_focused(&mut self, value: String) {
        self.form.handle_change(self.focus, value);
    }
}

pub fn run_tui(bank: Arc<dyn QuestionBank>, settings: &TuiSettings) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(bank, settings);
    app.mount();
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "form loop stopped");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        app.poll_completions();
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handlers::handle_key(app, key)? {
                return Ok(());
            }
        }
    }
}
