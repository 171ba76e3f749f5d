use super::QuestionBank;
use super::types::{
    ApiFailure, CategoriesResponse, Created, Deleted, QuestionList, QuizRequest, QuizResponse,
    SearchRequest,
};
use crate::config::ApiSettings;
use crate::error::{Result, TriviaError};
use crate::model::{NewQuestion, Question};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Once;
use std::time::Duration;
use url::Url;

static CRYPTO_PROVIDER: Once = Once::new();

/// reqwest is built without a bundled rustls provider; install ring once per process.
fn ensure_crypto_provider() {
    CRYPTO_PROVIDER.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// Blocking HTTP client for the question-bank service.
pub struct HttpQuestionBank {
    http: Client,
    api: ApiSettings,
}

impl HttpQuestionBank {
    pub fn new(api: &ApiSettings) -> Result<Self> {
        api.base()?;
        ensure_crypto_provider();

        let timeout = (api.timeout_secs > 0).then(|| Duration::from_secs(api.timeout_secs));
        let http = Client::builder()
            .cookie_store(api.with_credentials)
            .timeout(timeout)
            .user_agent(concat!("trivia/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api: api.clone(),
        })
    }

    fn categories_url(&self) -> Result<Url> {
        self.api.endpoint(&self.api.categories_path)
    }

    fn questions_url(&self) -> Result<Url> {
        self.api.endpoint(&self.api.questions_path)
    }

    /// Page `page` (1-based) of all questions. A page past the end is empty.
    pub fn questions(&self, page: u32) -> Result<QuestionList> {
        let mut url = self.questions_url()?;
        url.query_pairs_mut()
            .append_pair("page", &page.max(1).to_string());
        tracing::debug!(%url, "listing questions");
        empty_on_not_found(self.http.get(url).send()?)
    }

    /// Questions whose text contains `term`, case-insensitively.
    pub fn search(&self, term: &str) -> Result<QuestionList> {
        let url = self.api.endpoint(&format!(
            "{}/search",
            self.api.questions_path.trim_end_matches('/')
        ))?;
        tracing::debug!(%url, term, "searching questions");
        empty_on_not_found(
            self.http
                .post(url)
                .json(&SearchRequest { search_term: term })
                .send()?,
        )
    }

    pub fn questions_in_category(&self, category_id: &str) -> Result<QuestionList> {
        let url = self.api.endpoint(&format!(
            "{}/{}/questions",
            self.api.categories_path.trim_end_matches('/'),
            category_id
        ))?;
        tracing::debug!(%url, "listing questions in category");
        empty_on_not_found(self.http.get(url).send()?)
    }

    pub fn delete_question(&self, id: u64) -> Result<u64> {
        let url = self.api.endpoint(&format!(
            "{}/{}",
            self.api.questions_path.trim_end_matches('/'),
            id
        ))?;
        tracing::debug!(%url, "deleting question");
        let deleted: Deleted = read_json(self.http.delete(url).send()?)?;
        tracing::info!(id = deleted.id, "question deleted");
        Ok(deleted.id)
    }

    /// Draw a quiz question not in `previous`. `None` once the pool is exhausted.
    pub fn next_quiz_question(
        &self,
        category: Option<u64>,
        previous: &[u64],
    ) -> Result<Option<Question>> {
        let url = self.api.endpoint("/quizzes")?;
        let body = QuizRequest::new(category, previous);
        tracing::debug!(%url, ?category, previous = previous.len(), "drawing quiz question");
        match read_json::<QuizResponse>(self.http.post(url).json(&body).send()?) {
            Ok(resp) => Ok(Some(resp.question)),
            Err(e) if e.status() == Some(StatusCode::NOT_FOUND.as_u16()) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl QuestionBank for HttpQuestionBank {
    fn categories(&self) -> Result<CategoriesResponse> {
        let url = self.categories_url()?;
        tracing::debug!(%url, "fetching categories");
        let body: serde_json::Value = read_json(self.http.get(url).send()?)?;
        Ok(CategoriesResponse::from_value(body))
    }

    fn add_question(&self, question: &NewQuestion) -> Result<Option<u64>> {
        let url = self.questions_url()?;
        tracing::debug!(%url, "submitting question");
        let response = check_status(self.http.post(url).json(question).send()?)?;

        // Any 2xx counts; the body is informational only.
        let created = response
            .text()
            .ok()
            .and_then(|text| serde_json::from_str::<Created>(&text).ok())
            .and_then(|c| c.created);
        tracing::info!(?created, "question added");
        Ok(created)
    }
}

/// Turn a non-2xx answer into [`TriviaError::Api`], preferring the service's own message.
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ApiFailure>(&text)
        .map(|f| f.message.trim().to_string())
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected status")
                .to_string()
        });

    tracing::warn!(status = status.as_u16(), %message, "question bank request failed");
    Err(TriviaError::Api {
        status: status.as_u16(),
        message,
    })
}

fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = check_status(response)?.text()?;
    Ok(serde_json::from_str(&text)?)
}

/// The list endpoints answer 404 when nothing matches.
fn empty_on_not_found(response: Response) -> Result<QuestionList> {
    match read_json::<QuestionList>(response) {
        Err(e) if e.status() == Some(StatusCode::NOT_FOUND.as_u16()) => Ok(QuestionList::default()),
        other => other,
    }
}
