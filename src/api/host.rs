//! Route dispatch for the game's JSON API

use super::{
    ApiError, DEFAULT_RESULTS_LIMIT, Method, RefreshBody, RefreshReply, Request, Response,
    ValidateBody, ValidateReply,
};
use crate::corpus::WordCorpus;
use crate::selection::{GameMode, WordSelector};
use crate::session::GameResult;
use crate::stats::ResultStore;
use chrono::{DateTime, Utc};

/// Everything needed to answer requests
#[derive(Debug)]
pub struct Host<S> {
    corpus: WordCorpus,
    selector: WordSelector,
    store: S,
}

impl<S: ResultStore> Host<S> {
    #[must_use]
    pub const fn new(corpus: WordCorpus, selector: WordSelector, store: S) -> Self {
        Self {
            corpus,
            selector,
            store,
        }
    }

    #[must_use]
    pub const fn corpus(&self) -> &WordCorpus {
        &self.corpus
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Answer one request; failures become error responses
    ///
    /// Paths may carry an `/api` prefix.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeDelta, Utc};
    /// use wordpop::api::{Host, Request};
    /// use wordpop::corpus::WordCorpus;
    /// use wordpop::selection::WordSelector;
    /// use wordpop::stats::MemStore;
    /// use wordpop::wordlists::CategoryLibrary;
    ///
    /// let selector = WordSelector::new(CategoryLibrary::built_in(TimeDelta::hours(24)));
    /// let mut host = Host::new(WordCorpus::embedded(), selector, MemStore::new());
    ///
    /// let request = Request::post("/word/validate", r#"{"word":"house"}"#);
    /// let response = host.handle(&request, Utc::now());
    /// assert_eq!(response.status, 200);
    /// assert_eq!(response.body["isValid"], true);
    /// ```
    pub fn handle(&mut self, request: &Request, now: DateTime<Utc>) -> Response {
        match self.route(request, now) {
            Ok(response) => {
                log::debug!("{} {} -> {}", request.method, request.path, response.status);
                response
            }
            Err(error) => {
                if error.status() >= 500 {
                    log::error!("{} {} failed: {error}", request.method, request.path);
                } else {
                    log::debug!("{} {} rejected: {error}", request.method, request.path);
                }
                error.into()
            }
        }
    }

    fn route(&mut self, request: &Request, now: DateTime<Utc>) -> Result<Response, ApiError> {
        let path = request
            .path
            .strip_prefix("/api")
            .unwrap_or(&request.path);

        match (request.method, path) {
            (Method::Get, "/word") => self.select_word(request, now),
            (Method::Post, "/word/validate") => self.validate_word(request),
            (Method::Post, "/results") => self.save_result(request, now),
            (Method::Get, "/results") => self.recent_results(request),
            (Method::Get, "/stats") => Response::ok(&self.store.stats()?),
            (Method::Get, "/cache-stats") => {
                Response::ok(&self.selector.categories().cache_stats(now))
            }
            (Method::Post, "/cache/refresh") => self.refresh_category(request, now),
            _ => Err(ApiError::NotFound {
                method: request.method,
                path: request.path.clone(),
            }),
        }
    }

    fn select_word(&mut self, request: &Request, now: DateTime<Utc>) -> Result<Response, ApiError> {
        let mode = match request.param("mode") {
            Some(text) => text
                .parse::<GameMode>()
                .map_err(|e| ApiError::BadRequest(e.to_string()))?,
            None => GameMode::default(),
        };
        let selection = self
            .selector
            .select(&self.corpus, mode, request.param("category"), now)?;
        Response::ok(&selection)
    }

    fn validate_word(&self, request: &Request) -> Result<Response, ApiError> {
        let body: ValidateBody = request.json()?;
        Response::ok(&ValidateReply {
            is_valid: self.corpus.is_valid_guess(&body.word),
        })
    }

    fn save_result(&mut self, request: &Request, now: DateTime<Utc>) -> Result<Response, ApiError> {
        let result: GameResult = request.json()?;
        let stored = self.store.finish_game(result, now)?;
        Response::ok(&stored)
    }

    fn refresh_category(
        &mut self,
        request: &Request,
        now: DateTime<Utc>,
    ) -> Result<Response, ApiError> {
        let body: RefreshBody = request.json()?;
        let categories = self.selector.categories_mut();
        let category = categories.resolve(&body.category);
        let word_count = categories.refresh(&category, &self.corpus, now);
        log::info!("Refreshed category '{category}': {word_count} words");
        Response::ok(&RefreshReply {
            category,
            word_count,
        })
    }

    fn recent_results(&self, request: &Request) -> Result<Response, ApiError> {
        let limit = match request.param("limit") {
            Some(text) => text
                .parse::<usize>()
                .map_err(|_| ApiError::BadRequest(format!("invalid limit '{text}'")))?,
            None => DEFAULT_RESULTS_LIMIT,
        };
        Response::ok(&self.store.recent_results(limit)?)
    }
}
