//! JSON wire contract of the request host

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde_json::json;
use wordpop::api::{Host, Method, Request};
use wordpop::corpus::WordCorpus;
use wordpop::selection::WordSelector;
use wordpop::stats::{JsonFileStore, MemStore};
use wordpop::wordlists::CategoryLibrary;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
}

fn selector() -> WordSelector {
    WordSelector::new(CategoryLibrary::built_in(TimeDelta::hours(24)))
}

fn host() -> Host<MemStore> {
    Host::new(WordCorpus::embedded(), selector(), MemStore::new())
}

fn result_body(word: &str, attempts: usize, points: u32, is_win: bool) -> String {
    json!({
        "word": word,
        "attempts": attempts,
        "timeElapsed": 60,
        "points": points,
        "isWin": is_win,
        "isChallengeMode": false,
    })
    .to_string()
}

#[test]
fn daily_and_challenge_words_are_shared() {
    let mut a = host();
    let mut b = host();

    for mode in ["daily", "daily-challenge"] {
        let target = format!("/word?mode={mode}");
        let first = a.handle(&Request::get(&target), now());
        let second = b.handle(&Request::get(&target), now() + TimeDelta::hours(10));
        assert_eq!(first.status, 200);
        assert_eq!(first.body, second.body);
        assert_eq!(first.body["mode"], mode);
    }
}

#[test]
fn validate_accepts_any_case() {
    let mut host = host();
    for word in ["house", "HOUSE", " House "] {
        let body = json!({ "word": word }).to_string();
        let response = host.handle(&Request::post("/api/word/validate", body), now());
        assert_eq!(response.body, json!({ "isValid": true }));
    }
}

#[test]
fn results_and_stats_follow_saved_games() {
    let mut host = host();
    let games = [
        result_body("HOUSE", 3, 700, true),
        result_body("CLOUD", 6, 0, false),
        result_body("STORM", 1, 1000, true),
    ];
    for (i, body) in games.into_iter().enumerate() {
        let at = now() + TimeDelta::minutes(i as i64);
        let saved = host.handle(&Request::post("/results", body), at);
        assert_eq!(saved.status, 200);
        assert!(saved.body["id"].is_number());
        assert!(saved.body["playedAt"].is_string());
    }

    let recent = host.handle(&Request::get("/results?limit=2"), now());
    let list = recent.body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["word"], "STORM");
    assert_eq!(list[1]["word"], "CLOUD");

    let stats = host.handle(&Request::get("/stats"), now()).body;
    assert_eq!(stats["totalGames"], 3);
    assert_eq!(stats["totalWins"], 2);
    assert_eq!(stats["currentStreak"], 1);
    assert_eq!(stats["maxStreak"], 1);
    assert_eq!(stats["totalPoints"], 1700);
    assert_eq!(stats["guessDistribution"], json!([1, 0, 1, 0, 0, 0]));
}

#[test]
fn errors_map_to_status_codes() {
    let mut host = host();

    let bad_limit = host.handle(&Request::get("/results?limit=lots"), now());
    assert_eq!(bad_limit.status, 400);
    assert!(bad_limit.body["error"].is_string());

    let bad_result = host.handle(&Request::post("/results", r#"{"word":"HOUSE"}"#), now());
    assert_eq!(bad_result.status, 400);

    let missing = host.handle(&Request::get("/leaderboard"), now());
    assert_eq!(missing.status, 404);

    let wrong_method = host.handle(&Request::new(Method::Get, "/word/validate", None), now());
    assert_eq!(wrong_method.status, 404);
}

#[test]
fn file_store_survives_reopen() {
    let path = std::env::temp_dir().join(format!(
        "wordpop-contract-{}-{}.json",
        std::process::id(),
        now().timestamp()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let store = JsonFileStore::open(&path).unwrap();
        let mut host = Host::new(WordCorpus::embedded(), selector(), store);
        let saved = host.handle(
            &Request::post("/results", result_body("HOUSE", 2, 850, true)),
            now(),
        );
        assert_eq!(saved.status, 200);
    }

    let store = JsonFileStore::open(&path).unwrap();
    let mut host = Host::new(WordCorpus::embedded(), selector(), store);
    let stats = host.handle(&Request::get("/stats"), now()).body;
    assert_eq!(stats["totalGames"], 1);
    assert_eq!(stats["totalPoints"], 850);

    let _ = std::fs::remove_file(&path);
}
