use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

fn vote(id: &str, idea: &str, voter: &str, t: &str) -> Value {
    json!({"id": id, "ideaId": idea, "voterId": voter, "type": t})
}

/// A: agree 5 / disagree 0, B: 3/0, C: 3/0, D: 1/0, E: 5/5 (contested),
/// F: 3/0. F ties the most-liked cutoff (C) on agree and score, so it only
/// appears through co-rank extension.
fn fixture() -> Value {
    let mut ideas = Vec::new();
    for (id, agree, disagree, cat) in [
        ("A", 5, 0, Some("c1")),
        ("B", 3, 0, Some("c2")),
        ("C", 3, 0, Some("c1")),
        ("D", 1, 0, None),
        ("E", 5, 5, Some("c2")),
        ("F", 3, 0, Some("c1")),
    ] {
        let mut votes = Vec::new();
        for n in 0..agree {
            votes.push(vote(&format!("{id}a{n}"), id, &format!("u{n}"), "AGREE"));
        }
        for n in 0..disagree {
            votes.push(vote(&format!("{id}d{n}"), id, &format!("w{n}"), "DISAGREE"));
        }
        ideas.push(json!({
            "id": id, "content": format!("idea {id}"), "authorDisplayName": "ann",
            "categoryRef": cat, "commentCount": agree, "votes": votes
        }));
    }
    json!({
        "issue": {"id": "issue-1", "title": "Park"},
        "ideas": ideas,
        "categories": [{"id": "c1", "title": "Safety"}, {"id": "c2", "title": "Green"}],
        "members": [{"id": "m1"}, {"id": "m2"}, {"id": "m3", "deleted": true}],
        "selectedIdeaId": "B"
    })
}

fn write(dir: &TempDir, name: &str, v: &Value) -> PathBuf {
    let p = dir.path().join(name);
    fs::write(&p, serde_json::to_vec(v).unwrap()).unwrap();
    p
}

fn ib() -> Command {
    Command::cargo_bin("ib").unwrap()
}

fn stdout_json(out: &[u8]) -> Value {
    serde_json::from_slice(out).unwrap()
}

#[test]
fn filter_most_liked_extends_co_rank() {
    let dir = tempfile::tempdir().unwrap();
    let snap = write(&dir, "s.json", &fixture());
    let out = ib()
        .args(["filter", "--mode", "most-liked", "--snapshot"])
        .arg(&snap)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(
        stdout_json(&out),
        json!({"mode": "most-liked", "ideaIds": ["A", "B", "C", "F"]})
    );
}

#[test]
fn filter_need_discussion_uses_params_file() {
    let dir = tempfile::tempdir().unwrap();
    let snap = write(&dir, "s.json", &fixture());
    let params = write(&dir, "p.json", &json!({"contested_max_pct": 20}));
    let out = ib()
        .args(["filter", "--mode", "need-discussion", "--snapshot"])
        .arg(&snap)
        .arg("--params")
        .arg(&params)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(stdout_json(&out)["ideaIds"], json!(["E"]));
}

#[test]
fn unknown_mode_is_a_validation_failure() {
    let dir = tempfile::tempdir().unwrap();
    let snap = write(&dir, "s.json", &fixture());
    ib().args(["filter", "--mode", "popular", "--snapshot"])
        .arg(&snap)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown filter mode"));
}

#[test]
fn rank_groups_in_first_appearance_order() {
    let dir = tempfile::tempdir().unwrap();
    let snap = write(&dir, "s.json", &fixture());
    let out = ib()
        .arg("rank")
        .arg("--snapshot")
        .arg(&snap)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v = stdout_json(&out);
    let all: Vec<&str> = v["all"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(all, vec!["A", "B", "C", "F", "D", "E"]);
    let titles: Vec<&str> = v["byCategory"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["categoryTitle"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Safety", "Green", "미분류"]);
}

#[test]
fn summary_writes_atomically_with_integrity() {
    let dir = tempfile::tempdir().unwrap();
    let snap = write(&dir, "s.json", &fixture());
    let out_path = dir.path().join("out").join("summary.json");
    ib().arg("summary")
        .arg("--snapshot")
        .arg(&snap)
        .arg("--out")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let v: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(
        v["statistics"],
        json!({"totalParticipants": 2, "totalVotes": 25, "maxCommentCount": 5})
    );
    assert_eq!(v["selectedIdea"]["id"], json!("B"));
    assert_eq!(v["selectedIdea"]["category"], json!("Green"));
    let digest = v["integrity"]["snapshotSha256"].as_str().unwrap();
    assert_eq!(digest.len(), 64);
}

#[test]
fn summary_digest_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let snap = write(&dir, "s.json", &fixture());
    let run = || {
        ib().arg("summary")
            .arg("--snapshot")
            .arg(&snap)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn validate_reports_bad_cross_reference() {
    let dir = tempfile::tempdir().unwrap();
    let mut v = fixture();
    v["ideas"][0]["votes"][0]["ideaId"] = json!("B");
    let snap = write(&dir, "s.json", &v);
    ib().arg("validate")
        .arg("--snapshot")
        .arg(&snap)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("/ideas/0/votes/0/ideaId"));
}

#[test]
fn validate_ok_is_silent_with_quiet() {
    let dir = tempfile::tempdir().unwrap();
    let snap = write(&dir, "s.json", &fixture());
    ib().args(["validate", "--quiet", "--snapshot"])
        .arg(&snap)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_snapshot_is_an_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    ib().arg("rank")
        .arg("--snapshot")
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(4);
}

#[test]
fn url_paths_are_rejected() {
    ib().args(["rank", "--snapshot", "https://example.org/s.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no scheme"));
}
