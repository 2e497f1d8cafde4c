//! Loader: read local JSON inputs (issue snapshot, params), enforce size caps,
//! run boundary cross-reference checks, and return typed values. No network I/O.

#![forbid(unsafe_code)]

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use ib_core::entities::IssueSnapshot;
use ib_core::ids::IdeaId;
use ib_core::variables::{validate_domains, Params};

use crate::{looks_like_url_strict, IoError, IoResult};

/// Hard cap on any single input file.
pub const MAX_INPUT_BYTES: u64 = 16 * 1024 * 1024;

// ----------------------------- Targeted loaders -----------------------------

/// Load and check an issue snapshot.
pub fn load_snapshot(path: &Path) -> IoResult<IssueSnapshot> {
    let v = read_json_value_with_limits(path)?;
    let snap: IssueSnapshot = from_value(v)?;
    check_snapshot(&snap)?;
    log::info!(
        "loaded snapshot {} (issue={} ideas={} categories={} members={})",
        path.display(),
        snap.issue.id,
        snap.ideas.len(),
        snap.categories.len(),
        snap.members.len()
    );
    Ok(snap)
}

/// Load params; absent fields take their defaults, unknown fields are rejected.
pub fn load_params(path: &Path) -> IoResult<Params> {
    let v = read_json_value_with_limits(path)?;
    let ps: Params = from_value(v)?;
    validate_domains(&ps)?;
    log::info!(
        "loaded params {} (highlight_limit={} contested_max_pct={})",
        path.display(),
        ps.highlight_limit,
        ps.contested_max_pct.as_u8()
    );
    Ok(ps)
}

// ----------------------------- Checks -----------------------------

/// Boundary invariants the engine relies on but never re-checks.
pub fn check_snapshot(snap: &IssueSnapshot) -> IoResult<()> {
    let mut cat_ids = BTreeSet::new();
    for (i, c) in snap.categories.iter().enumerate() {
        if c.id.is_uncategorized() {
            return Err(invalid(
                format!("/categories/{i}/id"),
                format!("reserved id {}", c.id),
            ));
        }
        if !cat_ids.insert(&c.id) {
            return Err(invalid(
                format!("/categories/{i}/id"),
                format!("duplicate category id {}", c.id),
            ));
        }
    }

    let mut member_ids = BTreeSet::new();
    for (i, m) in snap.members.iter().enumerate() {
        if !member_ids.insert(&m.id) {
            return Err(invalid(
                format!("/members/{i}/id"),
                format!("duplicate member id {}", m.id),
            ));
        }
    }

    let mut idea_ids = BTreeSet::new();
    for (i, idea) in snap.ideas.iter().enumerate() {
        if !idea_ids.insert(&idea.id) {
            return Err(invalid(format!("/ideas/{i}/id"), format!("duplicate idea id {}", idea.id)));
        }

        let mut voters = BTreeSet::new();
        for (j, vote) in idea.votes.iter().enumerate() {
            if vote.idea_id != idea.id {
                return Err(invalid(
                    format!("/ideas/{i}/votes/{j}/ideaId"),
                    format!(
                        "vote {} points at {} but is stored under {}",
                        vote.id, vote.idea_id, idea.id
                    ),
                ));
            }
            if !voters.insert(&vote.voter_id) {
                return Err(invalid(
                    format!("/ideas/{i}/votes/{j}/voterId"),
                    format!("voter {} has more than one vote on {}", vote.voter_id, idea.id),
                ));
            }
        }

        if let Some(cat) = &idea.category_ref {
            if !cat_ids.contains(cat) {
                log::warn!(
                    "idea {} references unknown category {}; treated as uncategorized",
                    idea.id,
                    cat
                );
            }
        }
    }

    if let Some(sel) = &snap.selected_idea_id {
        if !idea_ids.contains(sel) {
            log::warn!("selected idea {sel} is not in the snapshot");
        }
    }
    for id in selection_mismatches(snap) {
        log::warn!("idea {id}: isSelected disagrees with selectedIdeaId; selectedIdeaId wins");
    }
    Ok(())
}

/// Ideas whose `isSelected` flag disagrees with `selectedIdeaId`.
pub fn selection_mismatches(snap: &IssueSnapshot) -> Vec<&IdeaId> {
    let selected = snap.selected_idea_id.as_ref();
    snap.ideas
        .iter()
        .filter(|idea| idea.is_selected != (selected == Some(&idea.id)))
        .map(|idea| &idea.id)
        .collect()
}

// ----------------------------- Reading -----------------------------

/// Read a JSON document, refusing URLs and anything over `MAX_INPUT_BYTES`.
pub fn read_json_value_with_limits(path: &Path) -> IoResult<Value> {
    read_json_value_capped(path, MAX_INPUT_BYTES)
}

/// Like [`read_json_value_with_limits`] with an explicit cap.
pub fn read_json_value_capped(path: &Path, cap: u64) -> IoResult<Value> {
    if looks_like_url_strict(&path.to_string_lossy()) {
        return Err(IoError::Path(format!("{}: only local paths are accepted", path.display())));
    }

    let f = File::open(path).map_err(|e| IoError::Path(format!("{} ({e})", path.display())))?;
    let mut buf = Vec::new();
    f.take(cap + 1)
        .read_to_end(&mut buf)
        .map_err(|e| IoError::Path(format!("{} ({e})", path.display())))?;
    if buf.len() as u64 > cap {
        return Err(IoError::Limit(format!("{} exceeds {cap} bytes", path.display())));
    }

    serde_json::from_slice(&buf).map_err(|e| IoError::Json {
        pointer: "/".into(),
        msg: format!("{}: {e}", path.display()),
    })
}

fn from_value<T: DeserializeOwned>(v: Value) -> IoResult<T> {
    serde_json::from_value(v).map_err(|e| IoError::Json {
        pointer: "/".into(),
        msg: e.to_string(),
    })
}

fn invalid(pointer: String, msg: String) -> IoError {
    IoError::Invalid(format!("{pointer}: {msg}"))
}
