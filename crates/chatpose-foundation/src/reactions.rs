//! Reaction (tapback) resolution.
//!
//! Raw reaction records arrive in several encodings: numeric tapback codes,
//! numeric removal codes, and legacy text forms from clients that could not
//! send structured reactions. The overlay only ever sees the resolved form:
//! at most one active reaction per sender, latest timestamp wins, removals
//! and unknown codes gone.

use indexmap::IndexMap;

const ADD_CODE_BASE: u32 = 2000;
const REMOVE_CODE_BASE: u32 = 3000;
const REMOVAL_TEXT_PREFIX: &str = "Removed ";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReactionKind {
    Love,
    Like,
    Dislike,
    Laugh,
    Emphasize,
    Question,
}

impl ReactionKind {
    /// Panel order.
    pub const ALL: [ReactionKind; 6] = [
        ReactionKind::Love,
        ReactionKind::Like,
        ReactionKind::Dislike,
        ReactionKind::Laugh,
        ReactionKind::Emphasize,
        ReactionKind::Question,
    ];

    fn index(self) -> u32 {
        match self {
            ReactionKind::Love => 0,
            ReactionKind::Like => 1,
            ReactionKind::Dislike => 2,
            ReactionKind::Laugh => 3,
            ReactionKind::Emphasize => 4,
            ReactionKind::Question => 5,
        }
    }

    fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn code(self) -> u32 {
        ADD_CODE_BASE + self.index()
    }

    pub fn removal_code(self) -> u32 {
        REMOVE_CODE_BASE + self.index()
    }

    /// Verb used by the legacy text form, e.g. `Loved “see you there”`.
    fn legacy_verb(self) -> &'static str {
        match self {
            ReactionKind::Love => "Loved",
            ReactionKind::Like => "Liked",
            ReactionKind::Dislike => "Disliked",
            ReactionKind::Laugh => "Laughed at",
            ReactionKind::Emphasize => "Emphasized",
            ReactionKind::Question => "Questioned",
        }
    }

    /// Object used by the legacy removal text, e.g. `Removed a heart from …`.
    fn removal_object(self) -> &'static str {
        match self {
            ReactionKind::Love => "a heart",
            ReactionKind::Like => "a like",
            ReactionKind::Dislike => "a dislike",
            ReactionKind::Laugh => "a laugh",
            ReactionKind::Emphasize => "an exclamation",
            ReactionKind::Question => "a question mark",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sender {
    /// The local user.
    Me,
    Handle(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawReactionCode {
    Numeric(u32),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawReaction {
    pub sender: Sender,
    pub code: RawReactionCode,
    pub timestamp_millis: i64,
}

impl RawReaction {
    pub fn numeric(sender: Sender, code: u32, timestamp_millis: i64) -> Self {
        Self {
            sender,
            code: RawReactionCode::Numeric(code),
            timestamp_millis,
        }
    }

    pub fn text(sender: Sender, text: impl Into<String>, timestamp_millis: i64) -> Self {
        Self {
            sender,
            code: RawReactionCode::Text(text.into()),
            timestamp_millis,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReactionChange {
    Add(ReactionKind),
    /// Removal. The removed kind is irrelevant once latest-wins has run.
    Remove,
}

fn parse_code(code: &RawReactionCode) -> Option<ReactionChange> {
    match code {
        RawReactionCode::Numeric(value) => match *value {
            v if (ADD_CODE_BASE..ADD_CODE_BASE + 6).contains(&v) => {
                ReactionKind::from_index(v - ADD_CODE_BASE).map(ReactionChange::Add)
            }
            v if (REMOVE_CODE_BASE..REMOVE_CODE_BASE + 6).contains(&v) => {
                Some(ReactionChange::Remove)
            }
            _ => None,
        },
        RawReactionCode::Text(text) => parse_text(text.trim()),
    }
}

fn parse_text(text: &str) -> Option<ReactionChange> {
    if let Some(rest) = text.strip_prefix(REMOVAL_TEXT_PREFIX) {
        return ReactionKind::ALL
            .iter()
            .any(|kind| rest.starts_with(kind.removal_object()))
            .then_some(ReactionChange::Remove);
    }
    ReactionKind::ALL
        .iter()
        .find(|kind| {
            text.strip_prefix(kind.legacy_verb())
                .is_some_and(|rest| rest.starts_with(char::is_whitespace))
        })
        .map(|kind| ReactionChange::Add(*kind))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedReaction {
    pub sender: Sender,
    pub kind: ReactionKind,
    pub timestamp_millis: i64,
}

/// Canonical reaction set of one message: one active reaction per sender.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedReactions {
    entries: Vec<ResolvedReaction>,
}

impl ResolvedReactions {
    pub fn resolve(raw: &[RawReaction]) -> Self {
        let mut latest: IndexMap<&Sender, (i64, ReactionChange)> = IndexMap::new();
        for reaction in raw {
            let Some(change) = parse_code(&reaction.code) else {
                log::trace!("dropping unrecognised reaction code {:?}", reaction.code);
                continue;
            };
            match latest.get_mut(&reaction.sender) {
                // Equal timestamps: the later record wins.
                Some(current) if current.0 > reaction.timestamp_millis => {}
                Some(current) => *current = (reaction.timestamp_millis, change),
                None => {
                    latest.insert(&reaction.sender, (reaction.timestamp_millis, change));
                }
            }
        }

        let mut entries: Vec<ResolvedReaction> = latest
            .into_iter()
            .filter_map(|(sender, (timestamp_millis, change))| match change {
                ReactionChange::Add(kind) => Some(ResolvedReaction {
                    sender: sender.clone(),
                    kind,
                    timestamp_millis,
                }),
                ReactionChange::Remove => None,
            })
            .collect();
        entries.sort_by_key(|entry| entry.timestamp_millis);
        Self { entries }
    }

    pub fn for_sender(&self, sender: &Sender) -> Option<ReactionKind> {
        self.entries
            .iter()
            .find(|entry| &entry.sender == sender)
            .map(|entry| entry.kind)
    }

    /// Reaction the local user currently holds; the panel highlights it.
    pub fn mine(&self) -> Option<ReactionKind> {
        self.for_sender(&Sender::Me)
    }

    /// Non-zero counts in panel order.
    pub fn counts(&self) -> Vec<(ReactionKind, usize)> {
        ReactionKind::ALL
            .iter()
            .map(|kind| {
                let count = self.entries.iter().filter(|e| e.kind == *kind).count();
                (*kind, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedReaction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
