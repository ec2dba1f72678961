// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory user store.
//!
//! One record per chat id, holding the active conversation state and, once
//! onboarding completes, the account with its goals and ledger. Nothing is
//! persisted; a process restart discards all records.

use dashmap::DashMap;

use crate::models::Account;
use crate::onboarding::OnboardingState;

/// Per-user conversation state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Dialog {
    /// No conversation in progress; only commands are understood.
    #[default]
    Idle,
    /// Mid-questionnaire.
    Onboarding(OnboardingState),
    /// `/log_food` without an argument: waiting for the food name.
    AwaitingFoodName,
    /// Waiting for the portion weight of a named food.
    AwaitingFoodWeight { food_name: String },
}

/// One user's record: conversation state plus the completed account, if any.
#[derive(Debug, Clone, Default)]
pub struct UserRecord {
    pub dialog: Dialog,
    pub account: Option<Account>,
}

/// Concurrent map of user records, keyed by chat id.
///
/// Each inbound update mutates at most one record, so no coordination
/// beyond the map's own sharding is needed.
#[derive(Default)]
pub struct UserStore {
    users: DashMap<i64, UserRecord>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any record exists for this chat id.
    pub fn exists(&self, chat_id: i64) -> bool {
        self.users.contains_key(&chat_id)
    }

    /// Whether the user has completed onboarding.
    pub fn is_onboarded(&self, chat_id: i64) -> bool {
        self.users
            .get(&chat_id)
            .is_some_and(|r| r.account.is_some())
    }

    /// Current conversation state (`Idle` for unknown users).
    pub fn dialog(&self, chat_id: i64) -> Dialog {
        self.users
            .get(&chat_id)
            .map(|r| r.dialog.clone())
            .unwrap_or_default()
    }

    /// Set the conversation state, creating the record if needed.
    pub fn set_dialog(&self, chat_id: i64, dialog: Dialog) {
        self.users.entry(chat_id).or_default().dialog = dialog;
    }

    /// Replace the record with a fresh empty one (start of `/set_profile`).
    ///
    /// Discards any prior in-progress or completed state for the user.
    pub fn reset(&self, chat_id: i64) {
        self.users.insert(chat_id, UserRecord::default());
    }

    /// Store a completed account and return the conversation to idle.
    pub fn complete_onboarding(&self, chat_id: i64, account: Account) {
        self.users.insert(
            chat_id,
            UserRecord {
                dialog: Dialog::Idle,
                account: Some(account),
            },
        );
    }

    /// Read-only snapshot of the account.
    pub fn account(&self, chat_id: i64) -> Option<Account> {
        self.users.get(&chat_id).and_then(|r| r.account.clone())
    }

    /// Mutate the account in place under the shard lock.
    ///
    /// Returns `None` if the user has not completed onboarding.
    pub fn with_account<T>(&self, chat_id: i64, f: impl FnOnce(&mut Account) -> T) -> Option<T> {
        self.users
            .get_mut(&chat_id)
            .and_then(|mut r| r.account.as_mut().map(f))
    }
}
