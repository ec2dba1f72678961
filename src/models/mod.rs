// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data model shared across services and handlers.

pub mod profile;

pub use profile::{Account, Goals, Ledger, Profile};
