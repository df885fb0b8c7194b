// Copyright 2025 the Switchscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input-agnostic user actions.

/// A user-triggerable action.
///
/// Every input subsystem (switches, facial gestures, game controllers, swipes) normalizes what
/// it detects into one of these values and hands it to
/// [`Navigator::do_action`](crate::Navigator::do_action). Nothing else mutates navigation state
/// on behalf of input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Do nothing. Useful as the mapping for unbound inputs.
    None,
    /// Move focus to the next sibling, wrapping at the end.
    NextNode,
    /// Move focus to the previous sibling, wrapping at the start.
    PrevNode,
    /// Activate the focused node.
    Select,
    /// Start a single rapid pass over the current siblings, or stop the one in progress.
    Fast,
    /// Clear the typed text.
    Clear,
    /// Move focus up one level.
    GoBack,
    /// Restart automatic scanning from the focused node.
    StartScanning,
    /// Return to the top of the vocabulary.
    GoToHome,
    /// Move focus to the first sibling of the focused node.
    GoToStartOfBranch,
    /// Stop automatic scanning until the next action.
    PauseScan,
}

impl Action {
    /// Whether this action counts as fresh user input, which restarts the scan-loop budget.
    pub const fn is_explicit(self) -> bool {
        !matches!(self, Self::None | Self::PauseScan)
    }
}
