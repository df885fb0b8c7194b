// Copyright 2025 the Switchscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing parameters and policy flags consulted by the navigator.

use core::time::Duration;

/// Where synthesized control entries go in a spelling list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ListPosition {
    /// Before the letters and predictions.
    Top,
    /// After the letters and predictions.
    Bottom,
}

/// Navigator configuration.
///
/// The navigator only reads these values; hosts own persistence and may swap them at any time
/// with [`Navigator::set_settings`](crate::Navigator::set_settings).
///
/// With the `serde` feature, missing fields fall back to [`Settings::default`] and
/// `scan_wait_time` is written as fractional seconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Settings {
    /// Master switch for automatic scanning.
    pub scanning: bool,
    /// Pause after a cue finishes before scanning moves on.
    #[cfg_attr(feature = "serde", serde(with = "seconds"))]
    pub scan_wait_time: Duration,
    /// Number of full passes over a sibling list before scanning stops. Zero scans forever.
    pub scan_loops: u32,
    /// Start scanning when the vocabulary is first shown.
    pub scan_on_app_launch: bool,
    /// Keep scanning after a selection.
    pub scan_after_selection: bool,
    /// Skip the pause between items during the first pass.
    pub fast_first_loop: bool,
    /// Placement of the backspace and clear entries in spelling lists.
    pub control_command_position: ListPosition,
    /// Maximum number of predicted words spliced into a spelling list. Zero keeps them all.
    pub vocab_history: usize,
    /// Include a back entry in spelling lists.
    pub show_back_in_list: bool,
    /// Placement of the back entry in spelling lists.
    pub back_button_position: ListPosition,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scanning: true,
            scan_wait_time: Duration::from_millis(1500),
            scan_loops: 3,
            scan_on_app_launch: true,
            scan_after_selection: true,
            fast_first_loop: false,
            control_command_position: ListPosition::Bottom,
            vocab_history: 5,
            show_back_in_list: true,
            back_button_position: ListPosition::Top,
        }
    }
}

impl Settings {
    /// Settings with automatic scanning turned off, for direct step-by-step control.
    pub fn manual() -> Self {
        Self {
            scanning: false,
            ..Self::default()
        }
    }
}

#[cfg(feature = "serde")]
mod seconds {
    use core::time::Duration;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(value: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(value.as_secs_f64())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
    }
}
