// Copyright 2025 the Switchscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular stepping over a sibling list.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Forward,
    Backward,
}

/// Index reached by one step from `origin` in a list of `len` entries, wrapping at both ends.
///
/// An origin that is not in the list counts as index −1, so a forward step lands on 0 and a
/// backward step on `len - 2` (wrapped). Returns `None` for an empty list.
pub(crate) fn wrap_index(origin: Option<usize>, len: usize, step: Step) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = isize::try_from(len).ok()?;
    let origin = match origin {
        Some(pos) => isize::try_from(pos).ok()?,
        None => -1,
    };
    let offset = match step {
        Step::Forward => 1,
        Step::Backward => -1,
    };
    usize::try_from((origin + offset).rem_euclid(len)).ok()
}
