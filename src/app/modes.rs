//! Input focus state for the application.
//!
//! This module defines the small state machine that controls keybinding
//! interpretation: keystrokes either edit the search query or navigate the
//! result list. The focus determines the displayed footer text and which
//! events the terminal shim produces.

/// Which part of the UI currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    /// The search input field is focused.
    ///
    /// Characters and backspace edit the live query, Enter submits, and
    /// Tab/Down moves focus to the result list.
    Query,

    /// The result list is focused.
    ///
    /// j/k move the cursor, Enter expands or collapses the highlighted user,
    /// `o` opens the profile page, `/` returns to the query, and `q` quits.
    Results,
}
