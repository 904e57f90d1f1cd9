// SPDX-License-Identifier: MIT OR Apache-2.0

//! User-facing error types.
//!
//! Fetch errors are rendered as plain text in place of a section's content;
//! they are never retried and never take the page down. Normalization
//! problems are not represented here at all: a malformed page block is
//! skipped with a warning and the remaining blocks still render.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The CMS answered with a non-2xx status.
    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },
    /// The request went out but nothing usable came back.
    #[error("No response received from server. Please check your internet connection.")]
    Network(String),
    /// The request could not even be constructed (bad config, bad URL).
    #[error("{0}")]
    Setup(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Failed to send message. Please try again.")]
    Delivery(String),
}
