// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod context;
pub mod email;
pub mod errors;
pub mod pages;
pub mod scroll;
