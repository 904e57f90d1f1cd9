// SPDX-License-Identifier: MIT OR Apache-2.0

//! Light/dark preference with localStorage persistence.
//!
//! Initialization order: persisted preference, then the OS preference, then
//! light. Every toggle persists the choice and flips the `dark` class on the
//! document element; nothing else is allowed to mutate the preference.

use leptos::*;

const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// Pure initialization rule: a persisted value always wins, and anything
/// persisted that is not "dark" counts as light.
pub fn initial_theme(saved: Option<&str>, system_prefers_dark: bool) -> Theme {
    match saved {
        Some("dark") => Theme::Dark,
        Some(_) => Theme::Light,
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    prefers_dark: RwSignal<bool>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    pub fn toggle_dark_mode(&self) {
        let dark = !self.prefers_dark.get_untracked();
        self.prefers_dark.set(dark);
        save_theme(dark);
        apply_document_class(dark);
    }
}

pub fn provide_theme_context() -> ThemeContext {
    let theme = initial_theme(load_saved_theme().as_deref(), system_prefers_dark());
    let dark = theme == Theme::Dark;
    apply_document_class(dark);
    let context = ThemeContext {
        prefers_dark: create_rw_signal(dark),
    };
    provide_context(context);
    context
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext missing")
}

fn load_saved_theme() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
}

fn save_theme(dark: bool) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, if dark { "dark" } else { "light" });
    }
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn apply_document_class(dark: bool) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class_list = root.class_list();
        let _ = if dark {
            class_list.add_1("dark")
        } else {
            class_list.remove_1("dark")
        };
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn toggle_persists_and_flips_document_class() {
        let runtime = create_runtime();
        save_theme(false);
        apply_document_class(false);
        let context = ThemeContext {
            prefers_dark: create_rw_signal(false),
        };

        context.toggle_dark_mode();
        assert_eq!(load_saved_theme().as_deref(), Some("dark"));
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .unwrap();
        assert!(root.class_list().contains("dark"));

        context.toggle_dark_mode();
        assert_eq!(load_saved_theme().as_deref(), Some("light"));
        assert!(!root.class_list().contains("dark"));

        runtime.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_dark_applies_without_saved_preference() {
        assert_eq!(initial_theme(None, true), Theme::Dark);
        assert_eq!(initial_theme(None, false), Theme::Light);
    }

    #[test]
    fn saved_preference_beats_system() {
        assert_eq!(initial_theme(Some("light"), true), Theme::Light);
        assert_eq!(initial_theme(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn unrecognized_saved_value_counts_as_light() {
        assert_eq!(initial_theme(Some("solarized"), true), Theme::Light);
    }
}
