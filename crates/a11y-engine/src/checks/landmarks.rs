//! Landmark region coverage suggestions

use std::collections::HashSet;

use a11y_types::Issue;
use scraper::Html;

use crate::selectors;

/// Landmark roles every page is expected to expose, in suggestion order.
const REQUIRED_LANDMARKS: &[&str] = &["banner", "navigation", "main", "contentinfo"];

/// Union of explicit `role` values and implicit native-element landmarks,
/// then one suggestion per required role still missing.
pub fn check_landmark_regions(document: &Html) -> Vec<Issue> {
    let mut present: HashSet<String> = document
        .select(&selectors::ROLE)
        .filter_map(|element| element.value().attr("role"))
        .map(|role| role.trim().to_string())
        .collect();

    if document.select(&selectors::HEADER).next().is_some() {
        present.insert("banner".to_string());
    }
    if document.select(&selectors::FOOTER).next().is_some() {
        present.insert("contentinfo".to_string());
    }
    if document.select(&selectors::NAV).next().is_some() {
        present.insert("navigation".to_string());
    }
    // <main>, role="main", or the id conventions main/content.
    if document.select(&selectors::MAIN_LIKE).next().is_some() {
        present.insert("main".to_string());
    }

    REQUIRED_LANDMARKS
        .iter()
        .filter(|role| !present.contains(**role))
        .map(|role| {
            Issue::new(format!(
                "Suggested: Consider a landmark region for '{role}' \
                 (e.g., <header>, <main>, <nav>, <footer>, or role='{role}')."
            ))
        })
        .collect()
}
