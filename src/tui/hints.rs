// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

/// Shortest-first labels over `hint_chars`: all 1-char labels, then 2-char labels, and so on.
pub(crate) fn gen_labels(n: usize, hint_chars: &str) -> Vec<String> {
    let alphabet: Vec<char> = hint_chars.chars().collect();
    assert!(!alphabet.is_empty(), "hint_chars must not be empty");

    let mut seen = HashSet::with_capacity(alphabet.len());
    for &ch in &alphabet {
        assert!(seen.insert(ch), "hint_chars must not contain duplicate characters");
    }

    if n == 0 {
        return Vec::new();
    }

    let k = alphabet.len();
    if k == 1 {
        let ch = alphabet[0];
        return (1..=n).map(|len| std::iter::repeat(ch).take(len).collect()).collect();
    }

    let mut labels = Vec::with_capacity(n);
    let mut len = 1usize;

    while labels.len() < n {
        let count_len = k.checked_pow(len as u32).unwrap_or(usize::MAX);
        let to_take = (n - labels.len()).min(count_len);

        for i in 0..to_take {
            let mut x = i;
            let mut chars = vec![alphabet[0]; len];
            for slot in chars.iter_mut().rev() {
                *slot = alphabet[x % k];
                x /= k;
            }
            labels.push(chars.into_iter().collect());
        }

        len += 1;
    }

    labels
}

/// Prefix-free labels for `n` scenario triggers: single keys while they suffice, otherwise
/// two keys for every trigger so no label is the start of another.
///
/// Returns `None` when `n` exceeds what two keys can address.
pub(crate) fn trigger_labels(n: usize, hint_chars: &str) -> Option<Vec<String>> {
    let k = hint_chars.chars().count();
    if n <= k {
        return Some(gen_labels(n, hint_chars));
    }
    if n > k.saturating_mul(k) {
        return None;
    }
    Some(gen_labels(n + k, hint_chars).into_iter().skip(k).take(n).collect())
}

/// Outcome of feeding one key into a pending label prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HintMatch {
    Selected(usize),
    Pending(String),
    NoMatch,
}

pub(crate) fn match_hint(labels: &[String], pending: &str, key: char) -> HintMatch {
    let mut typed = pending.to_owned();
    typed.push(key);

    if let Some(index) = labels.iter().position(|label| *label == typed) {
        return HintMatch::Selected(index);
    }
    if labels.iter().any(|label| label.starts_with(&typed)) {
        return HintMatch::Pending(typed);
    }
    HintMatch::NoMatch
}
