//! Static lookup from quoted UI literals to suggested translation-key expressions.
//!
//! Keys are stored verbatim, including the surrounding double quotes, and are
//! matched byte-for-byte. The built-in entries are grouped by feature area
//! only for readability.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};

const AUTH: &[(&str, &str)] = &[
    (r#""Welcome Back""#, "t('auth.welcomeBack')"),
    (
        r#""Sign in to continue to Patrick Travel Services""#,
        "t('auth.signInToContinue')",
    ),
    (r#""Create Account""#, "t('auth.createAccount')"),
    (
        r#""Sign up to get started with Patrick Travel Services""#,
        "t('auth.signUpToGetStarted')",
    ),
    (r#""Email""#, "t('auth.email')"),
    (r#""Password""#, "t('auth.password')"),
    (r#""Confirm Password""#, "t('auth.confirmPassword')"),
    (r#""First Name""#, "t('auth.firstName')"),
    (r#""Last Name""#, "t('auth.lastName')"),
    (r#""Phone (Optional)""#, "t('auth.phoneOptional')"),
    (r#""Sign In""#, "t('auth.signIn')"),
    (r#""Sign Up""#, "t('auth.signUp')"),
    (r#""Remember me""#, "t('auth.rememberMe')"),
    (r#""Forgot Password?""#, "t('auth.forgotPassword')"),
    (
        r#""Don't have an account? ""#,
        "t('auth.dontHaveAccount') + ' '",
    ),
    (
        r#""Already have an account? ""#,
        "t('auth.alreadyHaveAccount') + ' '",
    ),
];

const DASHBOARD: &[(&str, &str)] = &[
    (r#""Total Cases""#, "t('dashboard.totalCases')"),
    (r#""Active Cases""#, "t('dashboard.activeCases')"),
    (r#""Pending Documents""#, "t('dashboard.pendingDocuments')"),
    (r#""Unread Messages""#, "t('dashboard.unreadMessages')"),
    (r#""Quick Actions""#, "t('dashboard.quickActions')"),
    (r#""Submit New Case""#, "t('dashboard.submitNewCase')"),
    (r#""Upload Document""#, "t('dashboard.uploadDocument')"),
    (r#""View FAQs""#, "t('dashboard.viewFAQs')"),
];

const CASES: &[(&str, &str)] = &[
    (r#""Search by reference number""#, "t('cases.searchByReference')"),
    (r#""No cases found""#, "t('cases.noCasesFound')"),
    (r#""Message Advisor""#, "t('cases.messageAdvisor')"),
    (r#""Status History""#, "t('cases.statusHistory')"),
];

const COMMON: &[(&str, &str)] = &[
    (r#""Loading...""#, "t('common.loading')"),
    (r#""Success""#, "t('common.success')"),
    (r#""Error""#, "t('common.error')"),
    (r#""OK""#, "t('common.ok')"),
    (r#""Cancel""#, "t('common.cancel')"),
    (r#""Save""#, "t('common.save')"),
    (r#""Delete""#, "t('common.delete')"),
];

/// Immutable mapping from a quoted literal to its replacement expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: HashMap<String, String>,
}

impl MappingTable {
    /// The built-in table for the Patrick Travel Services mobile app.
    pub fn builtin() -> Self {
        let entries = [AUTH, DASHBOARD, CASES, COMMON]
            .into_iter()
            .flatten()
            .map(|(literal, replacement)| (literal.to_string(), replacement.to_string()))
            .collect();
        Self { entries }
    }

    /// Returns a table with `extra` layered over `self`. Extra entries win on collision.
    pub fn with_entries<I, K, V>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.entries
            .extend(extra.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Read extra entries from a JSON object file (`{ "\"Literal\"": "t('key')" }`).
    pub fn load_entries(path: &Path) -> Result<HashMap<String, String>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read mapping file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse mapping file: {}", path.display()))
    }

    /// Exact lookup. No trimming or case folding is applied to `candidate`.
    pub fn lookup(&self, candidate: &str) -> Option<&str> {
        self.entries.get(candidate).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
