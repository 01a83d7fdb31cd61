/// Embedded defaults for both utilities
///
/// Running either binary without arguments uses exactly these values. A JSON
/// configuration file or command-line flags can override them.

use lazy_static::lazy_static;
use regex::Regex;

/// SQL fragments in dependency order.
///
/// Users come first, then orders and PDF storage tables, indexes on top of
/// those tables, audit triggers, soft delete, and the final security rules.
pub const SQL_FILES: &[&str] = &[
    "db_schema_users.sql",
    "db_schema_orders.sql",
    "db_schema_pdf_storage.sql",
    "db_optimization.sql",
    "db_audit.sql",
    "db_soft_delete.sql",
    "db_security.sql",
];

/// Aggregate setup script written by the concatenator
pub const OUTPUT_FILE: &str = "db_FULL_SETUP.sql";

pub const NEW_SUPABASE_URL: &str = "https://siomzanxeteltkskftp.supabase.co";

/// Placeholder the operator must replace with the project's anon key
pub const KEY_PLACEHOLDER: &str = "COLE_SUA_ANON_KEY_AQUI";

pub const NEW_SUPABASE_KEY: &str = KEY_PLACEHOLDER;

pub const OLD_SUPABASE_URL: &str = "https://zoqofjswsotykjfwqucp.supabase.co";

pub const OLD_SUPABASE_KEY_PATTERN: &str = r"eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9\.eyJpc3MiOiJzdXBhYmFzZSIsInJlZiI6Inpvcm9manN3c290eWtqZndxdWNwIiwicm9sZSI6ImFub24iLCJpYXQiOjE3Njc4OTg3MjEsImV4cCI6MjA4MzQ3NDcyMX0\.b9XD-F4r3IWvMBKq6cfbHeJ3uLnFAUlpbQGIGZAkBXQ";

/// Source files that embed the Supabase credentials
pub const FILES_TO_UPDATE: &[&str] = &[
    "services/supabaseService.ts",
    "services/storageService.ts",
    "App.tsx",
];

lazy_static! {
    /// Compiled form of [`OLD_SUPABASE_KEY_PATTERN`]
    pub static ref OLD_KEY_REGEX: Regex =
        Regex::new(OLD_SUPABASE_KEY_PATTERN).expect("built-in key pattern is valid");
}

/// Convert a constant file list into owned strings
pub fn owned_list(files: &[&str]) -> Vec<String> {
    files.iter().map(|f| f.to_string()).collect()
}
