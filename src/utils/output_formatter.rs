/// Console output for both utilities
///
/// Every function returns the formatted text; the binaries decide where it
/// is printed.

use colored::Colorize;

use crate::core::concatenator::ConcatReport;
use crate::core::credentials::UpdateSummary;

/// Number of key characters shown before the ellipsis
const KEY_PREVIEW_CHARS: usize = 50;

/// Format the per-fragment lines and closing message of a concatenation
pub fn format_concat_report(report: &ConcatReport) -> String {
    let mut output = String::new();

    for name in &report.included {
        output.push_str(&format!("   {} {}\n", "+".green(), name));
    }
    for name in &report.missing {
        output.push_str(&format!(
            "{}\n",
            format!("WARNING: File {} not found. Skipping.", name).yellow()
        ));
    }

    output.push_str(&format!(
        "\n{}",
        format!("{} generated successfully!", report.output.display())
            .green()
            .bold()
    ));
    if report.warning_count() > 0 {
        output.push_str(&format!(
            " {}",
            format!("({} warning(s))", report.warning_count()).yellow()
        ));
    }

    output
}

/// First characters of a key followed by an ellipsis
pub fn key_preview(key: &str) -> String {
    let preview: String = key.chars().take(KEY_PREVIEW_CHARS).collect();
    format!("{}...", preview)
}

/// Project ref of a Supabase URL, i.e. the first label of its host
pub fn project_ref(url: &str) -> Option<&str> {
    let host = url.split_once("://").map_or(url, |(_, rest)| rest);
    let label = host.split(['.', '/', ':']).next()?;
    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

/// Instructions printed when the new key was never filled in
pub fn format_placeholder_help(new_url: &str) -> String {
    let dashboard = match project_ref(new_url) {
        Some(project) => format!(
            "https://supabase.com/dashboard/project/{}/settings/api",
            project
        ),
        None => "https://supabase.com/dashboard (Settings -> API)".to_string(),
    };

    let mut output = String::new();
    output.push_str(&format!(
        "{}\n",
        "ERROR: NEW_SUPABASE_KEY has not been filled in!".red().bold()
    ));
    output.push_str(&format!("\n{}\n", "How to get the anon key:".bold()));
    output.push_str(&format!("   1. Open: {}\n", dashboard));
    output.push_str("   2. Copy the 'anon public' key\n");
    output.push_str("   3. Put it in the config (credentials.new_key) or pass --new-key\n");
    output.push_str("   4. Run again");
    output
}

/// Summary of the credentials about to be written
pub fn format_update_banner(new_url: &str, new_key: &str) -> String {
    format!(
        "{} {}\n{} {}\n",
        "New URL:".cyan(),
        new_url,
        "New Key:".cyan(),
        key_preview(new_key)
    )
}

/// Per-file lines, the success count and, when everything worked, next steps
pub fn format_update_summary(summary: &UpdateSummary) -> String {
    let mut output = String::new();

    for outcome in &summary.outcomes {
        match &outcome.result {
            Ok(_) => output.push_str(&format!(
                "{} {}\n",
                "Updated:".green(),
                outcome.path.display()
            )),
            Err(e) => output.push_str(&format!(
                "{} {}: {}\n",
                "Error in".red(),
                outcome.path.display(),
                e
            )),
        }
    }

    output.push_str(&format!(
        "\n{}",
        format!(
            "Done! {}/{} files updated",
            summary.succeeded(),
            summary.attempted
        )
        .bold()
    ));

    if summary.all_succeeded() {
        output.push_str(&format!("\n\n{}\n", "Next steps:".bold()));
        output.push_str("   1. Run the SQL scripts in Supabase\n");
        output.push_str("   2. Test the connection: node test_supabase_connection.mjs\n");
        output.push_str("   3. Start the app: npm run dev");
    }

    output
}
