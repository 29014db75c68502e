//! Supervisor panel rendering
//!
//! Single-page HTML view of the ledger, pending requests first. Pending
//! rows carry an inline form posting back to `/respond`.

use crate::ledger::HelpRequest;
use std::fmt::Write;

/// Render the supervisor panel
///
/// `notice` is an optional error banner shown after a rejected submission
/// so the operator can retry without losing the pending forms.
pub fn render(requests: &[HelpRequest], notice: Option<&str>) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head><title>Supervisor Panel</title></head>\n<body>\n<h1>Supervisor Panel</h1>\n",
    );

    if let Some(notice) = notice {
        let _ = writeln!(
            page,
            "<p style=\"color: red;\"><b>{}</b></p>",
            escape(notice)
        );
    }

    if requests.is_empty() {
        page.push_str("<p>No help requests yet.</p>\n");
    }

    // Pending first so open work sits at the top
    let (pending, resolved): (Vec<_>, Vec<_>) =
        requests.iter().partition(|r| r.is_pending());

    for request in pending.iter().chain(resolved.iter()) {
        let _ = writeln!(page, "<div style=\"margin-bottom: 20px;\">");
        let _ = writeln!(page, "<b>ID:</b> {}<br>", escape(&request.id));
        let _ = writeln!(page, "<b>Question:</b> {}<br>", escape(&request.question));
        let _ = writeln!(page, "<b>Status:</b> {}<br>", request.status);

        match &request.answer {
            None => {
                let _ = writeln!(
                    page,
                    "<form method=\"POST\" action=\"/respond\">\n\
                     <input type=\"hidden\" name=\"request_id\" value=\"{}\">\n\
                     <input type=\"text\" name=\"answer\" placeholder=\"Type your answer here\" required>\n\
                     <button type=\"submit\">Submit Answer</button>\n\
                     </form>",
                    escape(&request.id)
                );
            }
            Some(answer) => {
                let _ = writeln!(page, "<b>Answer:</b> {}<br>", escape(answer));
            }
        }
        page.push_str("</div>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}

/// Minimal HTML escaping for untrusted question/answer text
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
