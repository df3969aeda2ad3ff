use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::HTMX_PATH;

const STYLE: &str = "
body { font-family: system-ui, sans-serif; margin: 1.5rem; }
table.styled-table { border-collapse: collapse; margin-bottom: 2rem; min-width: 40rem; }
.styled-table th, .styled-table td { padding: 0.35rem 0.75rem; border-bottom: 1px solid #ddd; text-align: left; }
.styled-table thead tr { background: #0a6640; color: #fff; }
.styled-table td.num { text-align: right; font-variant-numeric: tabular-nums; }
p.refresh { color: #666; font-size: 0.9rem; }
p.refresh.stale { color: #a33; }
";

/// Page shell; both tables load into it and re-poll every `poll_secs`.
#[must_use]
pub fn render_index_template(title: &str, poll_secs: u64) -> Markup {
    let trigger = format!("load, every {}s", poll_secs.max(5));
    html! {
        (DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (title) }
            script src=(HTMX_PATH) defer {}
            style { (PreEscaped(STYLE)) }
        }
        body {
            h1 { (title) }
            div id="scores" hx-get="scores" hx-trigger=(trigger) hx-swap="innerHTML" {
                p { "Loading leaderboard..." }
            }
            div id="outright" hx-get="outright" hx-trigger=(trigger) hx-swap="innerHTML" {}
        }
    }
}
