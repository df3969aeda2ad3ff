use chrono::Duration as ChronoDuration;

const UNITS: &[(i64, &str)] = &[
    (24 * 60 * 60, "day"),
    (60 * 60, "hour"),
    (60, "minute"),
    (1, "second"),
];

/// Human "time since" text for the refresh notice, e.g. `"3 minutes"`.
#[must_use]
pub fn format_time_ago(td: ChronoDuration) -> String {
    let secs = td.num_seconds().max(0);
    for &(size, unit) in UNITS {
        if secs >= size {
            let n = secs / size;
            return if n == 1 {
                format!("1 {unit}")
            } else {
                format!("{n} {unit}s")
            };
        }
    }
    "0 seconds".to_string()
}

/// Golf-style relative-to-par text: `E`, `-3`, `+2`, `-1.5`.
#[must_use]
pub fn format_golf_score(score: f64) -> String {
    if score == 0.0 {
        return "E".to_string();
    }
    let body = if score.fract() == 0.0 {
        format!("{}", score.abs() as i64)
    } else {
        format!("{:.1}", score.abs())
    };
    if score < 0.0 {
        format!("-{body}")
    } else {
        format!("+{body}")
    }
}
