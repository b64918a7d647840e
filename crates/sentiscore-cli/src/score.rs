//! `score` and `inspect` command handlers.

use std::io::Read;

use sentiscore_sentiment::{PipelineTrace, SentimentAnalyzer};

/// Join positional arguments with spaces, or read all of `stdin` when there are none.
///
/// # Errors
///
/// Returns an error if reading `stdin` fails or it is not valid UTF-8.
pub(crate) fn read_input(args: &[String], mut stdin: impl Read) -> anyhow::Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut buf = String::new();
    stdin.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Score `input`; a bare number, or the full result as JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn render_score(
    analyzer: &SentimentAnalyzer,
    input: &str,
    json: bool,
) -> anyhow::Result<String> {
    let sentiment = analyzer.analyze(input);
    if json {
        return Ok(serde_json::to_string_pretty(&sentiment)?);
    }
    Ok(sentiment.score.to_string())
}

/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn render_inspect(
    analyzer: &SentimentAnalyzer,
    input: &str,
    json: bool,
) -> anyhow::Result<String> {
    let trace = analyzer.trace(input);
    if json {
        return Ok(serde_json::to_string_pretty(&trace)?);
    }
    Ok(render_trace(&trace, &analyzer.aggregation().to_string()))
}

fn render_trace(trace: &PipelineTrace, aggregation: &str) -> String {
    let mut lines = vec![
        format!("normalized: {:?}", trace.normalized),
        format!("tokens:     [{}]", trace.tokens.join(", ")),
        format!("filtered:   [{}]", trace.filtered.join(", ")),
    ];
    lines.extend(trace.scored.iter().map(|token| {
        let score = token
            .score
            .map_or_else(|| "-".to_string(), |s| format!("{s:+}"));
        format!("  {:<16} {:<16} {score}", token.token, token.stem)
    }));
    let s = &trace.sentiment;
    lines.push(format!(
        "score:      {} ({}, {aggregation}; {}/{} tokens matched, total {})",
        s.score, s.label, s.hits, s.tokens, s.total
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::english().expect("bundled resources load")
    }

    #[test]
    fn read_input_joins_arguments() {
        let args = vec!["This".to_string(), "is".to_string(), "great!".to_string()];
        let input = read_input(&args, std::io::empty()).unwrap();
        assert_eq!(input, "This is great!");
    }

    #[test]
    fn read_input_falls_back_to_stdin() {
        let input = read_input(&[], "I hate this.\n".as_bytes()).unwrap();
        assert_eq!(input, "I hate this.\n");
    }

    #[test]
    fn read_input_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0xff, 0xfe, 0xfd];
        assert!(read_input(&[], bytes).is_err());
    }

    #[test]
    fn render_score_plain() {
        assert_eq!(render_score(&analyzer(), "This is great!", false).unwrap(), "3");
        assert_eq!(render_score(&analyzer(), "", false).unwrap(), "0");
    }

    #[test]
    fn render_score_json() {
        let out = render_score(&analyzer(), "I hate this.", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["label"], "negative");
        assert_eq!(value["hits"], 1);
    }

    #[test]
    fn render_inspect_lists_every_stage() {
        let out = render_inspect(&analyzer(), "This is great!", false).unwrap();
        assert!(out.contains("normalized: \"This is great\""), "{out}");
        assert!(out.contains("tokens:     [This, is, great]"), "{out}");
        assert!(out.contains("filtered:   [great]"), "{out}");
        assert!(out.contains("+3"), "{out}");
        assert!(out.contains("positive, mean; 1/1 tokens matched"), "{out}");
    }

    #[test]
    fn render_inspect_marks_unknown_tokens() {
        let out = render_inspect(&analyzer(), "great weather", false).unwrap();
        let weather_line = out
            .lines()
            .find(|l| l.trim_start().starts_with("weather"))
            .expect("weather row");
        assert!(weather_line.trim_end().ends_with('-'), "{weather_line}");
    }

    #[test]
    fn render_inspect_has_one_line_per_stage_and_token() {
        let out = render_inspect(&analyzer(), "great weather", false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6, "{out}");
        assert!(lines[3].trim_start().starts_with("great"), "{out}");
        assert!(lines[5].starts_with("score:      1.5 (positive, mean; 1/2"), "{out}");
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn render_inspect_json_has_trace_fields() {
        let out = render_inspect(&analyzer(), "She loves it", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["filtered"][0], "loves");
        assert_eq!(value["scored"][0]["stem"], "love");
        assert_eq!(value["sentiment"]["total"], 3);
    }
}
