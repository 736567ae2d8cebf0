use crate::application::read_models::{EventLogView, ForestReadModel, NodeRowView};
use crate::ports::outbound::ForestFormatter;
use crate::resource_graph::domain::NodeState;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

const NO_RESOURCES: &str = "No resources found";
const FOREST_HEADERS: [&str; 7] = ["NAME", "CLASS", "GROUP", "KIND", "SYNCED", "READY", "AGE"];
const EVENT_HEADERS: [&str; 5] = ["TYPE", "REASON", "COUNT", "LAST SEEN", "MESSAGE"];

/// Cell styles; applied after padding so escape codes never skew widths
#[derive(Clone, Copy)]
enum Tone {
    Plain,
    Good,
    Bad,
    Warn,
    Dim,
    Header,
}

/// TreeFormatter adapter rendering the visible forest as an indented table
///
/// Roots sit at the left margin; descendants are indented one step per
/// level and carry a `├`/`└` connector. Composite rows show `▸` when
/// collapsed, `▾` when expanded and `…` while their children load.
pub struct TreeFormatter {
    colored: bool,
}

impl TreeFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.colored {
            return text.to_string();
        }
        match tone {
            Tone::Plain => text.to_string(),
            Tone::Good => text.green().to_string(),
            Tone::Bad => text.red().to_string(),
            Tone::Warn => text.yellow().to_string(),
            Tone::Dim => text.dimmed().to_string(),
            Tone::Header => text.bold().to_string(),
        }
    }

    fn name_cell(row: &NodeRowView) -> String {
        let marker = match row.state {
            NodeState::Leaf => "",
            NodeState::Collapsed => "▸ ",
            NodeState::Expanded => "▾ ",
            NodeState::Loading => "… ",
        };
        if row.level == 0 {
            return format!("{}{}", marker, row.name);
        }
        format!(
            "{}{} {}{}",
            "  ".repeat(row.level - 1),
            row.prefix,
            marker,
            row.name
        )
    }

    fn condition_cell(holds: bool) -> (String, Tone) {
        if holds {
            ("True".to_string(), Tone::Good)
        } else {
            ("False".to_string(), Tone::Bad)
        }
    }

    fn forest_cells(row: &NodeRowView) -> Vec<(String, Tone)> {
        let class_tone = match row.kind_class.as_str() {
            "Claim" => Tone::Header,
            _ => Tone::Plain,
        };
        vec![
            (Self::name_cell(row), Tone::Plain),
            (row.kind_class.clone(), class_tone),
            (row.api_group.clone(), Tone::Dim),
            (row.kind.clone(), Tone::Plain),
            Self::condition_cell(row.synced),
            Self::condition_cell(row.ready),
            (row.age.clone(), Tone::Dim),
        ]
    }

    /// Writes a left-aligned table; the last column is never padded.
    fn render_table(&self, output: &mut String, headers: &[&str], rows: &[Vec<(String, Tone)>]) {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (width, (text, _)) in widths.iter_mut().zip(row) {
                *width = (*width).max(text.chars().count());
            }
        }

        let header_row: Vec<(String, Tone)> = headers
            .iter()
            .map(|h| (h.to_string(), Tone::Header))
            .collect();
        for row in std::iter::once(&header_row).chain(rows) {
            let last = row.len().saturating_sub(1);
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(index, ((text, tone), width))| {
                    let padding = if index == last {
                        0
                    } else {
                        width - text.chars().count()
                    };
                    format!("{}{}", self.paint(text, *tone), " ".repeat(padding))
                })
                .collect();
            output.push_str(line.join("  ").trim_end());
            output.push('\n');
        }
    }

    fn render_summary(&self, output: &mut String, model: &ForestReadModel) {
        let summary = &model.summary;
        let degraded = format!("{} degraded", summary.degraded);
        let degraded = if summary.is_healthy() {
            self.paint(&degraded, Tone::Good)
        } else {
            self.paint(&degraded, Tone::Warn)
        };
        let _ = writeln!(
            output,
            "\n{} visible resource(s): {} synced, {} ready, {}",
            model.visible, summary.synced, summary.ready, degraded
        );
    }

    fn render_issues(&self, output: &mut String, issues: &[String]) {
        if issues.is_empty() {
            return;
        }
        let _ = writeln!(output, "\n{}", self.paint("Issues:", Tone::Warn));
        for issue in issues {
            let _ = writeln!(output, "  - {}", issue);
        }
    }

    fn render_events(&self, output: &mut String, log: &EventLogView) {
        let title = format!("Events for {} {}:", log.kind, log.name);
        let _ = writeln!(output, "\n{}", self.paint(&title, Tone::Header));
        if log.events.is_empty() {
            output.push_str("  No events found\n");
            return;
        }

        let rows: Vec<Vec<(String, Tone)>> = log
            .events
            .iter()
            .map(|event| {
                let tone = if event.event_type == "Warning" {
                    Tone::Warn
                } else {
                    Tone::Plain
                };
                vec![
                    (event.event_type.clone(), tone),
                    (event.reason.clone(), Tone::Plain),
                    (event.count.to_string(), Tone::Plain),
                    (event.last_seen.clone(), Tone::Dim),
                    (event.message.replace('\n', " "), Tone::Plain),
                ]
            })
            .collect();
        self.render_table(output, &EVENT_HEADERS, &rows);
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ForestFormatter for TreeFormatter {
    fn format(&self, model: &ForestReadModel) -> Result<String> {
        let mut output = String::new();

        if model.rows.is_empty() {
            output.push_str(NO_RESOURCES);
            output.push('\n');
        } else {
            let rows: Vec<Vec<(String, Tone)>> =
                model.rows.iter().map(Self::forest_cells).collect();
            self.render_table(&mut output, &FOREST_HEADERS, &rows);
            self.render_summary(&mut output, model);
        }

        self.render_issues(&mut output, &model.issues);
        if let Some(log) = &model.events {
            self.render_events(&mut output, log);
        }
        Ok(output)
    }
}
