/// Text rendering for transcript lines and the project overlay
///
/// Turns the structured line stream into ANSI-styled strings. Whether colour
/// actually comes out is up to `colored` (NO_COLOR, overrides).

use crate::content::{MediaKind, Project};
use crate::terminal::{LineKind, OutputLine, Widget};
use colored::Colorize;

pub const PROMPT: &str = "guest@portfolio:~$ ";

/// Render a single transcript line
pub fn line(line: &OutputLine) -> String {
    if let Some(Widget::SocialLink(link)) = &line.widget {
        let url = link.url.cyan().underline().to_string();
        return line.text.replacen(&link.url, &url, 1);
    }

    match line.kind {
        LineKind::Command => line.text.green().bold().to_string(),
        LineKind::Error => line.text.red().to_string(),
        LineKind::Success => line.text.green().to_string(),
        LineKind::Warning => line.text.yellow().to_string(),
        LineKind::Plain => line.text.clone(),
    }
}

/// The project detail widget, one string per row
pub fn project_overlay(project: &Project) -> Vec<String> {
    let mut rows = Vec::new();

    rows.push(format!("╭─ {} ", project.name.bold()));
    rows.push("│".to_string());

    let status = if project.is_completed() {
        project.status.green()
    } else {
        project.status.yellow()
    };
    rows.push(format!("│  Status: {}", status));
    rows.push(format!("│  {}", project.description));
    rows.push("│".to_string());
    rows.push(format!("│  Tech: {}", project.technologies.join(", ")));

    if !project.features.is_empty() {
        rows.push("│  Features:".to_string());
        for feature in &project.features {
            rows.push(format!("│    • {}", feature));
        }
    }

    rows.push("│".to_string());
    rows.push(format!("│  Code: {}", project.repository.cyan().underline()));
    if let Some(demo) = &project.demo {
        rows.push(format!("│  Demo: {}", demo.cyan().underline()));
    }

    if !project.media.items.is_empty() {
        let kind = match project.media.kind {
            MediaKind::Images => "Images",
            MediaKind::Video => "Video",
        };
        rows.push(format!("│  {}: {}", kind, project.media.items.join(", ")));
    }

    rows.push(format!("╰─ {}", "Esc to close".dimmed()));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::terminal::OutputLine;

    #[test]
    fn test_line_keeps_text() {
        for l in [
            OutputLine::command("$ ls"),
            OutputLine::error("nope: command not found"),
            OutputLine::success("ok"),
            OutputLine::warning("careful"),
            OutputLine::plain("plain"),
        ] {
            assert!(line(&l).contains(&l.text));
        }
    }

    #[test]
    fn test_plain_line_is_untouched() {
        assert_eq!(line(&OutputLine::plain("just text")), "just text");
    }

    #[test]
    fn test_social_line_keeps_url() {
        let store = ContentStore::bundled().unwrap();
        let link = store.social()[0].clone();
        let l = OutputLine::plain(format!("  🐙 GitHub → {}", link.url))
            .with_widget(Widget::SocialLink(link.clone()));
        let rendered = line(&l);
        assert!(rendered.contains("GitHub"));
        assert!(rendered.contains(&link.url));
    }

    #[test]
    fn test_overlay_shows_project_fields() {
        let store = ContentStore::bundled().unwrap();
        let project = store.project("folio-term").unwrap();
        let rows = project_overlay(project).join("\n");

        assert!(rows.contains("Folio Term"));
        assert!(rows.contains(&project.repository));
        assert!(rows.contains("https://alexrivera.dev"));
        assert!(rows.contains("Command history"));
        assert!(rows.contains("assets/folio-term/prompt.png"));
    }

    #[test]
    fn test_overlay_without_demo() {
        let store = ContentStore::bundled().unwrap();
        let rows = project_overlay(store.project("packet-sieve").unwrap());
        assert!(!rows.iter().any(|r| r.contains("Demo:")));
        assert!(rows.iter().any(|r| r.contains("Video")));
    }
}
