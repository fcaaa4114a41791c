// Command handlers
//
// One function per command. Each reads the content store and returns lines.
// No side effects in here, `clear` is handled by the session.

use crate::content::{ContentStore, Skill};
use crate::terminal::command::{CommandError, CommandKind};
use crate::terminal::line::{OutputLine, Widget};

// Column widths the listings line up on
const HELP_NAME_WIDTH: usize = 15;
const HELP_FLAG_WIDTH: usize = 11;
const SKILL_NAME_WIDTH: usize = 20;
const PLATFORM_WIDTH: usize = 12;

const LS_LISTING: &str = "about.txt  experience.log  projects/  skills/  social.links";

const DEFAULT_SOCIAL_ICON: &str = "🔗";

/// Map a social icon key to a glyph. Unknown keys get the default.
pub fn social_icon(key: &str) -> &'static str {
    match key {
        "github" => "🐙",
        "linkedin" => "💼",
        "twitter" => "🐦",
        "mail" => "📧",
        _ => DEFAULT_SOCIAL_ICON,
    }
}

pub fn help(content: &ContentStore) -> Vec<OutputLine> {
    let mut out = vec![OutputLine::plain("Available commands:"), OutputLine::blank()];

    for (name, meta) in content.commands() {
        out.push(OutputLine::plain(format!(
            "  {:<width$} - {}",
            name,
            meta.description,
            width = HELP_NAME_WIDTH
        )));
        for option in &meta.options {
            out.push(OutputLine::plain(format!(
                "      {:<width$} - {}",
                option.flag,
                option.description,
                width = HELP_FLAG_WIDTH
            )));
        }
        if let Some(example) = &meta.example {
            out.push(OutputLine::plain(format!("      Example: {}", example)));
        }
    }

    out.push(OutputLine::blank());
    out.push(OutputLine::plain("Press TAB to autocomplete commands."));
    out.push(OutputLine::plain("Use ↑/↓ to browse your command history."));
    out
}

pub fn whoami(content: &ContentStore) -> Vec<OutputLine> {
    let p = content.profile();
    vec![
        OutputLine::success(format!("┌─ {}", p.name)),
        OutputLine::plain("│"),
        OutputLine::plain(format!("│  🎯 {}", p.role)),
        OutputLine::plain(format!("│  📍 {}", p.location)),
        OutputLine::plain(format!("│  💼 {}+ years of experience", p.years_of_experience)),
        OutputLine::plain("│"),
        OutputLine::plain(format!("│  {}", p.bio)),
        OutputLine::plain("└─"),
    ]
}

/// Decorative. There is no filesystem behind it.
pub fn ls() -> Vec<OutputLine> {
    vec![OutputLine::plain(LS_LISTING)]
}

fn skill_line(icon: &str, name: &str, level: &dyn std::fmt::Display) -> OutputLine {
    OutputLine::plain(format!(
        "   {} {:<width$} [{}]",
        icon,
        name,
        level,
        width = SKILL_NAME_WIDTH
    ))
}

pub fn skills(content: &ContentStore) -> Vec<OutputLine> {
    let set = content.skills();
    let categories: [(&str, &[Skill]); 4] = [
        ("⚡ Frameworks:", set.frameworks.as_slice()),
        ("🔤 Languages:", set.languages.as_slice()),
        ("🗄️  Databases:", set.databases.as_slice()),
        ("🛠️  Tools:", set.tools.as_slice()),
    ];

    let mut out = vec![OutputLine::success("📂 Skills Directory"), OutputLine::blank()];

    for (heading, skills) in categories {
        out.push(OutputLine::warning(heading));
        for skill in skills {
            out.push(skill_line(&skill.icon, &skill.name, &skill.level));
        }
        out.push(OutputLine::blank());
    }

    out.push(OutputLine::warning("🌍 Spoken languages:"));
    for language in content.languages() {
        out.push(skill_line(&language.icon, &language.name, &language.level));
    }
    out
}

pub fn experience(content: &ContentStore) -> Vec<OutputLine> {
    let entries = content.experience();
    let mut out = vec![OutputLine::success("📋 Work History"), OutputLine::blank()];

    for (i, entry) in entries.iter().enumerate() {
        out.push(OutputLine::warning(format!("[{}]", entry.period)));
        out.push(OutputLine::success(format!("🏢 {}", entry.company)));
        out.push(OutputLine::plain(format!("   Role: {}", entry.role)));
        out.push(OutputLine::plain(format!("   {}", entry.description)));
        out.push(OutputLine::plain(format!(
            "   Tech: {}",
            entry.technologies.join(", ")
        )));

        if i + 1 < entries.len() {
            out.push(OutputLine::blank());
        }
    }
    out
}

pub fn projects(content: &ContentStore) -> Vec<OutputLine> {
    let projects = content.projects();
    let mut out = vec![OutputLine::success("🚀 Featured Projects"), OutputLine::blank()];

    for (i, project) in projects.iter().enumerate() {
        let status = format!("    Status: {}", project.status);

        out.push(OutputLine::warning(format!("[{}] {}", i + 1, project.name)));
        out.push(OutputLine::plain(format!("    ID: {}", project.id)));
        out.push(OutputLine::plain(format!("    {}", project.description)));
        out.push(if project.is_completed() {
            OutputLine::success(status)
        } else {
            OutputLine::warning(status)
        });
        out.push(OutputLine::plain(format!(
            "    Tech: {}",
            project.technologies.join(", ")
        )));
        out.push(OutputLine::plain(format!("    💡 Type: view {}", project.id)));

        if i + 1 < projects.len() {
            out.push(OutputLine::blank());
        }
    }
    out
}

/// `view <id>`. Only the first argument counts.
pub fn view(content: &ContentStore, args: &[String]) -> Result<Vec<OutputLine>, CommandError> {
    let Some(id) = args.first() else {
        return Err(CommandError::Usage {
            command: CommandKind::View,
            argument: "a project id".to_string(),
            usage: view_usage(content),
        });
    };

    let project = content
        .project(id)
        .ok_or_else(|| CommandError::ProjectNotFound(id.clone()))?;

    Ok(vec![OutputLine::plain(format!(
        "Opening project view: {}...",
        project.name
    ))
    .with_widget(Widget::ProjectDetail(project.clone()))])
}

fn view_usage(content: &ContentStore) -> String {
    match content.command_meta(CommandKind::View.name()) {
        Some(meta) => match &meta.example {
            Some(example) => format!("{} (e.g. {})", meta.usage, example),
            None => meta.usage.clone(),
        },
        None => "view <project-id>".to_string(),
    }
}

pub fn social(content: &ContentStore) -> Vec<OutputLine> {
    let mut out = vec![OutputLine::success("🔗 Social Links"), OutputLine::blank()];

    for link in content.social() {
        out.push(
            OutputLine::plain(format!(
                "  {} {:<width$} → {}",
                social_icon(&link.icon),
                link.platform,
                link.url,
                width = PLATFORM_WIDTH
            ))
            .with_widget(Widget::SocialLink(link.clone())),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::line::LineKind;

    fn store() -> ContentStore {
        ContentStore::bundled().unwrap()
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_help_lists_every_command_in_order() {
        let store = store();
        let lines = help(&store);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();

        let mut last = 0;
        for (name, _) in store.commands() {
            let pos = texts
                .iter()
                .position(|t| t.trim_start().starts_with(&format!("{} ", name)))
                .unwrap_or_else(|| panic!("{} missing from help", name));
            assert!(pos >= last, "{} out of order", name);
            last = pos;
        }
        assert!(texts.iter().any(|t| t.contains("Example: view folio-term")));
        assert!(texts.iter().any(|t| t.contains("TAB")));
        assert!(texts.last().unwrap().contains("history"));
    }

    #[test]
    fn test_whoami_block() {
        let lines = whoami(&store());
        assert!(lines[0].text.starts_with("┌─ Alex Rivera"));
        assert_eq!(lines[0].kind, LineKind::Success);
        assert!(lines.iter().any(|l| l.text.contains("6+ years")));
        assert_eq!(lines.last().unwrap().text, "└─");
    }

    #[test]
    fn test_ls_is_fixed() {
        let lines = ls();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, LS_LISTING);
    }

    #[test]
    fn test_skills_categories_in_order() {
        let lines = skills(&store());
        let headings: Vec<&str> = lines
            .iter()
            .filter(|l| l.kind == LineKind::Warning)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(headings.len(), 5);
        assert!(headings[0].contains("Frameworks"));
        assert!(headings[3].contains("Tools"));
        assert!(headings[4].contains("Spoken"));
        assert!(lines.iter().any(|l| l.text.contains("Rust") && l.text.contains("[Expert]")));
        assert!(lines.last().unwrap().text.contains("[Professional (C1)]"));
    }

    #[test]
    fn test_experience_separators() {
        let store = store();
        let lines = experience(&store);
        let per_entry = 5;
        let n = store.experience().len();
        // header + blank, entries, separators between them
        assert_eq!(lines.len(), 2 + n * per_entry + (n - 1));
        assert!(!lines.last().unwrap().text.is_empty());
        assert_eq!(lines[2].text, "[2022 - Present]");
    }

    #[test]
    fn test_projects_status_kind() {
        let lines = projects(&store());
        let completed = lines
            .iter()
            .find(|l| l.text.trim() == "Status: Completed")
            .unwrap();
        assert_eq!(completed.kind, LineKind::Success);
        let in_progress = lines
            .iter()
            .find(|l| l.text.trim() == "Status: In progress")
            .unwrap();
        assert_eq!(in_progress.kind, LineKind::Warning);
        assert!(lines[2].text.starts_with("[1] "));
        assert!(lines.iter().any(|l| l.text.contains("view packet-sieve")));
    }

    #[test]
    fn test_view_without_args() {
        let err = view(&store(), &[]).unwrap_err();
        let lines = err.into_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].kind, LineKind::Error);
        assert!(lines[1].text.contains("view <project-id>"));
        assert!(lines[1].text.contains("view folio-term"));
    }

    #[test]
    fn test_view_unknown_id() {
        let err = view(&store(), &args(&["Nope-42"])).unwrap_err();
        assert_eq!(err, CommandError::ProjectNotFound("Nope-42".to_string()));
        assert!(err.into_lines()[0].text.contains("Nope-42"));
    }

    #[test]
    fn test_view_known_id() {
        let store = store();
        let lines = view(&store, &args(&["packet-sieve", "ignored"])).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].widget_ref(), Some("project-detail"));
        assert_eq!(
            lines[0].widget,
            Some(Widget::ProjectDetail(store.project("packet-sieve").unwrap().clone()))
        );
    }

    #[test]
    fn test_social_lines_carry_links() {
        let store = store();
        let lines = social(&store);
        let links: Vec<_> = lines.iter().filter(|l| l.widget.is_some()).collect();
        assert_eq!(links.len(), store.social().len());
        assert!(links[0].text.contains("🐙"));
        assert!(links[0].text.contains("https://github.com/alexrivera"));
    }

    #[test]
    fn test_unknown_icon_gets_default() {
        assert_eq!(social_icon("mastodon"), DEFAULT_SOCIAL_ICON);
        assert_eq!(social_icon("mail"), "📧");
    }
}
