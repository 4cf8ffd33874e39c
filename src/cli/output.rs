//! Table output formatting for CLI commands
//!
//! Formatted table output for teams and members using comfy-table.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};

use crate::domain::models::{Team, TeamMember};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header(cells: &[&str]) -> Vec<Cell> {
    cells
        .iter()
        .map(|c| Cell::new(c).add_attribute(Attribute::Bold))
        .collect()
}

/// Format a list of teams as a table.
pub fn format_team_table(teams: &[Team]) -> String {
    let mut table = base_table();
    table.set_header(header(&["Name", "Repository", "Status", "Updated"]));

    for team in teams {
        table.add_row(vec![
            Cell::new(&team.name),
            Cell::new(team.github_repo.as_deref().unwrap_or("-")),
            Cell::new(team.status.as_deref().unwrap_or("-")),
            Cell::new(team.updated_at.format("%Y-%m-%d %H:%M UTC").to_string()),
        ]);
    }

    table.to_string()
}

/// Format a team's members as a table.
pub fn format_member_table(members: &[TeamMember]) -> String {
    let mut table = base_table();
    table.set_header(header(&["Discord ID", "Username", "Display Name", "Added"]));

    for member in members {
        table.add_row(vec![
            Cell::new(&member.discord_id),
            Cell::new(&member.discord_username),
            Cell::new(&member.display_name),
            Cell::new(member.added_at.format("%Y-%m-%d %H:%M UTC").to_string()),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_table_contains_fields() {
        let mut team = Team::new("Rustaceans");
        team.github_repo = Some("acme/widget".to_string());
        let rendered = format_team_table(&[team]);
        assert!(rendered.contains("Rustaceans"));
        assert!(rendered.contains("acme/widget"));
        assert!(rendered.contains("-")); // absent status
    }

    #[test]
    fn test_member_table_contains_fields() {
        let member = TeamMember::new("Rustaceans", "42", "ferris", "Ferris");
        let rendered = format_member_table(&[member]);
        assert!(rendered.contains("42"));
        assert!(rendered.contains("ferris"));
    }
}
