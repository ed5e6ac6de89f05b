use feed_core::{AppViewModel, CharacterStatus};

fn status_marker(status: CharacterStatus) -> char {
    match status {
        CharacterStatus::Alive => '+',
        CharacterStatus::Dead => 'x',
        CharacterStatus::Unknown => '?',
    }
}

/// Lays the view model out as plain text lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    if let Some(error) = &view.error {
        return vec![
            "== Error ==".to_string(),
            format!("{} ({})", error.message, error.detail),
            format!("[r] {}", error.retry_label),
        ];
    }

    let mut lines = vec!["== Rick & Morty Episodes ==".to_string()];
    for row in &view.episodes {
        let marker = if row.selected { '>' } else { ' ' };
        lines.push(format!(
            "{marker} {:>3}  {}  {}  ({})",
            row.id, row.code, row.name, row.air_date
        ));
    }
    if let Some(notice) = &view.catalog_notice {
        lines.push(format!("! {notice}"));
    }

    lines.push(String::new());
    lines.push(format!("== {} ==", view.heading));
    if let Some(subheading) = &view.subheading {
        lines.push(subheading.clone());
    }

    if view.show_spinner {
        lines.push("loading...".to_string());
    } else if view.show_empty_notice {
        lines.push("No characters found".to_string());
    } else {
        for card in &view.characters {
            lines.push(format!(
                "[{}] {} | {} | Origin: {}",
                status_marker(card.status),
                card.name,
                card.status_line,
                card.origin
            ));
        }
    }
    lines
}
