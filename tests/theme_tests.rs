use ratatui::style::Color;
use viquill::editor::mode::EditorMode;
use viquill::theme::{colors::ThemeColors, get_builtin_theme, list_builtin_themes};

#[test]
fn test_every_listed_theme_loads() {
    for name in list_builtin_themes() {
        let theme = get_builtin_theme(&name);
        assert!(theme.is_some(), "theme {} should exist", name);
        assert_eq!(theme.unwrap().name, name);
    }
}

#[test]
fn test_invalid_theme_returns_none() {
    assert!(get_builtin_theme("nonexistent").is_none());
}

#[test]
fn test_theme_list_is_sorted() {
    let themes = list_builtin_themes();
    let mut sorted = themes.clone();
    sorted.sort();
    assert_eq!(themes, sorted);
    assert_eq!(themes.len(), 4);
}

#[test]
fn test_dark_theme_badges() {
    let colors = ThemeColors::default_dark();
    assert_eq!(colors.badge(EditorMode::Normal), Color::Blue);
    assert_eq!(colors.badge(EditorMode::Insert), Color::Green);
    assert_eq!(colors.badge(EditorMode::Visual), colors.badge(EditorMode::VisualLine));
    assert_eq!(colors.badge(EditorMode::Command), colors.badge(EditorMode::Execute));
}

#[test]
fn test_selection_differs_from_background() {
    for name in list_builtin_themes() {
        let colors = get_builtin_theme(&name).unwrap().colors;
        assert_ne!(colors.selection_bg, colors.background, "{}", name);
    }
}
