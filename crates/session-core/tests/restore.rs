use std::fs;

use session_core::{
    Color, ScreenBounds, SessionState, StyleClass, StyleTable, WindowRect, Workspace,
};
use tempfile::{TempDir, tempdir};

const SCREEN: ScreenBounds = ScreenBounds::new(1920, 1080);

fn fresh(dir: &TempDir) -> (Workspace, StyleTable, SessionState) {
    (
        Workspace::new(dir.path()),
        StyleTable::new(),
        SessionState::new(),
    )
}

#[test]
fn test_restore_without_file_keeps_defaults_and_marks_restored() {
    let dir = tempdir().unwrap();
    let (mut workspace, mut styles, mut session) = fresh(&dir);

    session.restore(&mut workspace, &mut styles, SCREEN);

    assert!(session.has_been_restored());
    assert_eq!(session.indent_level, 2);
    assert_eq!(session.font_face, "Courier");
    assert_eq!(session.background, None);
    assert_eq!(workspace.document_count(), 1);
    assert_eq!(workspace.window(), WindowRect::default());
}

#[test]
fn test_restore_reads_a_full_session_file() {
    let dir = tempdir().unwrap();
    let file_a = dir.path().join("a.bas");
    let file_b = dir.path().join("b.bas");
    fs::write(&file_a, "print 1\n").unwrap();
    fs::write(&file_b, "print 2\n").unwrap();

    let (mut workspace, mut styles, mut session) = fresh(&dir);
    let config = format!(
        "indentLevel=4\n\
         fontSize=14\n\
         fontName='Mono'\n\
         03=#112233\n\
         08=#405060\n\
         path='1;0;1;0;3;{}'\n\
         path='0;1;0;1;0;{}'\n\
         windowPos=50;50;800;600\n",
        file_a.display(),
        file_b.display()
    );
    fs::write(workspace.config_path(), config).unwrap();

    session.restore(&mut workspace, &mut styles, SCREEN);

    assert!(session.has_been_restored());
    assert_eq!(session.indent_level, 4);
    assert_eq!(session.font_size, 14);
    assert_eq!(session.font_face, "Mono");
    assert_eq!(styles.font_size(), 14);
    assert_eq!(styles.font_face(), "Mono");
    assert_eq!(
        styles.color(StyleClass::Keyword),
        Color::rgb(0x11, 0x22, 0x33)
    );
    assert_eq!(session.background, Some(Color::rgb(0x40, 0x50, 0x60)));

    assert_eq!(workspace.document_count(), 2);
    let documents: Vec<_> = workspace.documents().collect();
    assert_eq!(documents[0].path, file_a.display().to_string());
    assert_eq!(documents[0].text, "print 1\n");
    assert!(documents[0].log_print);
    assert!(!documents[0].scroll_lock);
    assert!(documents[0].ide_hidden);
    assert!(!documents[0].break_on_goto_line);
    assert_eq!(documents[0].cursor_insert, 3);
    assert_eq!(documents[0].indent_level, 4);
    assert_eq!(documents[0].font_face, "Mono");
    assert_eq!(documents[0].font_size, 14);
    assert_eq!(documents[0].background, Some(Color::rgb(0x40, 0x50, 0x60)));

    assert_eq!(documents[1].path, file_b.display().to_string());
    assert_eq!(documents[1].text, "print 2\n");
    assert!(documents[1].scroll_lock);
    assert!(documents[1].break_on_goto_line);
    assert_eq!(documents[1].cursor_insert, 0);

    assert_eq!(workspace.window(), WindowRect::new(50, 50, 800, 600));
}

#[test]
fn test_restore_with_only_indent_leaves_the_rest_alone() {
    let dir = tempdir().unwrap();
    let (mut workspace, mut styles, mut session) = fresh(&dir);
    fs::write(workspace.config_path(), "indentLevel=4\n").unwrap();

    session.restore(&mut workspace, &mut styles, SCREEN);

    assert_eq!(session.indent_level, 4);
    assert_eq!(session.font_face, "Courier");
    assert_eq!(session.font_size, 12);
    assert_eq!(session.background, None);
    assert_eq!(styles.font_face(), "Courier");
    assert_eq!(
        styles.color(StyleClass::Text),
        StyleTable::new().color(StyleClass::Text)
    );
    assert_eq!(workspace.window(), WindowRect::default());

    // No path lines, so the seed document is never touched.
    assert_eq!(workspace.document_count(), 1);
    let seed = workspace.documents().next().unwrap();
    assert!(seed.path.is_empty());
    assert_eq!(seed.indent_level, 2);
}

#[test]
fn test_restore_reopens_documents_in_stored_order() {
    let dir = tempdir().unwrap();
    let (mut workspace, mut styles, mut session) = fresh(&dir);
    let config = "path='0;0;0;0;0;/no/such/dir/a.bas'\n\
                  path='0;0;0;0;0;/no/such/dir/b.bas'\n\
                  path='0;0;0;0;0;/no/such/dir/c.bas'\n";

    session.restore_from_str(config, &mut workspace, &mut styles, SCREEN);

    // First record reused the seed tab, so three records mean three tabs.
    assert_eq!(workspace.tabs().len(), 3);
    let paths: Vec<&str> = workspace
        .documents()
        .map(|document| document.path.as_str())
        .collect();
    assert_eq!(
        paths,
        [
            "/no/such/dir/a.bas",
            "/no/such/dir/b.bas",
            "/no/such/dir/c.bas"
        ]
    );
}

#[test]
fn test_restore_keeps_state_for_unreadable_documents() {
    let dir = tempdir().unwrap();
    let (mut workspace, mut styles, mut session) = fresh(&dir);
    let config = "path='0;1;0;0;9;/no/such/dir/gone.bas'\n";

    session.restore_from_str(config, &mut workspace, &mut styles, SCREEN);

    let document = workspace.documents().next().unwrap();
    assert_eq!(document.path, "/no/such/dir/gone.bas");
    assert!(document.text.is_empty());
    assert!(document.scroll_lock);
    assert_eq!(document.cursor_insert, 9);
}

#[test]
fn test_restore_rejects_degenerate_geometry() {
    let dir = tempdir().unwrap();
    let (mut workspace, mut styles, mut session) = fresh(&dir);

    session.restore_from_str("windowPos=0;0;400;300\n", &mut workspace, &mut styles, SCREEN);
    assert_eq!(workspace.window(), WindowRect::default());

    session.restore_from_str("windowPos=50;50;100;600\n", &mut workspace, &mut styles, SCREEN);
    assert_eq!(workspace.window(), WindowRect::default());
}

#[test]
fn test_restore_rejects_offscreen_geometry() {
    let dir = tempdir().unwrap();
    let (mut workspace, mut styles, mut session) = fresh(&dir);

    session.restore_from_str(
        "windowPos=2500;50;800;600\n",
        &mut workspace,
        &mut styles,
        SCREEN,
    );
    assert_eq!(workspace.window(), WindowRect::default());

    session.restore_from_str(
        "windowPos=50;1200;800;600\n",
        &mut workspace,
        &mut styles,
        SCREEN,
    );
    assert_eq!(workspace.window(), WindowRect::default());
}

#[test]
fn test_restore_applies_plausible_geometry_exactly() {
    let dir = tempdir().unwrap();
    let (mut workspace, mut styles, mut session) = fresh(&dir);

    session.restore_from_str(
        "windowPos=50;50;800;600\n",
        &mut workspace,
        &mut styles,
        SCREEN,
    );
    assert_eq!(workspace.window(), WindowRect::new(50, 50, 800, 600));
}

#[test]
fn test_restore_ignores_malformed_lines() {
    let dir = tempdir().unwrap();
    let (mut workspace, mut styles, mut session) = fresh(&dir);
    let config = "just some text\n\
                  =orphan value\n\
                  indentLevel=abc\n\
                  fontSize=\n\
                  03=#zzz123\n\
                  fontName='Mono'\n";

    session.restore_from_str(config, &mut workspace, &mut styles, SCREEN);

    // The good line still applies; everything malformed keeps its default.
    assert_eq!(session.font_face, "Mono");
    assert_eq!(session.indent_level, 2);
    assert_eq!(session.font_size, 12);
    assert_eq!(
        styles.color(StyleClass::Keyword),
        StyleTable::new().color(StyleClass::Keyword)
    );
    assert!(session.has_been_restored());
}

#[test]
fn test_restore_empty_font_name_keeps_previous_face() {
    let dir = tempdir().unwrap();
    let (mut workspace, mut styles, mut session) = fresh(&dir);

    session.restore_from_str("fontName=''\n", &mut workspace, &mut styles, SCREEN);

    assert_eq!(session.font_face, "Courier");
    assert_eq!(styles.font_face(), "Courier");
}

#[test]
fn test_restore_unquoted_values_still_apply() {
    // Hand-edited files often drop the quotes; the store treats both forms
    // the same.
    let dir = tempdir().unwrap();
    let (mut workspace, mut styles, mut session) = fresh(&dir);
    let config = "fontName=Mono\n\
                  path=0;0;0;0;5;/no/such/dir/x.bas\n";

    session.restore_from_str(config, &mut workspace, &mut styles, SCREEN);

    assert_eq!(session.font_face, "Mono");
    let document = workspace.documents().next().unwrap();
    assert_eq!(document.path, "/no/such/dir/x.bas");
    assert_eq!(document.cursor_insert, 5);
}
