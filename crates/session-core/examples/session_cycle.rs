//! Session cycle example
//!
//! Demonstrates one full application lifetime: restore at startup, work in
//! the workspace, persist at shutdown, and restore again as the "next run".

use std::fs;

use session_core::{
    Color, ScreenBounds, SessionState, StyleClass, StyleTable, WindowRect, Workspace,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    let config_dir = std::env::temp_dir().join("session-core-demo");
    fs::create_dir_all(&config_dir).unwrap();
    let screen = ScreenBounds::new(1920, 1080);

    println!("=== Session cycle demo ===\n");

    // 1. First run: nothing on disk yet, defaults stay.
    let mut workspace = Workspace::new(&config_dir);
    let mut styles = StyleTable::new();
    let mut session = SessionState::new();
    session.restore(&mut workspace, &mut styles, screen);
    println!("1. First run restored: {}", session.has_been_restored());
    println!(
        "   indent={} font={}/{}pt documents={}",
        session.indent_level,
        styles.font_face(),
        styles.font_size(),
        workspace.document_count()
    );

    // 2. Open two files and leave some editing state behind.
    let file_a = config_dir.join("fib.bas");
    let file_b = config_dir.join("util.bas");
    fs::write(&file_a, "for i = 1 to 10\n  print fib(i)\nnext\n").unwrap();
    fs::write(&file_b, "func fib(n)\n  ' ...\nend\n").unwrap();

    let first = workspace.first_document_mut();
    first.load_file(file_a.to_str().unwrap()).unwrap();
    first.cursor_insert = 20;
    first.log_print = true;
    let second = workspace.create_document();
    second.load_file(file_b.to_str().unwrap()).unwrap();
    second.scroll_lock = true;
    workspace.add_tool("output");
    println!(
        "\n2. Opened {} documents (plus one tool pane)",
        workspace.document_count()
    );

    // 3. Style tweaks the next run should see again.
    styles.set_font_size(14);
    styles.set_color(StyleClass::Keyword, Color::rgb(0x00, 0x30, 0xc0));
    session.background = Some(Color::rgb(0xfd, 0xf6, 0xe3));
    session.indent_level = 4;
    workspace.set_window(WindowRect::new(80, 60, 1024, 720));

    // 4. Shutdown: persist and show the file as written.
    session.persist(&workspace, &styles);
    println!("\n3. Session file at {}:", workspace.config_path().display());
    for line in fs::read_to_string(workspace.config_path()).unwrap().lines() {
        println!("   | {line}");
    }

    // 5. Next run: a fresh workspace picks everything back up.
    let mut next_workspace = Workspace::new(&config_dir);
    let mut next_styles = StyleTable::new();
    let mut next_session = SessionState::new();
    next_session.restore(&mut next_workspace, &mut next_styles, screen);

    println!("\n4. Next run restored:");
    println!(
        "   indent={} font={}/{}pt window={:?}",
        next_session.indent_level,
        next_styles.font_face(),
        next_styles.font_size(),
        next_workspace.window()
    );
    for document in next_workspace.documents() {
        println!(
            "   {} cursor={} log_print={} ({} bytes loaded)",
            document.path,
            document.cursor_insert,
            document.log_print,
            document.text.len()
        );
    }

    fs::remove_dir_all(&config_dir).ok();
}
