//! ZoneMap - Tauri Application
//!
//! - One window, one search session
//! - WebView draws screens and forwards user events
//! - Rust owns all state

mod commands;
mod state;

use state::AppState;
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder, WindowEvent};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    zonemap_core::init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let data_dir = app.path().app_local_data_dir()?;
            let state = AppState::new(&data_dir)?;
            app.manage(state);

            WebviewWindowBuilder::new(app, "main", WebviewUrl::App("index.html".into()))
                .title("建築規制・用途地域マップ")
                .inner_size(1280.0, 800.0)
                .min_inner_size(800.0, 600.0)
                .center()
                .build()?;

            tracing::info!("ZoneMap started");

            Ok(())
        })
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                window
                    .state::<AppState>()
                    .end_window_session(window.label());
            }
        })
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            // Settings
            commands::settings::get_defaults,
            commands::settings::get_legend,
            // Access gate
            commands::gate::unlock,
            // Search and rendering
            commands::search::get_screen,
            commands::search::search_address,
            commands::search::set_opacity,
            commands::search::current_view,
            commands::search::open_street_view,
        ])
        .run(tauri::generate_context!())
        .expect("error while running ZoneMap");
}
